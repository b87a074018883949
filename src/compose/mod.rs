//! Transforming producers
//!
//! This module provides the combinators that wrap one or two upstream producers
//! and are producers themselves, so they chain freely.

mod filter;
mod map;
mod skip;
mod take;
mod zip;

// Re-export composition operations
pub use filter::{filter, Filter};
pub use map::{map, Map};
pub use skip::{skip, Skip};
pub use take::{take, Take};
pub use zip::{zip, Zip};
