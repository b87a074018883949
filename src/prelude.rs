//! Commonly used imports
//!
//! Use `use pullseq::prelude::*;` for quick access to the trait and the source
//! constructors.

// Core trait
pub use crate::Producer;

// Source constructors
pub use crate::build::{from_fn, from_seq, once, repeat};

// Explicit chaining
pub use crate::adapt::adapt;
