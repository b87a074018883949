//! Building producers from scratch
//!
//! This module provides the source constructors: functions that create a new
//! producer from a plain value, a native sequence, or a state transition.

mod func;
mod seq;

// Re-export building blocks
pub use func::{from_fn, once, repeat, FromFn, Once, Repeat};
pub use seq::{from_seq, FromSeq, Sequence, Shape};
