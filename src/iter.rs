//! Iterator adapter for producers.
//!
//! This module provides [`IntoIter`], which lets any [`Producer`] be used where
//! the standard library expects an [`Iterator`]: `for` loops, `collect`, and the
//! std adapters.
//!
//! # Examples
//!
//! ```rust
//! use pullseq::prelude::*;
//!
//! let values: Vec<_> = from_seq([1, 2, 3]).map(|n| n * 2).into_iter().collect();
//! assert_eq!(values, vec![2, 4, 6]);
//! ```
//!
//! Iterating through `&mut` keeps the wrapper, so the underlying producer can be
//! recovered afterwards:
//! ```rust
//! use pullseq::prelude::*;
//!
//! let mut iter = from_seq([1, 2, 3, 4]).into_iter();
//! let firsts: Vec<_> = (&mut iter).take(2).collect();
//! assert_eq!(firsts, vec![1, 2]);
//! assert_eq!(iter.into_inner().remaining(), 2);
//! ```

use crate::Producer;

/// Iterator adapter for a [`Producer`].
///
/// Calls `next` on the wrapped producer and forwards the result.
pub struct IntoIter<P> {
    producer: P,
}

impl<P> IntoIter<P>
where
    P: Producer,
{
    /// Create an iterator from a producer.
    pub fn new(producer: P) -> Self {
        Self { producer }
    }

    /// Consume the iterator and return the producer in its current state.
    pub fn into_inner(self) -> P {
        self.producer
    }
}

impl<P> Iterator for IntoIter<P>
where
    P: Producer,
{
    type Item = P::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.producer.next()
    }
}
