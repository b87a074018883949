//! Explicit chaining adapter.
//!
//! Every [`Producer`] already carries the combinator methods, so wrapping is never
//! required. [`adapt`] exists for code that wants to mark the point where a raw
//! producer enters a pipeline, or that needs a local type to hang further
//! methods on.

use crate::Producer;

/// A transparent wrapper that forwards to the producer inside it.
#[derive(Debug, Clone)]
pub struct Adapt<P>(P);

/// Wrap `producer` for chaining.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let total = adapt(from_seq([1, 2, 3])).map(|n| n * n).fold(0, |n, acc| acc + n);
/// assert_eq!(total, 14);
/// ```
pub fn adapt<P>(producer: P) -> Adapt<P>
where
    P: Producer,
{
    Adapt(producer)
}

impl<P> Adapt<P> {
    /// Unwrap, returning the producer as it is now.
    pub fn into_inner(self) -> P {
        self.0
    }

    /// Borrow the wrapped producer.
    pub fn get_mut(&mut self) -> &mut P {
        &mut self.0
    }
}

impl<P> Producer for Adapt<P>
where
    P: Producer,
{
    type Item = P::Item;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}
