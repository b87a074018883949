//! Functions for draining producers to completion.
//!
//! These are the terminal operations: each one pulls until the producer signals
//! exhaustion (or, for [`try_fold`], until the combining function fails) and
//! returns a single value. The [`Producer`] default methods of the same names
//! delegate here.

use crate::producer::Producer;

/// Pull every element and combine it into an accumulator.
///
/// The combining function takes the element first and the accumulator second,
/// which matters for non-commutative operations. Does not terminate on an
/// unbounded infinite producer.
///
/// ```rust
/// use pullseq::prelude::*;
/// use pullseq::drive::fold;
///
/// assert_eq!(fold(from_seq([1, 2, 3]), 0, |x, acc| acc + x), 6);
/// assert_eq!(fold(from_seq([1, 2, 3]), 0, |x, acc| x - acc), 2);
/// ```
pub fn fold<P, B, F>(mut producer: P, init: B, mut f: F) -> B
where
    P: Producer,
    F: FnMut(P::Item, B) -> B,
{
    let mut acc = init;
    let mut consumed = 0usize;
    while let Some(item) = producer.next() {
        acc = f(item, acc);
        consumed += 1;
    }
    tracing::trace!(consumed, "fold drained producer");
    acc
}

/// Like [`fold`], but the combining function may fail.
///
/// The first `Err` is returned immediately and nothing further is pulled from
/// the producer.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let mut source = from_seq([1u8, 200, 100, 3]);
/// let sum = source.try_fold(0u8, |x, acc| acc.checked_add(x).ok_or(x));
/// assert_eq!(sum, Err(100));
/// assert_eq!(source.next(), Some(3));
/// ```
pub fn try_fold<P, B, E, F>(mut producer: P, init: B, mut f: F) -> Result<B, E>
where
    P: Producer,
    F: FnMut(P::Item, B) -> Result<B, E>,
{
    let mut acc = init;
    while let Some(item) = producer.next() {
        acc = f(item, acc)?;
    }
    Ok(acc)
}

/// Pull every element, handing each to `f`.
pub fn for_each<P, F>(mut producer: P, mut f: F)
where
    P: Producer,
    F: FnMut(P::Item),
{
    while let Some(item) = producer.next() {
        f(item);
    }
}

/// Pull every element, returning how many there were.
pub fn count<P>(mut producer: P) -> usize
where
    P: Producer,
{
    let mut consumed = 0usize;
    while producer.next().is_some() {
        consumed += 1;
    }
    tracing::trace!(consumed, "count drained producer");
    consumed
}
