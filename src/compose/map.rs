//! Transforming produced elements.

use crate::Producer;

/// Transforms each element produced by the wrapped producer.
///
/// The function only ever sees elements; exhaustion passes through untouched.
#[derive(Clone)]
pub struct Map<P, F> {
    upstream: P,
    f: F,
}

/// Create a producer that applies `f` to every element of `upstream`.
///
/// # Examples
///
/// ```
/// use pullseq::prelude::*;
/// use pullseq::compose::map;
///
/// let mut mapped = map(from_seq(["1", "22", "333"]), str::len);
/// assert_eq!(mapped.next(), Some(1));
/// assert_eq!(mapped.next(), Some(2));
/// assert_eq!(mapped.next(), Some(3));
/// assert_eq!(mapped.next(), None);
/// ```
pub fn map<P, U, F>(upstream: P, f: F) -> Map<P, F>
where
    P: Producer,
    F: FnMut(P::Item) -> U,
{
    Map { upstream, f }
}

impl<P, U, F> Producer for Map<P, F>
where
    P: Producer,
    F: FnMut(P::Item) -> U,
{
    type Item = U;
    fn next(&mut self) -> Option<Self::Item> {
        self.upstream.next().map(&mut self.f)
    }
}
