use crate::Producer;

/// Discards a fixed number of upstream elements, then forwards the rest.
///
/// Created via [`skip`] or [`Producer::skip`]. Discarding happens lazily on the
/// first pull.
#[derive(Debug, Clone)]
pub struct Skip<P> {
    upstream: P,
    remaining: usize,
}

/// Create a producer that drops the first `n` elements of `upstream`.
///
/// ```rust
/// use pullseq::prelude::*;
/// use pullseq::compose::skip;
///
/// let mut stage = skip(from_seq([1, 2, 3, 4, 5]), 2);
/// assert_eq!(stage.next(), Some(3));
/// assert_eq!(stage.next(), Some(4));
/// assert_eq!(stage.next(), Some(5));
/// assert_eq!(stage.next(), None);
/// ```
pub fn skip<P>(upstream: P, n: usize) -> Skip<P>
where
    P: Producer,
{
    Skip {
        upstream,
        remaining: n,
    }
}

impl<P> Producer for Skip<P>
where
    P: Producer,
{
    type Item = P::Item;
    fn next(&mut self) -> Option<Self::Item> {
        while self.remaining > 0 {
            // upstream ran dry: the count is left where it is
            self.upstream.next()?;
            self.remaining -= 1;
        }
        self.upstream.next()
    }
}
