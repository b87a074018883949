use crate::Producer;

/// Forwards at most a fixed number of upstream elements.
///
/// Created via [`take`] or [`Producer::take`]. Once the count reaches zero the
/// upstream producer is never pulled again.
#[derive(Debug, Clone)]
pub struct Take<P> {
    upstream: P,
    remaining: usize,
}

/// Create a producer that forwards at most `n` elements of `upstream`.
///
/// ```rust
/// use pullseq::prelude::*;
/// use pullseq::compose::take;
///
/// let mut stage = take(repeat(9), 2);
/// assert_eq!(stage.next(), Some(9));
/// assert_eq!(stage.next(), Some(9));
/// assert_eq!(stage.next(), None);
/// ```
pub fn take<P>(upstream: P, n: usize) -> Take<P>
where
    P: Producer,
{
    Take {
        upstream,
        remaining: n,
    }
}

impl<P> Producer for Take<P>
where
    P: Producer,
{
    type Item = P::Item;
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.upstream.next()
    }
}
