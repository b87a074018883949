use crate::Producer;

/// Forwards only the elements that satisfy a predicate.
///
/// Rejected elements are discarded in a loop, so long runs of rejections cost
/// time but no stack.
#[derive(Clone)]
pub struct Filter<P, F> {
    upstream: P,
    pred: F,
}

/// Create a producer that keeps the elements of `upstream` for which `pred`
/// returns `true`.
///
/// ```rust
/// use pullseq::prelude::*;
/// use pullseq::compose::filter;
///
/// let mut stage = filter(from_seq([1, 2, 3]), |n: &i32| *n > 1);
/// assert_eq!(stage.next(), Some(2));
/// assert_eq!(stage.next(), Some(3));
/// assert_eq!(stage.next(), None);
/// ```
pub fn filter<P, F>(upstream: P, pred: F) -> Filter<P, F>
where
    P: Producer,
    F: FnMut(&P::Item) -> bool,
{
    Filter { upstream, pred }
}

impl<P, F> Producer for Filter<P, F>
where
    P: Producer,
    F: FnMut(&P::Item) -> bool,
{
    type Item = P::Item;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.upstream.next()?;
            if (self.pred)(&item) {
                return Some(item);
            }
        }
    }
}
