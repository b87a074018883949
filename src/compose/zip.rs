use crate::Producer;

/// Pairs up the elements of two producers.
///
/// Both sides are pulled exactly once per call, left first. A pair is produced
/// only when both sides produce; otherwise the call returns `None` and whatever
/// the other side produced is dropped.
#[derive(Debug, Clone)]
pub struct Zip<L, R> {
    left: L,
    right: R,
}

/// Create a producer of `(left, right)` pairs.
///
/// ```rust
/// use pullseq::prelude::*;
/// use pullseq::compose::zip;
///
/// let mut stage = zip(from_seq([1, 2, 3]), repeat(4));
/// assert_eq!(stage.next(), Some((1, 4)));
/// assert_eq!(stage.next(), Some((2, 4)));
/// assert_eq!(stage.next(), Some((3, 4)));
/// assert_eq!(stage.next(), None);
/// ```
pub fn zip<L, R>(left: L, right: R) -> Zip<L, R>
where
    L: Producer,
    R: Producer,
{
    Zip { left, right }
}

impl<L, R> Producer for Zip<L, R>
where
    L: Producer,
    R: Producer,
{
    type Item = (L::Item, R::Item);
    fn next(&mut self) -> Option<Self::Item> {
        let l = self.left.next();
        let r = self.right.next();
        match (l, r) {
            (Some(l), Some(r)) => Some((l, r)),
            _ => None,
        }
    }
}
