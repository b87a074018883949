use crate::Producer;

/// Produces the same value forever.
///
/// Never signals exhaustion; bound it with [`take`](crate::Producer::take) before
/// draining it.
#[derive(Debug, Clone)]
pub struct Repeat<T>(T);

impl<T> Producer for Repeat<T>
where
    T: Clone,
{
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.0.clone())
    }
}

/// Create a producer that yields `value` indefinitely.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let mut fours = repeat(4);
/// assert_eq!(fours.next(), Some(4));
/// assert_eq!(fours.next(), Some(4));
/// // Continues forever...
/// ```
pub fn repeat<T: Clone>(value: T) -> Repeat<T> {
    Repeat(value)
}

/// Produces one value, then is exhausted.
#[derive(Debug, Clone)]
pub struct Once<T>(Option<T>);

/// Create a producer that yields `value` exactly once.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let mut single = once("hello");
/// assert_eq!(single.next(), Some("hello"));
/// assert_eq!(single.next(), None);
/// assert_eq!(single.next(), None);
/// ```
pub fn once<T>(value: T) -> Once<T> {
    Once(Some(value))
}

impl<T> Producer for Once<T> {
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.take()
    }
}

/// Produces successive states of a transition function.
///
/// Holds the current state and the transition. Each call feeds the stored state
/// to the transition, stores what comes back and returns a copy of it. When the
/// transition returns `None` the state is dropped and the producer stays
/// exhausted without calling the transition again.
pub struct FromFn<S, F> {
    state: Option<S>,
    step: F,
}

/// Create a producer from an initial state and a transition.
///
/// The initial state itself is never produced: the first call returns
/// `step(&initial)`.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let mut counter = from_fn(0, |n: &u32| if *n < 3 { Some(n + 1) } else { None });
/// assert_eq!(counter.next(), Some(1));
/// assert_eq!(counter.next(), Some(2));
/// assert_eq!(counter.next(), Some(3));
/// assert_eq!(counter.next(), None);
/// ```
pub fn from_fn<S, F>(initial: S, step: F) -> FromFn<S, F>
where
    S: Clone,
    F: FnMut(&S) -> Option<S>,
{
    FromFn {
        state: Some(initial),
        step,
    }
}

impl<S, F> Producer for FromFn<S, F>
where
    S: Clone,
    F: FnMut(&S) -> Option<S>,
{
    type Item = S;
    fn next(&mut self) -> Option<Self::Item> {
        let next = (self.step)(self.state.as_ref()?);
        self.state.clone_from(&next);
        next
    }
}
