//! Core trait for pull-based producers.
//!
//! This module defines the [`Producer`] trait, the one protocol every source and
//! combinator in this library implements. A [`Producer`] hands out elements one at
//! a time when asked and signals exhaustion with `None`.
//!
//! # The Producer Trait
//!
//! [`Producer`] represents a computation that:
//! - Declares a fixed element type `Item`
//! - Produces the next element on each call to `next`
//! - Returns `None` once it has nothing left, and keeps returning `None`
//!
//! All combinators are default methods on the trait, so any implementor can be
//! chained directly.
//!
//! # Examples
//!
//! ```rust
//! use pullseq::prelude::*;
//!
//! let mut doubled = from_seq([1, 2, 3]).map(|x| x * 2);
//! assert_eq!(doubled.next(), Some(2));
//! assert_eq!(doubled.next(), Some(4));
//! assert_eq!(doubled.next(), Some(6));
//! assert_eq!(doubled.next(), None);
//! ```

use crate::{
    compose::{Filter, Map, Skip, Take, Zip},
    drive,
    iter::IntoIter,
};

/// A lazy source of elements, pulled one at a time.
///
/// Implementors only provide [`next`](Producer::next). Once a finite producer has
/// returned `None` it must return `None` on every later call; the combinators in
/// this crate rely on that and do not remember exhaustion themselves.
///
/// ```rust
/// use pullseq::Producer;
///
/// struct Countdown(u32);
///
/// impl Producer for Countdown {
///     type Item = u32;
///     fn next(&mut self) -> Option<u32> {
///         let n = self.0.checked_sub(1)?;
///         self.0 = n;
///         Some(n)
///     }
/// }
///
/// assert_eq!(Countdown(3).map(|n| n * 10).fold(0, |n, acc| acc + n), 30);
/// ```
pub trait Producer {
    /// Type of each produced element
    type Item;

    /// Produce the next element, or `None` if the producer is exhausted.
    fn next(&mut self) -> Option<Self::Item>;

    /// Discard the first `n` elements, then forward the rest.
    ///
    /// ```rust
    /// use pullseq::prelude::*;
    ///
    /// let mut rest = from_seq([1, 2, 3, 4, 5]).skip(2);
    /// assert_eq!(rest.next(), Some(3));
    /// ```
    fn skip(self, n: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        crate::compose::skip(self, n)
    }

    /// Forward at most `n` elements.
    ///
    /// This is the usual way to bound an infinite producer such as
    /// [`repeat`](crate::build::repeat).
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        crate::compose::take(self, n)
    }

    /// Transform each element with `f`.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> U,
    {
        crate::compose::map(self, f)
    }

    /// Keep only the elements for which `pred` returns `true`.
    fn filter<F>(self, pred: F) -> Filter<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> bool,
    {
        crate::compose::filter(self, pred)
    }

    /// Pair elements of `self` with elements of `other`.
    ///
    /// Ends as soon as either side is exhausted. Both sides are pulled on every
    /// call, so an element pulled from the longer side on the final call is
    /// dropped.
    fn zip<R>(self, other: R) -> Zip<Self, R>
    where
        Self: Sized,
        R: Producer,
    {
        crate::compose::zip(self, other)
    }

    /// Drain the producer into a single value.
    ///
    /// `f` receives the element first and the accumulator second. Never returns
    /// on an unbounded infinite producer.
    ///
    /// ```rust
    /// use pullseq::prelude::*;
    ///
    /// let digits = from_seq([1, 2, 3]).fold(0, |d, acc| acc * 10 + d);
    /// assert_eq!(digits, 123);
    /// ```
    fn fold<B, F>(self, init: B, f: F) -> B
    where
        Self: Sized,
        F: FnMut(Self::Item, B) -> B,
    {
        drive::fold(self, init, f)
    }

    /// Drain the producer with a fallible combining function.
    ///
    /// Stops at the first `Err` and returns it; elements after the failing one are
    /// not pulled.
    fn try_fold<B, E, F>(&mut self, init: B, f: F) -> Result<B, E>
    where
        Self: Sized,
        F: FnMut(Self::Item, B) -> Result<B, E>,
    {
        drive::try_fold(self, init, f)
    }

    /// Call `f` on every element until exhaustion.
    fn for_each<F>(self, f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        drive::for_each(self, f)
    }

    /// Drain the producer, returning how many elements it produced.
    fn count(self) -> usize
    where
        Self: Sized,
    {
        drive::count(self)
    }

    /// Borrow this producer so a combinator can use it without taking ownership.
    ///
    /// ```rust
    /// use pullseq::prelude::*;
    ///
    /// let mut source = from_seq([1, 2, 3, 4]);
    /// assert_eq!(source.by_ref().take(2).count(), 2);
    /// assert_eq!(source.next(), Some(3));
    /// ```
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// Expose this producer as a standard [`Iterator`].
    fn into_iter(self) -> IntoIter<Self>
    where
        Self: Sized,
    {
        IntoIter::new(self)
    }

    #[cfg(feature = "std")]
    fn boxed<'a>(self) -> Box<dyn Producer<Item = Self::Item> + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

impl<P> Producer for &'_ mut P
where
    P: Producer + ?Sized,
{
    type Item = P::Item;

    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }
}

/// An absent producer is already exhausted.
///
/// `Option`'s own `map`, `filter`, `take` and `zip` shadow the combinators of the
/// same name; reach for [`adapt`](crate::adapt::adapt) to chain on it.
impl<P> Producer for Option<P>
where
    P: Producer,
{
    type Item = P::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.as_mut()?.next()
    }
}

#[cfg(feature = "std")]
impl<P> Producer for Box<P>
where
    P: Producer + ?Sized,
{
    type Item = P::Item;

    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }
}

impl<L, R> Producer for either::Either<L, R>
where
    L: Producer,
    R: Producer<Item = L::Item>,
{
    type Item = L::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            either::Either::Left(l) => l.next(),
            either::Either::Right(r) => r.next(),
        }
    }
}
