//! Producers over native contiguous sequences.
//!
//! [`from_seq`] accepts a closed set of sequence shapes, each of which knows its
//! element type and length up front:
//!
//! | Shape | Rust type | Element | Length |
//! |---|---|---|---|
//! | [`Shape::Array`] | `[T; N]` | `T` | `N` |
//! | [`Shape::Slice`] | `&[T]` | `T` | `len()` |
//! | [`Shape::ArrayRef`] | `&[T; N]` | `T` | `N` |
//! | [`Shape::Bytes`] | `&str` | `u8` | byte length |
//!
//! The set is sealed. Anything else is rejected when the program is compiled:
//!
//! ```compile_fail
//! use pullseq::prelude::*;
//!
//! let _ = from_seq(42);
//! ```

use crate::Producer;

mod sealed {
    pub trait Sealed {}

    impl<T, const N: usize> Sealed for [T; N] {}
    impl<T> Sealed for &'_ [T] {}
    impl<T, const N: usize> Sealed for &'_ [T; N] {}
    impl Sealed for &'_ str {}
}

/// The kind of native sequence a [`FromSeq`] was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// An owned fixed-size array
    Array,
    /// A borrowed slice of runtime length
    Slice,
    /// A borrowed fixed-size array
    ArrayRef,
    /// The bytes of a string
    Bytes,
}

/// A contiguous, length-known sequence that [`from_seq`] can read from.
///
/// This trait is sealed; see the [module documentation](self) for the supported
/// shapes.
#[allow(clippy::len_without_is_empty)]
pub trait Sequence: sealed::Sealed {
    /// Element produced for each position
    type Item;

    /// Which of the supported shapes this is.
    const SHAPE: Shape;

    /// Number of elements, resolved once when the producer is built.
    fn len(&self) -> usize;

    /// Element at `index`, or `None` past the end.
    fn get(&self, index: usize) -> Option<Self::Item>;
}

impl<T, const N: usize> Sequence for [T; N]
where
    T: Clone,
{
    type Item = T;
    const SHAPE: Shape = Shape::Array;

    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Option<T> {
        self.as_slice().get(index).cloned()
    }
}

impl<T> Sequence for &'_ [T]
where
    T: Clone,
{
    type Item = T;
    const SHAPE: Shape = Shape::Slice;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<T> {
        <[T]>::get(self, index).cloned()
    }
}

impl<T, const N: usize> Sequence for &'_ [T; N]
where
    T: Clone,
{
    type Item = T;
    const SHAPE: Shape = Shape::ArrayRef;

    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Option<T> {
        self.as_slice().get(index).cloned()
    }
}

impl Sequence for &'_ str {
    type Item = u8;
    const SHAPE: Shape = Shape::Bytes;

    fn len(&self) -> usize {
        str::len(self)
    }

    fn get(&self, index: usize) -> Option<u8> {
        self.as_bytes().get(index).copied()
    }
}

/// Produces the elements of a native sequence in index order.
///
/// Created via [`from_seq`]. The cursor never moves past the length, so once
/// exhausted it stays exhausted.
#[derive(Debug, Clone)]
pub struct FromSeq<S> {
    seq: S,
    cursor: usize,
    len: usize,
}

impl<S> FromSeq<S>
where
    S: Sequence,
{
    /// The shape this producer was built from.
    pub fn shape(&self) -> Shape {
        S::SHAPE
    }

    /// Number of elements not yet produced.
    pub fn remaining(&self) -> usize {
        self.len - self.cursor
    }
}

/// Create a producer over a native sequence.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let mut owned = from_seq([1, 2]);
/// assert_eq!(owned.next(), Some(1));
///
/// let words = ["a", "b", "c"];
/// let mut borrowed = from_seq(&words[1..]);
/// assert_eq!(borrowed.next(), Some("b"));
///
/// let mut bytes = from_seq("hi");
/// assert_eq!(bytes.next(), Some(b'h'));
/// ```
#[doc(alias = "from")]
pub fn from_seq<S>(seq: S) -> FromSeq<S>
where
    S: Sequence,
{
    let len = seq.len();
    tracing::trace!(shape = ?S::SHAPE, len, "sequence source resolved");
    FromSeq {
        seq,
        cursor: 0,
        len,
    }
}

impl<S> Producer for FromSeq<S>
where
    S: Sequence,
{
    type Item = S::Item;
    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.len {
            return None;
        }
        let item = self.seq.get(self.cursor)?;
        self.cursor += 1;
        Some(item)
    }
}
