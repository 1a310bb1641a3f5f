//! Walk several sequences in lockstep.
//!
//! A [`TupleZip`] binds a tuple (or array) of [`Sequence`]s. Its
//! [`begin`][TupleZip::begin] hands out a [`TupleZipIterator`] holding one
//! cursor per sequence, and its [`end`][TupleZip::end] hands out the matching
//! [`TupleZipEnd`]. The iterator compares equal to the end as soon as *any*
//! one of its cursors has reached its own sequence's end, so the walk stops
//! at the shortest sequence. Elements past that point in longer sequences
//! are never visited.
//!
//! # Examples
//!
//! ```
//! use lockstep::prelude::*;
//!
//! let numbers = [1, 2, 3];
//! let mut letters = vec!["a", "b"];
//!
//! let mut zipped = (&numbers, &mut letters).zip();
//! let end = zipped.end();
//! let mut pos = zipped.begin();
//! while pos != end {
//!     let (n, s) = pos.current();
//!     if *n == 2 {
//!         *s = "B";
//!     }
//!     pos.advance();
//! }
//!
//! assert_eq!(letters, ["a", "B"]);
//! ```
//!
//! Elements from read-only bindings can't be written to:
//!
//! ```compile_fail
//! use lockstep::prelude::*;
//!
//! let numbers = [1, 2, 3];
//! let mut zipped = (&numbers, &numbers).zip();
//! for (a, _) in &mut zipped {
//!     *a += 1;
//! }
//! ```

use core::fmt;
use core::iter::FusedIterator;

use crate::private_decl;
use crate::sequence::Sequence;

mod array;
mod error;
mod tuple;

pub use error::LengthMismatch;

/// A fixed set of sequences which can be walked in lockstep.
///
/// This trait is implemented for tuples of up to twelve [`Sequence`]s and for
/// arrays of any one kind of sequence. It is sealed.
pub trait Sequences {
    private_decl! {}

    /// The number of sequences in the set.
    const ARITY: usize;

    /// One end position per sequence.
    type Positions: Copy + Eq + fmt::Debug;

    /// One cursor per sequence.
    type Cursors<'a>: Cursors<Positions = Self::Positions>
    where
        Self: 'a;

    /// A cursor at the first element of every sequence.
    fn begin(&mut self) -> Self::Cursors<'_>;

    /// The end position of every sequence.
    fn end(&self) -> Self::Positions;

    /// Check that every sequence has the same length as the first.
    fn check_lengths(&self) -> Result<(), LengthMismatch>;
}

/// A fixed set of cursors, advanced and compared as a unit.
///
/// This trait is sealed.
pub trait Cursors {
    private_decl! {}

    /// One position per cursor.
    type Positions;

    /// The elements handed out when walking the set as an [`Iterator`].
    type Items;

    /// The elements handed out by reading every cursor in place.
    type Refs<'b>
    where
        Self: 'b;

    /// Advance every cursor by one element.
    fn advance(&mut self);

    /// Read every cursor without moving it.
    fn current(&mut self) -> Self::Refs<'_>;

    /// Returns `true` if any cursor is at its matching position in `end`.
    ///
    /// An empty set of cursors is always at its end.
    fn any_at(&self, end: &Self::Positions) -> bool;

    /// How many elements are left before the shortest sequence runs out.
    fn remaining(&self) -> usize;

    /// Take the element under every cursor, then advance every cursor.
    fn take(&mut self) -> Self::Items;
}

/// Binds a set of sequences so they can be walked in lockstep.
///
/// The sequences are stored exactly as they were passed in: a shared
/// reference stays a shared reference, a mutable reference stays mutable, and
/// owned storage is owned by the adaptor until [`into_inner`] hands it back.
///
/// This `struct` is created by [`zip`], [`zip_pair`], [`zip_exact`], and the
/// methods on the [`Zip`] trait. See their documentation for more.
///
/// [`into_inner`]: TupleZip::into_inner
#[derive(Debug, Clone)]
pub struct TupleZip<S> {
    sequences: S,
}

impl<S: Sequences> TupleZip<S> {
    /// Bind a set of sequences.
    pub fn new(sequences: S) -> Self {
        Self { sequences }
    }

    /// An iterator positioned at the first element of every sequence.
    pub fn begin(&mut self) -> TupleZipIterator<S::Cursors<'_>> {
        TupleZipIterator {
            cursors: self.sequences.begin(),
        }
    }

    /// The end of every sequence.
    ///
    /// The end doesn't borrow the adaptor, so take it before calling
    /// [`begin`][TupleZip::begin].
    pub fn end(&self) -> TupleZipEnd<S::Positions> {
        TupleZipEnd {
            positions: self.sequences.end(),
        }
    }

    /// Walk the sequences as an [`Iterator`] of tuples.
    pub fn iter(&mut self) -> Iter<S::Cursors<'_>> {
        let end = self.end();
        self.begin().until(end)
    }

    /// The number of sequences bound.
    pub fn arity(&self) -> usize {
        S::ARITY
    }

    /// Get a reference to the bound sequences.
    pub fn get_ref(&self) -> &S {
        &self.sequences
    }

    /// Consume the adaptor, returning the bound sequences.
    pub fn into_inner(self) -> S {
        self.sequences
    }
}

impl<'a, S: Sequences> IntoIterator for &'a mut TupleZip<S> {
    type Item = <S::Cursors<'a> as Cursors>::Items;
    type IntoIter = Iter<S::Cursors<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A set of cursors, one per bound sequence, moved as a unit.
///
/// This `struct` is created by [`TupleZip::begin`]. It compares equal to a
/// [`TupleZipEnd`] as soon as *any* one of its cursors has reached the end of
/// its own sequence:
///
/// ```
/// use lockstep::zip_pair;
///
/// let (a, b) = ([1, 2, 3], ["a", "b"]);
/// let mut zipped = zip_pair(&a, &b);
/// let end = zipped.end();
/// let mut pos = zipped.begin();
///
/// assert_eq!(pos.current(), (&1, &"a"));
/// pos.advance();
/// assert_eq!(pos.current(), (&2, &"b"));
/// pos.advance();
/// assert!(pos == end);
/// ```
///
/// An iterator is only ever compared against an end, never against another
/// iterator. It can be cloned whenever all of its cursors can, which is the
/// case for read-only bindings but not for mutable ones.
#[derive(Debug, Clone)]
pub struct TupleZipIterator<C> {
    cursors: C,
}

impl<C: Cursors> TupleZipIterator<C> {
    /// Advance every cursor by one element.
    ///
    /// Advancing an iterator which already compares equal to its end is a
    /// logic error.
    pub fn advance(&mut self) {
        self.cursors.advance();
    }

    /// Read the element under every cursor.
    ///
    /// Reading doesn't move the iterator: calling this twice in a row gives
    /// the same elements.
    ///
    /// # Panics
    ///
    /// Panics if any cursor is past the end of its sequence.
    pub fn current(&mut self) -> C::Refs<'_> {
        self.cursors.current()
    }

    /// Continue from here as an [`Iterator`], stopping at `end`.
    pub fn until(self, end: TupleZipEnd<C::Positions>) -> Iter<C> {
        Iter {
            cursors: self.cursors,
            end: end.positions,
        }
    }
}

impl<C: Cursors> PartialEq<TupleZipEnd<C::Positions>> for TupleZipIterator<C> {
    fn eq(&self, end: &TupleZipEnd<C::Positions>) -> bool {
        self.cursors.any_at(&end.positions)
    }
}

/// The end position of every bound sequence.
///
/// This `struct` is created by [`TupleZip::end`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TupleZipEnd<P> {
    positions: P,
}

impl<P: Copy> TupleZipEnd<P> {
    /// The end position of each sequence, in binding order.
    pub fn positions(&self) -> P {
        self.positions
    }
}

/// An iterator over the elements of several sequences in lockstep.
///
/// This `struct` is created by [`TupleZip::iter`] and
/// [`TupleZipIterator::until`]. See their documentation for more.
#[derive(Debug)]
pub struct Iter<C: Cursors> {
    cursors: C,
    end: C::Positions,
}

impl<C: Cursors> Iterator for Iter<C> {
    type Item = C::Items;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursors.any_at(&self.end) {
            return None;
        }
        Some(self.cursors.take())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.cursors.any_at(&self.end) {
            0
        } else {
            self.cursors.remaining()
        };
        (remaining, Some(remaining))
    }
}

impl<C: Cursors> ExactSizeIterator for Iter<C> {}

impl<C: Cursors> FusedIterator for Iter<C> {}

/// ‘Zips up’ a set of sequences so they can be walked in lockstep.
pub trait Zip: Sequences + Sized {
    /// Bind the sequences, stopping at the shortest when walked.
    fn zip(self) -> TupleZip<Self>;

    /// Bind the sequences, failing unless they all have the same length.
    fn zip_exact(self) -> Result<TupleZip<Self>, LengthMismatch>;
}

impl<S: Sequences> Zip for S {
    fn zip(self) -> TupleZip<Self> {
        TupleZip::new(self)
    }

    fn zip_exact(self) -> Result<TupleZip<Self>, LengthMismatch> {
        self.check_lengths()?;
        Ok(TupleZip::new(self))
    }
}

/// A [`TupleZip`] over exactly two sequences.
pub type PairZip<A, B> = TupleZip<(A, B)>;

/// The [`TupleZipIterator`] of a [`PairZip`].
pub type PairZipIterator<'a, A, B> =
    TupleZipIterator<(<A as Sequence>::Cursor<'a>, <B as Sequence>::Cursor<'a>)>;

/// ‘Zips up’ a tuple or array of sequences.
///
/// Walking the result stops as soon as the shortest sequence runs out.
///
/// # Examples
///
/// ```
/// use lockstep::zip;
///
/// let a = [1, 2];
/// let b = [10, 20];
/// let c = [100];
///
/// let sums: Vec<_> = zip((&a, &b, &c))
///     .iter()
///     .map(|(a, b, c)| a + b + c)
///     .collect();
/// assert_eq!(sums, [111]);
/// ```
pub fn zip<S: Sequences>(sequences: S) -> TupleZip<S> {
    TupleZip::new(sequences)
}

/// ‘Zips up’ exactly two sequences.
///
/// # Examples
///
/// ```
/// use lockstep::zip_pair;
///
/// let numbers = [1, 2, 3];
/// let letters = ["a", "b"];
///
/// let pairs: Vec<_> = zip_pair(&numbers, &letters).iter().collect();
/// assert_eq!(pairs, [(&1, &"a"), (&2, &"b")]);
/// ```
pub fn zip_pair<A: Sequence, B: Sequence>(a: A, b: B) -> PairZip<A, B> {
    TupleZip::new((a, b))
}

/// ‘Zips up’ a tuple or array of sequences which must all have the same
/// length.
///
/// # Examples
///
/// ```
/// use lockstep::zip_exact;
///
/// let a = [1, 2];
/// let b = [3, 4, 5];
///
/// let err = zip_exact((&a, &b)).unwrap_err();
/// assert_eq!(err.index(), 1);
/// assert_eq!(err.found(), 3);
/// ```
pub fn zip_exact<S: Sequences>(sequences: S) -> Result<TupleZip<S>, LengthMismatch> {
    sequences.zip_exact()
}
