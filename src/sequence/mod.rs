//! Sequences and the cursors that walk them.
//!
//! A [`Sequence`] is anything with a beginning, an end sentinel, and a way to
//! reach each element in order. Walking one hands out a [`Cursor`]: a
//! position that can be read, advanced, and compared against the sequence's
//! end.
//!
//! How a sequence is bound decides what its cursor hands out. Binding a
//! slice by shared reference produces [`ReadCursor`], which yields `&T`.
//! Binding it by mutable reference, or handing over an owned `Vec<T>` or
//! array, produces [`WriteCursor`], which yields `&mut T`. The choice is made
//! by the type system at the point of binding, never at runtime.
//!
//! # Examples
//!
//! ```
//! use lockstep::sequence::{Cursor, Sequence};
//!
//! let mut letters = &['a', 'b'][..];
//! let end = letters.end();
//! let mut cursor = letters.begin();
//!
//! assert_eq!(cursor.current(), &'a');
//! cursor.advance();
//! assert_eq!(cursor.current(), &'b');
//! cursor.advance();
//! assert_eq!(cursor.position(), end);
//! ```

use core::fmt;

mod iter;
mod slice;
#[cfg(feature = "alloc")]
mod vec;

pub use iter::{from_iter, FromIter, IterCursor};
pub use slice::{ReadCursor, WriteCursor};

/// A position in a single sequence.
///
/// Reading a cursor never moves it, and moving it never reads.
pub trait Cursor {
    /// A comparable snapshot of where this cursor is.
    type Position: Copy + Eq + fmt::Debug;

    /// The element handed out by [`take`][Cursor::take], valid for as long as
    /// the sequence binding is.
    type Item;

    /// The element handed out by [`current`][Cursor::current], borrowed from
    /// the cursor.
    type Ref<'b>
    where
        Self: 'b;

    /// Where this cursor currently is.
    fn position(&self) -> Self::Position;

    /// How many elements are left between this cursor and the end.
    fn remaining(&self) -> usize;

    /// Read the element under the cursor without moving it.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at or past the end of its sequence.
    fn current(&mut self) -> Self::Ref<'_>;

    /// Move the cursor one element forward.
    fn advance(&mut self);

    /// Hand out the element under the cursor, then move one element forward.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at or past the end of its sequence.
    fn take(&mut self) -> Self::Item;
}

/// An ordered, finite collection which can be walked front to back.
pub trait Sequence {
    /// The positions handed out by this sequence's cursors.
    type Position: Copy + Eq + fmt::Debug;

    /// Which kind of cursor walks this sequence?
    type Cursor<'a>: Cursor<Position = Self::Position>
    where
        Self: 'a;

    /// A cursor at the first element.
    fn begin(&mut self) -> Self::Cursor<'_>;

    /// The position one past the last element.
    fn end(&self) -> Self::Position;

    /// The number of elements in the sequence.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
