use super::{Cursor, Sequence};

use core::mem;

/// A read-only cursor into a slice.
///
/// This `struct` is created by [`Sequence::begin`] on shared slice and array
/// bindings. Its elements keep the lifetime of the original borrow.
#[derive(Debug, Clone, Copy)]
pub struct ReadCursor<'a, T> {
    slice: &'a [T],
    index: usize,
}

impl<'a, T> ReadCursor<'a, T> {
    pub(crate) fn new(slice: &'a [T]) -> Self {
        Self { slice, index: 0 }
    }
}

impl<'a, T> Cursor for ReadCursor<'a, T> {
    type Position = usize;
    type Item = &'a T;
    type Ref<'b> = &'a T where Self: 'b;

    fn position(&self) -> usize {
        self.index
    }

    fn remaining(&self) -> usize {
        self.slice.len().saturating_sub(self.index)
    }

    fn current(&mut self) -> &'a T {
        match self.slice.get(self.index) {
            Some(item) => item,
            None => panic!("cursor read past the end of its sequence"),
        }
    }

    fn advance(&mut self) {
        debug_assert!(
            self.index < self.slice.len(),
            "cursor advanced past the end of its sequence"
        );
        self.index += 1;
    }

    fn take(&mut self) -> &'a T {
        let item = self.current();
        self.index += 1;
        item
    }
}

/// A mutable cursor into a slice.
///
/// This `struct` is created by [`Sequence::begin`] on mutable slice and array
/// bindings, and on owned storage such as `Vec<T>`. Only the not yet visited
/// tail is held, so every element handed out by [`Cursor::take`] is disjoint
/// from every other.
#[derive(Debug)]
pub struct WriteCursor<'a, T> {
    rest: &'a mut [T],
    index: usize,
}

impl<'a, T> WriteCursor<'a, T> {
    pub(crate) fn new(slice: &'a mut [T]) -> Self {
        Self {
            rest: slice,
            index: 0,
        }
    }
}

impl<'a, T> Cursor for WriteCursor<'a, T> {
    type Position = usize;
    type Item = &'a mut T;
    type Ref<'b> = &'b mut T where Self: 'b;

    fn position(&self) -> usize {
        self.index
    }

    fn remaining(&self) -> usize {
        self.rest.len()
    }

    fn current(&mut self) -> &mut T {
        match self.rest.first_mut() {
            Some(item) => item,
            None => panic!("cursor read past the end of its sequence"),
        }
    }

    fn advance(&mut self) {
        debug_assert!(
            !self.rest.is_empty(),
            "cursor advanced past the end of its sequence"
        );
        let rest = mem::take(&mut self.rest);
        self.rest = rest.get_mut(1..).unwrap_or_default();
        self.index += 1;
    }

    fn take(&mut self) -> &'a mut T {
        let rest = mem::take(&mut self.rest);
        match rest.split_first_mut() {
            Some((item, rest)) => {
                self.rest = rest;
                self.index += 1;
                item
            }
            None => panic!("cursor read past the end of its sequence"),
        }
    }
}

impl<'s, T> Sequence for &'s [T] {
    type Position = usize;
    type Cursor<'a> = ReadCursor<'s, T> where Self: 'a;

    fn begin(&mut self) -> Self::Cursor<'_> {
        ReadCursor::new(*self)
    }

    fn end(&self) -> usize {
        <[T]>::len(self)
    }

    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<'s, T> Sequence for &'s mut [T] {
    type Position = usize;
    type Cursor<'a> = WriteCursor<'a, T> where Self: 'a;

    fn begin(&mut self) -> Self::Cursor<'_> {
        WriteCursor::new(self)
    }

    fn end(&self) -> usize {
        <[T]>::len(self)
    }

    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<'s, T, const N: usize> Sequence for &'s [T; N] {
    type Position = usize;
    type Cursor<'a> = ReadCursor<'s, T> where Self: 'a;

    fn begin(&mut self) -> Self::Cursor<'_> {
        ReadCursor::new(*self)
    }

    fn end(&self) -> usize {
        N
    }

    fn len(&self) -> usize {
        N
    }
}

impl<'s, T, const N: usize> Sequence for &'s mut [T; N] {
    type Position = usize;
    type Cursor<'a> = WriteCursor<'a, T> where Self: 'a;

    fn begin(&mut self) -> Self::Cursor<'_> {
        WriteCursor::new(&mut self[..])
    }

    fn end(&self) -> usize {
        N
    }

    fn len(&self) -> usize {
        N
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Position = usize;
    type Cursor<'a> = WriteCursor<'a, T> where Self: 'a;

    fn begin(&mut self) -> Self::Cursor<'_> {
        WriteCursor::new(self)
    }

    fn end(&self) -> usize {
        N
    }

    fn len(&self) -> usize {
        N
    }
}
