use super::{ReadCursor, Sequence, WriteCursor};

use alloc::boxed::Box;
use alloc::vec::Vec;

impl<'s, T> Sequence for &'s Vec<T> {
    type Position = usize;
    type Cursor<'a> = ReadCursor<'s, T> where Self: 'a;

    fn begin(&mut self) -> Self::Cursor<'_> {
        ReadCursor::new(*self)
    }

    fn end(&self) -> usize {
        Vec::len(self)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<'s, T> Sequence for &'s mut Vec<T> {
    type Position = usize;
    type Cursor<'a> = WriteCursor<'a, T> where Self: 'a;

    fn begin(&mut self) -> Self::Cursor<'_> {
        WriteCursor::new(self.as_mut_slice())
    }

    fn end(&self) -> usize {
        Vec::len(self)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T> Sequence for Vec<T> {
    type Position = usize;
    type Cursor<'a> = WriteCursor<'a, T> where Self: 'a;

    fn begin(&mut self) -> Self::Cursor<'_> {
        WriteCursor::new(self.as_mut_slice())
    }

    fn end(&self) -> usize {
        Vec::len(self)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T> Sequence for Box<[T]> {
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
