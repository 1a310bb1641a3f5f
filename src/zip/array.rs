use super::error::check_lengths;
use super::{Cursors, LengthMismatch, Sequences};
use crate::private_impl;
use crate::sequence::{Cursor, Sequence};

impl<S, const N: usize> Sequences for [S; N]
where
    S: Sequence,
{
    private_impl! {}

    const ARITY: usize = N;

    type Positions = [S::Position; N];
    type Cursors<'a> = [S::Cursor<'a>; N] where Self: 'a;

    fn begin(&mut self) -> Self::Cursors<'_> {
        self.each_mut().map(|seq| Sequence::begin(seq))
    }

    fn end(&self) -> Self::Positions {
        self.each_ref().map(|seq| Sequence::end(seq))
    }

    fn check_lengths(&self) -> Result<(), LengthMismatch> {
        check_lengths(self.iter().map(|seq| Sequence::len(seq)))
    }
}

impl<C, const N: usize> Cursors for [C; N]
where
    C: Cursor,
{
    private_impl! {}

    type Positions = [C::Position; N];
    type Items = [C::Item; N];
    type Refs<'b> = [C::Ref<'b>; N] where Self: 'b;

    fn advance(&mut self) {
        for cursor in self.iter_mut() {
            cursor.advance();
        }
    }

    fn current(&mut self) -> Self::Refs<'_> {
        self.each_mut().map(|cursor| cursor.current())
    }

    fn any_at(&self, end: &Self::Positions) -> bool {
        N == 0
            || self
                .iter()
                .zip(end.iter())
                .any(|(cursor, end)| cursor.position() == *end)
    }

    fn remaining(&self) -> usize {
        self.iter().map(|cursor| cursor.remaining()).min().unwrap_or(0)
    }

    fn take(&mut self) -> Self::Items {
        self.each_mut().map(|cursor| cursor.take())
    }
}
