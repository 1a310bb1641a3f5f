use super::error::check_lengths;
use super::{Cursors, LengthMismatch, Sequences};
use crate::private_impl;
use crate::sequence::{Cursor, Sequence};
use crate::utils;

// The empty set has no positions which could fail to match, so it is treated
// as already being at its end.
impl Sequences for () {
    private_impl! {}

    const ARITY: usize = 0;

    type Positions = ();
    type Cursors<'a> = () where Self: 'a;

    fn begin(&mut self) -> Self::Cursors<'_> {}

    fn end(&self) -> Self::Positions {}

    fn check_lengths(&self) -> Result<(), LengthMismatch> {
        Ok(())
    }
}

impl Cursors for () {
    private_impl! {}

    type Positions = ();
    type Items = ();
    type Refs<'b> = () where Self: 'b;

    fn advance(&mut self) {}

    fn current(&mut self) -> Self::Refs<'_> {}

    fn any_at(&self, _end: &Self::Positions) -> bool {
        true
    }

    fn remaining(&self) -> usize {
        0
    }

    fn take(&mut self) -> Self::Items {}
}

macro_rules! impl_zip_tuple {
    ($($S:ident=$idx:tt)+) => {
        impl<$($S,)+> Sequences for ($($S,)+)
        where $(
            $S: Sequence,
        )+ {
            private_impl! {}

            const ARITY: usize = utils::tuple_len!($($S,)+);

            type Positions = ($($S::Position,)+);
            type Cursors<'a> = ($($S::Cursor<'a>,)+) where Self: 'a;

            fn begin(&mut self) -> Self::Cursors<'_> {
                ($(Sequence::begin(&mut self.$idx),)+)
            }

            fn end(&self) -> Self::Positions {
                ($(Sequence::end(&self.$idx),)+)
            }

            fn check_lengths(&self) -> Result<(), LengthMismatch> {
                check_lengths([$(Sequence::len(&self.$idx),)+])
            }
        }

        impl<$($S,)+> Cursors for ($($S,)+)
        where $(
            $S: Cursor,
        )+ {
            private_impl! {}

            type Positions = ($($S::Position,)+);
            type Items = ($($S::Item,)+);
            type Refs<'b> = ($($S::Ref<'b>,)+) where Self: 'b;

            fn advance(&mut self) {
                $( self.$idx.advance(); )+
            }

            fn current(&mut self) -> Self::Refs<'_> {
                ($(self.$idx.current(),)+)
            }

            fn any_at(&self, end: &Self::Positions) -> bool {
                false $( || self.$idx.position() == end.$idx )+
            }

            fn remaining(&self) -> usize {
                let remaining = usize::MAX;
                $( let remaining = remaining.min(self.$idx.remaining()); )+
                remaining
            }

            fn take(&mut self) -> Self::Items {
                ($(self.$idx.take(),)+)
            }
        }
    };
}

impl_zip_tuple! { A=0 }
impl_zip_tuple! { A=0 B=1 }
impl_zip_tuple! { A=0 B=1 C=2 }
impl_zip_tuple! { A=0 B=1 C=2 D=3 }
impl_zip_tuple! { A=0 B=1 C=2 D=3 E=4 }
impl_zip_tuple! { A=0 B=1 C=2 D=3 E=4 F=5 }
impl_zip_tuple! { A=0 B=1 C=2 D=3 E=4 F=5 G=6 }
impl_zip_tuple! { A=0 B=1 C=2 D=3 E=4 F=5 G=6 H=7 }
impl_zip_tuple! { A=0 B=1 C=2 D=3 E=4 F=5 G=6 H=7 I=8 }
impl_zip_tuple! { A=0 B=1 C=2 D=3 E=4 F=5 G=6 H=7 I=8 J=9 }
impl_zip_tuple! { A=0 B=1 C=2 D=3 E=4 F=5 G=6 H=7 I=8 J=9 K=10 }
impl_zip_tuple! { A=0 B=1 C=2 D=3 E=4 F=5 G=6 H=7 I=8 J=9 K=10 L=11 }
