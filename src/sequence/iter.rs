use super::{Cursor, Sequence};

/// Converts an iterator into a [`Sequence`].
///
/// The iterator has to know its length up front, and has to be cloneable so
/// that every call to [`Sequence::begin`] starts from the first item again.
/// Items are produced by value, so walking the sequence never touches the
/// iterator's source.
///
/// # Examples
///
/// ```
/// use lockstep::sequence::{from_iter, Cursor, Sequence};
///
/// let mut squares = from_iter((1..4).map(|n| n * n));
/// let mut cursor = squares.begin();
/// assert_eq!(cursor.take(), 1);
/// assert_eq!(cursor.take(), 4);
/// assert_eq!(cursor.current(), &9);
/// ```
pub fn from_iter<I>(iter: I) -> FromIter<I::IntoIter>
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator + Clone,
{
    FromIter {
        iter: iter.into_iter(),
    }
}

/// A sequence backed by an iterator.
///
/// This `struct` is created by [`from_iter`]. See its documentation for more.
#[derive(Debug, Clone)]
pub struct FromIter<I> {
    iter: I,
}

impl<I> Sequence for FromIter<I>
where
    I: ExactSizeIterator + Clone,
{
    type Position = usize;
    type Cursor<'a> = IterCursor<I> where Self: 'a;

    fn begin(&mut self) -> Self::Cursor<'_> {
        IterCursor::new(self.iter.clone())
    }

    fn end(&self) -> usize {
        self.iter.len()
    }

    fn len(&self) -> usize {
        self.iter.len()
    }
}

/// A cursor over a [`FromIter`] sequence.
///
/// The item under the cursor is pulled from the iterator when the cursor
/// moves onto it, so reading it repeatedly does not advance the iterator.
#[derive(Debug, Clone)]
pub struct IterCursor<I: Iterator> {
    iter: I,
    head: Option<I::Item>,
    index: usize,
}

impl<I: Iterator> IterCursor<I> {
    fn new(mut iter: I) -> Self {
        let head = iter.next();
        Self {
            iter,
            head,
            index: 0,
        }
    }
}

impl<I> Cursor for IterCursor<I>
where
    I: ExactSizeIterator,
{
    type Position = usize;
    type Item = I::Item;
    type Ref<'b> = &'b I::Item where Self: 'b;

    fn position(&self) -> usize {
        self.index
    }

    fn remaining(&self) -> usize {
        match self.head {
            Some(_) => self.iter.len() + 1,
            None => 0,
        }
    }

    fn current(&mut self) -> &I::Item {
        match &self.head {
            Some(item) => item,
            None => panic!("cursor read past the end of its sequence"),
        }
    }

    fn advance(&mut self) {
        debug_assert!(
            self.head.is_some(),
            "cursor advanced past the end of its sequence"
        );
        self.head = self.iter.next();
        self.index += 1;
    }

    fn take(&mut self) -> I::Item {
        match self.head.take() {
            Some(item) => {
                self.head = self.iter.next();
                self.index += 1;
                item
            }
            None => panic!("cursor read past the end of its sequence"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_restarts_from_the_first_item() {
        let mut seq = from_iter(0..3);
        let mut first = seq.begin();
        first.advance();
        first.advance();
        assert_eq!(first.current(), &2);

        let mut second = seq.begin();
        assert_eq!(second.current(), &0);
        assert_eq!(second.remaining(), 3);
    }

    #[test]
    fn cursor_reaches_end_position() {
        let mut seq = from_iter(["a", "b"]);
        let end = seq.end();
        let mut cursor = seq.begin();
        assert_eq!(cursor.take(), "a");
        assert_eq!(cursor.take(), "b");
        assert_eq!(cursor.position(), end);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "cursor advanced past the end of its sequence")]
    fn advance_past_end_panics() {
        let mut seq = from_iter(0..1);
        let mut cursor = seq.begin();
        cursor.advance();
        cursor.advance();
    }

    #[test]
    fn empty_iterator_is_empty_sequence() {
        let seq = from_iter(core::iter::empty::<u32>());
        assert!(seq.is_empty());
        assert_eq!(seq.end(), 0);
    }
}
