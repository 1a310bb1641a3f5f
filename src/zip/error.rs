use core::fmt;

/// The error returned by [`zip_exact`][crate::zip_exact] when the sequences
/// do not all have the same length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthMismatch {
    index: usize,
    expected: usize,
    found: usize,
}

impl LengthMismatch {
    /// The index of the first sequence whose length differs from the first
    /// sequence's.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The length of the first sequence.
    pub fn expected(&self) -> usize {
        self.expected
    }

    /// The length of the sequence at [`index`][LengthMismatch::index].
    pub fn found(&self) -> usize {
        self.found
    }
}

impl fmt::Display for LengthMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sequence {} has length {}, expected {}",
            self.index, self.found, self.expected
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LengthMismatch {}

/// Check that every length matches the first one.
pub(crate) fn check_lengths<I>(lengths: I) -> Result<(), LengthMismatch>
where
    I: IntoIterator<Item = usize>,
{
    let mut lengths = lengths.into_iter().enumerate();
    let Some((_, expected)) = lengths.next() else {
        return Ok(());
    };
    match lengths.find(|&(_, len)| len != expected) {
        Some((index, found)) => Err(LengthMismatch {
            index,
            expected,
            found,
        }),
        None => Ok(()),
    }
}
