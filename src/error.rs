/// Errors surfaced when builder output is viewed as UTF-8 text.
///
/// Appending never fails and never returns one of these; only the borrowing
/// conversions on [`crate::Text`] do.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The byte content is not valid UTF-8, for example after appending an
    /// unpaired surrogate code unit.
    #[error("text is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

impl Error {
    /// Byte offset of the first malformed sequence, when known.
    pub fn valid_up_to(&self) -> Option<usize> {
        match self {
            Error::InvalidUtf8(source) => Some(source.valid_up_to()),
        }
    }
}
