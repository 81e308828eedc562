use core::fmt::{self, Display};

/// Broad classification of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied input that violates a model constraint.
    Validation,
    /// The caller referenced a choice that does not exist.
    Lookup,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    EmptyTitle,
    TitleTooLong,
    PointsOutOfRange,
    /// A question must allow at least one selection.
    NoSelectionsAllowed,
    EmptyText,
    TextTooLong,
    /// More correct choices were selected than the question permits.
    TooManySelections { max: usize },
    InvalidChoiceId(u32),
}

impl Error {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidChoiceId(_) => ErrorKind::Lookup,
            _ => ErrorKind::Validation,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Error::*;
        match self {
            EmptyTitle => f.write_str("Title cannot be empty."),
            TitleTooLong => f.write_str("Title cannot exceed 200 characters."),
            PointsOutOfRange => f.write_str("Points must be between 1 and 100."),
            NoSelectionsAllowed => f.write_str("Questions must allow at least one selection."),
            EmptyText => f.write_str("Text cannot be empty."),
            TextTooLong => f.write_str("Text cannot exceed 100 characters."),
            TooManySelections { max } => write!(f, "Cannot select more than {max} choices."),
            InvalidChoiceId(id) => write!(f, "Invalid choice id: {id}."),
        }
    }
}

impl core::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
