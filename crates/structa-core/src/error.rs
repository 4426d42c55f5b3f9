use std::fmt;

/// Result type for structa-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the extraction/rendering layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No parseable JSON could be located in the response text
    NotJson,

    /// The response parsed, but the top level is not a mapping.
    /// Carries the kind that was found instead.
    InvalidShape(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotJson => write!(f, "no valid JSON found in response text"),
            Error::InvalidShape(kind) => {
                write!(f, "expected a mapping at the top level, found {}", kind)
            }
        }
    }
}

impl std::error::Error for Error {}
