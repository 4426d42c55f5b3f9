use std::fmt;

/// Result type for structa-providers operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the providers layer
#[derive(Debug)]
pub enum Error {
    /// No API key available for the provider
    MissingCredentials(String),

    /// Transport-level failure (connect, TLS, timeout)
    Http(reqwest::Error),

    /// The service answered with a non-success status.
    /// The message is passed through opaquely.
    Api { status: u16, message: String },

    /// Response body could not be decoded
    Json(serde_json::Error),

    /// The service answered successfully but carried no text
    EmptyResponse,

    /// Provider name not recognized
    UnknownProvider(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingCredentials(provider) => {
                write!(f, "no API key configured for provider '{}'", provider)
            }
            Error::Http(err) => write!(f, "HTTP error: {}", err),
            Error::Api { status, message } => write!(f, "API error ({}): {}", status, message),
            Error::Json(err) => write!(f, "Response decode error: {}", err),
            Error::EmptyResponse => write!(f, "provider returned an empty response"),
            Error::UnknownProvider(name) => write!(f, "unknown provider: {}", name),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::MissingCredentials(_)
            | Error::Api { .. }
            | Error::EmptyResponse
            | Error::UnknownProvider(_) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
