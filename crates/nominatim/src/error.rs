use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Domain-specific error codes for reverse geocoding lookups.
#[derive(Error, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Error {
    /// The geocoding endpoint could not be reached or answered abnormally.
    #[error("code: http_error, description: {0}")]
    Http(String),

    /// The response body did not match the expected shape.
    #[error("code: invalid_format, description: {0}")]
    InvalidFormat(String),
}

impl Error {
    /// Returns the error code.
    #[must_use]
    pub const fn code(&self) -> &str {
        match self {
            Self::Http(_) => "http_error",
            Self::InvalidFormat(_) => "invalid_format",
        }
    }

    /// Returns the error description.
    #[must_use]
    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::InvalidFormat(err.to_string())
        } else {
            Self::Http(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
