// src/errors.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("image not found: {0}")]
    NotFound(String),

    #[error("failed to read image {locator}: {source}")]
    Read {
        locator: String,
        source: std::io::Error,
    },

    #[error("unsupported locator scheme: {0}")]
    UnsupportedLocator(String),

    #[error("image {locator} is {size} bytes, limit is {limit}")]
    TooLarge {
        locator: String,
        size: u64,
        limit: u64,
    },
}

impl EncodeError {
    /// The locator the failed call was given, for logging at the call site.
    pub fn locator(&self) -> &str {
        match self {
            EncodeError::NotFound(locator) => locator,
            EncodeError::Read { locator, .. } => locator,
            EncodeError::UnsupportedLocator(locator) => locator,
            EncodeError::TooLarge { locator, .. } => locator,
        }
    }
}
