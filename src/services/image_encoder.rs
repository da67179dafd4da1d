// src/services/image_encoder.rs
use crate::errors::EncodeError;
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use log::{debug, warn};
use std::io::ErrorKind;
use std::path::PathBuf;

/// Converts an opaque image locator into the base64 text of its bytes.
///
/// Implementations are stateless across calls: concurrent invocations must
/// not block each other, and all failures come back as `Err`, never a panic.
#[async_trait]
pub trait ImageEncodingService: Send + Sync {
    async fn convert_to_base64(&self, locator: &str) -> Result<String, EncodeError>;
}

/// Encoder backed by the local filesystem. Accepts `file://` URIs and plain
/// paths; any other scheme is rejected up front.
pub struct FileImageEncoder {
    max_bytes: Option<u64>,
}

impl FileImageEncoder {
    pub fn new() -> Self {
        Self { max_bytes: None }
    }

    /// Rejects images larger than `limit` bytes before reading them, for
    /// callers feeding the result to APIs with payload caps.
    pub fn with_max_bytes(limit: u64) -> Self {
        Self {
            max_bytes: Some(limit),
        }
    }

    fn resolve(&self, locator: &str) -> Result<PathBuf, EncodeError> {
        if let Some(path) = locator.strip_prefix("file://") {
            return Ok(PathBuf::from(path));
        }
        if locator.contains("://") {
            return Err(EncodeError::UnsupportedLocator(locator.to_string()));
        }
        Ok(PathBuf::from(locator))
    }
}

impl Default for FileImageEncoder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageEncodingService for FileImageEncoder {
    async fn convert_to_base64(&self, locator: &str) -> Result<String, EncodeError> {
        let path = self.resolve(locator)?;

        if let Some(limit) = self.max_bytes {
            let meta = tokio::fs::metadata(&path)
                .await
                .map_err(|e| read_error(locator, e))?;
            if meta.len() > limit {
                warn!(
                    "rejecting {}: {} bytes exceeds limit of {}",
                    locator,
                    meta.len(),
                    limit
                );
                return Err(EncodeError::TooLarge {
                    locator: locator.to_string(),
                    size: meta.len(),
                    limit,
                });
            }
        }

        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| read_error(locator, e))?;

        debug!("encoding {} ({} bytes)", locator, bytes.len());
        Ok(general_purpose::STANDARD.encode(bytes))
    }
}

fn read_error(locator: &str, err: std::io::Error) -> EncodeError {
    if err.kind() == ErrorKind::NotFound {
        EncodeError::NotFound(locator.to_string())
    } else {
        EncodeError::Read {
            locator: locator.to_string(),
            source: err,
        }
    }
}
