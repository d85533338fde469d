//! Media URL codec
//!
//! Translates between storage-relative asset paths and the fully-qualified
//! object-storage URLs the backend issues. The URL shape is fixed by
//! configuration: `<scheme>://<host>/<bucket><media_prefix>` followed by the
//! relative path. Asset-serving code uses this independently of the record
//! stores.

use crate::errors::GroundworkError;
use config::StorageConfig;

/// URL codec for a configured object-storage bucket
#[derive(Debug, Clone)]
pub struct MediaStorage {
    base_url: String,
    static_base_url: String,
}

impl MediaStorage {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            base_url: format!(
                "{}://{}/{}{}",
                config.scheme, config.host, config.bucket, config.media_prefix
            ),
            static_base_url: format!(
                "{}://{}/{}{}",
                config.scheme, config.host, config.bucket, config.static_prefix
            ),
        }
    }

    /// The fixed media prefix, trailing slash included
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The fixed prefix under which collected static assets live
    pub fn static_base_url(&self) -> &str {
        &self.static_base_url
    }

    /// Reduce a fully-qualified media URL to its storage-relative path
    ///
    /// The empty string passes through unchanged. Anything else must start
    /// with the fixed prefix and contain it exactly once; other shapes fail
    /// with [`GroundworkError::IllegalBaseUrl`].
    pub fn strip(&self, url: &str) -> Result<String, GroundworkError> {
        if url.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = url.split(self.base_url.as_str()).collect();
        if parts.len() != 2 || !parts[0].is_empty() {
            return Err(GroundworkError::IllegalBaseUrl(url.to_string()));
        }

        Ok(parts[1].to_string())
    }

    /// Build the fully-qualified media URL for a storage-relative path
    ///
    /// The empty string passes through unchanged. No validation is
    /// performed; `expand(strip(url)) == url` only holds for well-formed
    /// input.
    pub fn expand(&self, path: &str) -> String {
        if path.is_empty() {
            return String::new();
        }

        format!("{}{}", self.base_url, path)
    }
}
