//! # Groundwork
//!
//! A web-application scaffold layer for PostgreSQL: environment-driven
//! configuration, object-storage media URLs, and composable record
//! lifecycle mixins (timestamps, soft deletion, generic links).
//!
//! Routing, templating, sessions and the rest of a web stack stay with
//! whatever framework sits on top; this crate covers the ground beneath it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use groundwork::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // groundwork.toml plus environment overrides (GROUNDWORK_DEBUG,
//!     // DATABASE_URL, GROUNDWORK_AWS_STORAGE_BUCKET_NAME, ...)
//!     let config = AppConfig::load()?;
//!
//!     let groundwork = Groundwork::from_config(&config).await?;
//!     groundwork.health_check().await?;
//!
//!     // Media URLs follow the configured bucket
//!     let media = MediaStorage::new(&config.storage);
//!     let url = media.expand("photos/1.jpg");
//!     let path = media.strip(&url)?;
//!     assert_eq!(path, "photos/1.jpg");
//!
//!     Ok(())
//! }
//! ```
//!
//! Record types compose the lifecycle mixins by embedding their columns and
//! wiring the persist hook:
//!
//! ```rust,ignore
//! #[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
//! pub struct Photo {
//!     pub id: i64,
//!     pub path: String,
//!     pub added: DateTime<Utc>,
//!     pub updated: DateTime<Utc>,
//!     pub is_deleted: bool,
//! }
//!
//! impl Timestamped for Photo { /* added/updated accessors */ }
//! impl SoftDelete for Photo { /* is_deleted accessors */ }
//!
//! impl RecordMetadata for Photo {
//!     // table name, static SQL, soft_delete_field...
//!
//!     fn before_save(&mut self) {
//!         self.touch();
//!     }
//! }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod core;
pub mod errors;
pub mod media;
pub mod migration;
pub mod prelude;

// Re-export the main public types for convenience
pub use crate::core::Groundwork;
pub use crate::errors::GroundworkError;
pub use crate::media::MediaStorage;

// Re-export centralized config
pub use config::{AppConfig, ConfigError, DatabaseConfig, StorageConfig};

// Re-export the internal crate carrying the record layer
pub use record_store;

// Re-export external dependencies used in public API
pub use async_trait;
pub use sqlx;
