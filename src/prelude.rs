//! Convenience re-exports for common groundwork usage
//!
//! This prelude module re-exports the most commonly used items from the
//! groundwork ecosystem, making it easier to import everything you need with
//! a single use statement.
//!
//! # Example
//!
//! ```rust
//! use groundwork::prelude::*;
//!
//! // Now you have access to all the common groundwork types and traits
//! ```

// Core groundwork components
pub use crate::core::Groundwork;
pub use crate::errors::GroundworkError;
pub use crate::media::MediaStorage;
pub use crate::migration;

// Re-export centralized config
pub use config::{AppConfig, ConfigError, DatabaseConfig, StorageConfig};

// Re-export commonly used record-store types for convenience
pub use record_store::prelude::*;

// Re-export record_store module for hand-written metadata impls
pub use record_store;

// Common external dependencies
pub use anyhow;
pub use async_trait;
pub use sqlx;
pub use tokio;
