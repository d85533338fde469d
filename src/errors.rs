//! Error types for the groundwork crate
//!
//! This module contains all error types that can be returned by groundwork
//! operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GroundworkError {
    #[error("Database connection error: {0}")]
    DatabaseConnection(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Record store error: {0}")]
    Store(#[from] record_store::RecordStoreError),

    #[error("Record store not found: {0}")]
    StoreNotFound(String),

    #[error("Record store already registered: {0}")]
    StoreAlreadyRegistered(String),

    #[error("Illegal base URL: {0}")]
    IllegalBaseUrl(String),
}
