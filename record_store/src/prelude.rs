//! Convenience re-exports for common record-store usage

// Core traits
pub use crate::traits::{
    Linked, RecordExecutor, RecordMetadata, RecordStore, SoftDelete, SoftDeletable, Timestamped,
};

// Generic link support
pub use crate::traits::content_ref::{
    ContentRef, ContentResolver, ContentTypeRegistry, StoreResolver,
};

// Error types
pub use crate::errors::RecordStoreError;

// Core store functionality
pub use crate::generic_store::GenericStore;

// ID types
pub use crate::id_type::{HasUniversalId, UniversalId};

// Validation
pub use crate::validation::{ValidatedFieldName, ValidatedTableName, ValidationError};

// Query building
pub use crate::query_builder::{QueryBuilder, QueryFilter, QueryOperator, SortOrder};

// Common external dependencies that are frequently used
pub use async_trait::async_trait;
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};
pub use sqlx::{FromRow, PgPool, Row};
pub use uuid::Uuid;
