//! Trait definitions
//!
//! This module defines the common operations available on every record
//! store.

use crate::RecordStoreError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait that defines common database operations for all record types
///
/// `delete`/`delete_many` remove rows permanently. Record types that should
/// ordinarily be flagged rather than removed also implement
/// [`SoftDeletable`](crate::traits::SoftDeletable), whose distinctly named
/// operations make the flag semantics visible at the call site.
#[async_trait]
pub trait RecordStore: Clone + Send + Sync + Debug {
    /// The model type that this store persists
    type Model: Clone + Send + Sync + Debug + Serialize + for<'de> Deserialize<'de>;

    /// The ID type used for this record (UUID, i64, String, etc.)
    type Id: Clone + Send + Sync + Debug;

    /// Create a new record, running its persist hook first
    async fn create(&self, data: Self::Model) -> Result<Self::Model, RecordStoreError>;

    /// Get a record by its ID
    async fn get_by_id(&self, id: &Self::Id) -> Result<Option<Self::Model>, RecordStoreError>;

    /// List all records of this type, soft-deleted ones included
    async fn list_all(&self) -> Result<Vec<Self::Model>, RecordStoreError>;

    /// Update a record by its ID, running its persist hook first
    async fn update(
        &self,
        id: &Self::Id,
        data: Self::Model,
    ) -> Result<Self::Model, RecordStoreError>;

    /// Permanently remove a record by its ID
    async fn delete(&self, id: &Self::Id) -> Result<bool, RecordStoreError>;

    /// Permanently remove multiple records by their IDs
    async fn delete_many(&self, ids: Vec<Self::Id>) -> Result<Vec<Self::Id>, RecordStoreError>;

    /// Count total records of this type
    async fn count(&self) -> Result<i64, RecordStoreError>;

    /// Find records matching query conditions
    async fn find(
        &self,
        query: crate::QueryBuilder,
    ) -> Result<Vec<Self::Model>, RecordStoreError>;

    /// Find first record matching query conditions
    async fn find_one(
        &self,
        query: crate::QueryBuilder,
    ) -> Result<Option<Self::Model>, RecordStoreError>;

    /// Count records matching query conditions
    async fn count_where(&self, query: crate::QueryBuilder) -> Result<i64, RecordStoreError>;
}
