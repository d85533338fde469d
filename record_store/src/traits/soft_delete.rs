//! Soft-delete mixin
//!
//! Record types composing this capability carry a boolean flag column
//! (default false) and are ordinarily flagged rather than removed. Plain
//! listing operations do not hide flagged records; callers filter with
//! `active()`/`deleted()` explicitly. Physical removal stays available
//! through [`RecordStore::delete`](crate::traits::RecordStore::delete).

use super::core::RecordStore;
use crate::RecordStoreError;
use async_trait::async_trait;

/// Model-side mixin: the soft-delete flag column
pub trait SoftDelete {
    /// Whether the record has been flagged as deleted
    fn is_deleted(&self) -> bool;

    /// Set the flag value
    fn set_deleted(&mut self, deleted: bool);
}

/// Store-side operations for record types carrying the flag
///
/// `soft_delete_one` persists through the normal update path, so persist
/// hooks run (a timestamped record gets its `updated` column refreshed).
/// `soft_delete_many` issues a single bulk UPDATE that bypasses per-record
/// hooks; the two are named apart so the bypass is visible at the call site.
#[async_trait]
pub trait SoftDeletable: RecordStore {
    /// List only records whose flag is unset
    async fn active(&self) -> Result<Vec<Self::Model>, RecordStoreError>;

    /// List only records whose flag is set
    async fn deleted(&self) -> Result<Vec<Self::Model>, RecordStoreError>;

    /// Count records whose flag is unset
    async fn count_active(&self) -> Result<i64, RecordStoreError>;

    /// Flag one record as deleted and persist it through the hook-running
    /// update path. Fails with NotFound when the id does not resolve.
    async fn soft_delete_one(&self, id: &Self::Id) -> Result<Self::Model, RecordStoreError>;

    /// Flag every record matching the query in one bulk UPDATE, without
    /// running per-record persist hooks. Returns the number of rows
    /// affected.
    async fn soft_delete_many(
        &self,
        query: crate::QueryBuilder,
    ) -> Result<u64, RecordStoreError>;
}
