//! Record metadata traits
//!
//! Table structure, static SQL and the persist hook every record type wires
//! up by hand. Mixins (timestamps, soft deletion, generic links) contribute
//! columns and behavior by composition: a record type embeds the mixin's
//! fields and routes the relevant hook through its own impl.

use crate::id_type::HasUniversalId;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Metadata about a record's table structure and operations
///
/// Implemented manually per record type:
/// ```rust,ignore
/// impl RecordMetadata for Photo {
///     type Id = i64;
///
///     fn table_name() -> &'static str {
///         "photos"
///     }
///
///     fn create_sql() -> &'static str {
///         "INSERT INTO photos (id, path, added, updated, is_deleted) \
///          VALUES ($1, $2, $3, $4, $5) RETURNING *"
///     }
///     // ...
///
///     fn before_save(&mut self) {
///         self.touch();
///     }
/// }
/// ```
pub trait RecordMetadata:
    Clone + Send + Sync + Debug + Serialize + for<'de> Deserialize<'de>
{
    /// The type used for the primary key
    type Id: Clone
        + Send
        + Sync
        + Debug
        + Unpin
        + HasUniversalId
        + for<'q> sqlx::Encode<'q, sqlx::Postgres>
        + for<'r> sqlx::Decode<'r, sqlx::Postgres>
        + sqlx::Type<sqlx::Postgres>;

    /// The table name in the database
    fn table_name() -> &'static str;

    /// SQL for CREATE operation (with placeholders)
    fn create_sql() -> &'static str;

    /// SQL for UPDATE operation (with placeholders)
    fn update_sql() -> &'static str;

    /// SQL for SELECT all operation (optimized static query)
    fn list_all_sql() -> &'static str;

    /// SQL for DELETE by ID operation (optimized static query)
    fn delete_by_id_sql() -> &'static str;

    /// SQL for SELECT by ID operation (optimized static query)
    fn get_by_id_sql() -> &'static str;

    /// SQL for COUNT all operation; must alias the count column as `total`
    fn count_all_sql() -> &'static str;

    /// SQL prefix for filtered SELECT queries (`SELECT * FROM t`)
    fn select_base_sql() -> &'static str;

    /// SQL prefix for filtered COUNT queries; must alias the count as `total`
    fn count_base_sql() -> &'static str;

    /// Whether this record type carries the soft-delete flag
    fn supports_soft_delete() -> bool {
        false
    }

    /// Get the name of the soft-delete column if it exists
    fn soft_delete_field() -> Option<&'static str> {
        None
    }

    /// Extract ID from a record instance
    fn extract_id(&self) -> Self::Id;

    /// Get the primary key column name
    fn primary_key_field() -> &'static str;

    /// Generate CREATE TABLE SQL statement
    fn create_table_sql() -> String;

    /// Generate DROP TABLE SQL statement
    fn drop_table_sql() -> String {
        format!("DROP TABLE IF EXISTS {}", Self::table_name())
    }

    /// Generate CREATE INDEX SQL statements
    fn create_indexes_sql() -> Vec<String> {
        vec![]
    }

    /// Persist hook run immediately before every single-record create or
    /// update. Default is a no-op; record types composing the timestamp
    /// mixin route their `touch()` through here.
    ///
    /// Bulk operations (`soft_delete_many`) issue one UPDATE statement and
    /// never invoke this hook.
    fn before_save(&mut self) {}
}

/// Async trait for record persistence that properly handles async/await
///
/// Separates SQL execution from metadata. Implementations bind the record's
/// fields to the static SQL from [`RecordMetadata`] in column order.
#[async_trait]
pub trait RecordExecutor: RecordMetadata {
    /// Execute CREATE query with bound parameters
    /// Returns the created record with proper error handling
    async fn execute_create(
        &self,
        pool: &sqlx::PgPool,
    ) -> Result<Self, crate::errors::RecordStoreError>
    where
        Self: Sized + Send + Sync,
        Self: for<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow>;

    /// Execute UPDATE query with bound parameters
    /// Returns the updated record with proper error handling
    async fn execute_update(
        &self,
        pool: &sqlx::PgPool,
    ) -> Result<Self, crate::errors::RecordStoreError>
    where
        Self: Sized + Send + Sync,
        Self: for<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow>;
}
