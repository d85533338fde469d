//! Database migration functionality
//!
//! This module provides automatic table creation and migration utilities
//! for record types managed by Groundwork.
//!
//! All lifecycle columns (timestamps, the soft-delete flag) are maintained
//! by application-level persist hooks, not by database triggers: a trigger
//! would fire on bulk statements too, and the bulk soft-delete path is
//! required to leave hook-maintained columns untouched.

use crate::core::Groundwork;
use crate::errors::GroundworkError;
use record_store::traits::{RecordExecutor, RecordMetadata};
use record_store::GenericStore;

impl Groundwork {
    /// Automatically create table and indexes for a record type
    /// If recreate is true, drops the existing table first
    pub async fn auto_migrate<T>(&self, recreate: bool) -> Result<(), GroundworkError>
    where
        T: RecordMetadata + Send + Sync,
    {
        if recreate {
            let drop_sql = T::drop_table_sql();
            tracing::debug!("Dropping table with SQL: {}", drop_sql);
            sqlx::query(&drop_sql).execute(self.pool()).await?;
        }

        let create_table_sql = T::create_table_sql();
        tracing::debug!("Creating table with SQL: {}", create_table_sql);
        sqlx::query(&create_table_sql).execute(self.pool()).await?;

        for index_sql in T::create_indexes_sql() {
            tracing::debug!("Creating index with SQL: {}", index_sql);
            sqlx::query(&index_sql).execute(self.pool()).await?;
        }

        Ok(())
    }

    /// Build a store for a record type, auto-migrate its table and register
    /// the store under the given name
    pub async fn register_store_with_migration<T>(
        &mut self,
        name: String,
        recreate: bool,
    ) -> Result<(), GroundworkError>
    where
        T: RecordMetadata
            + RecordExecutor
            + for<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow>
            + Unpin
            + 'static,
    {
        // First, run auto-migration for this type
        self.auto_migrate::<T>(recreate).await?;

        // Then build and register the store
        let store = GenericStore::<T>::new(self.pool().clone());
        self.register_store(name, store)
    }
}
