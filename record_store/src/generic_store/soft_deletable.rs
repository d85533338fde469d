//! Generic store implementations
//!
//! Soft-delete operations over any record type carrying the flag column.
//! `soft_delete_one` goes through the hook-running update path;
//! `soft_delete_many` is one bulk UPDATE that deliberately bypasses
//! per-record persist hooks, so columns maintained by those hooks (such as
//! a timestamp mixin's `updated`) are left untouched.

use super::core::GenericStore;
use super::id_to_string;
use crate::errors::RecordStoreError;
use crate::traits::metadata::{RecordExecutor, RecordMetadata};
use crate::traits::{RecordStore, SoftDelete, SoftDeletable};
use crate::validation::ValidatedFieldName;
use async_trait::async_trait;
use sqlx::Row;

/// SQL for the bulk flag-setting UPDATE
///
/// Only the flag column appears in the SET list; hook-maintained columns
/// stay out of it.
pub fn bulk_flag_sql(table: &str, flag_field: &str, where_clause: &str) -> String {
    format!("UPDATE {} SET {} = true{}", table, flag_field, where_clause)
}

fn soft_delete_column<T: RecordMetadata>() -> Result<&'static str, RecordStoreError> {
    let field = T::soft_delete_field().ok_or_else(|| {
        RecordStoreError::validation(T::table_name(), "soft_delete", "Soft delete field not found")
    })?;

    // The flag name is interpolated into SQL, not bound
    ValidatedFieldName::new(field)
        .map_err(|e| RecordStoreError::validation(T::table_name(), field, e.to_string()))?;

    Ok(field)
}

#[async_trait]
impl<T> SoftDeletable for GenericStore<T>
where
    T: RecordMetadata
        + RecordExecutor
        + SoftDelete
        + for<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow>
        + Unpin,
{
    async fn active(&self) -> Result<Vec<Self::Model>, RecordStoreError> {
        let flag_field = soft_delete_column::<T>()?;

        let sql = format!(
            "SELECT * FROM {} WHERE {} = false ORDER BY {}",
            T::table_name(),
            flag_field,
            T::primary_key_field()
        );
        let results = sqlx::query_as::<_, T>(&sql)
            .fetch_all(&self.db_pool)
            .await
            .map_err(|e| RecordStoreError::database_operation(T::table_name(), "active", e))?;
        Ok(results)
    }

    async fn deleted(&self) -> Result<Vec<Self::Model>, RecordStoreError> {
        let flag_field = soft_delete_column::<T>()?;

        let sql = format!(
            "SELECT * FROM {} WHERE {} = true ORDER BY {}",
            T::table_name(),
            flag_field,
            T::primary_key_field()
        );
        let results = sqlx::query_as::<_, T>(&sql)
            .fetch_all(&self.db_pool)
            .await
            .map_err(|e| RecordStoreError::database_operation(T::table_name(), "deleted", e))?;
        Ok(results)
    }

    async fn count_active(&self) -> Result<i64, RecordStoreError> {
        let flag_field = soft_delete_column::<T>()?;

        let sql = format!(
            "SELECT COUNT(*) as total FROM {} WHERE {} = false",
            T::table_name(),
            flag_field
        );
        let result = sqlx::query(&sql)
            .fetch_one(&self.db_pool)
            .await
            .map_err(|e| RecordStoreError::database_operation(T::table_name(), "count_active", e))?;

        let total: i64 = result.get("total");
        Ok(total)
    }

    async fn soft_delete_one(&self, id: &Self::Id) -> Result<Self::Model, RecordStoreError> {
        let mut record = self.get_by_id(id).await?.ok_or_else(|| {
            RecordStoreError::not_found(T::table_name(), id_to_string(id.clone()))
        })?;

        record.set_deleted(true);

        // The update path runs before_save, so a timestamped record gets
        // its `updated` column refreshed here
        self.update(id, record).await
    }

    async fn soft_delete_many(
        &self,
        query: crate::QueryBuilder,
    ) -> Result<u64, RecordStoreError> {
        let flag_field = soft_delete_column::<T>()?;

        let (where_clause, params) = query.build_where_clause();
        let sql = bulk_flag_sql(T::table_name(), flag_field, &where_clause);
        tracing::debug!("[SOFT_DELETE_MANY] {}", sql);

        let mut sqlx_query = sqlx::query(&sql);
        for param in params {
            sqlx_query = self.bind_param_raw(sqlx_query, param);
        }

        let result = sqlx_query.execute(&self.db_pool).await.map_err(|e| {
            RecordStoreError::database_operation(T::table_name(), "soft_delete_many", e)
        })?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bulk_sql_sets_only_the_flag_column() {
        let sql = bulk_flag_sql("photos", "is_deleted", " WHERE author = $1");
        assert_eq!(
            sql,
            "UPDATE photos SET is_deleted = true WHERE author = $1"
        );
        // The bulk path bypasses persist hooks, so no hook-maintained
        // column may appear in the statement
        assert!(!sql.contains("updated"));
    }

    #[test]
    fn bulk_sql_without_filter_touches_every_row() {
        let sql = bulk_flag_sql("photos", "is_deleted", "");
        assert_eq!(sql, "UPDATE photos SET is_deleted = true");
    }
}
