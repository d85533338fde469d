//! Generic store implementations
//!
//! [`RecordStore`] over any record type with hand-wired metadata. The
//! persist hook (`before_save`) runs on every single-record create and
//! update before the SQL executes; bulk paths never call it.

use super::core::GenericStore;
use super::id_to_string;
use crate::errors::RecordStoreError;
use crate::traits::metadata::{RecordExecutor, RecordMetadata};
use crate::traits::RecordStore;
use async_trait::async_trait;
use sqlx::Row;

#[async_trait]
impl<T> RecordStore for GenericStore<T>
where
    T: RecordMetadata
        + RecordExecutor
        + for<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow>
        + Unpin,
{
    type Model = T;
    type Id = T::Id;

    async fn create(&self, data: Self::Model) -> Result<Self::Model, RecordStoreError> {
        let mut data = data;
        data.before_save();

        let created = data.execute_create(&self.db_pool).await?;
        tracing::debug!(
            "[CREATE] {} {}",
            T::table_name(),
            id_to_string(created.extract_id())
        );
        Ok(created)
    }

    async fn get_by_id(&self, id: &Self::Id) -> Result<Option<Self::Model>, RecordStoreError> {
        // Static SQL from the metadata impl, no allocations
        let result = sqlx::query_as::<_, T>(T::get_by_id_sql())
            .bind(id)
            .fetch_optional(&self.db_pool)
            .await
            .map_err(|e| RecordStoreError::query_execution(T::table_name(), T::get_by_id_sql(), e))?;

        Ok(result)
    }

    async fn list_all(&self) -> Result<Vec<Self::Model>, RecordStoreError> {
        let results = sqlx::query_as::<_, T>(T::list_all_sql())
            .fetch_all(&self.db_pool)
            .await
            .map_err(|e| RecordStoreError::database_operation(T::table_name(), "list_all", e))?;
        Ok(results)
    }

    async fn update(
        &self,
        id: &Self::Id,
        data: Self::Model,
    ) -> Result<Self::Model, RecordStoreError> {
        let mut data = data;
        data.before_save();

        let updated = data.execute_update(&self.db_pool).await?;
        tracing::debug!("[UPDATE] {} {}", T::table_name(), id_to_string(id.clone()));
        Ok(updated)
    }

    async fn delete(&self, id: &Self::Id) -> Result<bool, RecordStoreError> {
        let result = sqlx::query(T::delete_by_id_sql())
            .bind(id)
            .execute(&self.db_pool)
            .await
            .map_err(|e| RecordStoreError::database_operation(T::table_name(), "delete", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_many(&self, ids: Vec<Self::Id>) -> Result<Vec<Self::Id>, RecordStoreError> {
        let mut deleted_ids = Vec::new();

        // Use transaction for batch deletes
        let mut tx = self
            .db_pool
            .begin()
            .await
            .map_err(|e| RecordStoreError::database_operation(T::table_name(), "delete_many", e))?;

        for id in ids {
            let result = sqlx::query(T::delete_by_id_sql())
                .bind(&id)
                .execute(tx.as_mut())
                .await
                .map_err(|e| {
                    RecordStoreError::database_operation(T::table_name(), "delete_many", e)
                })?;

            if result.rows_affected() > 0 {
                deleted_ids.push(id);
            }
        }

        tx.commit()
            .await
            .map_err(|e| RecordStoreError::database_operation(T::table_name(), "delete_many", e))?;

        Ok(deleted_ids)
    }

    async fn count(&self) -> Result<i64, RecordStoreError> {
        let result = sqlx::query(T::count_all_sql())
            .fetch_one(&self.db_pool)
            .await
            .map_err(|e| RecordStoreError::database_operation(T::table_name(), "count", e))?;

        let total: i64 = result.get("total");
        Ok(total)
    }

    async fn find(&self, query: crate::QueryBuilder) -> Result<Vec<Self::Model>, RecordStoreError> {
        let (where_clause, order_clause, limit_clause, params) = query.build();
        // Avoid format! allocation by building string directly
        let base_sql = T::select_base_sql();
        let mut full_sql = String::with_capacity(
            base_sql.len() + where_clause.len() + order_clause.len() + limit_clause.len(),
        );
        full_sql.push_str(base_sql);
        full_sql.push_str(&where_clause);
        full_sql.push_str(&order_clause);
        full_sql.push_str(&limit_clause);

        let mut sqlx_query = sqlx::query_as::<_, T>(&full_sql);
        for param in params {
            sqlx_query = self.bind_param(sqlx_query, param);
        }

        let results = sqlx_query
            .fetch_all(&self.db_pool)
            .await
            .map_err(|e| RecordStoreError::database_operation(T::table_name(), "find", e))?;

        Ok(results)
    }

    async fn find_one(
        &self,
        query: crate::QueryBuilder,
    ) -> Result<Option<Self::Model>, RecordStoreError> {
        let query_with_limit = query.limit(1);
        let mut results = self.find(query_with_limit).await?;

        Ok(results.pop())
    }

    async fn count_where(&self, query: crate::QueryBuilder) -> Result<i64, RecordStoreError> {
        let (where_clause, _, _, params) = query.build(); // No ORDER BY or LIMIT for COUNT
        let base_sql = T::count_base_sql();
        let mut full_sql = String::with_capacity(base_sql.len() + where_clause.len());
        full_sql.push_str(base_sql);
        full_sql.push_str(&where_clause);

        let mut sqlx_query = sqlx::query(&full_sql);
        for param in params {
            sqlx_query = self.bind_param_raw(sqlx_query, param);
        }

        let result = sqlx_query
            .fetch_one(&self.db_pool)
            .await
            .map_err(|e| RecordStoreError::database_operation(T::table_name(), "count_where", e))?;

        let total: i64 = result.get("total");
        Ok(total)
    }
}

// Macro for the shared parameter binding logic
macro_rules! bind_json_param {
    ($query:expr, $param:expr) => {
        match $param {
            serde_json::Value::String(s) => {
                // Try to parse as RFC3339 timestamp first
                if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(&s) {
                    $query.bind(dt.with_timezone(&chrono::Utc))
                // Try to parse as UUID
                } else if let Ok(uuid) = uuid::Uuid::parse_str(&s) {
                    $query.bind(uuid)
                } else {
                    $query.bind(s)
                }
            }
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    if i >= i32::MIN as i64 && i <= i32::MAX as i64 {
                        $query.bind(i as i32)
                    } else {
                        $query.bind(i)
                    }
                } else if let Some(f) = n.as_f64() {
                    $query.bind(f)
                } else {
                    $query.bind(n.to_string())
                }
            }
            serde_json::Value::Bool(b) => $query.bind(b),
            serde_json::Value::Null => $query.bind(Option::<String>::None),
            other => $query.bind(other.to_string()),
        }
    };
}

// Helper implementation for parameter binding
impl<T> GenericStore<T>
where
    T: RecordMetadata
        + RecordExecutor
        + for<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow>
        + Unpin,
{
    fn bind_param<'q>(
        &self,
        query: sqlx::query::QueryAs<'q, sqlx::Postgres, T, sqlx::postgres::PgArguments>,
        param: serde_json::Value,
    ) -> sqlx::query::QueryAs<'q, sqlx::Postgres, T, sqlx::postgres::PgArguments> {
        bind_json_param!(query, param)
    }

    pub(crate) fn bind_param_raw<'q>(
        &self,
        query: sqlx::query::Query<'q, sqlx::Postgres, sqlx::postgres::PgArguments>,
        param: serde_json::Value,
    ) -> sqlx::query::Query<'q, sqlx::Postgres, sqlx::postgres::PgArguments> {
        bind_json_param!(query, param)
    }
}
