use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordStoreError {
    #[error("Database error during {operation} on {table}: {source}")]
    Database {
        table: &'static str,
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("Query failed on {table} ({sql}): {source}")]
    QueryExecution {
        table: &'static str,
        sql: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Not found: {kind} {id}")]
    NotFound { kind: String, id: String },

    #[error("Validation error on {table}.{field}: {message}")]
    Validation {
        table: &'static str,
        field: String,
        message: String,
    },

    #[error("Serialization error on {table}: {source}")]
    Serialization {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Content type already registered: {0}")]
    ContentTypeRegistered(String),
}

impl RecordStoreError {
    pub fn database_operation(
        table: &'static str,
        operation: &'static str,
        source: sqlx::Error,
    ) -> Self {
        Self::Database {
            table,
            operation,
            source,
        }
    }

    pub fn query_execution(table: &'static str, sql: &str, source: sqlx::Error) -> Self {
        Self::QueryExecution {
            table,
            sql: sql.to_string(),
            source,
        }
    }

    pub fn not_found(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: kind.into(),
            id: id.into(),
        }
    }

    pub fn validation(
        table: &'static str,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Validation {
            table,
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn serialization(table: &'static str, source: serde_json::Error) -> Self {
        Self::Serialization { table, source }
    }

    /// True when the error is a missing record or content type
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
