//! Record Store - Core data-lifecycle layer for Groundwork
//!
//! This crate provides the foundational types and traits for persisted
//! records: the generic PostgreSQL store, the composable lifecycle mixins
//! (timestamps, soft deletion, generic links) and the query builder.

pub mod errors;
pub mod generic_store;
pub mod id_type;
pub mod prelude;
pub mod query_builder;
pub mod traits;
pub mod validation;

pub use errors::RecordStoreError;
pub use generic_store::GenericStore;
pub use id_type::{HasUniversalId, UniversalId};
pub use query_builder::{QueryBuilder, QueryFilter, QueryOperator, SortOrder};
pub use traits::*;
pub use validation::{ValidatedFieldName, ValidatedTableName, ValidationError};

use sqlx::PgPool;

pub type DbPool = PgPool;
