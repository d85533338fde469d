//! Generic link mixin
//!
//! Records composing this capability reference an instance of an arbitrary
//! other record type through a (type-tag, numeric id) pair instead of a
//! fixed foreign key. Tags resolve against a [`ContentTypeRegistry`] the
//! application populates at startup, one resolver per linkable record type.
//!
//! No cascade semantics: removing a referenced record leaves the link
//! dangling, and dereferencing it reports NotFound.

use crate::errors::RecordStoreError;
use crate::generic_store::GenericStore;
use crate::traits::metadata::{RecordExecutor, RecordMetadata};
use crate::traits::RecordStore;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A polymorphic reference: type tag plus positive numeric id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentRef {
    pub content_type: String,
    pub object_id: i64,
}

impl ContentRef {
    pub fn new(content_type: impl Into<String>, object_id: i64) -> Self {
        Self {
            content_type: content_type.into(),
            object_id,
        }
    }
}

impl fmt::Display for ContentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.content_type, self.object_id)
    }
}

/// Model-side mixin for record types embedding the pair as columns
pub trait Linked {
    fn content_ref(&self) -> ContentRef;
}

/// Resolves an object id to the referenced record, serialized as JSON
///
/// Returns `Ok(None)` when no record with that id exists; the registry
/// turns that into a NotFound error carrying the full reference.
#[async_trait]
pub trait ContentResolver: Send + Sync {
    async fn resolve(&self, object_id: i64)
        -> Result<Option<serde_json::Value>, RecordStoreError>;
}

/// [`ContentResolver`] backed by a [`GenericStore`] over an i64-keyed record
/// type
pub struct StoreResolver<T: RecordMetadata> {
    store: GenericStore<T>,
}

impl<T: RecordMetadata> StoreResolver<T> {
    pub fn new(store: GenericStore<T>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<T> ContentResolver for StoreResolver<T>
where
    T: RecordMetadata<Id = i64>
        + RecordExecutor
        + for<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow>
        + Unpin,
{
    async fn resolve(
        &self,
        object_id: i64,
    ) -> Result<Option<serde_json::Value>, RecordStoreError> {
        match self.store.get_by_id(&object_id).await? {
            Some(record) => {
                let value = serde_json::to_value(&record)
                    .map_err(|e| RecordStoreError::serialization(T::table_name(), e))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }
}

/// Registry of linkable record types, keyed by type tag
///
/// One per process, owned by the application coordinator.
#[derive(Default)]
pub struct ContentTypeRegistry {
    resolvers: HashMap<String, Arc<dyn ContentResolver>>,
}

impl ContentTypeRegistry {
    pub fn new() -> Self {
        Self {
            resolvers: HashMap::new(),
        }
    }

    /// Register a resolver under a type tag
    pub fn register(
        &mut self,
        content_type: impl Into<String>,
        resolver: Arc<dyn ContentResolver>,
    ) -> Result<(), RecordStoreError> {
        let content_type = content_type.into();
        if self.resolvers.contains_key(&content_type) {
            return Err(RecordStoreError::ContentTypeRegistered(content_type));
        }

        self.resolvers.insert(content_type, resolver);
        Ok(())
    }

    /// Whether a type tag has a registered resolver
    pub fn contains(&self, content_type: &str) -> bool {
        self.resolvers.contains_key(content_type)
    }

    /// List all registered type tags
    pub fn tags(&self) -> Vec<&String> {
        self.resolvers.keys().collect()
    }

    /// Dereference a link to the concrete referenced record
    ///
    /// Fails with NotFound when the type tag is unknown or the id does not
    /// resolve to an existing record.
    pub async fn resolve(
        &self,
        link: &ContentRef,
    ) -> Result<serde_json::Value, RecordStoreError> {
        let resolver = self
            .resolvers
            .get(&link.content_type)
            .ok_or_else(|| RecordStoreError::not_found("content type", &link.content_type))?;

        resolver
            .resolve(link.object_id)
            .await?
            .ok_or_else(|| {
                RecordStoreError::not_found(link.content_type.clone(), link.object_id.to_string())
            })
    }
}

impl fmt::Debug for ContentTypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentTypeRegistry")
            .field("tags", &self.resolvers.keys().collect::<Vec<_>>())
            .finish()
    }
}
