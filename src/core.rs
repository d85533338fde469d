//! Core Groundwork functionality
//!
//! This module contains the main Groundwork struct and its implementation,
//! providing centralized coordination for the database connection, the
//! record stores and the content-type registry.

use sqlx::PgPool;
use std::collections::HashMap;
use std::time::Duration;

use crate::errors::GroundworkError;
use config::{AppConfig, DatabaseConfig};
use record_store::traits::RecordStore;
use record_store::ContentTypeRegistry;

/// Main Groundwork coordinator that manages the database connection, the
/// registered record stores and the process-wide content-type registry
pub struct Groundwork {
    pool: PgPool,
    stores: HashMap<String, Box<dyn std::any::Any + Send + Sync>>,
    content_types: ContentTypeRegistry,
}

impl Groundwork {
    /// Create new Groundwork with database connection
    pub async fn new(config: DatabaseConfig) -> Result<Self, GroundworkError> {
        let connection_string = config.connection_string();

        let mut pool_options = sqlx::postgres::PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds));

        // Set max lifetime if specified
        if config.max_lifetime_seconds > 0 {
            pool_options =
                pool_options.max_lifetime(Duration::from_secs(config.max_lifetime_seconds));
        }

        let pool = pool_options.connect(&connection_string).await?;

        Ok(Self {
            pool,
            stores: HashMap::new(),
            content_types: ContentTypeRegistry::new(),
        })
    }

    /// Create new Groundwork from a loaded application configuration
    pub async fn from_config(config: &AppConfig) -> Result<Self, GroundworkError> {
        Self::new(config.database.clone()).await
    }

    /// Get database pool reference
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Register a record store with a given name
    pub fn register_store<T>(&mut self, name: String, store: T) -> Result<(), GroundworkError>
    where
        T: RecordStore + Send + Sync + 'static,
    {
        if self.stores.contains_key(&name) {
            return Err(GroundworkError::StoreAlreadyRegistered(name));
        }

        self.stores.insert(name, Box::new(store));
        Ok(())
    }

    /// Get a registered record store by name
    pub fn get_store<T>(&self, name: &str) -> Result<&T, GroundworkError>
    where
        T: RecordStore + Send + Sync + 'static,
    {
        self.stores
            .get(name)
            .and_then(|store| store.downcast_ref::<T>())
            .ok_or_else(|| GroundworkError::StoreNotFound(name.to_string()))
    }

    /// Get a mutable reference to a registered record store by name
    pub fn get_store_mut<T>(&mut self, name: &str) -> Result<&mut T, GroundworkError>
    where
        T: RecordStore + Send + Sync + 'static,
    {
        self.stores
            .get_mut(name)
            .and_then(|store| store.downcast_mut::<T>())
            .ok_or_else(|| GroundworkError::StoreNotFound(name.to_string()))
    }

    /// List all registered store names
    pub fn list_stores(&self) -> Vec<&String> {
        self.stores.keys().collect()
    }

    /// Remove a record store by name
    pub fn unregister_store(&mut self, name: &str) -> Result<(), GroundworkError> {
        self.stores
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| GroundworkError::StoreNotFound(name.to_string()))
    }

    /// The process-wide registry of linkable record types
    pub fn content_types(&self) -> &ContentTypeRegistry {
        &self.content_types
    }

    /// Mutable access to the content-type registry, for startup wiring
    pub fn content_types_mut(&mut self) -> &mut ContentTypeRegistry {
        &mut self.content_types
    }

    /// Check database connection health
    pub async fn health_check(&self) -> Result<(), GroundworkError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}
