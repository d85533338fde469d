//! Traits for record operations
//!
//! This module contains the traits that define the interface for persisted
//! records and the lifecycle mixins concrete record types compose.

pub mod content_ref;
pub mod core;
pub mod metadata;
pub mod soft_delete;
pub mod timestamped;

// Re-export all public items for convenience
pub use content_ref::{ContentRef, ContentResolver, ContentTypeRegistry, Linked, StoreResolver};
pub use metadata::{RecordExecutor, RecordMetadata};
pub use self::core::RecordStore;
pub use soft_delete::{SoftDelete, SoftDeletable};
pub use timestamped::Timestamped;
