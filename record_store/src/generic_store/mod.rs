//! Generic store implementations
//!
//! This module provides the generic PostgreSQL store and its trait
//! implementations.

pub mod core;
pub mod record_store;
pub mod soft_deletable;

pub use self::core::GenericStore;
pub use soft_deletable::bulk_flag_sql;

use crate::id_type::HasUniversalId;

/// Helper function to efficiently convert any ID to UniversalId and then to string
#[inline]
pub(crate) fn id_to_string<ID: HasUniversalId>(id: ID) -> String {
    id.universal_id().to_string_fast()
}
