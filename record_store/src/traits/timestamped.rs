//! Timestamp mixin
//!
//! Record types composing this capability carry two timezone-aware columns,
//! `added` and `updated`, both set at construction. Wiring
//! [`RecordMetadata::before_save`](crate::traits::RecordMetadata::before_save)
//! to [`touch`](Timestamped::touch) makes every single-record persist refresh
//! `updated`; `added` never changes after construction, so `updated >= added`
//! holds for the record's whole life.

use chrono::{DateTime, Utc};

/// Mixin for records that track creation/update instants
pub trait Timestamped {
    /// Instant the record was created
    fn added(&self) -> DateTime<Utc>;

    /// Instant the record was last persisted
    fn updated(&self) -> DateTime<Utc>;

    /// Overwrite the `updated` column value
    fn set_updated(&mut self, at: DateTime<Utc>);

    /// Refresh `updated` to the current instant; called from the persist
    /// hook on every single-record create or update
    fn touch(&mut self) {
        self.set_updated(Utc::now());
    }
}
