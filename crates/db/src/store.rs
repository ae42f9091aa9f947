use async_trait::async_trait;
use serde_json::{Map, Value};
use showtracker_core::types::DbId;

/// A stored record: field name to value, always including `id`.
pub type Record = Map<String, Value>;

/// Named collections of records addressed by a store-assigned integer `id`.
///
/// Implementations must serialize mutations so that ids stay unique and a
/// read issued after a write observes it.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert `fields` as a new record and return it with its assigned `id`.
    async fn create(&self, collection: &str, fields: Record) -> Record;

    async fn get_by_id(&self, collection: &str, id: DbId) -> Option<Record>;

    /// All records of `collection` in insertion order.
    async fn get(&self, collection: &str) -> Vec<Record>;

    /// Replace the given keys of record `id`. An `id` key in `partial` is
    /// ignored. Returns the updated record, or `None` if it does not exist.
    async fn update_by_id(&self, collection: &str, id: DbId, partial: Record) -> Option<Record>;

    /// Remove record `id`. Returns `false` if it did not exist.
    async fn delete_by_id(&self, collection: &str, id: DbId) -> bool;

    async fn count(&self, collection: &str) -> usize;
}
