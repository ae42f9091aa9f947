use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use showtracker_core::types::DbId;
use tokio::sync::RwLock;

use crate::store::{Record, RecordStore};

/// One named collection. Ids come from a per-collection counter and are
/// never handed out twice, even after deletes.
#[derive(Debug, Default)]
struct Collection {
    last_id: DbId,
    records: Vec<Record>,
}

impl Collection {
    fn position(&self, id: DbId) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record_id(record) == Some(id))
    }
}

fn record_id(record: &Record) -> Option<DbId> {
    record.get("id").and_then(Value::as_i64)
}

/// In-memory [`RecordStore`].
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across the application. Every mutation runs under the write
/// lock, so ids stay unique and reads observe completed writes.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Collection>>,
}

impl MemoryStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert each of `records` into `collection`, assigning fresh ids.
    /// Any `id` already present in a seed record is replaced.
    pub async fn seed(&self, collection: &str, records: Vec<Record>) -> usize {
        let mut collections = self.collections.write().await;
        let target = collections.entry(collection.to_string()).or_default();
        let count = records.len();
        for fields in records {
            insert(target, fields);
        }
        tracing::debug!(collection, count, "Seeded collection");
        count
    }
}

fn insert(collection: &mut Collection, mut fields: Record) -> Record {
    collection.last_id += 1;
    fields.insert("id".into(), Value::from(collection.last_id));
    collection.records.push(fields.clone());
    fields
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn create(&self, collection: &str, fields: Record) -> Record {
        let mut collections = self.collections.write().await;
        insert(collections.entry(collection.to_string()).or_default(), fields)
    }

    async fn get_by_id(&self, collection: &str, id: DbId) -> Option<Record> {
        let collections = self.collections.read().await;
        let target = collections.get(collection)?;
        target
            .position(id)
            .map(|index| target.records[index].clone())
    }

    async fn get(&self, collection: &str) -> Vec<Record> {
        self.collections
            .read()
            .await
            .get(collection)
            .map(|target| target.records.clone())
            .unwrap_or_default()
    }

    async fn update_by_id(&self, collection: &str, id: DbId, partial: Record) -> Option<Record> {
        let mut collections = self.collections.write().await;
        let target = collections.get_mut(collection)?;
        let index = target.position(id)?;
        let record = &mut target.records[index];
        for (key, value) in partial {
            if key != "id" {
                record.insert(key, value);
            }
        }
        Some(record.clone())
    }

    async fn delete_by_id(&self, collection: &str, id: DbId) -> bool {
        let mut collections = self.collections.write().await;
        let Some(target) = collections.get_mut(collection) else {
            return false;
        };
        match target.position(id) {
            Some(index) => {
                // `remove`, not `swap_remove`: listing order is insertion order.
                target.records.remove(index);
                true
            }
            None => false,
        }
    }

    async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, |target| target.records.len())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;

    fn fields(value: Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let store = MemoryStore::new();
        let first = store.create("shows", fields(json!({"name": "a"}))).await;
        let second = store.create("shows", fields(json!({"name": "b"}))).await;

        assert_eq!(first["id"], 1);
        assert_eq!(second["id"], 2);
        assert_eq!(store.get_by_id("shows", 2).await.unwrap()["name"], "b");
    }

    #[tokio::test]
    async fn collections_are_independent() {
        let store = MemoryStore::new();
        store.create("shows", fields(json!({"name": "a"}))).await;
        let user = store.create("users", fields(json!({"name": "u"}))).await;

        assert_eq!(user["id"], 1);
        assert_eq!(store.count("shows").await, 1);
        assert_eq!(store.count("users").await, 1);
        assert!(store.get("missing").await.is_empty());
        assert!(store.get_by_id("missing", 1).await.is_none());
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryStore::new();
        store.create("shows", fields(json!({"name": "a"}))).await;
        store.create("shows", fields(json!({"name": "b"}))).await;
        assert!(store.delete_by_id("shows", 2).await);

        let next = store.create("shows", fields(json!({"name": "c"}))).await;
        assert_eq!(next["id"], 3);
    }

    #[tokio::test]
    async fn update_merges_and_keeps_id() {
        let store = MemoryStore::new();
        store
            .create("shows", fields(json!({"name": "a", "episodes_seen": 1})))
            .await;

        let updated = store
            .update_by_id("shows", 1, fields(json!({"episodes_seen": 5, "id": 42})))
            .await
            .unwrap();

        assert_eq!(updated, fields(json!({"name": "a", "episodes_seen": 5, "id": 1})));
        assert_eq!(store.get_by_id("shows", 1).await.unwrap(), updated);
        assert!(store.get_by_id("shows", 42).await.is_none());
    }

    #[tokio::test]
    async fn update_and_delete_unknown_id() {
        let store = MemoryStore::new();
        assert!(store
            .update_by_id("shows", 7, fields(json!({"name": "x"})))
            .await
            .is_none());
        assert!(!store.delete_by_id("shows", 7).await);
    }

    #[tokio::test]
    async fn delete_preserves_order() {
        let store = MemoryStore::new();
        for name in ["a", "b", "c", "d"] {
            store.create("shows", fields(json!({"name": name}))).await;
        }
        store.delete_by_id("shows", 2).await;

        let names: Vec<Value> = store
            .get("shows")
            .await
            .into_iter()
            .map(|record| record["name"].clone())
            .collect();
        assert_eq!(names, vec![json!("a"), json!("c"), json!("d")]);
    }

    #[tokio::test]
    async fn seed_replaces_existing_ids() {
        let store = MemoryStore::new();
        let seeded = store
            .seed(
                "shows",
                vec![fields(json!({"id": 10, "name": "a"})), fields(json!({"name": "b"}))],
            )
            .await;

        assert_eq!(seeded, 2);
        assert_eq!(store.get_by_id("shows", 1).await.unwrap()["name"], "a");
        assert!(store.get_by_id("shows", 10).await.is_none());
    }

    #[tokio::test]
    async fn concurrent_creates_get_unique_ids() {
        let store = Arc::new(MemoryStore::new());
        let handles: Vec<_> = (0..32)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    store.create("shows", fields(json!({"name": i}))).await["id"]
                        .as_i64()
                        .unwrap()
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=32).collect::<Vec<_>>());
    }
}
