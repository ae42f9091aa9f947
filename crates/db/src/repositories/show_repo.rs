//! Repository for the `shows` collection.

use serde_json::Value;
use showtracker_core::show::{filter_min_episodes, NewShow, Show, ShowUpdate, SHOWS_COLLECTION};
use showtracker_core::types::DbId;

use crate::error::StoreError;
use crate::store::{Record, RecordStore};

/// Provides CRUD operations for shows.
pub struct ShowRepo;

impl ShowRepo {
    /// Insert a new show and return it as stored.
    pub async fn create(store: &dyn RecordStore, input: &NewShow) -> Result<Show, StoreError> {
        let record = store.create(SHOWS_COLLECTION, input.to_fields()).await;
        decode(record)
    }

    /// Find a show by its ID.
    pub async fn find_by_id(store: &dyn RecordStore, id: DbId) -> Result<Option<Show>, StoreError> {
        store
            .get_by_id(SHOWS_COLLECTION, id)
            .await
            .map(decode)
            .transpose()
    }

    /// List all shows in insertion order.
    pub async fn list(store: &dyn RecordStore) -> Result<Vec<Show>, StoreError> {
        store
            .get(SHOWS_COLLECTION)
            .await
            .into_iter()
            .map(decode)
            .collect()
    }

    /// List shows with `episodes_seen >= min_episodes`, in insertion order.
    pub async fn list_min_episodes(
        store: &dyn RecordStore,
        min_episodes: i64,
    ) -> Result<Vec<Show>, StoreError> {
        Ok(filter_min_episodes(Self::list(store).await?, min_episodes))
    }

    /// Apply a partial update. Returns `None` if no show has this ID.
    pub async fn update(
        store: &dyn RecordStore,
        id: DbId,
        input: &ShowUpdate,
    ) -> Result<Option<Show>, StoreError> {
        store
            .update_by_id(SHOWS_COLLECTION, id, input.to_fields())
            .await
            .map(decode)
            .transpose()
    }

    /// Delete a show. Returns `true` if a row was removed.
    pub async fn delete(store: &dyn RecordStore, id: DbId) -> bool {
        store.delete_by_id(SHOWS_COLLECTION, id).await
    }

    pub async fn count(store: &dyn RecordStore) -> usize {
        store.count(SHOWS_COLLECTION).await
    }
}

fn decode(record: Record) -> Result<Show, StoreError> {
    serde_json::from_value(Value::Object(record)).map_err(|source| StoreError::Decode {
        collection: SHOWS_COLLECTION.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;
    use crate::memory::MemoryStore;

    fn new_show(name: &str, episodes_seen: i64) -> NewShow {
        NewShow {
            name: name.into(),
            episodes_seen,
        }
    }

    #[tokio::test]
    async fn create_then_find() {
        let store = MemoryStore::new();
        let created = ShowRepo::create(&store, &new_show("Dark", 3)).await.unwrap();

        let found = ShowRepo::find_by_id(&store, created.id).await.unwrap();
        assert_eq!(found, Some(created));
        assert_eq!(ShowRepo::find_by_id(&store, 99).await.unwrap(), None);
    }

    #[tokio::test]
    async fn partial_update_keeps_other_fields() {
        let store = MemoryStore::new();
        let created = ShowRepo::create(&store, &new_show("Dark", 3)).await.unwrap();

        let update = ShowUpdate {
            name: None,
            episodes_seen: Some(5),
        };
        let updated = ShowRepo::update(&store, created.id, &update)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Dark");
        assert_eq!(updated.episodes_seen, 5);
    }

    #[tokio::test]
    async fn min_episodes_filter() {
        let store = MemoryStore::new();
        ShowRepo::create(&store, &new_show("a", 2)).await.unwrap();
        let b = ShowRepo::create(&store, &new_show("b", 5)).await.unwrap();

        assert_eq!(ShowRepo::list_min_episodes(&store, 3).await.unwrap(), vec![b]);
        assert_eq!(ShowRepo::list_min_episodes(&store, 0).await.unwrap().len(), 2);
        assert!(ShowRepo::list_min_episodes(&store, 6).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_twice() {
        let store = MemoryStore::new();
        let created = ShowRepo::create(&store, &new_show("a", 1)).await.unwrap();

        assert!(ShowRepo::delete(&store, created.id).await);
        assert!(!ShowRepo::delete(&store, created.id).await);
        assert_eq!(ShowRepo::count(&store).await, 0);
    }

    #[tokio::test]
    async fn malformed_record_is_decode_error() {
        let store = MemoryStore::new();
        store
            .seed(
                SHOWS_COLLECTION,
                vec![json!({"name": "no episodes"}).as_object().cloned().unwrap()],
            )
            .await;

        assert_matches!(
            ShowRepo::find_by_id(&store, 1).await,
            Err(StoreError::Decode { .. })
        );
        assert_matches!(ShowRepo::list(&store).await, Err(StoreError::Decode { .. }));
    }
}
