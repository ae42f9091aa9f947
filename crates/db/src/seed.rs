//! Initial data for a fresh store.
//!
//! A seed document maps collection names to arrays of records:
//!
//! ```json
//! { "shows": [ { "name": "Game of Thrones", "episodes_seen": 0 } ] }
//! ```
//!
//! Seed records get fresh ids when inserted; any `id` in the file is ignored.

use std::path::Path;

use serde_json::Value;
use showtracker_core::show::{NewShow, SHOWS_COLLECTION};

use crate::error::StoreError;
use crate::memory::MemoryStore;
use crate::store::Record;

/// Collections parsed from a seed document.
pub type SeedData = Vec<(String, Vec<Record>)>;

/// Parse a seed document.
pub fn parse_seed(text: &str) -> Result<SeedData, StoreError> {
    let document: Value =
        serde_json::from_str(text).map_err(|e| StoreError::SeedFormat(e.to_string()))?;
    let Value::Object(collections) = document else {
        return Err(StoreError::SeedFormat(
            "top level must be an object of collections".into(),
        ));
    };

    let mut seed = Vec::with_capacity(collections.len());
    for (name, records) in collections {
        let Value::Array(records) = records else {
            return Err(StoreError::SeedFormat(format!(
                "collection '{name}' must be an array"
            )));
        };
        let records = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| match record {
                Value::Object(fields) => Ok(fields),
                _ => Err(StoreError::SeedFormat(format!(
                    "record {index} of '{name}' must be an object"
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;
        if name == SHOWS_COLLECTION {
            check_shows(&records)?;
        }
        seed.push((name, records));
    }
    Ok(seed)
}

/// Every seeded show must carry the fields a created show would.
fn check_shows(records: &[Record]) -> Result<(), StoreError> {
    for (index, record) in records.iter().enumerate() {
        serde_json::from_value::<NewShow>(Value::Object(record.clone())).map_err(|e| {
            StoreError::SeedFormat(format!("record {index} of '{SHOWS_COLLECTION}': {e}"))
        })?;
    }
    Ok(())
}

/// Read and parse the seed document at `path`.
pub async fn load_seed_file(path: &Path) -> Result<SeedData, StoreError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| StoreError::SeedIo {
            path: path.to_path_buf(),
            source,
        })?;
    parse_seed(&text)
}

/// Insert every collection of `seed` into `store`. Returns the record count.
pub async fn apply_seed(store: &MemoryStore, seed: SeedData) -> usize {
    let mut total = 0;
    for (collection, records) in seed {
        total += store.seed(&collection, records).await;
    }
    total
}
