use std::path::PathBuf;

/// Errors raised by the record store and its repositories.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A stored record does not have the shape its repository expects.
    #[error("Record in '{collection}' could not be decoded: {source}")]
    Decode {
        collection: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read seed file {path}: {source}")]
    SeedIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Seed file is malformed: {0}")]
    SeedFormat(String),
}
