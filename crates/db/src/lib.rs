//! Record store for the show tracker.
//!
//! [`RecordStore`] is the seam the HTTP layer depends on; [`MemoryStore`]
//! is the in-process implementation. Typed access goes through the
//! repositories in [`repositories`].

pub mod error;
pub mod memory;
pub mod repositories;
pub mod seed;
pub mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use store::{Record, RecordStore};

