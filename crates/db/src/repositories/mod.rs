//! Typed repositories over the [`RecordStore`](crate::RecordStore).

pub mod show_repo;

pub use show_repo::ShowRepo;
