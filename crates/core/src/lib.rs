//! Domain types for the show tracker: the `Show` record, request-body
//! validation, and the uniform response envelope.

pub mod envelope;
pub mod error;
pub mod show;
pub mod types;
