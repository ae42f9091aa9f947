use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// A caller handed the envelope builder something it cannot render.
    /// Always a programming error, never user input.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
