use crate::types::DbId;

/// Domain failures independent of transport and storage.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested entity does not exist.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Client input failed a field rule.
    #[error("Validation failed: {0}")]
    Validation(String),
}
