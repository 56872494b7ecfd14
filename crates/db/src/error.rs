use alunos_core::types::DbId;

/// Failure modes of a [`StudentStore`](crate::StudentStore) call.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No row matched the given id.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Driver, connection or constraint failure.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
