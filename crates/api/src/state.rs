use crate::services::StudentService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the store sits behind an `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Student operations, backed by the store chosen at startup.
    pub students: StudentService,
}
