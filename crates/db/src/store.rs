//! The persistence contract consumed by the service layer.

use alunos_core::types::DbId;
use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::student::{Student, StudentInput};

/// CRUD operations over students.
///
/// Each call is a single statement; there are no transactions or retries.
/// Implementations must be safe to share between concurrent requests.
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// Insert a student and return it with its generated id.
    async fn create(&self, input: &StudentInput) -> Result<Student, StoreError>;

    /// Fetch one student. `NotFound` when no row matches.
    async fn get_by_id(&self, id: DbId) -> Result<Student, StoreError>;

    /// All students ordered by id. Empty when the table is empty.
    async fn list(&self) -> Result<Vec<Student>, StoreError>;

    /// Replace every attribute of an existing student.
    async fn update(&self, id: DbId, input: &StudentInput) -> Result<Student, StoreError>;

    /// Remove a student. `NotFound` when no row was affected.
    async fn delete(&self, id: DbId) -> Result<(), StoreError>;

    /// Check that the backing storage is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
