//! Service layer between the student handlers and the store.
//!
//! Calls are forwarded unchanged; `create` and `update` first check that
//! the payload carries a usable name so invalid input never reaches the
//! database.

use std::sync::Arc;

use alunos_core::student;
use alunos_core::types::DbId;
use alunos_db::models::student::{Student, StudentInput};
use alunos_db::StudentStore;

use crate::error::AppResult;

/// Student operations over an injected [`StudentStore`].
///
/// Cheaply cloneable; clones share the same store.
#[derive(Clone)]
pub struct StudentService {
    store: Arc<dyn StudentStore>,
}

impl StudentService {
    pub fn new(store: Arc<dyn StudentStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, input: &StudentInput) -> AppResult<Student> {
        validate_input(input)?;
        Ok(self.store.create(input).await?)
    }

    pub async fn get(&self, id: DbId) -> AppResult<Student> {
        Ok(self.store.get_by_id(id).await?)
    }

    pub async fn list(&self) -> AppResult<Vec<Student>> {
        Ok(self.store.list().await?)
    }

    pub async fn update(&self, id: DbId, input: &StudentInput) -> AppResult<Student> {
        validate_input(input)?;
        Ok(self.store.update(id, input).await?)
    }

    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        Ok(self.store.delete(id).await?)
    }

    /// Whether the backing store answers a connectivity check.
    pub async fn is_healthy(&self) -> bool {
        match self.store.ping().await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "Student store health check failed");
                false
            }
        }
    }
}

fn validate_input(input: &StudentInput) -> AppResult<()> {
    student::validate_name(&input.name)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use alunos_core::error::CoreError;
    use alunos_db::repositories::InMemoryStudentStore;
    use alunos_db::StoreError;
    use assert_matches::assert_matches;
    use async_trait::async_trait;

    use super::*;
    use crate::error::AppError;

    /// Counts every call that reaches the store.
    #[derive(Default)]
    struct CountingStore {
        inner: InMemoryStudentStore,
        calls: AtomicUsize,
    }

    impl CountingStore {
        fn hit(&self) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl StudentStore for CountingStore {
        async fn create(&self, input: &StudentInput) -> Result<Student, StoreError> {
            self.hit();
            self.inner.create(input).await
        }
        async fn get_by_id(&self, id: DbId) -> Result<Student, StoreError> {
            self.hit();
            self.inner.get_by_id(id).await
        }
        async fn list(&self) -> Result<Vec<Student>, StoreError> {
            self.hit();
            self.inner.list().await
        }
        async fn update(&self, id: DbId, input: &StudentInput) -> Result<Student, StoreError> {
            self.hit();
            self.inner.update(id, input).await
        }
        async fn delete(&self, id: DbId) -> Result<(), StoreError> {
            self.hit();
            self.inner.delete(id).await
        }
        async fn ping(&self) -> Result<(), StoreError> {
            Ok(())
        }
    }

    fn setup() -> (StudentService, Arc<CountingStore>) {
        let store = Arc::new(CountingStore::default());
        (StudentService::new(store.clone()), store)
    }

    fn input(name: &str) -> StudentInput {
        StudentInput {
            name: name.to_string(),
            email: None,
            course: None,
            age: None,
        }
    }

    #[tokio::test]
    async fn blank_name_is_rejected_before_the_store() {
        let (service, store) = setup();

        let err = service.create(&input("  ")).await.unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::Validation(_)));

        let err = service.update(1, &input("")).await.unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::Validation(_)));

        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let (service, _) = setup();
        let created = service.create(&input("Ana")).await.unwrap();

        let fetched = service.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.name, "Ana");
    }

    #[tokio::test]
    async fn missing_student_maps_to_not_found() {
        let (service, _) = setup();

        assert_matches!(
            service.get(5).await,
            Err(AppError::Core(CoreError::NotFound { id: 5, .. }))
        );
        assert_matches!(
            service.update(5, &input("Ana")).await,
            Err(AppError::Core(CoreError::NotFound { id: 5, .. }))
        );
        assert_matches!(
            service.delete(5).await,
            Err(AppError::Core(CoreError::NotFound { id: 5, .. }))
        );
    }

    #[tokio::test]
    async fn list_on_empty_store_is_empty() {
        let (service, _) = setup();
        assert!(service.list().await.unwrap().is_empty());
        assert!(service.is_healthy().await);
    }
}
