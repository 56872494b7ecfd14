use std::collections::BTreeMap;

use alunos_core::student::STUDENT_ENTITY;
use alunos_core::types::DbId;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::models::student::{Student, StudentInput};
use crate::store::StudentStore;

/// [`StudentStore`] kept entirely in process memory.
///
/// Ids are assigned sequentially from 1 and never reused, matching a
/// `BIGSERIAL` column.
#[derive(Default)]
pub struct InMemoryStudentStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    last_id: DbId,
    rows: BTreeMap<DbId, Student>,
}

impl InMemoryStudentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn not_found(id: DbId) -> StoreError {
    StoreError::NotFound {
        entity: STUDENT_ENTITY,
        id,
    }
}

#[async_trait]
impl StudentStore for InMemoryStudentStore {
    async fn create(&self, input: &StudentInput) -> Result<Student, StoreError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let student = Student::from_input(inner.last_id, input);
        inner.rows.insert(student.id, student.clone());
        Ok(student)
    }

    async fn get_by_id(&self, id: DbId) -> Result<Student, StoreError> {
        self.inner
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn list(&self) -> Result<Vec<Student>, StoreError> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn update(&self, id: DbId, input: &StudentInput) -> Result<Student, StoreError> {
        let mut inner = self.inner.write().await;
        let row = inner.rows.get_mut(&id).ok_or_else(|| not_found(id))?;
        *row = Student::from_input(id, input);
        Ok(row.clone())
    }

    async fn delete(&self, id: DbId) -> Result<(), StoreError> {
        self.inner
            .write()
            .await
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
