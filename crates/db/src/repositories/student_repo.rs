//! Repository for the `alunos` table.

use alunos_core::student::STUDENT_ENTITY;
use alunos_core::types::DbId;
use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::student::{Student, StudentInput};
use crate::store::StudentStore;
use crate::DbPool;

/// Column list for `alunos` queries.
const COLUMNS: &str = "id, name, email, course, age";

/// PostgreSQL-backed [`StudentStore`].
///
/// Holds a handle to the shared pool; every statement acquires its own
/// connection and releases it on completion.
#[derive(Clone)]
pub struct PgStudentRepo {
    pool: DbPool,
}

impl PgStudentRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentStore for PgStudentRepo {
    async fn create(&self, input: &StudentInput) -> Result<Student, StoreError> {
        let query = format!(
            "INSERT INTO alunos (name, email, course, age) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        let student = sqlx::query_as::<_, Student>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.course)
            .bind(input.age)
            .fetch_one(&self.pool)
            .await?;
        Ok(student)
    }

    async fn get_by_id(&self, id: DbId) -> Result<Student, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM alunos WHERE id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound {
                entity: STUDENT_ENTITY,
                id,
            })
    }

    async fn list(&self) -> Result<Vec<Student>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM alunos ORDER BY id");
        let students = sqlx::query_as::<_, Student>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(students)
    }

    async fn update(&self, id: DbId, input: &StudentInput) -> Result<Student, StoreError> {
        let query = format!(
            "UPDATE alunos SET \
                 name = $2, \
                 email = $3, \
                 course = $4, \
                 age = $5 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.course)
            .bind(input.age)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound {
                entity: STUDENT_ENTITY,
                id,
            })
    }

    async fn delete(&self, id: DbId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM alunos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                entity: STUDENT_ENTITY,
                id,
            });
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}
