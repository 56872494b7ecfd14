//! Repository layer.
//!
//! [`PgStudentRepo`] is the production store; [`InMemoryStudentStore`] keeps
//! rows in process memory and stands in for PostgreSQL in tests.

pub mod memory_student_store;
pub mod student_repo;

pub use memory_student_store::InMemoryStudentStore;
pub use student_repo::PgStudentRepo;
