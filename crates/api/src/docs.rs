use alunos_db::models::student::{Student, StudentInput};
use utoipa::OpenApi;

use crate::error::ErrorBody;
use crate::handlers::students;
use crate::routes::health::{self, HealthResponse};

/// OpenAPI document assembled from the handler annotations.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Student Management API",
        version = "2.0",
        description = "CRUD operations over student records."
    ),
    paths(
        students::list_students,
        students::create_student,
        students::get_student,
        students::update_student,
        students::delete_student,
        health::health_check,
    ),
    components(schemas(Student, StudentInput, ErrorBody, HealthResponse)),
    tags(
        (name = "alunos", description = "Student records"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;
