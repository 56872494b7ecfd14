//! Handlers for the student CRUD endpoints.

use alunos_db::models::student::{Student, StudentInput};
use axum::extract::State;
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppResult, ErrorBody};
use crate::extract::{IdPath, JsonBody};
use crate::state::AppState;

/// GET /alunos
///
/// List every student, ordered by id.
#[utoipa::path(
    get,
    path = "/alunos",
    tag = "alunos",
    responses(
        (status = 200, description = "All students", body = [Student]),
        (status = 500, description = "Database failure", body = ErrorBody),
    )
)]
pub async fn list_students(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let students = state.students.list().await?;

    Ok(Json(students))
}

/// POST /alunos
///
/// Create a student. The id is assigned by the database.
#[utoipa::path(
    post,
    path = "/alunos",
    tag = "alunos",
    request_body = StudentInput,
    responses(
        (status = 201, description = "Student created", body = Student),
        (status = 400, description = "Malformed body or missing name", body = ErrorBody),
        (status = 500, description = "Database failure", body = ErrorBody),
    )
)]
pub async fn create_student(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<StudentInput>,
) -> AppResult<impl IntoResponse> {
    let student = state.students.create(&input).await?;

    tracing::info!(student_id = student.id, name = %student.name, "Student created");

    let location = format!("/alunos/{}", student.id);
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(student)))
}

/// GET /alunos/{id}
#[utoipa::path(
    get,
    path = "/alunos/{id}",
    tag = "alunos",
    params(("id" = i64, Path, description = "Student id")),
    responses(
        (status = 200, description = "The student", body = Student),
        (status = 400, description = "Id is not a number", body = ErrorBody),
        (status = 404, description = "No student with this id", body = ErrorBody),
        (status = 500, description = "Database failure", body = ErrorBody),
    )
)]
pub async fn get_student(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<impl IntoResponse> {
    let student = state.students.get(id).await?;

    Ok(Json(student))
}

/// PUT /alunos/{id}
///
/// Replace every attribute of an existing student.
#[utoipa::path(
    put,
    path = "/alunos/{id}",
    tag = "alunos",
    params(("id" = i64, Path, description = "Student id")),
    request_body = StudentInput,
    responses(
        (status = 200, description = "Student updated", body = Student),
        (status = 400, description = "Malformed body or missing name", body = ErrorBody),
        (status = 404, description = "No student with this id", body = ErrorBody),
        (status = 500, description = "Database failure", body = ErrorBody),
    )
)]
pub async fn update_student(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(input): JsonBody<StudentInput>,
) -> AppResult<impl IntoResponse> {
    let student = state.students.update(id, &input).await?;

    tracing::info!(student_id = id, "Student updated");

    Ok(Json(student))
}

/// DELETE /alunos/{id}
#[utoipa::path(
    delete,
    path = "/alunos/{id}",
    tag = "alunos",
    params(("id" = i64, Path, description = "Student id")),
    responses(
        (status = 204, description = "Student deleted"),
        (status = 400, description = "Id is not a number", body = ErrorBody),
        (status = 404, description = "No student with this id", body = ErrorBody),
        (status = 500, description = "Database failure", body = ErrorBody),
    )
)]
pub async fn delete_student(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<impl IntoResponse> {
    state.students.delete(id).await?;

    tracing::info!(student_id = id, "Student deleted");

    Ok(StatusCode::NO_CONTENT)
}
