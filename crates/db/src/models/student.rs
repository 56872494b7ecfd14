//! Student model and DTO.

use alunos_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A row from the `alunos` table.
///
/// Absent optional attributes are left out of the JSON output.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, ToSchema)]
pub struct Student {
    #[schema(value_type = i64, example = 1)]
    pub id: DbId,
    #[schema(example = "Ana")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
}

impl Student {
    /// Build the row that results from persisting `input` under `id`.
    pub fn from_input(id: DbId, input: &StudentInput) -> Self {
        Self {
            id,
            name: input.name.clone(),
            email: input.email.clone(),
            course: input.course.clone(),
            age: input.age,
        }
    }
}

/// Payload for creating or replacing a student. Any `id` sent by the
/// client is ignored.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct StudentInput {
    #[schema(example = "Ana")]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omits_absent_optional_fields() {
        let student = Student {
            id: 1,
            name: "Ana".to_string(),
            email: None,
            course: None,
            age: None,
        };
        let json = serde_json::to_value(&student).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "name": "Ana"}));
    }

    #[test]
    fn input_ignores_client_id_and_unknown_fields() {
        let input: StudentInput =
            serde_json::from_str(r#"{"id": 99, "name": "Bia", "age": 20, "nickname": "b"}"#)
                .unwrap();
        assert_eq!(input.name, "Bia");
        assert_eq!(input.age, Some(20));
        assert_eq!(input.email, None);
    }

    #[test]
    fn input_requires_name() {
        let err = serde_json::from_str::<StudentInput>(r#"{"course": "Math"}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `name`"));
    }
}
