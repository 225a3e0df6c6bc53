//! Marks: at most one per (student, subject).

use marksheet_core::serde::deserialize_lenient_f64;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Mark {
    pub id: Uuid,
    pub value: f64,
    pub student_id: Uuid,
    pub subject_id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Create or replace the mark of a student in a subject.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpsertMarkDto {
    #[serde(alias = "studentId")]
    pub student_id: Uuid,
    #[serde(alias = "subjectId")]
    pub subject_id: Uuid,
    #[serde(deserialize_with = "deserialize_lenient_f64")]
    #[validate(range(min = 0.0, max = 100.0, message = "Mark must be between 0 and 100"))]
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StudentSummary {
    pub id: Uuid,
    pub name: String,
    pub usn: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SubjectSummary {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub credits: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MarkWithDetails {
    #[serde(flatten)]
    pub mark: Mark,
    pub student: StudentSummary,
    pub subject: SubjectSummary,
}

/// Flat row of `marks JOIN students JOIN subjects`.
#[derive(Debug, FromRow)]
pub struct MarkWithDetailsRow {
    #[sqlx(flatten)]
    pub mark: Mark,
    pub student_name: String,
    pub student_usn: String,
    pub student_username: String,
    pub subject_name: String,
    pub subject_code: String,
    pub subject_credits: i32,
}

impl From<MarkWithDetailsRow> for MarkWithDetails {
    fn from(row: MarkWithDetailsRow) -> Self {
        let student = StudentSummary {
            id: row.mark.student_id,
            name: row.student_name,
            usn: row.student_usn,
            username: row.student_username,
        };
        let subject = SubjectSummary {
            id: row.mark.subject_id,
            name: row.subject_name,
            code: row.subject_code,
            credits: row.subject_credits,
        };
        Self {
            mark: row.mark,
            student,
            subject,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct MarkFilterParams {
    #[serde(default, alias = "subjectId")]
    pub subject_id: Option<Uuid>,
    #[serde(default, alias = "studentId")]
    pub student_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> UpsertMarkDto {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_value_range() {
        let student = Uuid::new_v4();
        let subject = Uuid::new_v4();
        for (value, valid) in [("0", true), ("100", true), ("55.5", true), ("-1", false), ("100.5", false)] {
            let dto = parse(&format!(
                r#"{{"student_id":"{}","subject_id":"{}","value":{}}}"#,
                student, subject, value
            ));
            assert_eq!(dto.validate().is_ok(), valid, "value {}", value);
        }
    }

    #[test]
    fn test_accepts_camel_case_and_string_value() {
        let student = Uuid::new_v4();
        let subject = Uuid::new_v4();
        let dto = parse(&format!(
            r#"{{"studentId":"{}","subjectId":"{}","value":"70"}}"#,
            student, subject
        ));
        assert_eq!(dto.student_id, student);
        assert_eq!(dto.subject_id, subject);
        assert_eq!(dto.value, 70.0);
    }
}
