//! Subjects and their owning teacher.

use marksheet_core::serde::{
    deserialize_lenient_i32, deserialize_optional_lenient_i32, deserialize_optional_trimmed_string,
    deserialize_trimmed_string,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Subject {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub credits: i32,
    /// Owning teacher
    pub teacher_id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TeacherSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// A subject joined with its teacher, as returned by list and detail views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SubjectWithTeacher {
    #[serde(flatten)]
    pub subject: Subject,
    pub teacher: TeacherSummary,
}

/// Flat row of `subjects JOIN users`.
#[derive(Debug, FromRow)]
pub struct SubjectWithTeacherRow {
    #[sqlx(flatten)]
    pub subject: Subject,
    pub teacher_name: String,
    pub teacher_email: String,
}

impl From<SubjectWithTeacherRow> for SubjectWithTeacher {
    fn from(row: SubjectWithTeacherRow) -> Self {
        let teacher = TeacherSummary {
            id: row.subject.teacher_id,
            name: row.teacher_name,
            email: row.teacher_email,
        };
        Self {
            subject: row.subject,
            teacher,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateSubjectDto {
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, max = 255, message = "name must be 1 to 255 characters"))]
    pub name: String,
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, max = 64, message = "code must be 1 to 64 characters"))]
    pub code: String,
    #[serde(deserialize_with = "deserialize_lenient_i32")]
    #[validate(range(min = 0, message = "Credits must be a non-negative number"))]
    pub credits: i32,
    /// Owner of the new subject. Required when an admin creates a subject;
    /// a teacher may omit it or pass their own id.
    #[serde(default, alias = "teacherId")]
    pub teacher_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateSubjectDto {
    #[serde(default, deserialize_with = "deserialize_optional_trimmed_string")]
    #[validate(length(min = 1, max = 255, message = "name must be 1 to 255 characters"))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_trimmed_string")]
    #[validate(length(min = 1, max = 64, message = "code must be 1 to 64 characters"))]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_lenient_i32")]
    #[validate(range(min = 0, message = "Credits must be a non-negative number"))]
    pub credits: Option<i32>,
}

impl UpdateSubjectDto {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.code.is_none() && self.credits.is_none()
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct SubjectFilterParams {
    /// Only subjects owned by this teacher
    #[serde(default, alias = "teacherId")]
    pub teacher_id: Option<Uuid>,
}
