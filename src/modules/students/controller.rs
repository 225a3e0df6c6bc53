use axum::{Json, extract::State, http::StatusCode};
use marksheet_auth::{Action, Resource};
use marksheet_core::AppError;
use tracing::instrument;

use super::model::{CreateStudentDto, Student};
use super::service::StudentService;
use crate::middleware::auth::AuthUser;
use crate::middleware::role::ensure_allowed;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/students",
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Student created", body = Student),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Student with this USN or username already exists"),
        (status = 422, description = "Missing required fields")
    ),
    tag = "Students",
    security(("cookie_auth" = []))
)]
#[instrument(skip(state, auth_user), fields(user_id = %auth_user.user_id()))]
pub async fn create_student(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateStudentDto>,
) -> Result<(StatusCode, Json<Student>), AppError> {
    ensure_allowed(&auth_user, Action::Create, &Resource::Student)?;

    let student = StudentService::create_student(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

#[utoipa::path(
    get,
    path = "/api/students",
    responses(
        (status = 200, description = "All students ordered by name", body = Vec<Student>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Students",
    security(("cookie_auth" = []))
)]
#[instrument(skip(state, auth_user), fields(user_id = %auth_user.user_id()))]
pub async fn get_students(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<Student>>, AppError> {
    let students = StudentService::get_students(&state.db).await?;
    Ok(Json(students))
}
