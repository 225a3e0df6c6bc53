use axum::{
    Json,
    extract::{Query, State},
};
use marksheet_auth::{Action, Resource};
use marksheet_core::AppError;
use tracing::instrument;

use super::model::{Mark, MarkFilterParams, MarkWithDetails, UpsertMarkDto};
use super::service::MarkService;
use crate::middleware::auth::AuthUser;
use crate::middleware::role::ensure_allowed;
use crate::modules::subjects::service::SubjectService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/marks",
    request_body = UpsertMarkDto,
    responses(
        (status = 200, description = "Mark created or replaced", body = Mark),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Only the subject's teacher or an admin may record marks"),
        (status = 404, description = "Student or subject not found"),
        (status = 422, description = "Mark out of range")
    ),
    tag = "Marks",
    security(("cookie_auth" = []))
)]
#[instrument(skip(state, auth_user), fields(user_id = %auth_user.user_id()))]
pub async fn upsert_mark(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<UpsertMarkDto>,
) -> Result<Json<Mark>, AppError> {
    let subject = SubjectService::find_subject(&state.db, dto.subject_id).await?;
    ensure_allowed(
        &auth_user,
        Action::Create,
        &Resource::Mark {
            subject_teacher_id: subject.teacher_id,
        },
    )?;

    if !MarkService::student_exists(&state.db, dto.student_id).await? {
        return Err(AppError::not_found(anyhow::anyhow!("Student not found")));
    }

    let mark = MarkService::upsert_mark(&state.db, dto).await?;
    Ok(Json(mark))
}

#[utoipa::path(
    get,
    path = "/api/marks",
    params(MarkFilterParams),
    responses(
        (status = 200, description = "Marks ordered by student name", body = Vec<MarkWithDetails>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Marks",
    security(("cookie_auth" = []))
)]
#[instrument(skip(state, auth_user), fields(user_id = %auth_user.user_id()))]
pub async fn get_marks(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(filters): Query<MarkFilterParams>,
) -> Result<Json<Vec<MarkWithDetails>>, AppError> {
    let marks = MarkService::get_marks(&state.db, filters).await?;
    Ok(Json(marks))
}
