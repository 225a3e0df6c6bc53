use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use marksheet_auth::{Action, Resource, Role};
use marksheet_core::AppError;
use tracing::instrument;
use uuid::Uuid;

use super::model::{
    CreateSubjectDto, Subject, SubjectFilterParams, SubjectWithTeacher, UpdateSubjectDto,
};
use super::service::SubjectService;
use crate::middleware::auth::AuthUser;
use crate::middleware::role::ensure_allowed;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Owner of a subject being created: the caller unless `teacher_id` says
/// otherwise. Admins have no implicit owner.
fn proposed_owner(auth_user: &AuthUser, dto: &CreateSubjectDto) -> Result<Uuid, AppError> {
    match (auth_user.identity().role, dto.teacher_id) {
        (_, Some(teacher_id)) => Ok(teacher_id),
        (Role::Teacher, None) => Ok(auth_user.user_id()),
        (Role::Admin, None) => Err(AppError::unprocessable(anyhow::anyhow!(
            "teacher_id is required when an admin creates a subject"
        ))),
    }
}

#[utoipa::path(
    post,
    path = "/api/subjects",
    request_body = CreateSubjectDto,
    responses(
        (status = 201, description = "Subject created", body = Subject),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "A teacher may only create subjects they own"),
        (status = 404, description = "Teacher not found (the owner must have the TEACHER role)"),
        (status = 409, description = "Subject with this code already exists"),
        (status = 422, description = "Validation error")
    ),
    tag = "Subjects",
    security(("cookie_auth" = []))
)]
#[instrument(skip(state, auth_user), fields(user_id = %auth_user.user_id()))]
pub async fn create_subject(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateSubjectDto>,
) -> Result<(StatusCode, Json<Subject>), AppError> {
    let teacher_id = proposed_owner(&auth_user, &dto)?;
    ensure_allowed(&auth_user, Action::Create, &Resource::Subject { teacher_id })?;

    if !SubjectService::teacher_exists(&state.db, teacher_id).await? {
        return Err(AppError::not_found(anyhow::anyhow!("Teacher not found")));
    }

    let subject = SubjectService::create_subject(&state.db, teacher_id, dto).await?;
    Ok((StatusCode::CREATED, Json(subject)))
}

#[utoipa::path(
    get,
    path = "/api/subjects",
    params(SubjectFilterParams),
    responses(
        (status = 200, description = "Subjects ordered by name", body = Vec<SubjectWithTeacher>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Subjects",
    security(("cookie_auth" = []))
)]
#[instrument(skip(state, auth_user), fields(user_id = %auth_user.user_id()))]
pub async fn get_subjects(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(filters): Query<SubjectFilterParams>,
) -> Result<Json<Vec<SubjectWithTeacher>>, AppError> {
    let subjects = SubjectService::get_subjects(&state.db, filters).await?;
    Ok(Json(subjects))
}

#[utoipa::path(
    get,
    path = "/api/subjects/{id}",
    params(("id" = Uuid, Path, description = "Subject ID")),
    responses(
        (status = 200, description = "Subject with its teacher", body = SubjectWithTeacher),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Subject not found")
    ),
    tag = "Subjects",
    security(("cookie_auth" = []))
)]
#[instrument(skip(state, auth_user), fields(user_id = %auth_user.user_id()))]
pub async fn get_subject_by_id(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<SubjectWithTeacher>, AppError> {
    let subject = SubjectService::get_subject_by_id(&state.db, id).await?;
    Ok(Json(subject))
}

#[utoipa::path(
    patch,
    path = "/api/subjects/{id}",
    params(("id" = Uuid, Path, description = "Subject ID")),
    request_body = UpdateSubjectDto,
    responses(
        (status = 200, description = "Subject updated", body = Subject),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Only the owning teacher or an admin may update"),
        (status = 404, description = "Subject not found"),
        (status = 409, description = "Subject with this code already exists")
    ),
    tag = "Subjects",
    security(("cookie_auth" = []))
)]
#[instrument(skip(state, auth_user), fields(user_id = %auth_user.user_id()))]
pub async fn update_subject(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateSubjectDto>,
) -> Result<Json<Subject>, AppError> {
    let subject = SubjectService::find_subject(&state.db, id).await?;
    ensure_allowed(
        &auth_user,
        Action::Update,
        &Resource::Subject {
            teacher_id: subject.teacher_id,
        },
    )?;

    if dto.is_empty() {
        return Ok(Json(subject));
    }

    let subject = SubjectService::update_subject(&state.db, id, dto).await?;
    Ok(Json(subject))
}

#[utoipa::path(
    delete,
    path = "/api/subjects/{id}",
    params(("id" = Uuid, Path, description = "Subject ID")),
    responses(
        (status = 200, description = "Deleted subject; its marks are removed too", body = Subject),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Only the owning teacher or an admin may delete"),
        (status = 404, description = "Subject not found")
    ),
    tag = "Subjects",
    security(("cookie_auth" = []))
)]
#[instrument(skip(state, auth_user), fields(user_id = %auth_user.user_id()))]
pub async fn delete_subject(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Subject>, AppError> {
    let subject = SubjectService::find_subject(&state.db, id).await?;
    ensure_allowed(
        &auth_user,
        Action::Delete,
        &Resource::Subject {
            teacher_id: subject.teacher_id,
        },
    )?;

    let deleted = SubjectService::delete_subject(&state.db, id).await?;
    Ok(Json(deleted))
}
