use marksheet_auth::{Identity, Role};
use marksheet_config::cookie::AUTH_COOKIE_NAME;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{
    LoginRequest, LoginResponse, MessageResponse, RegisterRequestDto, RegisterResponse,
    SessionResponse, User,
};
use crate::modules::marks::model::{
    Mark, MarkWithDetails, StudentSummary, SubjectSummary, UpsertMarkDto,
};
use crate::modules::students::model::{CreateStudentDto, Student};
use crate::modules::subjects::model::{
    CreateSubjectDto, Subject, SubjectWithTeacher, TeacherSummary, UpdateSubjectDto,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::logout_user,
        crate::modules::auth::controller::get_session,
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::get_students,
        crate::modules::subjects::controller::create_subject,
        crate::modules::subjects::controller::get_subjects,
        crate::modules::subjects::controller::get_subject_by_id,
        crate::modules::subjects::controller::update_subject,
        crate::modules::subjects::controller::delete_subject,
        crate::modules::marks::controller::upsert_mark,
        crate::modules::marks::controller::get_marks,
    ),
    components(
        schemas(
            Role,
            Identity,
            User,
            RegisterRequestDto,
            RegisterResponse,
            LoginRequest,
            LoginResponse,
            SessionResponse,
            MessageResponse,
            ErrorResponse,
            Student,
            CreateStudentDto,
            Subject,
            SubjectWithTeacher,
            TeacherSummary,
            CreateSubjectDto,
            UpdateSubjectDto,
            Mark,
            MarkWithDetails,
            StudentSummary,
            SubjectSummary,
            UpsertMarkDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login and the session cookie"),
        (name = "Students", description = "Student registry"),
        (name = "Subjects", description = "Subjects owned by teachers"),
        (name = "Marks", description = "One mark per student per subject")
    ),
    info(
        title = "Marksheet API",
        version = "0.1.0",
        description = "Marks management REST API built with Rust, Axum, and PostgreSQL. Sessions are carried in an HttpOnly `auth_token` cookie.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "cookie_auth",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(AUTH_COOKIE_NAME))),
            )
        }
    }
}
