use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};
use cookie::time::Duration;
use marksheet_config::CookieConfig;
use marksheet_core::AppError;
use tracing::instrument;
use utoipa::ToSchema;

use super::model::{
    LoginRequest, LoginResponse, MessageResponse, RegisterRequestDto, RegisterResponse,
    SessionResponse,
};
use super::service::AuthService;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

fn session_cookie(config: &CookieConfig, token: String, max_age: i64) -> Cookie<'static> {
    Cookie::build((config.name.clone(), token))
        .http_only(true)
        .secure(config.secure)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(Duration::seconds(max_age))
        .build()
}

/// Register a new teacher account
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequestDto,
    responses(
        (status = 201, description = "User registered successfully", body = RegisterResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 409, description = "Email already in use", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterRequestDto>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let user = AuthService::register_user(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            user,
        }),
    ))
}

/// Log in and receive the `auth_token` session cookie
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful; sets the auth_token cookie", body = LoginResponse),
        (status = 401, description = "Invalid email or password", body = ErrorResponse),
        (status = 422, description = "Missing required fields", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, jar, dto))]
pub async fn login_user(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), AppError> {
    let (user, token) = AuthService::login_user(&state.db, dto, &state.tokens).await?;
    let cookie = session_cookie(&state.cookie_config, token, state.cookie_config.max_age);

    Ok((
        jar.add(cookie),
        Json(LoginResponse {
            message: "Login successful".to_string(),
            user,
        }),
    ))
}

/// Clear the session cookie
///
/// Tokens are stateless, so this only asks the client to drop its copy.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Logout successful", body = MessageResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, jar))]
pub async fn logout_user(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    let cookie = session_cookie(&state.cookie_config, String::new(), 0);
    (
        jar.add(cookie),
        Json(MessageResponse {
            message: "Logout successful".to_string(),
        }),
    )
}

/// Current session identity
#[utoipa::path(
    get,
    path = "/api/auth/session",
    responses(
        (status = 200, description = "Identity carried by the session token", body = SessionResponse),
        (status = 401, description = "No token, or an invalid or expired token", body = ErrorResponse)
    ),
    tag = "Authentication",
    security(("cookie_auth" = []))
)]
#[instrument(skip(auth_user), fields(user_id = %auth_user.user_id()))]
pub async fn get_session(auth_user: AuthUser) -> Json<SessionResponse> {
    Json(SessionResponse { user: auth_user.0 })
}
