use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;
use marksheet_auth::{Identity, session};
use marksheet_core::AppError;

use crate::state::AppState;

/// The caller behind a request, taken from the `auth_token` cookie.
///
/// Rejects with 401 when the cookie is absent or the token does not verify.
/// The database is not consulted.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Identity);

impl AuthUser {
    pub fn identity(&self) -> &Identity {
        &self.0
    }

    pub fn user_id(&self) -> uuid::Uuid {
        self.0.user_id
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(&state.cookie_config.name).map(|c| c.value());

        session::resolve(token, &state.tokens)
            .map(AuthUser)
            .map_err(|e| e.to_app_error())
    }
}
