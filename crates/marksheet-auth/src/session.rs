//! Turns the credential presented with a request into an [`Identity`].
//!
//! The transport layer extracts the raw `auth_token` cookie value and hands
//! it to [`resolve`]. The database is never consulted: the role embedded in
//! the signed token is trusted until the token expires.

use chrono::Utc;
use marksheet_core::AppError;
use tracing::debug;

use crate::identity::Identity;
use crate::jwt::{TokenService, VerificationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("no credential presented")]
    NoCredential,
    #[error("invalid credential: {0}")]
    Invalid(#[from] VerificationError),
}

impl AuthError {
    /// The 401 response for this failure. Every `Invalid` kind produces the
    /// same body.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::NoCredential => AppError::unauthorized("Unauthorized: No token provided"),
            AuthError::Invalid(_) => AppError::unauthorized("Unauthorized: Invalid or expired token"),
        }
    }
}

pub fn resolve(token: Option<&str>, tokens: &TokenService) -> Result<Identity, AuthError> {
    resolve_at(token, tokens, Utc::now().timestamp())
}

pub fn resolve_at(
    token: Option<&str>,
    tokens: &TokenService,
    now: i64,
) -> Result<Identity, AuthError> {
    let token = token
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(AuthError::NoCredential)?;

    tokens.verify_at(token, now).map_err(|kind| {
        debug!(reason = %kind, "Rejected session token");
        AuthError::Invalid(kind)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Role;
    use chrono::Duration;
    use marksheet_config::JwtConfig;
    use uuid::Uuid;

    fn tokens() -> TokenService {
        TokenService::new(&JwtConfig {
            secret: "session-test-secret-0123456789abcdef".to_string(),
            token_expiry: 3600,
        })
    }

    fn identity() -> Identity {
        Identity {
            user_id: Uuid::new_v4(),
            name: "Alan Turing".to_string(),
            email: "alan@example.com".to_string(),
            role: Role::Teacher,
        }
    }

    #[test]
    fn test_absent_credential() {
        let tokens = tokens();
        assert_eq!(resolve(None, &tokens).unwrap_err(), AuthError::NoCredential);
        assert_eq!(
            resolve(Some("  "), &tokens).unwrap_err(),
            AuthError::NoCredential
        );
    }

    #[test]
    fn test_valid_credential() {
        let tokens = tokens();
        let id = identity();
        let token = tokens.issue(&id).unwrap();
        assert_eq!(resolve(Some(&token), &tokens).unwrap(), id);
    }

    #[test]
    fn test_invalid_credentials_keep_their_kind() {
        let tokens = tokens();
        assert_eq!(
            resolve(Some("garbage"), &tokens).unwrap_err(),
            AuthError::Invalid(VerificationError::Malformed)
        );

        let issued = 1_000_000;
        let token = tokens
            .issue_at(&identity(), Duration::seconds(10), issued)
            .unwrap();
        assert_eq!(
            resolve_at(Some(&token), &tokens, issued + 10).unwrap_err(),
            AuthError::Invalid(VerificationError::Expired)
        );
    }

    #[test]
    fn test_invalid_kinds_share_one_response() {
        let malformed = AuthError::Invalid(VerificationError::Malformed).to_app_error();
        let expired = AuthError::Invalid(VerificationError::Expired).to_app_error();
        let forged = AuthError::Invalid(VerificationError::BadSignature).to_app_error();

        assert_eq!(malformed.public_message(), expired.public_message());
        assert_eq!(expired.public_message(), forged.public_message());
        assert_eq!(forged.status.as_u16(), 401);
        assert_eq!(AuthError::NoCredential.to_app_error().status.as_u16(), 401);
    }
}
