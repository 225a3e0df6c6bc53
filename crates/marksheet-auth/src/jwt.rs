//! Token issuance and verification.
//!
//! Tokens are HS256 JWTs over [`Claims`]. They are stateless: there is no
//! server-side revocation list, so a token stays valid until `exp` unless
//! the client discards it.
//!
//! Expiry is checked here rather than by `jsonwebtoken` so that it is
//! inclusive (`now >= exp` is expired), has no leeway, and can be evaluated
//! against an explicit clock.
//!
//! # Example
//!
//! ```ignore
//! use marksheet_auth::TokenService;
//! use marksheet_config::JwtConfig;
//!
//! let tokens = TokenService::new(&JwtConfig::from_env()?);
//! let token = tokens.issue(&identity)?;
//! let same = tokens.verify(&token)?;
//! assert_eq!(same, identity);
//! ```

use std::collections::HashSet;

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use marksheet_config::JwtConfig;
use marksheet_core::AppError;

use crate::claims::{Claims, MissingClaim};
use crate::identity::Identity;

/// Why a presented token was not accepted.
///
/// The variants are kept apart for logging; callers answer all of them with
/// the same rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum VerificationError {
    #[error("token is malformed")]
    Malformed,
    #[error("token signature does not match")]
    BadSignature,
    #[error("token has expired")]
    Expired,
}

impl From<MissingClaim> for VerificationError {
    fn from(_: MissingClaim) -> Self {
        VerificationError::Malformed
    }
}

/// Signs and verifies identity tokens with the process-wide secret.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    /// Builds the service from the loaded JWT configuration.
    ///
    /// Keys are derived once from `jwt_config.secret`; the service is then
    /// cloned into every request through the application state.
    ///
    /// # Arguments
    ///
    /// * `jwt_config` - Signing secret and default token lifetime. The
    ///   lifetime must already be validated by [`JwtConfig::from_values`].
    ///
    /// # Example
    ///
    /// ```ignore
    /// let jwt_config = JwtConfig::from_env()?;
    /// let tokens = TokenService::new(&jwt_config);
    /// ```
    pub fn new(jwt_config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.required_spec_claims = HashSet::from(["exp".to_string()]);

        Self {
            encoding_key: EncodingKey::from_secret(jwt_config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(jwt_config.secret.as_bytes()),
            validation,
            ttl: Duration::seconds(jwt_config.token_expiry),
        }
    }

    /// Default lifetime of issued tokens.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issues a token for `identity` with the configured lifetime.
    ///
    /// # Arguments
    ///
    /// * `identity` - The authenticated user; every field is embedded in
    ///   the claims
    ///
    /// # Returns
    ///
    /// The encoded JWT string.
    ///
    /// # Errors
    ///
    /// Returns an internal [`AppError`] if encoding fails.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let token = state.tokens.issue(&identity)?;
    /// let cookie = session_cookie(&state.cookie_config, token, state.cookie_config.max_age);
    /// ```
    pub fn issue(&self, identity: &Identity) -> Result<String, AppError> {
        self.issue_with_ttl(identity, self.ttl)
    }

    /// Issues a token that expires `ttl` from now instead of after the
    /// configured lifetime.
    ///
    /// # Errors
    ///
    /// Returns an internal [`AppError`] if encoding fails.
    pub fn issue_with_ttl(&self, identity: &Identity, ttl: Duration) -> Result<String, AppError> {
        self.issue_at(identity, ttl, Utc::now().timestamp())
    }

    /// Issues a token as if the current time were `now` (Unix seconds).
    ///
    /// # Arguments
    ///
    /// * `identity` - The authenticated user
    /// * `ttl` - Lifetime of the token
    /// * `now` - Issue time; becomes `iat`, and `exp` is `now + ttl`
    ///
    /// # Errors
    ///
    /// Returns an internal [`AppError`] if encoding fails.
    pub fn issue_at(&self, identity: &Identity, ttl: Duration, now: i64) -> Result<String, AppError> {
        let claims = Claims::for_identity(identity, now, now.saturating_add(ttl.num_seconds()));

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
    }

    /// Verifies `token` against the current time.
    ///
    /// # Arguments
    ///
    /// * `token` - The raw JWT taken from the `auth_token` cookie
    ///
    /// # Returns
    ///
    /// The [`Identity`] embedded in the token.
    ///
    /// # Errors
    ///
    /// * [`VerificationError::Malformed`] - not a JWT, or a required claim
    ///   (`sub`, `role`, `exp`) is missing or invalid
    /// * [`VerificationError::BadSignature`] - signed with another secret or
    ///   tampered with
    /// * [`VerificationError::Expired`] - the current time is at or past `exp`
    ///
    /// # Example
    ///
    /// ```ignore
    /// match tokens.verify(&token) {
    ///     Ok(identity) => println!("{} is a {}", identity.email, identity.role),
    ///     Err(kind) => tracing::debug!(reason = %kind, "Rejected token"),
    /// }
    /// ```
    pub fn verify(&self, token: &str) -> Result<Identity, VerificationError> {
        self.verify_at(token, Utc::now().timestamp())
    }

    /// Verifies `token` as if the current time were `now` (Unix seconds).
    ///
    /// Expiry is inclusive and has no leeway: a token is rejected from the
    /// second equal to its `exp`.
    ///
    /// # Errors
    ///
    /// Same as [`verify`](Self::verify).
    pub fn verify_at(&self, token: &str, now: i64) -> Result<Identity, VerificationError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => VerificationError::BadSignature,
                ErrorKind::ExpiredSignature => VerificationError::Expired,
                _ => VerificationError::Malformed,
            })?;

        if now >= claims.exp {
            return Err(VerificationError::Expired);
        }

        Ok(claims.into_identity()?)
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl_secs", &self.ttl.num_seconds())
            .finish_non_exhaustive()
    }
}
