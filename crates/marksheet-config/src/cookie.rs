use std::env;

use crate::jwt::JwtConfig;

pub const AUTH_COOKIE_NAME: &str = "auth_token";

/// Attributes of the session cookie set at login and cleared at logout.
#[derive(Clone, Debug)]
pub struct CookieConfig {
    pub name: String,
    pub secure: bool,
    /// Max-Age in seconds; follows the token lifetime.
    pub max_age: i64,
}

impl CookieConfig {
    pub fn from_env(jwt_config: &JwtConfig) -> Self {
        let secure = env::var("COOKIE_SECURE")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            name: AUTH_COOKIE_NAME.to_string(),
            secure,
            max_age: jwt_config.token_expiry,
        }
    }
}
