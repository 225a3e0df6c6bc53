//! # Marksheet Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`jwt`]: Token signing secret and lifetime
//! - [`cookie`]: Attributes of the `auth_token` cookie
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: Listen address
//!
//! A missing signing secret is a [`ConfigError`] and must abort startup.
//!
//! # Example
//!
//! ```ignore
//! use marksheet_config::{CookieConfig, CorsConfig, JwtConfig};
//!
//! let jwt_config = JwtConfig::from_env()?;
//! let cookie_config = CookieConfig::from_env(&jwt_config);
//! let cors_config = CorsConfig::from_env();
//! ```

pub mod cookie;
pub mod cors;
pub mod jwt;
pub mod server;

pub use cookie::CookieConfig;
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;

/// Fatal configuration problems detected at startup.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("JWT_SECRET is not set; refusing to start without a signing secret")]
    MissingJwtSecret,
    #[error("{name} has an invalid value: {value}")]
    InvalidValue { name: &'static str, value: String },
}
