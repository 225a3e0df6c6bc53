use std::env;

use crate::ConfigError;

/// Dev servers for the browser client.
pub const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";

/// Origins allowed to call the API with the session cookie attached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(env::var("ALLOWED_ORIGINS").ok())
    }

    /// Parses a comma-separated origin list.
    ///
    /// Credentials are always allowed, so a wildcard is refused. Entries must
    /// be `http://` or `https://` origins; a trailing `/` is dropped.
    pub fn from_values(raw: Option<String>) -> Result<Self, ConfigError> {
        let raw = raw
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string());

        let mut allowed_origins = Vec::new();
        for entry in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let origin = entry.trim_end_matches('/');
            let scheme_ok = origin.starts_with("http://") || origin.starts_with("https://");
            if !scheme_ok || origin.contains('*') || origin.contains(char::is_whitespace) {
                return Err(ConfigError::InvalidValue {
                    name: "ALLOWED_ORIGINS",
                    value: entry.to_string(),
                });
            }
            if !allowed_origins.iter().any(|o| o == origin) {
                allowed_origins.push(origin.to_string());
            }
        }

        Ok(Self { allowed_origins })
    }
}
