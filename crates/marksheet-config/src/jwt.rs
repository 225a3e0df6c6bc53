use std::env;

use crate::ConfigError;

/// One day, matching the login cookie lifetime.
pub const DEFAULT_TOKEN_EXPIRY: i64 = 60 * 60 * 24;

#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds.
    pub token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(env::var("JWT_SECRET").ok(), env::var("JWT_EXPIRY").ok())
    }

    pub fn from_values(
        secret: Option<String>,
        token_expiry: Option<String>,
    ) -> Result<Self, ConfigError> {
        let secret = secret
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::MissingJwtSecret)?;

        let token_expiry = match token_expiry {
            None => DEFAULT_TOKEN_EXPIRY,
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(secs) if secs > 0 && chrono::Duration::try_seconds(secs).is_some() => secs,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        name: "JWT_EXPIRY",
                        value: raw,
                    });
                }
            },
        };

        Ok(Self {
            secret,
            token_expiry,
        })
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("token_expiry", &self.token_expiry)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_secret_is_fatal() {
        assert_eq!(
            JwtConfig::from_values(None, None).unwrap_err(),
            ConfigError::MissingJwtSecret
        );
        assert_eq!(
            JwtConfig::from_values(Some("   ".to_string()), None).unwrap_err(),
            ConfigError::MissingJwtSecret
        );
    }

    #[test]
    fn test_default_expiry() {
        let config = JwtConfig::from_values(Some("s3cret".to_string()), None).unwrap();
        assert_eq!(config.token_expiry, DEFAULT_TOKEN_EXPIRY);
    }

    #[test]
    fn test_custom_expiry() {
        let config =
            JwtConfig::from_values(Some("s3cret".to_string()), Some("3600".to_string())).unwrap();
        assert_eq!(config.token_expiry, 3600);
    }

    #[test]
    fn test_rejects_non_positive_expiry() {
        for raw in ["0", "-5", "soon", "9223372036854775807", "9223372036854776"] {
            let err = JwtConfig::from_values(Some("s3cret".to_string()), Some(raw.to_string()))
                .unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue { name: "JWT_EXPIRY", .. }));
        }
    }

    #[test]
    fn test_largest_representable_expiry_is_accepted() {
        let max = (i64::MAX / 1000).to_string();
        let config = JwtConfig::from_values(Some("s3cret".to_string()), Some(max)).unwrap();
        assert_eq!(config.token_expiry, i64::MAX / 1000);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = JwtConfig::from_values(Some("top-secret".to_string()), None).unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("top-secret"));
    }
}
