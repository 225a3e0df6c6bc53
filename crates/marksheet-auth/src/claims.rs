//! JWT payload of the `auth_token` credential.

use serde::{Deserialize, Serialize};

use crate::identity::{Identity, Role};

/// Claims embedded in every issued token.
///
/// `sub` and `role` are optional on the decoding side so that a signed
/// payload missing either one is reported as malformed instead of failing
/// inside the JSON decoder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// User ID (subject claim)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// Issued-at (Unix timestamp, seconds)
    pub iat: i64,
    /// Expiry (Unix timestamp, seconds)
    pub exp: i64,
}

/// Which required claim a payload lacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingClaim {
    Subject,
    Role,
}

impl Claims {
    pub fn for_identity(identity: &Identity, iat: i64, exp: i64) -> Self {
        Self {
            sub: Some(identity.user_id.to_string()),
            name: identity.name.clone(),
            email: identity.email.clone(),
            role: Some(identity.role),
            iat,
            exp,
        }
    }

    /// Rebuilds the identity. The subject must be a UUID.
    pub fn into_identity(self) -> Result<Identity, MissingClaim> {
        let user_id = self
            .sub
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| uuid::Uuid::parse_str(s).ok())
            .ok_or(MissingClaim::Subject)?;
        let role = self.role.ok_or(MissingClaim::Role)?;

        Ok(Identity {
            user_id,
            name: self.name,
            email: self.email,
            role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn identity() -> Identity {
        Identity {
            user_id: Uuid::new_v4(),
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            role: Role::Teacher,
        }
    }

    #[test]
    fn test_claims_carry_identity() {
        let id = identity();
        let claims = Claims::for_identity(&id, 100, 200);
        assert_eq!(claims.exp, 200);
        assert_eq!(claims.into_identity().unwrap(), id);
    }

    #[test]
    fn test_missing_role() {
        let json = format!(r#"{{"sub":"{}","iat":1,"exp":2}}"#, Uuid::new_v4());
        let claims: Claims = serde_json::from_str(&json).unwrap();
        assert_eq!(claims.into_identity().unwrap_err(), MissingClaim::Role);
    }

    #[test]
    fn test_missing_or_bogus_subject() {
        let claims: Claims = serde_json::from_str(r#"{"role":"ADMIN","iat":1,"exp":2}"#).unwrap();
        assert_eq!(claims.into_identity().unwrap_err(), MissingClaim::Subject);

        let claims: Claims =
            serde_json::from_str(r#"{"sub":"not-a-uuid","role":"ADMIN","iat":1,"exp":2}"#).unwrap();
        assert_eq!(claims.into_identity().unwrap_err(), MissingClaim::Subject);
    }
}
