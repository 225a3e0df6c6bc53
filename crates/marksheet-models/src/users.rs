//! User accounts.

use marksheet_auth::{Identity, Role};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A teacher or admin account. The password hash is never part of this
/// struct, so it cannot leak into a response.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl User {
    pub fn identity(&self) -> Identity {
        Identity {
            user_id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}

/// Login lookup row: the user plus their bcrypt hash.
#[derive(FromRow, Debug, Clone)]
pub struct UserCredentials {
    #[sqlx(flatten)]
    pub user: User,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_from_user() {
        let now = chrono::Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: "Edsger Dijkstra".to_string(),
            email: "edsger@example.com".to_string(),
            role: Role::Admin,
            created_at: now,
            updated_at: now,
        };

        let identity = user.identity();
        assert_eq!(identity.user_id, user.id);
        assert_eq!(identity.email, user.email);
        assert_eq!(identity.role, Role::Admin);
    }

    #[test]
    fn test_user_json_has_no_password() {
        let now = chrono::Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: "Barbara Liskov".to_string(),
            email: "barbara@example.com".to_string(),
            role: Role::Teacher,
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["role"], "TEACHER");
    }
}
