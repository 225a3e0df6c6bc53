use marksheet_auth::Role;
use marksheet_core::hash_password;
use sqlx::PgPool;
use uuid::Uuid;

/// Creates an ADMIN account. Public registration only ever creates teachers,
/// so this is the one way to bootstrap an administrator.
pub async fn create_admin(
    db: &PgPool,
    name: &str,
    email: &str,
    password: &str,
) -> Result<Uuid, Box<dyn std::error::Error>> {
    if name.trim().len() < 2 {
        return Err("Name must be at least 2 characters".into());
    }
    if name.trim().chars().count() > 255 {
        return Err("Name must be at most 255 characters".into());
    }
    if password.len() < 6 {
        return Err("Password must be at least 6 characters".into());
    }

    let hashed_password =
        hash_password(password).map_err(|e| format!("Failed to hash password: {}", e.error))?;

    let user_id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO users (name, email, password, role)
         VALUES ($1, $2, $3, $4)
         ON CONFLICT (email) DO NOTHING
         RETURNING id",
    )
    .bind(name.trim())
    .bind(email.trim())
    .bind(&hashed_password)
    .bind(Role::Admin)
    .fetch_optional(db)
    .await?;

    user_id.ok_or_else(|| "User with this email already exists".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_create_admin(pool: PgPool) {
        let id = create_admin(&pool, "Ada Lovelace", "ada@example.com", "analytical")
            .await
            .unwrap();

        let role: Role = sqlx::query_scalar("SELECT role FROM users WHERE id = $1")
            .bind(id)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_create_admin_rejects_duplicate_email(pool: PgPool) {
        create_admin(&pool, "Ada Lovelace", "ada@example.com", "analytical")
            .await
            .unwrap();
        let err = create_admin(&pool, "Ada Again", "ada@example.com", "analytical")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_create_admin_rejects_short_password(pool: PgPool) {
        assert!(
            create_admin(&pool, "Ada Lovelace", "ada@example.com", "abc")
                .await
                .is_err()
        );
    }
}
