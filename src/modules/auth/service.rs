use marksheet_auth::TokenService;
use marksheet_core::{AppError, hash_password, verify_password};
use sqlx::PgPool;
use tracing::{info, instrument};

use super::model::{LoginRequest, RegisterRequestDto, User, UserCredentials};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub struct AuthService;

impl AuthService {
    /// Creates a TEACHER account. Admins are only created through the CLI.
    #[instrument(skip(db, dto), fields(email = %dto.email))]
    pub async fn register_user(db: &PgPool, dto: RegisterRequestDto) -> Result<User, AppError> {
        let hashed_password = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, User>(
            r#"INSERT INTO users (name, email, password)
               VALUES ($1, $2, $3)
               RETURNING id, name, email, role, created_at, updated_at"#,
        )
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&hashed_password)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::conflict(anyhow::anyhow!("Email already in use"));
            }
            AppError::database(e)
        })?;

        info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Checks credentials and issues a session token for the user.
    ///
    /// Unknown email and wrong password produce the same 401.
    #[instrument(skip(db, dto, tokens), fields(email = %dto.email))]
    pub async fn login_user(
        db: &PgPool,
        dto: LoginRequest,
        tokens: &TokenService,
    ) -> Result<(User, String), AppError> {
        let credentials = sqlx::query_as::<_, UserCredentials>(
            r#"SELECT id, name, email, role, created_at, updated_at, password
               FROM users
               WHERE email = $1"#,
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::unauthorized(INVALID_CREDENTIALS))?;

        if !verify_password(&dto.password, &credentials.password)? {
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        let user = credentials.user;
        let token = tokens.issue(&user.identity())?;

        info!(user_id = %user.id, role = %user.role, "User logged in");
        Ok((user, token))
    }
}
