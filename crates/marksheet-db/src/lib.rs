//! # Marksheet DB
//!
//! PostgreSQL connection pool initialization and embedded migrations.
//!
//! # Example
//!
//! ```ignore
//! use marksheet_db::{init_db_pool, run_migrations};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let pool = init_db_pool(&std::env::var("DATABASE_URL")?).await?;
//!     run_migrations(&pool).await?;
//!     Ok(())
//! }
//! ```

use sqlx::postgres::PgPoolOptions;
use sqlx::migrate::MigrateError;
use tracing::info;

pub use sqlx::PgPool;

/// Opens a PostgreSQL connection pool.
///
/// Should be called once during startup. The returned pool is cheaply
/// cloneable and is shared through the application state.
pub async fn init_db_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("Database connection pool established");
    Ok(pool)
}

/// Applies the migrations under `migrations/` at the workspace root.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}
