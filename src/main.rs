use marksheet::logging::init_tracing;
use marksheet::router::init_router;
use marksheet::state::AppState;
use marksheet_config::{CorsConfig, JwtConfig, ServerConfig};
use marksheet_db::{init_db_pool, run_migrations};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    // Configuration is validated before the database is touched.
    let jwt_config = JwtConfig::from_env()?;
    let cors_config = CorsConfig::from_env()?;
    let server_config = ServerConfig::from_env();
    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;

    let db = init_db_pool(&database_url).await?;
    run_migrations(&db).await?;

    let state = AppState::new(db, &jwt_config, cors_config);
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind(&server_config.addr).await?;

    info!(addr = %server_config.addr, "🚀 Server running");
    info!("📖 Scalar UI available at http://{}/scalar", server_config.addr);

    axum::serve(listener, app).await?;
    Ok(())
}
