use marksheet_auth::TokenService;
use marksheet_config::{CookieConfig, CorsConfig, JwtConfig};
use sqlx::PgPool;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub tokens: TokenService,
    pub cookie_config: CookieConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(db: PgPool, jwt_config: &JwtConfig, cors_config: CorsConfig) -> Self {
        Self {
            db,
            tokens: TokenService::new(jwt_config),
            cookie_config: CookieConfig::from_env(jwt_config),
            cors_config,
        }
    }
}
