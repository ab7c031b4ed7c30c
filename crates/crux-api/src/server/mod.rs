//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use crux_common::{AppConfig, AppError, JwtService};
use crux_db::{
    create_pool, PgGymCodeRepository, PgGymRepository, PgMasterCodeRepository,
    PgProfileRepository,
};
use crux_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware.
///
/// Health routes skip the rate limiter so probes never get throttled.
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );
    let health = apply_middleware(health_routes());
    api.merge(health).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = crux_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.token_expiry,
    ));

    let gym_code_repo = Arc::new(PgGymCodeRepository::new(pool.clone()));
    let master_code_repo = Arc::new(PgMasterCodeRepository::new(pool.clone()));
    let profile_repo = Arc::new(PgProfileRepository::new(pool.clone()));
    let gym_repo = Arc::new(PgGymRepository::new(pool.clone()));

    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .gym_code_repo(gym_code_repo)
        .master_code_repo(master_code_repo)
        .profile_repo(profile_repo)
        .gym_repo(gym_repo)
        .jwt_service(jwt_service)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .server
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid server address: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}
