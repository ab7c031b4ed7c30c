//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{codes, gyms, health, profiles, redemptions};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(redemption_routes())
        .merge(gym_routes())
        .merge(master_code_routes())
        .merge(profile_routes())
}

/// Redemption routes
fn redemption_routes() -> Router<AppState> {
    Router::new()
        .route("/codes/redeem", post(redemptions::redeem_gym_code))
        .route("/master-codes/redeem", post(redemptions::redeem_master_code))
}

/// Gym routes
fn gym_routes() -> Router<AppState> {
    Router::new()
        .route("/gyms", get(gyms::list_gyms))
        .route("/gyms", post(gyms::create_gym))
        .route("/gyms/:gym_id", get(gyms::get_gym))
        .route("/gyms/:gym_id/unlock", get(gyms::gym_unlock))
        .route("/gyms/:gym_id/codes", get(codes::list_gym_codes))
        .route("/gyms/:gym_id/codes", post(codes::mint_gym_codes))
}

/// Master code administration routes
fn master_code_routes() -> Router<AppState> {
    Router::new()
        .route("/master-codes", get(codes::list_master_codes))
        .route("/master-codes", post(codes::mint_master_codes))
}

/// Profile routes
fn profile_routes() -> Router<AppState> {
    Router::new().route("/profiles/@me", get(profiles::get_current_profile))
}
