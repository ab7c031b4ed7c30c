//! Gym handlers
//!
//! Gym CRUD and the per-gym unlock query.

use axum::{
    extract::{Path, State},
    Json,
};
use crux_service::{CreateGymRequest, GymResponse, GymService, UnlockResponse, UnlockService};
use uuid::Uuid;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Create a gym (league admin only)
///
/// POST /gyms
pub async fn create_gym(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateGymRequest>,
) -> ApiResult<Created<Json<GymResponse>>> {
    let service = GymService::new(state.service_context());
    let response = service.create_gym(auth.subject_id(), request).await?;
    Ok(Created(Json(response)))
}

/// Get a gym
///
/// GET /gyms/{gym_id}
pub async fn get_gym(
    State(state): State<AppState>,
    Path(gym_id): Path<String>,
) -> ApiResult<Json<GymResponse>> {
    let gym_id = parse_gym_id(&gym_id)?;
    let service = GymService::new(state.service_context());
    let response = service.get_gym(gym_id).await?;
    Ok(Json(response))
}

/// List all gyms
///
/// GET /gyms
pub async fn list_gyms(State(state): State<AppState>) -> ApiResult<Json<Vec<GymResponse>>> {
    let service = GymService::new(state.service_context());
    let response = service.list_gyms().await?;
    Ok(Json(response))
}

/// Is this gym's league content unlocked for the caller?
///
/// GET /gyms/{gym_id}/unlock
pub async fn gym_unlock(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(gym_id): Path<String>,
) -> ApiResult<Json<UnlockResponse>> {
    let gym_id = parse_gym_id(&gym_id)?;
    let service = UnlockService::new(state.service_context());
    let response = service.gym_unlocked(auth.subject_id(), gym_id).await?;
    Ok(Json(response))
}

fn parse_gym_id(raw: &str) -> Result<Uuid, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid gym_id format"))
}
