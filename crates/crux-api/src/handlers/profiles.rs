//! Profile handlers

use axum::{extract::State, Json};
use crux_service::{ProfileResponse, ProfileService};

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Get the caller's profile, creating it on first contact
///
/// GET /profiles/@me
pub async fn get_current_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ProfileResponse>> {
    let service = ProfileService::new(state.service_context());
    let profile = service.get_or_create(&auth.identity).await?;
    Ok(Json(ProfileResponse::from(profile)))
}
