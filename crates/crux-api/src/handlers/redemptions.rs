//! Redemption handlers
//!
//! The two commit endpoints: gym code redemption (unlocks a gym's league
//! content) and master code redemption (activates league participation).

use axum::{extract::State, Json};
use crux_service::{
    GymCodeResponse, MasterRedemptionResponse, RedeemGymCodeRequest, RedeemMasterCodeRequest,
    RedemptionService,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Redeem a gym code
///
/// POST /codes/redeem
pub async fn redeem_gym_code(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<RedeemGymCodeRequest>,
) -> ApiResult<Json<GymCodeResponse>> {
    let service = RedemptionService::new(state.service_context());
    let response = service.redeem_gym_code(&auth.identity, request).await?;
    Ok(Json(response))
}

/// Redeem a master code
///
/// POST /master-codes/redeem
pub async fn redeem_master_code(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<RedeemMasterCodeRequest>,
) -> ApiResult<Json<MasterRedemptionResponse>> {
    let service = RedemptionService::new(state.service_context());
    let response = service.redeem_master_code(&auth.identity, request).await?;
    Ok(Json(response))
}
