//! Code administration handlers
//!
//! Batch minting and listing for gym codes and master codes.

use axum::{
    extract::{Path, State},
    Json,
};
use crux_service::{
    CodeAdminService, GymCodeResponse, MasterCodeResponse, MintCodesRequest, MintedBatchResponse,
};
use uuid::Uuid;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Mint a batch of gym codes (gym admin)
///
/// POST /gyms/{gym_id}/codes
pub async fn mint_gym_codes(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(gym_id): Path<String>,
    ValidatedJson(request): ValidatedJson<MintCodesRequest>,
) -> ApiResult<Created<Json<MintedBatchResponse>>> {
    let gym_id = parse_gym_id(&gym_id)?;
    let service = CodeAdminService::new(state.service_context());
    let response = service
        .mint_gym_codes(auth.subject_id(), gym_id, request)
        .await?;
    Ok(Created(Json(response)))
}

/// List codes minted for a gym (gym admin)
///
/// GET /gyms/{gym_id}/codes
pub async fn list_gym_codes(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(gym_id): Path<String>,
) -> ApiResult<Json<Vec<GymCodeResponse>>> {
    let gym_id = parse_gym_id(&gym_id)?;
    let service = CodeAdminService::new(state.service_context());
    let response = service.list_gym_codes(auth.subject_id(), gym_id).await?;
    Ok(Json(response))
}

/// Mint a batch of master codes (league admin)
///
/// POST /master-codes
pub async fn mint_master_codes(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<MintCodesRequest>,
) -> ApiResult<Created<Json<MintedBatchResponse>>> {
    let service = CodeAdminService::new(state.service_context());
    let response = service.mint_master_codes(auth.subject_id(), request).await?;
    Ok(Created(Json(response)))
}

/// List all master codes (league admin)
///
/// GET /master-codes
pub async fn list_master_codes(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<MasterCodeResponse>>> {
    let service = CodeAdminService::new(state.service_context());
    let response = service.list_master_codes(auth.subject_id()).await?;
    Ok(Json(response))
}

fn parse_gym_id(raw: &str) -> Result<Uuid, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid gym_id format"))
}
