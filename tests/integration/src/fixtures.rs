//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Unique email for a fresh test subject
pub fn unique_email() -> String {
    format!("climber{}@example.com", unique_suffix())
}

/// Unique code token in the printed-card format
pub fn unique_code() -> String {
    format!("KL-TEST-{:04}", unique_suffix())
}

/// Create gym request
#[derive(Debug, Serialize)]
pub struct CreateGymRequest {
    pub name: String,
    pub city: Option<String>,
}

impl CreateGymRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test Gym {suffix}"),
            city: Some("Praha".to_string()),
        }
    }
}

/// Gym response
#[derive(Debug, Deserialize)]
pub struct GymResponse {
    pub id: Uuid,
    pub name: String,
    pub city: Option<String>,
    pub created_at: String,
}

/// Redeem gym code request
#[derive(Debug, Serialize)]
pub struct RedeemGymCodeRequest {
    pub code: String,
    pub gym_id: Uuid,
}

/// Redeem master code request
#[derive(Debug, Serialize)]
pub struct RedeemMasterCodeRequest {
    pub code: String,
}

/// Mint codes request
#[derive(Debug, Serialize)]
pub struct MintCodesRequest {
    pub count: u32,
    pub expires_at: Option<String>,
}

impl MintCodesRequest {
    pub fn of(count: u32) -> Self {
        Self {
            count,
            expires_at: None,
        }
    }
}

/// Minted batch response
#[derive(Debug, Deserialize)]
pub struct MintedBatchResponse {
    pub count: usize,
    pub codes: Vec<String>,
}

/// Gym code response
#[derive(Debug, Deserialize)]
pub struct GymCodeResponse {
    pub id: Uuid,
    pub gym_id: Uuid,
    pub code: String,
    pub status: String,
    pub redeemed_by: Option<Uuid>,
    pub redeemed_at: Option<String>,
}

/// Master code response
#[derive(Debug, Deserialize)]
pub struct MasterCodeResponse {
    pub id: Uuid,
    pub code: String,
    pub status: String,
    pub redeemed_by: Option<Uuid>,
}

/// Master redemption response
#[derive(Debug, Deserialize)]
pub struct MasterRedemptionResponse {
    pub code: MasterCodeResponse,
    pub participation_activated_at: Option<String>,
}

/// Unlock response
#[derive(Debug, Deserialize)]
pub struct UnlockResponse {
    pub gym_id: Uuid,
    pub unlocked: bool,
}

/// Profile response
#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub email: String,
    pub role: String,
    pub participation_activated_at: Option<String>,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
