//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crux_core::entities::{Gym, GymCode, MasterCode, Profile};

// ============================================================================
// Code Responses
// ============================================================================

/// A gym code as returned to clients
#[derive(Debug, Clone, Serialize)]
pub struct GymCodeResponse {
    pub id: Uuid,
    pub gym_id: Uuid,
    pub code: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redeemed_by: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redeemed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<GymCode> for GymCodeResponse {
    fn from(code: GymCode) -> Self {
        Self {
            id: code.id,
            gym_id: code.gym_id,
            code: code.code,
            status: code.status.as_str().to_string(),
            redeemed_by: code.redeemed_by,
            redeemed_at: code.redeemed_at,
            expires_at: code.expires_at,
            created_at: code.created_at,
        }
    }
}

/// A master code as returned to clients
#[derive(Debug, Clone, Serialize)]
pub struct MasterCodeResponse {
    pub id: Uuid,
    pub code: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redeemed_by: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redeemed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<MasterCode> for MasterCodeResponse {
    fn from(code: MasterCode) -> Self {
        Self {
            id: code.id,
            code: code.code,
            status: code.status.as_str().to_string(),
            redeemed_by: code.redeemed_by,
            redeemed_at: code.redeemed_at,
            expires_at: code.expires_at,
            created_at: code.created_at,
        }
    }
}

/// Master-code redemption result: the consumed code plus the activation
/// timestamp (set by this redemption, or already set by an earlier one)
#[derive(Debug, Clone, Serialize)]
pub struct MasterRedemptionResponse {
    pub code: MasterCodeResponse,
    pub participation_activated_at: Option<DateTime<Utc>>,
}

/// A freshly minted batch
#[derive(Debug, Clone, Serialize)]
pub struct MintedBatchResponse {
    pub count: usize,
    pub codes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Unlock / Profile Responses
// ============================================================================

/// Unlock state for a subject at a gym
#[derive(Debug, Clone, Serialize)]
pub struct UnlockResponse {
    pub gym_id: Uuid,
    pub unlocked: bool,
}

/// Profile as returned to its owner
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub role: String,
    pub participation_activated_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id,
            email: profile.email,
            display_name: profile.display_name,
            role: profile.role.as_str().to_string(),
            participation_activated_at: profile.participation_activated_at,
            created_at: profile.created_at,
        }
    }
}

// ============================================================================
// Gym Responses
// ============================================================================

/// Gym as returned to clients
#[derive(Debug, Clone, Serialize)]
pub struct GymResponse {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Gym> for GymResponse {
    fn from(gym: Gym) -> Self {
        Self {
            id: gym.id,
            name: gym.name,
            city: gym.city,
            created_at: gym.created_at,
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness response with dependency health
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
}

impl ReadinessResponse {
    pub fn ready(database: bool) -> Self {
        Self {
            status: if database { "ready" } else { "degraded" },
            database,
        }
    }
}
