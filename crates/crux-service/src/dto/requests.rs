//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; those with constraints also
//! implement `Validate` for input validation.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

// ============================================================================
// Redemption Requests
// ============================================================================

/// Redeem a gym code request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RedeemGymCodeRequest {
    /// Raw code as scanned or typed; normalized server-side
    #[validate(length(min = 1, max = 64, message = "Code must be 1-64 characters"))]
    pub code: String,

    /// The gym the participant expects to unlock
    pub gym_id: Uuid,
}

/// Redeem a master code request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RedeemMasterCodeRequest {
    #[validate(length(min = 1, max = 64, message = "Code must be 1-64 characters"))]
    pub code: String,
}

// ============================================================================
// Admin Requests
// ============================================================================

/// Mint a batch of codes request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MintCodesRequest {
    #[validate(range(min = 1, max = 500, message = "Batch size must be 1-500"))]
    pub count: u32,

    /// Optional expiry applied to every code in the batch
    pub expires_at: Option<DateTime<Utc>>,
}

/// Create gym request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGymRequest {
    #[validate(length(min = 1, max = 100, message = "Gym name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(max = 100, message = "City must be at most 100 characters"))]
    pub city: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mint_request_rejects_zero_count() {
        let request = MintCodesRequest {
            count: 0,
            expires_at: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_mint_request_rejects_oversized_batch() {
        let request = MintCodesRequest {
            count: 501,
            expires_at: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_redeem_request_rejects_empty_code() {
        let request = RedeemGymCodeRequest {
            code: String::new(),
            gym_id: Uuid::new_v4(),
        };
        assert!(request.validate().is_err());
    }
}
