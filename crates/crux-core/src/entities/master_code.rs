//! Master code entity - account-wide code activating league participation
//!
//! Same shape as a gym code but unscoped: redeeming one also stamps the
//! subject's `participation_activated_at` the first time.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::gym_code::CodeStatus;

/// Master code entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasterCode {
    pub id: Uuid,
    pub code: String,
    pub status: CodeStatus,
    pub redeemed_by: Option<Uuid>,
    pub redeemed_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl MasterCode {
    /// Create a fresh, unredeemed master code
    pub fn new(code: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            code,
            status: CodeStatus::Available,
            redeemed_by: None,
            redeemed_at: None,
            expires_at: None,
            created_at: Utc::now(),
        }
    }

    /// Set an expiry timestamp
    pub fn with_expiry(mut self, expires_at: Option<DateTime<Utc>>) -> Self {
        self.expires_at = expires_at;
        self
    }

    /// Check if the code has been redeemed
    #[inline]
    pub fn is_redeemed(&self) -> bool {
        self.redeemed_by.is_some()
    }

    /// Check if the code is expired at the given instant (strictly before)
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => expires_at < now,
            None => false,
        }
    }

    /// Check if the code is expired right now
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Check if the code could still be redeemed at the given instant
    pub fn is_redeemable_at(&self, now: DateTime<Utc>) -> bool {
        !self.is_redeemed() && !self.is_expired_at(now)
    }
}
