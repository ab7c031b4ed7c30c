//! Gym code entity - a single-use code unlocking one gym for one participant

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Redemption status, stored redundantly alongside `redeemed_by`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeStatus {
    Available,
    Redeemed,
}

impl CodeStatus {
    /// String form used in the database column
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Redeemed => "redeemed",
        }
    }

    /// Parse the database column value, falling back to `Available`
    pub fn from_column(s: &str) -> Self {
        match s {
            "redeemed" => Self::Redeemed,
            _ => Self::Available,
        }
    }
}

/// Gym code entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GymCode {
    pub id: Uuid,
    pub gym_id: Uuid,
    pub code: String,
    pub status: CodeStatus,
    pub redeemed_by: Option<Uuid>,
    pub redeemed_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl GymCode {
    /// Create a fresh, unredeemed gym code
    pub fn new(gym_id: Uuid, code: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            gym_id,
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

    /// Check if the code is expired at the given instant.
    ///
    /// Expiry is strict: a code expiring exactly `now` is still usable.
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

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_new_code_is_available() {
        let code = GymCode::new(Uuid::new_v4(), "KL-ABC-123".to_string());
        assert_eq!(code.status, CodeStatus::Available);
        assert!(!code.is_redeemed());
        assert!(code.redeemed_by.is_none());
        assert!(code.redeemed_at.is_none());
        assert!(code.is_redeemable_at(Utc::now()));
    }

    #[test]
    fn test_expiry_boundary() {
        let now = Utc::now();
        let code = GymCode::new(Uuid::new_v4(), "KL-ABC-123".to_string());

        let past = code.clone().with_expiry(Some(now - Duration::seconds(1)));
        assert!(past.is_expired_at(now));
        assert!(!past.is_redeemable_at(now));

        let future = code.clone().with_expiry(Some(now + Duration::seconds(1)));
        assert!(!future.is_expired_at(now));
        assert!(future.is_redeemable_at(now));

        // exactly-now is not yet expired (strictly before)
        let exact = code.with_expiry(Some(now));
        assert!(!exact.is_expired_at(now));
    }

    #[test]
    fn test_no_expiry_never_expires() {
        let code = GymCode::new(Uuid::new_v4(), "KL-ABC-123".to_string());
        assert!(!code.is_expired_at(Utc::now() + Duration::days(3650)));
    }

    #[test]
    fn test_status_column_round_trip() {
        assert_eq!(CodeStatus::from_column("available"), CodeStatus::Available);
        assert_eq!(CodeStatus::from_column("redeemed"), CodeStatus::Redeemed);
        assert_eq!(CodeStatus::Available.as_str(), "available");
        assert_eq!(CodeStatus::Redeemed.as_str(), "redeemed");
    }
}
