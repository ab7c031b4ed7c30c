//! Gym code database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the gym_codes table
#[derive(Debug, Clone, FromRow)]
pub struct GymCodeModel {
    pub id: Uuid,
    pub gym_id: Uuid,
    pub code: String,
    pub status: String,
    pub redeemed_by: Option<Uuid>,
    pub redeemed_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl GymCodeModel {
    /// Check if the row is redeemed
    #[inline]
    pub fn is_redeemed(&self) -> bool {
        self.redeemed_by.is_some()
    }
}
