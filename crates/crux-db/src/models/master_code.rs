//! Master code database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the master_codes table
#[derive(Debug, Clone, FromRow)]
pub struct MasterCodeModel {
    pub id: Uuid,
    pub code: String,
    pub status: String,
    pub redeemed_by: Option<Uuid>,
    pub redeemed_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
