//! Gym database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the gyms table
#[derive(Debug, Clone, FromRow)]
pub struct GymModel {
    pub id: Uuid,
    pub name: String,
    pub city: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
