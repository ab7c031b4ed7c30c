//! Gym code entity <-> model mapper

use crux_core::entities::{CodeStatus, GymCode};

use crate::models::GymCodeModel;

/// Convert GymCodeModel to GymCode entity
impl From<GymCodeModel> for GymCode {
    fn from(model: GymCodeModel) -> Self {
        GymCode {
            id: model.id,
            gym_id: model.gym_id,
            code: model.code,
            status: CodeStatus::from_column(&model.status),
            redeemed_by: model.redeemed_by,
            redeemed_at: model.redeemed_at,
            expires_at: model.expires_at,
            created_at: model.created_at,
        }
    }
}
