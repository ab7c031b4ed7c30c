//! Master code entity <-> model mapper

use crux_core::entities::{CodeStatus, MasterCode};

use crate::models::MasterCodeModel;

/// Convert MasterCodeModel to MasterCode entity
impl From<MasterCodeModel> for MasterCode {
    fn from(model: MasterCodeModel) -> Self {
        MasterCode {
            id: model.id,
            code: model.code,
            status: CodeStatus::from_column(&model.status),
            redeemed_by: model.redeemed_by,
            redeemed_at: model.redeemed_at,
            expires_at: model.expires_at,
            created_at: model.created_at,
        }
    }
}
