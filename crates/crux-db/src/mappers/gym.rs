//! Gym entity <-> model mapper

use crux_core::entities::Gym;

use crate::models::GymModel;

/// Convert GymModel to Gym entity
impl From<GymModel> for Gym {
    fn from(model: GymModel) -> Self {
        Gym {
            id: model.id,
            name: model.name,
            city: model.city,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
