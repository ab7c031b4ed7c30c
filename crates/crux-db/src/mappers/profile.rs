//! Profile entity <-> model mapper

use crux_core::entities::{Profile, Role};

use crate::models::ProfileModel;

/// Convert ProfileModel to Profile entity
impl From<ProfileModel> for Profile {
    fn from(model: ProfileModel) -> Self {
        Profile {
            id: model.id,
            email: model.email,
            display_name: model.display_name,
            role: Role::from_column(&model.role),
            participation_activated_at: model.participation_activated_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
