//! Profile service
//!
//! Profiles mirror subjects from the hosted auth platform. A profile row is
//! created lazily the first time a resolved subject touches the system, so
//! redemption never has to care whether the subject is new.

use tracing::{info, instrument};
use uuid::Uuid;

use crux_core::entities::Profile;
use crux_core::Identity;

use crate::dto::ProfileResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Profile service
pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    /// Create a new ProfileService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get the profile for a resolved subject, creating it on first contact.
    ///
    /// New profiles start as members with no participation activation.
    #[instrument(skip(self, identity), fields(subject_id = %identity.id))]
    pub async fn get_or_create(&self, identity: &Identity) -> ServiceResult<Profile> {
        if let Some(profile) = self.ctx.profile_repo().find_by_id(identity.id).await? {
            return Ok(profile);
        }

        let profile = Profile::new(identity.id, identity.email.clone());
        match self.ctx.profile_repo().create(&profile).await {
            Ok(()) => {
                info!(subject_id = %identity.id, "Profile created");
                Ok(profile)
            }
            Err(e) => {
                // Possibly lost a race with a concurrent first request for
                // the same subject; if the row exists now, use it.
                if let Some(existing) = self.ctx.profile_repo().find_by_id(identity.id).await? {
                    Ok(existing)
                } else {
                    Err(e.into())
                }
            }
        }
    }

    /// Get a profile by subject id
    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> ServiceResult<ProfileResponse> {
        let profile = self
            .ctx
            .profile_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Profile", id.to_string()))?;
        Ok(ProfileResponse::from(profile))
    }
}
