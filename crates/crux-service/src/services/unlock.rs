//! Unlock service
//!
//! Read side of redemption: is a gym's league content open for a subject,
//! and has the subject activated league participation. Both answers are
//! recomputed from storage on every call, never cached, so they stay
//! consistent with concurrent redemptions.

use tracing::instrument;
use uuid::Uuid;

use crate::dto::UnlockResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Unlock service
pub struct UnlockService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UnlockService<'a> {
    /// Create a new UnlockService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Has this subject redeemed any code for this gym?
    ///
    /// Unknown gyms are reported as such rather than silently "locked".
    #[instrument(skip(self))]
    pub async fn gym_unlocked(
        &self,
        subject_id: Uuid,
        gym_id: Uuid,
    ) -> ServiceResult<UnlockResponse> {
        self.ctx
            .gym_repo()
            .find_by_id(gym_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Gym", gym_id.to_string()))?;

        let unlocked = self
            .ctx
            .gym_code_repo()
            .is_unlocked(subject_id, gym_id)
            .await?;
        Ok(UnlockResponse { gym_id, unlocked })
    }

    /// Has this subject activated league participation (via a master code)?
    ///
    /// A subject with no profile row has never redeemed anything and is
    /// simply not activated.
    #[instrument(skip(self))]
    pub async fn participation_active(&self, subject_id: Uuid) -> ServiceResult<bool> {
        let profile = self.ctx.profile_repo().find_by_id(subject_id).await?;
        Ok(profile.is_some_and(|p| p.is_participation_activated()))
    }
}
