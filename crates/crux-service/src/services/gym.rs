//! Gym service
//!
//! Gym records are managed by the league admin; reads are open to any
//! authenticated subject (the gym list is what the portal's scan screen
//! offers to pick from).

use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crux_core::entities::Gym;
use crux_core::DomainError;

use crate::dto::{CreateGymRequest, GymResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Gym service
pub struct GymService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GymService<'a> {
    /// Create a new GymService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new gym. Requires the league admin role.
    #[instrument(skip(self, request))]
    pub async fn create_gym(
        &self,
        actor_id: Uuid,
        request: CreateGymRequest,
    ) -> ServiceResult<GymResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let actor = self
            .ctx
            .profile_repo()
            .find_by_id(actor_id)
            .await?
            .ok_or_else(|| ServiceError::forbidden("league admin"))?;
        if !actor.role.can_manage_league() {
            return Err(ServiceError::forbidden("league admin"));
        }

        let gym = Gym::new(request.name, request.city);
        self.ctx.gym_repo().create(&gym).await?;

        info!(gym_id = %gym.id, name = %gym.name, "Gym created");
        Ok(GymResponse::from(gym))
    }

    /// Get a gym by id
    #[instrument(skip(self))]
    pub async fn get_gym(&self, gym_id: Uuid) -> ServiceResult<GymResponse> {
        let gym = self
            .ctx
            .gym_repo()
            .find_by_id(gym_id)
            .await?
            .ok_or(DomainError::GymNotFound(gym_id))?;
        Ok(GymResponse::from(gym))
    }

    /// List all gyms
    #[instrument(skip(self))]
    pub async fn list_gyms(&self) -> ServiceResult<Vec<GymResponse>> {
        let gyms = self.ctx.gym_repo().find_all().await?;
        Ok(gyms.into_iter().map(GymResponse::from).collect())
    }
}
