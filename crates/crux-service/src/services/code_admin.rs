//! Code administration service
//!
//! Minting and listing codes. Gym codes are managed by gym admins (and the
//! league admin); master codes belong to the league admin alone.

use chrono::{DateTime, Utc};
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crux_core::entities::{GymCode, MasterCode, Profile};
use crux_core::{generate_code_token, DomainError};

use crate::dto::{GymCodeResponse, MasterCodeResponse, MintCodesRequest, MintedBatchResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// How many times a batch insert is retried when a generated token
/// collides with an existing one.
const MINT_RETRIES: usize = 3;

/// Code administration service
pub struct CodeAdminService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CodeAdminService<'a> {
    /// Create a new CodeAdminService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Mint a batch of single-use codes for a gym.
    ///
    /// Requires the gym admin or league admin role.
    #[instrument(skip(self, request), fields(count = request.count))]
    pub async fn mint_gym_codes(
        &self,
        actor_id: Uuid,
        gym_id: Uuid,
        request: MintCodesRequest,
    ) -> ServiceResult<MintedBatchResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let actor = self.require_actor(actor_id).await?;
        if !actor.role.can_manage_codes() {
            return Err(ServiceError::forbidden("gym admin"));
        }

        self.ctx
            .gym_repo()
            .find_by_id(gym_id)
            .await?
            .ok_or(DomainError::GymNotFound(gym_id))?;

        let expires_at = request.expires_at;
        let count = request.count as usize;

        let mut last_err = None;
        for _ in 0..MINT_RETRIES {
            let batch: Vec<GymCode> = (0..count)
                .map(|_| GymCode::new(gym_id, generate_code_token()).with_expiry(expires_at))
                .collect();
            match self.ctx.gym_code_repo().create_batch(&batch).await {
                Ok(()) => {
                    info!(gym_id = %gym_id, actor_id = %actor_id, count, "Gym codes minted");
                    return Ok(batch_response(
                        batch.into_iter().map(|c| c.code).collect(),
                        expires_at,
                    ));
                }
                // Token collision inside the gym; regenerate and retry
                Err(DomainError::CodeValueExists) => {
                    last_err = Some(DomainError::CodeValueExists);
                }
                Err(e) => return Err(e.into()),
            }
        }
        Err(last_err.map_or_else(
            || ServiceError::internal("mint retry loop exited without error"),
            Into::into,
        ))
    }

    /// List all codes minted for a gym.
    ///
    /// Requires the gym admin or league admin role.
    #[instrument(skip(self))]
    pub async fn list_gym_codes(
        &self,
        actor_id: Uuid,
        gym_id: Uuid,
    ) -> ServiceResult<Vec<GymCodeResponse>> {
        let actor = self.require_actor(actor_id).await?;
        if !actor.role.can_manage_codes() {
            return Err(ServiceError::forbidden("gym admin"));
        }
        self.ctx
            .gym_repo()
            .find_by_id(gym_id)
            .await?
            .ok_or(DomainError::GymNotFound(gym_id))?;

        let codes = self.ctx.gym_code_repo().find_by_gym(gym_id).await?;
        Ok(codes.into_iter().map(GymCodeResponse::from).collect())
    }

    /// Mint a batch of master codes.
    ///
    /// Requires the league admin role.
    #[instrument(skip(self, request), fields(count = request.count))]
    pub async fn mint_master_codes(
        &self,
        actor_id: Uuid,
        request: MintCodesRequest,
    ) -> ServiceResult<MintedBatchResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let actor = self.require_actor(actor_id).await?;
        if !actor.role.can_manage_league() {
            return Err(ServiceError::forbidden("league admin"));
        }

        let expires_at = request.expires_at;
        let count = request.count as usize;

        let mut last_err = None;
        for _ in 0..MINT_RETRIES {
            let batch: Vec<MasterCode> = (0..count)
                .map(|_| MasterCode::new(generate_code_token()).with_expiry(expires_at))
                .collect();
            match self.ctx.master_code_repo().create_batch(&batch).await {
                Ok(()) => {
                    info!(actor_id = %actor_id, count, "Master codes minted");
                    return Ok(batch_response(
                        batch.into_iter().map(|c| c.code).collect(),
                        expires_at,
                    ));
                }
                Err(DomainError::CodeValueExists) => {
                    last_err = Some(DomainError::CodeValueExists);
                }
                Err(e) => return Err(e.into()),
            }
        }
        Err(last_err.map_or_else(
            || ServiceError::internal("mint retry loop exited without error"),
            Into::into,
        ))
    }

    /// List all master codes.
    ///
    /// Requires the league admin role.
    #[instrument(skip(self))]
    pub async fn list_master_codes(
        &self,
        actor_id: Uuid,
    ) -> ServiceResult<Vec<MasterCodeResponse>> {
        let actor = self.require_actor(actor_id).await?;
        if !actor.role.can_manage_league() {
            return Err(ServiceError::forbidden("league admin"));
        }
        let codes = self.ctx.master_code_repo().find_all().await?;
        Ok(codes.into_iter().map(MasterCodeResponse::from).collect())
    }

    async fn require_actor(&self, actor_id: Uuid) -> ServiceResult<Profile> {
        self.ctx
            .profile_repo()
            .find_by_id(actor_id)
            .await?
            .ok_or_else(|| ServiceError::forbidden("gym admin"))
    }
}

fn batch_response(codes: Vec<String>, expires_at: Option<DateTime<Utc>>) -> MintedBatchResponse {
    MintedBatchResponse {
        count: codes.len(),
        codes,
        expires_at,
    }
}
