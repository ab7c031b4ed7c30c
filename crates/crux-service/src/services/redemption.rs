//! Redemption service
//!
//! The single-use commit path for gym codes and master codes. Pre-checks
//! give precise errors for the common failures; the actual commit is the
//! repository's conditional write, so two concurrent attempts on the same
//! code can never both succeed. When the commit loses the race, the code is
//! re-read once to report what actually happened.

use chrono::Utc;
use tracing::{info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

use crux_core::entities::{GymCode, MasterCode};
use crux_core::{CodeToken, DomainError, Identity};

use crate::dto::{
    GymCodeResponse, MasterRedemptionResponse, RedeemGymCodeRequest, RedeemMasterCodeRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::profile::ProfileService;

/// Redemption service
pub struct RedemptionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RedemptionService<'a> {
    /// Create a new RedemptionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Redeem a gym code for the resolved subject.
    ///
    /// On success the code is permanently bound to the subject and the
    /// gym's league content is unlocked for them.
    #[instrument(skip(self, identity, request), fields(subject_id = %identity.id, gym_id = %request.gym_id))]
    pub async fn redeem_gym_code(
        &self,
        identity: &Identity,
        request: RedeemGymCodeRequest,
    ) -> ServiceResult<GymCodeResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let token =
            CodeToken::parse(&request.code).map_err(|_| DomainError::InvalidCodeFormat)?;

        // The redeemed_by column references profiles, so the subject's row
        // must exist before the commit.
        let profile = ProfileService::new(self.ctx).get_or_create(identity).await?;

        self.ctx
            .gym_repo()
            .find_by_id(request.gym_id)
            .await?
            .ok_or(DomainError::GymNotFound(request.gym_id))?;

        let candidates = self.ctx.gym_code_repo().find_by_token(token.as_str()).await?;
        if candidates.is_empty() {
            return Err(DomainError::CodeNotFound(token.into_inner()).into());
        }
        let code = candidates
            .into_iter()
            .find(|c| c.gym_id == request.gym_id)
            .ok_or_else(|| DomainError::WrongGym {
                code: token.as_str().to_string(),
            })?;

        let now = Utc::now();
        if code.is_redeemed() {
            return Err(DomainError::AlreadyRedeemed(token.into_inner()).into());
        }
        if code.is_expired_at(now) {
            return Err(DomainError::CodeExpired(token.into_inner()).into());
        }

        match self
            .ctx
            .gym_code_repo()
            .redeem(code.id, profile.id, now)
            .await?
        {
            Some(redeemed) => {
                info!(
                    code = %token,
                    gym_id = %redeemed.gym_id,
                    subject_id = %profile.id,
                    "Gym code redeemed"
                );
                Ok(GymCodeResponse::from(redeemed))
            }
            None => Err(self.classify_gym_loss(&token, code.id).await),
        }
    }

    /// Redeem a master code for the resolved subject.
    ///
    /// Consuming the code and stamping the subject's league participation
    /// happen in one transaction inside the repository; the first master
    /// code a subject redeems sets the activation timestamp, later ones
    /// consume their code but leave the stamp untouched.
    #[instrument(skip(self, identity, request), fields(subject_id = %identity.id))]
    pub async fn redeem_master_code(
        &self,
        identity: &Identity,
        request: RedeemMasterCodeRequest,
    ) -> ServiceResult<MasterRedemptionResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let token =
            CodeToken::parse(&request.code).map_err(|_| DomainError::InvalidCodeFormat)?;

        let profile = ProfileService::new(self.ctx).get_or_create(identity).await?;

        let code = self
            .ctx
            .master_code_repo()
            .find_by_token(token.as_str())
            .await?
            .ok_or_else(|| DomainError::CodeNotFound(token.as_str().to_string()))?;

        let now = Utc::now();
        if code.is_redeemed() {
            return Err(DomainError::AlreadyRedeemed(token.into_inner()).into());
        }
        if code.is_expired_at(now) {
            return Err(DomainError::CodeExpired(token.into_inner()).into());
        }

        match self
            .ctx
            .master_code_repo()
            .redeem(code.id, profile.id, now)
            .await?
        {
            Some(redeemed) => {
                // Re-read for the activation stamp; an earlier redemption
                // may have set it before this one.
                let activated_at = self
                    .ctx
                    .profile_repo()
                    .find_by_id(profile.id)
                    .await?
                    .and_then(|p| p.participation_activated_at);

                info!(
                    code = %token,
                    subject_id = %profile.id,
                    "Master code redeemed"
                );
                Ok(MasterRedemptionResponse {
                    code: redeemed.into(),
                    participation_activated_at: activated_at,
                })
            }
            None => Err(self.classify_master_loss(&token, code.id).await),
        }
    }

    /// The conditional write found its guard violated after a clean
    /// pre-check: someone else got there first, or the expiry boundary
    /// passed in between. Re-read to report the real reason.
    async fn classify_gym_loss(&self, token: &CodeToken, id: Uuid) -> ServiceError {
        warn!(code = %token, "Gym code commit lost its guard, classifying");
        let current: Option<GymCode> = match self
            .ctx
            .gym_code_repo()
            .find_by_token(token.as_str())
            .await
        {
            Ok(codes) => codes.into_iter().find(|c| c.id == id),
            Err(e) => return e.into(),
        };
        loss_error(token, current.as_ref().map(|c| (c.is_redeemed(), c.is_expired())))
    }

    async fn classify_master_loss(&self, token: &CodeToken, id: Uuid) -> ServiceError {
        warn!(code = %token, "Master code commit lost its guard, classifying");
        let current: Option<MasterCode> = match self
            .ctx
            .master_code_repo()
            .find_by_token(token.as_str())
            .await
        {
            Ok(code) => code.filter(|c| c.id == id),
            Err(e) => return e.into(),
        };
        loss_error(token, current.as_ref().map(|c| (c.is_redeemed(), c.is_expired())))
    }
}

fn loss_error(token: &CodeToken, state: Option<(bool, bool)>) -> ServiceError {
    match state {
        Some((true, _)) => DomainError::AlreadyRedeemed(token.as_str().to_string()).into(),
        Some((false, true)) => DomainError::CodeExpired(token.as_str().to_string()).into(),
        // Vanished or in a state the guard should have accepted; treat as
        // raced, the client may safely report "already used".
        _ => DomainError::AlreadyRedeemed(token.as_str().to_string()).into(),
    }
}
