//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, the infrastructure layer provides
//! the implementation. The redemption methods carry the one correctness-
//! critical contract of the system: the commit must be a single conditional
//! write, so that concurrent attempts on the same code cannot both succeed.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::{Gym, GymCode, MasterCode, Profile};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Gym Code Repository
// ============================================================================

#[async_trait]
pub trait GymCodeRepository: Send + Sync {
    /// Find all codes matching a normalized token, across gyms.
    ///
    /// Tokens are unique per gym but two gyms may have minted the same
    /// string, so this can return more than one record. The caller picks
    /// the one for its gym; a non-empty result with no match for the
    /// expected gym means "wrong gym", distinct from "not found".
    async fn find_by_token(&self, token: &str) -> RepoResult<Vec<GymCode>>;

    /// List all codes minted for a gym, newest first
    async fn find_by_gym(&self, gym_id: Uuid) -> RepoResult<Vec<GymCode>>;

    /// Bulk insert a freshly minted batch
    async fn create_batch(&self, codes: &[GymCode]) -> RepoResult<()>;

    /// Atomically redeem a code for a subject.
    ///
    /// Must be a single conditional write guarded by `redeemed_by IS NULL`
    /// and a non-expired check, never a read-then-write pair. Returns the
    /// updated record, or `None` when the guard failed (lost a race to a
    /// concurrent redeemer, or expired between check and commit).
    async fn redeem(
        &self,
        id: Uuid,
        subject_id: Uuid,
        now: DateTime<Utc>,
    ) -> RepoResult<Option<GymCode>>;

    /// Unlock query: has this subject redeemed any code for this gym?
    ///
    /// Recomputed from the codes table on every call, never cached.
    async fn is_unlocked(&self, subject_id: Uuid, gym_id: Uuid) -> RepoResult<bool>;
}

// ============================================================================
// Master Code Repository
// ============================================================================

#[async_trait]
pub trait MasterCodeRepository: Send + Sync {
    /// Find a master code by its normalized token (globally unique)
    async fn find_by_token(&self, token: &str) -> RepoResult<Option<MasterCode>>;

    /// List all master codes, newest first
    async fn find_all(&self) -> RepoResult<Vec<MasterCode>>;

    /// Bulk insert a freshly minted batch
    async fn create_batch(&self, codes: &[MasterCode]) -> RepoResult<()>;

    /// Atomically redeem a master code and activate participation.
    ///
    /// Both effects run in one transaction: the conditional code commit
    /// (same guard as gym codes) and a conditional stamp of the subject's
    /// `participation_activated_at` (`WHERE participation_activated_at IS
    /// NULL`, first activation wins). The profile stamp must not happen if
    /// the code commit finds the guard already violated; returns `None` in
    /// that case.
    async fn redeem(
        &self,
        id: Uuid,
        subject_id: Uuid,
        now: DateTime<Utc>,
    ) -> RepoResult<Option<MasterCode>>;
}

// ============================================================================
// Profile Repository
// ============================================================================

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find profile by subject id
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Profile>>;

    /// Create a new profile
    async fn create(&self, profile: &Profile) -> RepoResult<()>;
}

// ============================================================================
// Gym Repository
// ============================================================================

#[async_trait]
pub trait GymRepository: Send + Sync {
    /// Find gym by id
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Gym>>;

    /// List all gyms, by name
    async fn find_all(&self) -> RepoResult<Vec<Gym>>;

    /// Create a new gym
    async fn create(&self, gym: &Gym) -> RepoResult<()>;
}
