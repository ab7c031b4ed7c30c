//! PostgreSQL implementation of GymCodeRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crux_core::entities::GymCode;
use crux_core::traits::{GymCodeRepository, RepoResult};
use crux_core::DomainError;

use crate::models::GymCodeModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of GymCodeRepository
#[derive(Clone)]
pub struct PgGymCodeRepository {
    pool: PgPool,
}

impl PgGymCodeRepository {
    /// Create a new PgGymCodeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GymCodeRepository for PgGymCodeRepository {
    #[instrument(skip(self))]
    async fn find_by_token(&self, token: &str) -> RepoResult<Vec<GymCode>> {
        let results = sqlx::query_as::<_, GymCodeModel>(
            r#"
            SELECT id, gym_id, code, status, redeemed_by, redeemed_at, expires_at, created_at
            FROM gym_codes
            WHERE code = $1
            ORDER BY created_at
            "#,
        )
        .bind(token)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(GymCode::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_gym(&self, gym_id: Uuid) -> RepoResult<Vec<GymCode>> {
        let results = sqlx::query_as::<_, GymCodeModel>(
            r#"
            SELECT id, gym_id, code, status, redeemed_by, redeemed_at, expires_at, created_at
            FROM gym_codes
            WHERE gym_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(gym_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(GymCode::from).collect())
    }

    #[instrument(skip(self, codes), fields(count = codes.len()))]
    async fn create_batch(&self, codes: &[GymCode]) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        for code in codes {
            sqlx::query(
                r#"
                INSERT INTO gym_codes (id, gym_id, code, status, expires_at, created_at)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(code.id)
            .bind(code.gym_id)
            .bind(&code.code)
            .bind(code.status.as_str())
            .bind(code.expires_at)
            .bind(code.created_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_unique_violation(e, || DomainError::CodeValueExists))?;
        }

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    /// The redemption commit. A single conditional UPDATE: the guard on
    /// `redeemed_by IS NULL` makes concurrent attempts on the same code
    /// resolve to exactly one winner; zero rows back means the guard failed.
    #[instrument(skip(self))]
    async fn redeem(
        &self,
        id: Uuid,
        subject_id: Uuid,
        now: DateTime<Utc>,
    ) -> RepoResult<Option<GymCode>> {
        let result = sqlx::query_as::<_, GymCodeModel>(
            r#"
            UPDATE gym_codes
            SET redeemed_by = $2, redeemed_at = $3, status = 'redeemed'
            WHERE id = $1
              AND redeemed_by IS NULL
              AND (expires_at IS NULL OR expires_at >= $3)
            RETURNING id, gym_id, code, status, redeemed_by, redeemed_at, expires_at, created_at
            "#,
        )
        .bind(id)
        .bind(subject_id)
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(GymCode::from))
    }

    #[instrument(skip(self))]
    async fn is_unlocked(&self, subject_id: Uuid, gym_id: Uuid) -> RepoResult<bool> {
        let unlocked: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM gym_codes
                WHERE gym_id = $1 AND redeemed_by = $2
            )
            "#,
        )
        .bind(gym_id)
        .bind(subject_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(unlocked)
    }
}
