//! PostgreSQL implementation of MasterCodeRepository
//!
//! Master-code redemption has a second effect: the first successful
//! redemption by a subject stamps `participation_activated_at` on their
//! profile. Both writes share one transaction so the stamp can never land
//! without the code commit.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crux_core::entities::MasterCode;
use crux_core::traits::{MasterCodeRepository, RepoResult};
use crux_core::DomainError;

use crate::models::MasterCodeModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of MasterCodeRepository
#[derive(Clone)]
pub struct PgMasterCodeRepository {
    pool: PgPool,
}

impl PgMasterCodeRepository {
    /// Create a new PgMasterCodeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MasterCodeRepository for PgMasterCodeRepository {
    #[instrument(skip(self))]
    async fn find_by_token(&self, token: &str) -> RepoResult<Option<MasterCode>> {
        let result = sqlx::query_as::<_, MasterCodeModel>(
            r#"
            SELECT id, code, status, redeemed_by, redeemed_at, expires_at, created_at
            FROM master_codes
            WHERE code = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(MasterCode::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<MasterCode>> {
        let results = sqlx::query_as::<_, MasterCodeModel>(
            r#"
            SELECT id, code, status, redeemed_by, redeemed_at, expires_at, created_at
            FROM master_codes
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(MasterCode::from).collect())
    }

    #[instrument(skip(self, codes), fields(count = codes.len()))]
    async fn create_batch(&self, codes: &[MasterCode]) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        for code in codes {
            sqlx::query(
                r#"
                INSERT INTO master_codes (id, code, status, expires_at, created_at)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(code.id)
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

    #[instrument(skip(self))]
    async fn redeem(
        &self,
        id: Uuid,
        subject_id: Uuid,
        now: DateTime<Utc>,
    ) -> RepoResult<Option<MasterCode>> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Conditional code commit, same guard as gym codes
        let updated = sqlx::query_as::<_, MasterCodeModel>(
            r#"
            UPDATE master_codes
            SET redeemed_by = $2, redeemed_at = $3, status = 'redeemed'
            WHERE id = $1
              AND redeemed_by IS NULL
              AND (expires_at IS NULL OR expires_at >= $3)
            RETURNING id, code, status, redeemed_by, redeemed_at, expires_at, created_at
            "#,
        )
        .bind(id)
        .bind(subject_id)
        .bind(now)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let Some(model) = updated else {
            // Guard failed: nothing committed, nothing stamped
            tx.rollback().await.map_err(map_db_error)?;
            return Ok(None);
        };

        // First activation wins; later master codes leave the stamp alone
        sqlx::query(
            r#"
            UPDATE profiles
            SET participation_activated_at = $2, updated_at = $2
            WHERE id = $1 AND participation_activated_at IS NULL
            "#,
        )
        .bind(subject_id)
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(Some(MasterCode::from(model)))
    }
}
