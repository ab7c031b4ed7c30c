//! PostgreSQL implementation of ProfileRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crux_core::entities::Profile;
use crux_core::traits::{ProfileRepository, RepoResult};
use crux_core::DomainError;

use crate::models::ProfileModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of ProfileRepository
#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    /// Create a new PgProfileRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Profile>> {
        let result = sqlx::query_as::<_, ProfileModel>(
            r#"
            SELECT id, email, display_name, role, participation_activated_at,
                   created_at, updated_at
            FROM profiles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Profile::from))
    }

    #[instrument(skip(self, profile), fields(id = %profile.id))]
    async fn create(&self, profile: &Profile) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO profiles (id, email, display_name, role, participation_activated_at,
                                  created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(profile.id)
        .bind(&profile.email)
        .bind(&profile.display_name)
        .bind(profile.role.as_str())
        .bind(profile.participation_activated_at)
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::ValidationError("profile already exists".to_string())
            })
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgProfileRepository>();
    }
}
