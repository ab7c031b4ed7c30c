//! PostgreSQL implementation of GymRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crux_core::entities::Gym;
use crux_core::traits::{GymRepository, RepoResult};
use crux_core::DomainError;

use crate::models::GymModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of GymRepository
#[derive(Clone)]
pub struct PgGymRepository {
    pool: PgPool,
}

impl PgGymRepository {
    /// Create a new PgGymRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GymRepository for PgGymRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Gym>> {
        let result = sqlx::query_as::<_, GymModel>(
            r#"
            SELECT id, name, city, created_at, updated_at
            FROM gyms
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Gym::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Gym>> {
        let results = sqlx::query_as::<_, GymModel>(
            r#"
            SELECT id, name, city, created_at, updated_at
            FROM gyms
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Gym::from).collect())
    }

    #[instrument(skip(self, gym), fields(name = %gym.name))]
    async fn create(&self, gym: &Gym) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO gyms (id, name, city, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(gym.id)
        .bind(&gym.name)
        .bind(&gym.city)
        .bind(gym.created_at)
        .bind(gym.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::GymNameExists))?;

        Ok(())
    }
}
