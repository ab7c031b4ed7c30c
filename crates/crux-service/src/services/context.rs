//! Service context - dependency container for services
//!
//! Holds the repositories and shared services every flow needs.

use std::sync::Arc;

use crux_common::auth::JwtService;
use crux_core::traits::{
    GymCodeRepository, GymRepository, MasterCodeRepository, ProfileRepository,
};
use crux_db::PgPool;

/// Service context containing all dependencies
///
/// The one container passed to every service. Repositories are held as
/// trait objects so tests can swap in in-memory implementations.
#[derive(Clone)]
pub struct ServiceContext {
    pool: PgPool,

    gym_code_repo: Arc<dyn GymCodeRepository>,
    master_code_repo: Arc<dyn MasterCodeRepository>,
    profile_repo: Arc<dyn ProfileRepository>,
    gym_repo: Arc<dyn GymRepository>,

    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        gym_code_repo: Arc<dyn GymCodeRepository>,
        master_code_repo: Arc<dyn MasterCodeRepository>,
        profile_repo: Arc<dyn ProfileRepository>,
        gym_repo: Arc<dyn GymRepository>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            pool,
            gym_code_repo,
            master_code_repo,
            profile_repo,
            gym_repo,
            jwt_service,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the gym code repository
    pub fn gym_code_repo(&self) -> &dyn GymCodeRepository {
        self.gym_code_repo.as_ref()
    }

    /// Get the master code repository
    pub fn master_code_repo(&self) -> &dyn MasterCodeRepository {
        self.master_code_repo.as_ref()
    }

    /// Get the profile repository
    pub fn profile_repo(&self) -> &dyn ProfileRepository {
        self.profile_repo.as_ref()
    }

    /// Get the gym repository
    pub fn gym_repo(&self) -> &dyn GymRepository {
        self.gym_repo.as_ref()
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the JWT service behind its Arc (for identity providers)
    pub fn jwt_service_arc(&self) -> Arc<JwtService> {
        Arc::clone(&self.jwt_service)
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    gym_code_repo: Option<Arc<dyn GymCodeRepository>>,
    master_code_repo: Option<Arc<dyn MasterCodeRepository>>,
    profile_repo: Option<Arc<dyn ProfileRepository>>,
    gym_repo: Option<Arc<dyn GymRepository>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            gym_code_repo: None,
            master_code_repo: None,
            profile_repo: None,
            gym_repo: None,
            jwt_service: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn gym_code_repo(mut self, repo: Arc<dyn GymCodeRepository>) -> Self {
        self.gym_code_repo = Some(repo);
        self
    }

    pub fn master_code_repo(mut self, repo: Arc<dyn MasterCodeRepository>) -> Self {
        self.master_code_repo = Some(repo);
        self
    }

    pub fn profile_repo(mut self, repo: Arc<dyn ProfileRepository>) -> Self {
        self.profile_repo = Some(repo);
        self
    }

    pub fn gym_repo(mut self, repo: Arc<dyn GymRepository>) -> Self {
        self.gym_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;
        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.gym_code_repo
                .ok_or_else(|| ServiceError::validation("gym_code_repo is required"))?,
            self.master_code_repo
                .ok_or_else(|| ServiceError::validation("master_code_repo is required"))?,
            self.profile_repo
                .ok_or_else(|| ServiceError::validation("profile_repo is required"))?,
            self.gym_repo
                .ok_or_else(|| ServiceError::validation("gym_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
