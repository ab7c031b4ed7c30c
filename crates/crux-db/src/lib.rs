//! # crux-db
//!
//! Database layer implementing the repository traits with PostgreSQL via SQLx:
//! connection pool management, `FromRow` models, model ↔ entity mappers, and
//! repository implementations. The single conditional-write redemption commit
//! lives in [`repositories::PgGymCodeRepository`] and
//! [`repositories::PgMasterCodeRepository`].

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgGymCodeRepository, PgGymRepository, PgMasterCodeRepository, PgProfileRepository,
};
