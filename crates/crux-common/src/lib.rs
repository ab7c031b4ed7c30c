//! # crux-common
//!
//! Shared utilities including configuration, error handling, the JWT
//! identity bridge, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{BearerIdentity, Claims, JwtService};
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, IdentityConfig,
    JwtConfig, RateLimitConfig, ServerConfig,
};
pub use error::{AppError, AppResult};
pub use telemetry::{init_tracing, try_init_tracing, TracingConfig};
