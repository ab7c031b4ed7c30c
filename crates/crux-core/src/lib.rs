//! # crux-core
//!
//! Domain layer for the climbing-league portal: entities, value objects,
//! repository traits, and the scan-session state machine.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod scan;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{CodeStatus, Gym, GymCode, MasterCode, Profile, Role};
pub use error::DomainError;
pub use scan::{ScanSession, ScanState};
pub use traits::{
    GymCodeRepository, GymRepository, Identity, IdentityProvider, MasterCodeRepository,
    ProfileRepository, RepoResult,
};
pub use value_objects::{generate_code_token, CodeToken, CodeTokenError};
