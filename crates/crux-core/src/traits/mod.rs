//! Ports - repository and identity traits implemented by infrastructure

mod identity;
mod repositories;

pub use identity::{Identity, IdentityProvider};
pub use repositories::{
    GymCodeRepository, GymRepository, MasterCodeRepository, ProfileRepository, RepoResult,
};
