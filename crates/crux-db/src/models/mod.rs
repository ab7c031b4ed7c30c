//! Database models - SQLx-compatible structs for PostgreSQL tables

mod gym;
mod gym_code;
mod master_code;
mod profile;

pub use gym::GymModel;
pub use gym_code::GymCodeModel;
pub use master_code::MasterCodeModel;
pub use profile::ProfileModel;
