//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in crux-core.

mod error;
mod gym;
mod gym_code;
mod master_code;
mod profile;

pub use gym::PgGymRepository;
pub use gym_code::PgGymCodeRepository;
pub use master_code::PgMasterCodeRepository;
pub use profile::PgProfileRepository;
