//! Domain entities - core business objects

mod gym;
mod gym_code;
mod master_code;
mod profile;

pub use gym::Gym;
pub use gym_code::{CodeStatus, GymCode};
pub use master_code::MasterCode;
pub use profile::{Profile, Role};
