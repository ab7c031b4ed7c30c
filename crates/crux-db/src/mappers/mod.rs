//! Model ↔ entity mappers

mod gym;
mod gym_code;
mod master_code;
mod profile;
