//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod codes;
pub mod gyms;
pub mod health;
pub mod profiles;
pub mod redemptions;
