//! Value objects - immutable domain values with validation

mod code_token;

pub use code_token::{generate_code_token, CodeToken, CodeTokenError};
