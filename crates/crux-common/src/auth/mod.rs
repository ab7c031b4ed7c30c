//! Identity bridge to the hosted auth platform
//!
//! The portal does not authenticate users itself; it verifies bearer tokens
//! minted by the hosted auth provider and exposes the result through the
//! `IdentityProvider` capability from `crux-core`.

mod jwt;

pub use jwt::{BearerIdentity, Claims, JwtService};
