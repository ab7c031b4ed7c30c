//! Identity provider port
//!
//! The redemption flow needs a resolved subject before it may act. Identity
//! lives in the hosted auth platform; this trait is the injected capability
//! standing in for it, so flows can be tested without a live network and
//! callers never touch an ambient auth singleton.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::DomainError;

/// A resolved subject identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
}

/// Capability resolving the acting subject.
///
/// `Ok(None)` means "no subject" (guest); resolution failures and timeouts
/// are errors, so a caller can never mistake "still loading identity" for
/// "not signed in".
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn current_subject(&self) -> Result<Option<Identity>, DomainError>;
}
