//! Identity bridge
//!
//! Resolution against the hosted auth platform is bounded: a hung provider
//! surfaces as a retryable timeout instead of stalling the redemption flow.
//! Callers must distinguish all three outcomes - resolved subject, no
//! subject (guest), and failure - and never treat a failure as a guest.

use std::time::Duration;

use tracing::{instrument, warn};

use crux_common::AppError;
use crux_core::{Identity, IdentityProvider};

use super::error::ServiceResult;

/// Resolve the current subject with a hard deadline.
///
/// `Ok(None)` means an anonymous caller; timeouts and provider failures
/// are errors so a redemption can never be attributed to a half-resolved
/// session.
#[instrument(skip(provider))]
pub async fn resolve_identity(
    provider: &dyn IdentityProvider,
    timeout: Duration,
) -> ServiceResult<Option<Identity>> {
    match tokio::time::timeout(timeout, provider.current_subject()).await {
        Ok(result) => Ok(result?),
        Err(_) => {
            warn!(timeout_ms = timeout.as_millis() as u64, "Identity resolution timed out");
            Err(AppError::IdentityTimeout.into())
        }
    }
}
