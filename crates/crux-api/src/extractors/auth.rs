//! Authentication extractor
//!
//! Resolves the acting subject from the Authorization header through the
//! bounded identity bridge. Resolution failures keep their shape: a missing
//! header is 401, a bad token is 401, a bridge timeout is 503 - so a
//! redemption can never run against a half-resolved session.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use uuid::Uuid;

use crux_common::BearerIdentity;
use crux_core::Identity;
use crux_service::{resolve_identity, ServiceError};

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated subject extracted from a bearer token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub identity: Identity,
}

impl AuthUser {
    /// Subject id from the resolved identity
    pub fn subject_id(&self) -> Uuid {
        self.identity.id
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);
        let provider = BearerIdentity::new(
            app_state.service_context().jwt_service_arc(),
            bearer.token(),
        );

        match resolve_identity(&provider, app_state.identity_timeout()).await {
            Ok(Some(identity)) => Ok(AuthUser { identity }),
            Ok(None) => Err(ApiError::MissingAuth),
            Err(ServiceError::Domain(e)) if e.is_validation() => {
                tracing::warn!(error = %e, "Rejected bearer token");
                Err(ApiError::InvalidAuthFormat)
            }
            Err(e) => Err(e.into()),
        }
    }
}
