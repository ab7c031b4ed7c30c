//! JWT verification for hosted-auth bearer tokens
//!
//! Uses the `jsonwebtoken` crate with an HS256 shared secret. Token minting
//! normally happens in the auth platform; `issue` exists for tests and
//! local tooling.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crux_core::{DomainError, Identity, IdentityProvider};

use crate::error::AppError;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (profile id)
    pub sub: String,
    /// Subject email
    pub email: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Get the subject id as a Uuid
    ///
    /// # Errors
    /// Returns an error if the subject is not a valid uuid
    pub fn subject_id(&self) -> Result<Uuid, AppError> {
        self.sub.parse().map_err(|_| AppError::InvalidToken)
    }
}

/// JWT service for verifying (and, in tests, minting) tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry: i64,
}

impl JwtService {
    /// Create a new JWT service with the shared secret and expiry seconds
    #[must_use]
    pub fn new(secret: &str, token_expiry: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_expiry,
        }
    }

    /// Mint a token for a subject. Test/tooling helper; production tokens
    /// come from the hosted auth platform.
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue(&self, subject_id: Uuid, email: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject_id.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.token_expiry)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))
    }

    /// Decode and validate a bearer token
    ///
    /// # Errors
    /// Returns an error if the token is invalid or expired
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let validation = Validation::default();

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            })?;

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("token_expiry", &self.token_expiry)
            .finish_non_exhaustive()
    }
}

/// `IdentityProvider` backed by a presented bearer token.
///
/// Built per request; an absent token resolves to `None` (guest), a bad or
/// expired token is an error, never silently a guest.
#[derive(Clone)]
pub struct BearerIdentity {
    jwt: Arc<JwtService>,
    token: Option<String>,
}

impl BearerIdentity {
    /// Wrap a presented bearer token
    pub fn new(jwt: Arc<JwtService>, token: impl Into<String>) -> Self {
        Self {
            jwt,
            token: Some(token.into()),
        }
    }

    /// No token presented (guest)
    pub fn anonymous(jwt: Arc<JwtService>) -> Self {
        Self { jwt, token: None }
    }
}

#[async_trait]
impl IdentityProvider for BearerIdentity {
    async fn current_subject(&self) -> Result<Option<Identity>, DomainError> {
        let Some(token) = &self.token else {
            return Ok(None);
        };

        let claims = self
            .jwt
            .verify(token)
            .map_err(|e| DomainError::ValidationError(e.to_string()))?;
        let id = claims
            .subject_id()
            .map_err(|e| DomainError::ValidationError(e.to_string()))?;

        Ok(Some(Identity {
            id,
            email: claims.email,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> JwtService {
        JwtService::new("test-secret-key-that-is-long-enough", 3600)
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let service = create_test_service();
        let subject = Uuid::new_v4();

        let token = service.issue(subject, "climber@example.com").unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.subject_id().unwrap(), subject);
        assert_eq!(claims.email, "climber@example.com");
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let service = create_test_service();
        assert!(service.verify("not-a-token").is_err());
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let service = create_test_service();
        let other = JwtService::new("a-completely-different-secret-key", 3600);

        let token = service.issue(Uuid::new_v4(), "climber@example.com").unwrap();
        assert!(other.verify(&token).is_err());
    }

    #[tokio::test]
    async fn test_bearer_identity_resolves_subject() {
        let service = Arc::new(create_test_service());
        let subject = Uuid::new_v4();
        let token = service.issue(subject, "climber@example.com").unwrap();

        let provider = BearerIdentity::new(service, token);
        let identity = provider.current_subject().await.unwrap().unwrap();
        assert_eq!(identity.id, subject);
        assert_eq!(identity.email, "climber@example.com");
    }

    #[tokio::test]
    async fn test_anonymous_is_guest_not_error() {
        let provider = BearerIdentity::anonymous(Arc::new(create_test_service()));
        assert_eq!(provider.current_subject().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_invalid_token_is_error_not_guest() {
        let provider = BearerIdentity::new(Arc::new(create_test_service()), "garbage");
        assert!(provider.current_subject().await.is_err());
    }
}
