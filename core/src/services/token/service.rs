//! Token issuance and refresh token validation

use chrono::{Duration, Utc};
use tracing::debug;

use crate::domain::entities::token::{AccessClaims, RefreshClaims, RefreshToken, TokenPair};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};
use crate::repositories::TokenRepository;

use super::codec::TokenCodec;
use super::config::TokenServiceConfig;

/// Service for issuing, validating and revoking session tokens
///
/// Issuance writes the refresh token record before the pair is handed out, so
/// a returned pair is always backed by durable state. The call is not
/// idempotent: every invocation creates a fresh, independently active session.
pub struct TokenService<R: TokenRepository> {
    repository: R,
    codec: TokenCodec,
    config: TokenServiceConfig,
}

impl<R: TokenRepository> TokenService<R> {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `repository` - Token repository for persistence
    /// * `config` - The two signing contexts
    pub fn new(repository: R, config: TokenServiceConfig) -> Self {
        let codec = TokenCodec::new(&config);
        Self {
            repository,
            codec,
            config,
        }
    }

    /// Issues a new access/refresh token pair for a user
    ///
    /// The refresh token record is persisted before the pair is returned;
    /// a persistence failure means no pair is handed out.
    ///
    /// # Arguments
    ///
    /// * `user` - The user the session belongs to
    /// * `client_ip` - Client IP recorded on the refresh token entry
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - Both tokens with their expiry timestamps
    /// * `Err(DomainError)` - Signing or persistence failed
    pub async fn issue_pair(&self, user: &User, client_ip: &str) -> Result<TokenPair, DomainError> {
        let now = Utc::now();
        let access_expires_at = now + Duration::seconds(self.config.access.ttl_seconds);
        let refresh_expires_at = now + Duration::seconds(self.config.refresh.ttl_seconds);

        let access_claims = AccessClaims::new(
            user.id,
            &user.username,
            &user.email,
            user.role.as_str(),
            &self.config.access.issuer,
            &self.config.access.audience,
            access_expires_at,
        );
        let access_token = self.codec.encode_access(&access_claims)?;

        let refresh_claims = RefreshClaims::new(
            user.id,
            &self.config.refresh.issuer,
            &self.config.refresh.audience,
            refresh_expires_at,
        );
        let refresh_token = self.codec.encode_refresh(&refresh_claims)?;

        let record = RefreshToken::new(
            refresh_token.clone(),
            user.id,
            refresh_expires_at,
            client_ip,
        );
        self.repository.save_refresh_token(record).await?;

        debug!(user_id = %user.id, "issued token pair");

        Ok(TokenPair::new(
            access_token,
            access_expires_at,
            refresh_token,
            refresh_expires_at,
        ))
    }

    /// Validates an access token and returns its claims
    ///
    /// Pure computation against the access signing context; never touches
    /// the store.
    pub fn validate_access_token(&self, token: &str) -> Result<AccessClaims, DomainError> {
        self.codec.decode_access(token)
    }

    /// Runs the stateless and store-side checks on a presented refresh token
    ///
    /// In order: signature/issuer/audience/expiry against the refresh signing
    /// context, presence of the subject claim, store lookup, activity check.
    /// The first failing check wins; no store access happens before the
    /// token itself validates.
    ///
    /// # Returns
    ///
    /// * `Ok(RefreshToken)` - The active store entry for the token
    /// * `Err(DomainError::Token(_))` - Which check failed
    pub async fn check_refresh_token(&self, token: &str) -> Result<RefreshToken, DomainError> {
        let claims = self.codec.decode_refresh(token)?;

        claims
            .subject()
            .ok_or(DomainError::Token(TokenError::MissingClaim {
                claim: "sub".to_string(),
            }))?;

        let record = self
            .repository
            .find_refresh_token(token)
            .await?
            .ok_or(DomainError::Token(TokenError::NotRecognized))?;

        if !record.is_active() {
            return Err(TokenError::NotActive.into());
        }

        Ok(record)
    }

    /// Revokes a refresh token, optionally chaining it to its successor
    ///
    /// Delegates to the store's conditional revoke; revoking a token that is
    /// already revoked or unknown surfaces as an error rather than being
    /// swallowed.
    pub async fn revoke_refresh_token(
        &self,
        token: &str,
        client_ip: &str,
        replaced_by_token: Option<&str>,
    ) -> Result<(), DomainError> {
        self.repository
            .revoke_token(token, client_ip, replaced_by_token)
            .await
    }
}
