//! Token repository trait defining the interface for refresh token persistence.

use async_trait::async_trait;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

/// Repository trait for RefreshToken entity persistence operations
///
/// This trait defines the contract for managing refresh tokens in the database.
/// The store is append-only: tokens are revoked in place, never deleted, so the
/// replacement chain stays reconstructible for auditing.
///
/// # Security Considerations
/// - The token string is the primary key; a duplicate insert must fail
/// - Revocation is a conditional update and must not clobber an earlier revocation
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Save a new refresh token to the repository
    ///
    /// # Arguments
    /// * `token` - The RefreshToken entity to persist
    ///
    /// # Returns
    /// * `Ok(RefreshToken)` - The saved token
    /// * `Err(DomainError::Token(TokenError::DuplicateToken))` - A record with the
    ///   same token string already exists
    /// * `Err(DomainError)` - Database error occurred
    ///
    /// # Example
    /// ```no_run
    /// # use chrono::{Duration, Utc};
    /// # use uuid::Uuid;
    /// # use th_core::repositories::TokenRepository;
    /// # use th_core::domain::entities::token::RefreshToken;
    /// # async fn example(repo: &impl TokenRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let token = RefreshToken::new(
    ///     "opaque-refresh-token".to_string(),
    ///     Uuid::new_v4(),
    ///     Utc::now() + Duration::days(7),
    ///     "203.0.113.7".to_string(),
    /// );
    ///
    /// let saved = repo.save_refresh_token(token).await?;
    /// println!("Token saved for user: {}", saved.user_id);
    /// # Ok(())
    /// # }
    /// ```
    async fn save_refresh_token(&self, token: RefreshToken) -> Result<RefreshToken, DomainError>;

    /// Find a refresh token by its token string
    ///
    /// # Arguments
    /// * `token` - The token string to search for
    ///
    /// # Returns
    /// * `Ok(Some(RefreshToken))` - Token found
    /// * `Ok(None)` - No record with the given token string
    /// * `Err(DomainError)` - Database error occurred
    ///
    /// # Example
    /// ```no_run
    /// # use th_core::repositories::TokenRepository;
    /// # async fn example(repo: &impl TokenRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// match repo.find_refresh_token("opaque-refresh-token").await? {
    ///     Some(token) => {
    ///         if token.is_active() {
    ///             println!("Token is active for user: {}", token.user_id);
    ///         }
    ///     }
    ///     None => println!("Token not found"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn find_refresh_token(&self, token: &str) -> Result<Option<RefreshToken>, DomainError>;

    /// Revoke a refresh token, conditionally on it not being revoked already
    ///
    /// Implementations must perform the check and the update as one atomic step
    /// (for SQL stores, an `UPDATE .. WHERE revoked_at IS NULL`), so that two
    /// concurrent revocations of the same token cannot both succeed.
    ///
    /// # Arguments
    /// * `token` - The token string to revoke
    /// * `revoked_by_ip` - Client IP the revocation request came from
    /// * `replaced_by_token` - Successor token string when revoking as part of a
    ///   rotation, `None` for a plain revocation
    ///
    /// # Returns
    /// * `Ok(())` - Token was revoked by this call
    /// * `Err(DomainError::Token(TokenError::AlreadyRevoked))` - Token was revoked before this call
    /// * `Err(DomainError::Token(TokenError::NotRecognized))` - No record with the given token string
    /// * `Err(DomainError)` - Database error occurred
    async fn revoke_token(
        &self,
        token: &str,
        revoked_by_ip: &str,
        replaced_by_token: Option<&str>,
    ) -> Result<(), DomainError>;

    /// Check whether a token exists and is active
    ///
    /// # Arguments
    /// * `token` - The token string to check
    ///
    /// # Returns
    /// * `Ok(true)` - Token exists, is not revoked and is not expired
    /// * `Ok(false)` - Token is missing, revoked or expired
    /// * `Err(DomainError)` - Database error occurred
    async fn is_token_active(&self, token: &str) -> Result<bool, DomainError> {
        match self.find_refresh_token(token).await? {
            Some(token) => Ok(token.is_active()),
            None => Ok(false),
        }
    }
}
