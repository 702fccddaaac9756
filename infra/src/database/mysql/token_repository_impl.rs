//! MySQL implementation of the TokenRepository trait.
//!
//! This module provides the concrete implementation of refresh token persistence
//! using MySQL database with SQLx. Records are append-only: revocation updates
//! a row in place and nothing here ever deletes one.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use th_core::domain::entities::token::RefreshToken;
use th_core::errors::{DomainError, TokenError};
use th_core::repositories::TokenRepository;

/// MySQL implementation of TokenRepository
///
/// The token string itself is the primary key, so the database enforces
/// the one-record-per-token invariant and the conditional revocation is a
/// single atomic `UPDATE`.
pub struct MySqlTokenRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlTokenRepository {
    /// Create a new MySQL token repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to RefreshToken entity
    fn row_to_token(row: &sqlx::mysql::MySqlRow) -> Result<RefreshToken, DomainError> {
        let user_id: String = row.try_get("user_id")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get user_id: {}", e) })?;

        Ok(RefreshToken {
            token: row.try_get("token")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get token: {}", e) })?,
            user_id: Uuid::parse_str(&user_id)
                .map_err(|e| DomainError::Internal { message: format!("Invalid user UUID: {}", e) })?,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get created_at: {}", e) })?,
            expires_at: row.try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get expires_at: {}", e) })?,
            created_by_ip: row.try_get("created_by_ip")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get created_by_ip: {}", e) })?,
            revoked_at: row.try_get::<Option<DateTime<Utc>>, _>("revoked_at")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get revoked_at: {}", e) })?,
            revoked_by_ip: row.try_get("revoked_by_ip")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get revoked_by_ip: {}", e) })?,
            replaced_by_token: row.try_get("replaced_by_token")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get replaced_by_token: {}", e) })?,
        })
    }

    /// Check whether a record with the given token string exists at all,
    /// revoked or not
    async fn token_exists(&self, token: &str) -> Result<bool, DomainError> {
        let query = "SELECT EXISTS(SELECT 1 FROM refresh_tokens WHERE token = ?) as token_exists";

        let row = sqlx::query(query)
            .bind(token)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to check token existence: {}", e) })?;

        let exists: i8 = row.try_get("token_exists")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get existence result: {}", e) })?;

        Ok(exists == 1)
    }
}

#[async_trait]
impl TokenRepository for MySqlTokenRepository {
    async fn save_refresh_token(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        let query = r#"
            INSERT INTO refresh_tokens (
                token, user_id, created_at, expires_at, created_by_ip,
                revoked_at, revoked_by_ip, replaced_by_token
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(&token.token)
            .bind(token.user_id.to_string())
            .bind(token.created_at)
            .bind(token.expires_at)
            .bind(&token.created_by_ip)
            .bind(token.revoked_at)
            .bind(&token.revoked_by_ip)
            .bind(&token.replaced_by_token)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    TokenError::DuplicateToken.into()
                }
                _ => DomainError::Internal {
                    message: format!("Failed to save refresh token: {}", e),
                },
            })?;

        Ok(token)
    }

    async fn find_refresh_token(&self, token: &str) -> Result<Option<RefreshToken>, DomainError> {
        let query = r#"
            SELECT token, user_id, created_at, expires_at, created_by_ip,
                   revoked_at, revoked_by_ip, replaced_by_token
            FROM refresh_tokens
            WHERE token = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to find refresh token: {}", e) })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_token(&row)?)),
            None => Ok(None),
        }
    }

    async fn revoke_token(
        &self,
        token: &str,
        revoked_by_ip: &str,
        replaced_by_token: Option<&str>,
    ) -> Result<(), DomainError> {
        // The revoked_at guard makes the check and the update one atomic
        // statement: of two concurrent revocations only one affects a row.
        let query = r#"
            UPDATE refresh_tokens
            SET revoked_at = ?, revoked_by_ip = ?, replaced_by_token = ?
            WHERE token = ? AND revoked_at IS NULL
        "#;

        let result = sqlx::query(query)
            .bind(Utc::now())
            .bind(revoked_by_ip)
            .bind(replaced_by_token)
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to revoke token: {}", e) })?;

        if result.rows_affected() > 0 {
            return Ok(());
        }

        // Zero rows means either the record is already revoked or it never
        // existed. The distinction matters to callers.
        if self.token_exists(token).await? {
            Err(TokenError::AlreadyRevoked.into())
        } else {
            Err(TokenError::NotRecognized.into())
        }
    }
}