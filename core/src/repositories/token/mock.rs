//! Mock implementation of TokenRepository for testing

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::token::RefreshToken;
use crate::errors::{DomainError, TokenError};

use super::r#trait::TokenRepository;

/// In-memory token repository for testing
///
/// Enforces the same contract as the MySQL implementation: duplicate inserts
/// fail and revocation is conditional on the record not being revoked yet.
/// Clones share the underlying store.
#[derive(Clone)]
pub struct MockTokenRepository {
    tokens: Arc<RwLock<HashMap<String, RefreshToken>>>,
}

impl MockTokenRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of records currently stored, revoked ones included
    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }

    /// Whether the store holds no records
    pub async fn is_empty(&self) -> bool {
        self.tokens.read().await.is_empty()
    }
}

impl Default for MockTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenRepository for MockTokenRepository {
    async fn save_refresh_token(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        let mut tokens = self.tokens.write().await;

        if tokens.contains_key(&token.token) {
            return Err(TokenError::DuplicateToken.into());
        }

        tokens.insert(token.token.clone(), token.clone());
        Ok(token)
    }

    async fn find_refresh_token(&self, token: &str) -> Result<Option<RefreshToken>, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens.get(token).cloned())
    }

    async fn revoke_token(
        &self,
        token: &str,
        revoked_by_ip: &str,
        replaced_by_token: Option<&str>,
    ) -> Result<(), DomainError> {
        let mut tokens = self.tokens.write().await;

        let record = tokens
            .get_mut(token)
            .ok_or(DomainError::Token(TokenError::NotRecognized))?;

        if record.revoked_at.is_some() {
            return Err(TokenError::AlreadyRevoked.into());
        }

        record.revoked_at = Some(Utc::now());
        record.revoked_by_ip = Some(revoked_by_ip.to_string());
        record.replaced_by_token = replaced_by_token.map(|t| t.to_string());
        Ok(())
    }
}
