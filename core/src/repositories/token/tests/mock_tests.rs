//! Unit tests for the in-memory token repository

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::errors::{DomainError, TokenError};
use crate::repositories::token::{MockTokenRepository, TokenRepository};

fn sample_token(token: &str, user_id: Uuid) -> RefreshToken {
    RefreshToken::new(
        token.to_string(),
        user_id,
        Utc::now() + Duration::days(7),
        "203.0.113.7".to_string(),
    )
}

#[tokio::test]
async fn test_save_and_find_refresh_token() {
    let repo = MockTokenRepository::new();
    let user_id = Uuid::new_v4();

    let token = sample_token("rt-1", user_id);
    let saved = repo.save_refresh_token(token.clone()).await.unwrap();
    assert_eq!(saved.token, token.token);

    let found = repo.find_refresh_token("rt-1").await.unwrap();
    assert!(found.is_some());

    let found = found.unwrap();
    assert_eq!(found.user_id, user_id);
    assert_eq!(found.created_by_ip, "203.0.113.7");
    assert!(found.revoked_at.is_none());
}

#[tokio::test]
async fn test_find_unknown_token_returns_none() {
    let repo = MockTokenRepository::new();
    let found = repo.find_refresh_token("missing").await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_duplicate_token_rejected() {
    let repo = MockTokenRepository::new();
    let user_id = Uuid::new_v4();

    repo.save_refresh_token(sample_token("same", user_id))
        .await
        .unwrap();

    let result = repo.save_refresh_token(sample_token("same", user_id)).await;
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::DuplicateToken))
    ));

    // The first record survives the failed insert.
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_revoke_token_records_revocation() {
    let repo = MockTokenRepository::new();
    let user_id = Uuid::new_v4();

    repo.save_refresh_token(sample_token("rt-old", user_id))
        .await
        .unwrap();

    repo.revoke_token("rt-old", "198.51.100.4", Some("rt-new"))
        .await
        .unwrap();

    let revoked = repo.find_refresh_token("rt-old").await.unwrap().unwrap();
    assert!(revoked.revoked_at.is_some());
    assert_eq!(revoked.revoked_by_ip.as_deref(), Some("198.51.100.4"));
    assert_eq!(revoked.replaced_by_token.as_deref(), Some("rt-new"));
    assert!(!revoked.is_active());
}

#[tokio::test]
async fn test_revoke_is_conditional() {
    let repo = MockTokenRepository::new();
    let user_id = Uuid::new_v4();

    repo.save_refresh_token(sample_token("rt-once", user_id))
        .await
        .unwrap();

    repo.revoke_token("rt-once", "198.51.100.4", None)
        .await
        .unwrap();

    // A second revocation must not win and must not clobber the first one.
    let result = repo.revoke_token("rt-once", "192.0.2.9", Some("rt-late")).await;
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::AlreadyRevoked))
    ));

    let record = repo.find_refresh_token("rt-once").await.unwrap().unwrap();
    assert_eq!(record.revoked_by_ip.as_deref(), Some("198.51.100.4"));
    assert!(record.replaced_by_token.is_none());
}

#[tokio::test]
async fn test_revoke_unknown_token() {
    let repo = MockTokenRepository::new();

    let result = repo.revoke_token("missing", "198.51.100.4", None).await;
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::NotRecognized))
    ));
}

#[tokio::test]
async fn test_revoked_record_is_kept() {
    let repo = MockTokenRepository::new();
    let user_id = Uuid::new_v4();

    repo.save_refresh_token(sample_token("rt-kept", user_id))
        .await
        .unwrap();
    repo.revoke_token("rt-kept", "198.51.100.4", None)
        .await
        .unwrap();

    // Revocation never deletes; the chain stays queryable.
    assert!(repo.find_refresh_token("rt-kept").await.unwrap().is_some());
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_is_token_active() {
    let repo = MockTokenRepository::new();
    let user_id = Uuid::new_v4();

    repo.save_refresh_token(sample_token("rt-active", user_id))
        .await
        .unwrap();
    assert!(repo.is_token_active("rt-active").await.unwrap());

    let mut expired = sample_token("rt-expired", user_id);
    expired.expires_at = Utc::now() - Duration::minutes(1);
    repo.save_refresh_token(expired).await.unwrap();
    assert!(!repo.is_token_active("rt-expired").await.unwrap());

    repo.revoke_token("rt-active", "198.51.100.4", None)
        .await
        .unwrap();
    assert!(!repo.is_token_active("rt-active").await.unwrap());

    assert!(!repo.is_token_active("missing").await.unwrap());
}
