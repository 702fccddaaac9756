//! Unit tests for JWT encoding and validation

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use th_shared::config::SigningConfig;
use uuid::Uuid;

use crate::domain::entities::token::{AccessClaims, RefreshClaims};
use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenCodec, TokenServiceConfig};

const ACCESS_SECRET: &str = "test-access-secret";
const REFRESH_SECRET: &str = "test-refresh-secret";

fn test_config() -> TokenServiceConfig {
    TokenServiceConfig {
        access: SigningConfig::new(ACCESS_SECRET, "issuer-access", "aud-access")
            .with_ttl_minutes(15),
        refresh: SigningConfig::new(REFRESH_SECRET, "issuer-refresh", "aud-refresh")
            .with_ttl_days(7),
    }
}

fn access_claims(expires_at: chrono::DateTime<Utc>) -> AccessClaims {
    AccessClaims::new(
        Uuid::new_v4(),
        "alice",
        "alice@example.com",
        "user",
        "issuer-access",
        "aud-access",
        expires_at,
    )
}

fn token_error(result: Result<impl std::fmt::Debug, DomainError>) -> TokenError {
    match result {
        Err(DomainError::Token(e)) => e,
        other => panic!("expected token error, got {:?}", other),
    }
}

#[test]
fn test_access_token_round_trip() {
    let codec = TokenCodec::new(&test_config());
    let claims = access_claims(Utc::now() + Duration::minutes(15));

    let token = codec.encode_access(&claims).unwrap();
    let decoded = codec.decode_access(&token).unwrap();

    assert_eq!(decoded.sub, claims.sub);
    assert_eq!(decoded.name, "alice");
    assert_eq!(decoded.email, "alice@example.com");
    assert_eq!(decoded.role, "user");
    assert_eq!(decoded.jti, claims.jti);
    assert_eq!(decoded.iss, "issuer-access");
    assert_eq!(decoded.aud, "aud-access");
}

#[test]
fn test_refresh_token_round_trip() {
    let codec = TokenCodec::new(&test_config());
    let user_id = Uuid::new_v4();
    let claims = RefreshClaims::new(
        user_id,
        "issuer-refresh",
        "aud-refresh",
        Utc::now() + Duration::days(7),
    );

    let token = codec.encode_refresh(&claims).unwrap();
    let decoded = codec.decode_refresh(&token).unwrap();

    assert_eq!(decoded.subject(), Some(user_id.to_string().as_str()));
    assert_eq!(decoded.jti, claims.jti);
}

#[test]
fn test_expired_token_rejected_without_leeway() {
    let codec = TokenCodec::new(&test_config());

    // One second past expiry is enough; there is no grace window.
    let claims = access_claims(Utc::now() - Duration::seconds(1));
    let token = codec.encode_access(&claims).unwrap();

    assert_eq!(token_error(codec.decode_access(&token)), TokenError::Expired);
}

#[test]
fn test_wrong_issuer_rejected() {
    let codec = TokenCodec::new(&test_config());

    let claims = AccessClaims::new(
        Uuid::new_v4(),
        "alice",
        "alice@example.com",
        "user",
        "some-other-issuer",
        "aud-access",
        Utc::now() + Duration::minutes(15),
    );
    let token = codec.encode_access(&claims).unwrap();

    assert_eq!(
        token_error(codec.decode_access(&token)),
        TokenError::IssuerMismatch
    );
}

#[test]
fn test_wrong_audience_rejected() {
    let codec = TokenCodec::new(&test_config());

    let claims = AccessClaims::new(
        Uuid::new_v4(),
        "alice",
        "alice@example.com",
        "user",
        "issuer-access",
        "some-other-audience",
        Utc::now() + Duration::minutes(15),
    );
    let token = codec.encode_access(&claims).unwrap();

    assert_eq!(
        token_error(codec.decode_access(&token)),
        TokenError::AudienceMismatch
    );
}

#[test]
fn test_cross_context_key_rejected() {
    let codec = TokenCodec::new(&test_config());

    // A token signed under the access key must not validate as a refresh
    // token, even before any claim is inspected.
    let claims = access_claims(Utc::now() + Duration::minutes(15));
    let token = codec.encode_access(&claims).unwrap();

    assert_eq!(
        token_error(codec.decode_refresh(&token)),
        TokenError::InvalidSignature
    );
}

#[test]
fn test_tampered_payload_rejected() {
    let codec = TokenCodec::new(&test_config());
    let claims = access_claims(Utc::now() + Duration::minutes(15));
    let token = codec.encode_access(&claims).unwrap();

    let mut parts: Vec<&str> = token.split('.').collect();
    assert_eq!(parts.len(), 3);
    let tampered_payload = if parts[1].starts_with('A') {
        format!("B{}", &parts[1][1..])
    } else {
        format!("A{}", &parts[1][1..])
    };
    parts[1] = &tampered_payload;
    let tampered = parts.join(".");

    assert_eq!(
        token_error(codec.decode_access(&tampered)),
        TokenError::InvalidSignature
    );
}

#[test]
fn test_foreign_algorithm_rejected() {
    let codec = TokenCodec::new(&test_config());

    // Same key, different algorithm in the header. The pinned algorithm set
    // refuses it outright instead of trying to verify.
    let claims = access_claims(Utc::now() + Duration::minutes(15));
    let token = encode(
        &Header::new(Algorithm::HS384),
        &claims,
        &EncodingKey::from_secret(ACCESS_SECRET.as_bytes()),
    )
    .unwrap();

    assert_eq!(
        token_error(codec.decode_access(&token)),
        TokenError::AlgorithmMismatch
    );
}

#[test]
fn test_garbage_string_rejected_as_malformed() {
    let codec = TokenCodec::new(&test_config());

    assert_eq!(
        token_error(codec.decode_access("not-a-jwt")),
        TokenError::Malformed
    );
    assert_eq!(token_error(codec.decode_access("")), TokenError::Malformed);
}

#[test]
fn test_wrong_claim_shape_rejected() {
    let codec = TokenCodec::new(&test_config());

    // Signature, issuer, audience and expiry all check out, but the payload
    // is not an access token.
    let exp = (Utc::now() + Duration::minutes(15)).timestamp();
    let token = encode(
        &Header::new(Algorithm::HS256),
        &serde_json::json!({
            "sub": Uuid::new_v4().to_string(),
            "iss": "issuer-access",
            "aud": "aud-access",
            "exp": exp,
        }),
        &EncodingKey::from_secret(ACCESS_SECRET.as_bytes()),
    )
    .unwrap();

    assert_eq!(
        token_error(codec.decode_access(&token)),
        TokenError::InvalidClaims
    );
}
