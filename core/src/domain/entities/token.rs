//! Token entities for JWT-based session management.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried by an access token.
///
/// Field names are the literal JWT claim names; serde writes and reads
/// them without any renaming, so the subject extracted from a validated
/// token is byte-identical to the subject embedded at issuance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (user ID)
    pub sub: String,

    /// Username
    pub name: String,

    /// Email address
    pub email: String,

    /// Role name for routing-layer capability checks
    pub role: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// Expiration timestamp (unix seconds)
    pub exp: i64,
}

impl AccessClaims {
    /// Creates claims for a new access token expiring at `expires_at`
    pub fn new(
        user_id: Uuid,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            sub: user_id.to_string(),
            name: name.into(),
            email: email.into(),
            role: role.into(),
            jti: Uuid::new_v4().to_string(),
            iss: issuer.into(),
            aud: audience.into(),
            exp: expires_at.timestamp(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Gets the user ID from the subject claim
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Claims carried by a refresh token.
///
/// Deliberately minimal: subject and a unique id. The subject is
/// optional at the type level so a structurally valid token without one
/// can be rejected with a precise reason instead of a parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshClaims {
    /// Subject (user ID)
    pub sub: Option<String>,

    /// JWT ID (unique identifier for the token)
    pub jti: String,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// Expiration timestamp (unix seconds)
    pub exp: i64,
}

impl RefreshClaims {
    /// Creates claims for a new refresh token expiring at `expires_at`
    pub fn new(
        user_id: Uuid,
        issuer: impl Into<String>,
        audience: impl Into<String>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            sub: Some(user_id.to_string()),
            jti: Uuid::new_v4().to_string(),
            iss: issuer.into(),
            aud: audience.into(),
            exp: expires_at.timestamp(),
        }
    }

    /// The subject claim, if present and non-empty
    pub fn subject(&self) -> Option<&str> {
        self.sub.as_deref().filter(|s| !s.is_empty())
    }
}

/// Refresh token entity stored in the database.
///
/// Rows are append-only history: a token is never deleted, and once
/// revoked it never becomes active again. `replaced_by_token` links a
/// rotated-away token forward to its successor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// The signed token string itself; unique, primary lookup key
    pub token: String,

    /// User ID this token belongs to
    pub user_id: Uuid,

    /// Timestamp when the token was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the token expires
    pub expires_at: DateTime<Utc>,

    /// Client IP that obtained the token
    pub created_by_ip: String,

    /// Timestamp when the token was revoked; never cleared once set
    pub revoked_at: Option<DateTime<Utc>>,

    /// Client IP that triggered the revocation
    pub revoked_by_ip: Option<String>,

    /// Token string that superseded this one during rotation
    pub replaced_by_token: Option<String>,
}

impl RefreshToken {
    /// Creates a new active refresh token record
    pub fn new(
        token: impl Into<String>,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
        created_by_ip: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            user_id,
            created_at: Utc::now(),
            expires_at,
            created_by_ip: created_by_ip.into(),
            revoked_at: None,
            revoked_by_ip: None,
            replaced_by_token: None,
        }
    }

    /// Checks if the refresh token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Checks if the refresh token is currently usable
    ///
    /// A token is active while it is neither revoked nor expired.
    pub fn is_active(&self) -> bool {
        self.revoked_at.is_none() && !self.is_expired()
    }

    /// Revokes the token, optionally chaining it to a replacement
    pub fn revoke(&mut self, revoked_by_ip: impl Into<String>, replaced_by_token: Option<String>) {
        self.revoked_at = Some(Utc::now());
        self.revoked_by_ip = Some(revoked_by_ip.into());
        self.replaced_by_token = replaced_by_token;
    }
}

/// Token pair returned to the client from login and refresh
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// Absolute access token expiry
    pub access_token_expires_at: DateTime<Utc>,

    /// JWT refresh token
    pub refresh_token: String,

    /// Absolute refresh token expiry
    pub refresh_token_expires_at: DateTime<Utc>,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(
        access_token: String,
        access_token_expires_at: DateTime<Utc>,
        refresh_token: String,
        refresh_token_expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            access_token,
            access_token_expires_at,
            refresh_token,
            refresh_token_expires_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_access_claims_round_trip_subject() {
        let user_id = Uuid::new_v4();
        let claims = AccessClaims::new(
            user_id,
            "alice",
            "alice@example.com",
            "user",
            "issuer",
            "audience",
            Utc::now() + Duration::minutes(15),
        );

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.user_id().unwrap(), user_id);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_access_claims_expiry() {
        let mut claims = AccessClaims::new(
            Uuid::new_v4(),
            "alice",
            "alice@example.com",
            "user",
            "issuer",
            "audience",
            Utc::now() + Duration::minutes(15),
        );
        claims.exp = Utc::now().timestamp() - 1;
        assert!(claims.is_expired());
    }

    #[test]
    fn test_refresh_claims_subject() {
        let user_id = Uuid::new_v4();
        let claims = RefreshClaims::new(
            user_id,
            "issuer",
            "audience",
            Utc::now() + Duration::days(7),
        );
        assert_eq!(claims.subject(), Some(user_id.to_string().as_str()));
    }

    #[test]
    fn test_refresh_claims_missing_subject() {
        let mut claims = RefreshClaims::new(
            Uuid::new_v4(),
            "issuer",
            "audience",
            Utc::now() + Duration::days(7),
        );
        claims.sub = None;
        assert_eq!(claims.subject(), None);

        claims.sub = Some(String::new());
        assert_eq!(claims.subject(), None);
    }

    #[test]
    fn test_fresh_jti_per_token() {
        let user_id = Uuid::new_v4();
        let expires = Utc::now() + Duration::days(7);
        let first = RefreshClaims::new(user_id, "i", "a", expires);
        let second = RefreshClaims::new(user_id, "i", "a", expires);
        assert_ne!(first.jti, second.jti);
    }

    #[test]
    fn test_new_refresh_token_is_active() {
        let token = RefreshToken::new(
            "signed.jwt.string",
            Uuid::new_v4(),
            Utc::now() + Duration::days(7),
            "203.0.113.7",
        );

        assert!(token.is_active());
        assert!(!token.is_expired());
        assert!(token.revoked_at.is_none());
        assert!(token.replaced_by_token.is_none());
    }

    #[test]
    fn test_expired_token_is_not_active() {
        let token = RefreshToken::new(
            "signed.jwt.string",
            Uuid::new_v4(),
            Utc::now() - Duration::seconds(1),
            "203.0.113.7",
        );

        assert!(token.is_expired());
        assert!(!token.is_active());
    }

    #[test]
    fn test_revoked_token_is_not_active() {
        let mut token = RefreshToken::new(
            "signed.jwt.string",
            Uuid::new_v4(),
            Utc::now() + Duration::days(7),
            "203.0.113.7",
        );

        token.revoke("203.0.113.8", Some("next.jwt.string".to_string()));

        assert!(!token.is_active());
        assert!(token.revoked_at.is_some());
        assert_eq!(token.revoked_by_ip.as_deref(), Some("203.0.113.8"));
        assert_eq!(token.replaced_by_token.as_deref(), Some("next.jwt.string"));
    }

    #[test]
    fn test_explicit_revocation_has_no_replacement() {
        let mut token = RefreshToken::new(
            "signed.jwt.string",
            Uuid::new_v4(),
            Utc::now() + Duration::days(7),
            "203.0.113.7",
        );

        token.revoke("203.0.113.7", None);

        assert!(!token.is_active());
        assert!(token.replaced_by_token.is_none());
    }

    #[test]
    fn test_token_pair_serialization() {
        let pair = TokenPair::new(
            "access".to_string(),
            Utc::now() + Duration::minutes(15),
            "refresh".to_string(),
            Utc::now() + Duration::days(7),
        );

        let json = serde_json::to_string(&pair).unwrap();
        let deserialized: TokenPair = serde_json::from_str(&json).unwrap();
        assert_eq!(pair, deserialized);
    }
}
