//! Authentication configuration: the two JWT signing contexts.

use serde::{Deserialize, Serialize};

/// Signing context for one token class (access or refresh).
///
/// Access and refresh tokens are signed under independent keys, issuers
/// and audiences so a token of one class can never validate as the other.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SigningConfig {
    /// Symmetric signing key
    pub secret: String,

    /// Issuer claim written at signing and required at validation
    pub issuer: String,

    /// Audience claim written at signing and required at validation
    pub audience: String,

    /// Token lifetime in seconds
    pub ttl_seconds: i64,
}

impl SigningConfig {
    /// Create a new signing context
    pub fn new(secret: impl Into<String>, issuer: impl Into<String>, audience: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            issuer: issuer.into(),
            audience: audience.into(),
            ttl_seconds: 900,
        }
    }

    /// Set the lifetime in minutes
    pub fn with_ttl_minutes(mut self, minutes: i64) -> Self {
        self.ttl_seconds = minutes * 60;
        self
    }

    /// Set the lifetime in days
    pub fn with_ttl_days(mut self, days: i64) -> Self {
        self.ttl_seconds = days * 86400;
        self
    }

    /// Check if using a default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret.starts_with("dev-") || self.secret.contains("change-in-production")
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Access token signing context (short-lived, minutes)
    pub access: SigningConfig,

    /// Refresh token signing context (long-lived, days)
    pub refresh: SigningConfig,

    /// Signing algorithm name; only HS256 is accepted downstream
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access: SigningConfig::new(
                "dev-access-secret-change-in-production",
                "taskhive",
                "taskhive-clients",
            )
            .with_ttl_minutes(15),
            refresh: SigningConfig::new(
                "dev-refresh-secret-change-in-production",
                "taskhive-refresh",
                "taskhive-refresh-clients",
            )
            .with_ttl_days(7),
            algorithm: default_algorithm(),
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let access_secret = std::env::var("JWT_ACCESS_SECRET")
            .unwrap_or(defaults.access.secret);
        let access_issuer = std::env::var("JWT_ACCESS_ISSUER")
            .unwrap_or(defaults.access.issuer);
        let access_audience = std::env::var("JWT_ACCESS_AUDIENCE")
            .unwrap_or(defaults.access.audience);
        let access_expiry_minutes = std::env::var("JWT_ACCESS_EXPIRY_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(15);

        let refresh_secret = std::env::var("JWT_REFRESH_SECRET")
            .unwrap_or(defaults.refresh.secret);
        let refresh_issuer = std::env::var("JWT_REFRESH_ISSUER")
            .unwrap_or(defaults.refresh.issuer);
        let refresh_audience = std::env::var("JWT_REFRESH_AUDIENCE")
            .unwrap_or(defaults.refresh.audience);
        let refresh_expiry_days = std::env::var("JWT_REFRESH_EXPIRY_DAYS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(7);

        Self {
            access: SigningConfig::new(access_secret, access_issuer, access_audience)
                .with_ttl_minutes(access_expiry_minutes),
            refresh: SigningConfig::new(refresh_secret, refresh_issuer, refresh_audience)
                .with_ttl_days(refresh_expiry_days),
            algorithm: default_algorithm(),
        }
    }

    /// Check whether either signing context still uses a development secret
    pub fn is_using_default_secret(&self) -> bool {
        self.access.is_using_default_secret() || self.refresh.is_using_default_secret()
    }
}

fn default_algorithm() -> String {
    String::from("HS256")
}
