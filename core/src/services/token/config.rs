//! Configuration for the token service

use th_shared::config::{AuthConfig, SigningConfig};

use crate::errors::DomainError;

/// Configuration for the token service
///
/// Carries the two signing contexts. Access and refresh tokens use
/// independent secrets, issuers, audiences and lifetimes.
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Signing context for access tokens
    pub access: SigningConfig,
    /// Signing context for refresh tokens
    pub refresh: SigningConfig,
}

impl TokenServiceConfig {
    /// Builds a service configuration from the application auth settings
    ///
    /// Only the HS256 algorithm is supported. Any other configured value is a
    /// deployment mistake and is rejected here, at startup, rather than
    /// surfacing later as a per-request validation failure.
    pub fn from_auth_config(auth: &AuthConfig) -> Result<Self, DomainError> {
        if auth.algorithm != "HS256" {
            return Err(DomainError::Internal {
                message: format!(
                    "unsupported JWT algorithm '{}': only HS256 is supported",
                    auth.algorithm
                ),
            });
        }

        Ok(Self {
            access: auth.access.clone(),
            refresh: auth.refresh.clone(),
        })
    }
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        let auth = AuthConfig::default();
        Self {
            access: auth.access,
            refresh: auth.refresh,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_auth_config_accepts_hs256() {
        let auth = AuthConfig::default();
        assert_eq!(auth.algorithm, "HS256");

        let config = TokenServiceConfig::from_auth_config(&auth).unwrap();
        assert_eq!(config.access.issuer, auth.access.issuer);
        assert_eq!(config.refresh.issuer, auth.refresh.issuer);
    }

    #[test]
    fn test_from_auth_config_rejects_other_algorithms() {
        let mut auth = AuthConfig::default();
        auth.algorithm = "RS256".to_string();

        let result = TokenServiceConfig::from_auth_config(&auth);
        assert!(matches!(result, Err(DomainError::Internal { .. })));
    }

    #[test]
    fn test_default_uses_distinct_contexts() {
        let config = TokenServiceConfig::default();
        assert_ne!(config.access.secret, config.refresh.secret);
        assert_ne!(config.access.issuer, config.refresh.issuer);
        assert!(config.refresh.ttl_seconds > config.access.ttl_seconds);
    }
}
