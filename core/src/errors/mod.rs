//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{AuthError, TokenError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Conflict: {resource}")]
    Conflict { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_error_converts_to_domain_error() {
        let err: DomainError = TokenError::Expired.into();
        assert!(matches!(err, DomainError::Token(TokenError::Expired)));
    }

    #[test]
    fn test_auth_error_converts_to_domain_error() {
        let err: DomainError = AuthError::InvalidCredentials.into();
        assert!(matches!(err, DomainError::Auth(AuthError::InvalidCredentials)));
    }

    #[test]
    fn test_transparent_display() {
        let err: DomainError = TokenError::NotActive.into();
        assert_eq!(err.to_string(), "Token not active");
    }

    #[test]
    fn test_distinct_validation_kinds() {
        // Each validation failure keeps its own variant so callers can branch
        let kinds = [
            TokenError::Malformed,
            TokenError::InvalidSignature,
            TokenError::Expired,
            TokenError::IssuerMismatch,
            TokenError::AudienceMismatch,
            TokenError::AlgorithmMismatch,
        ];
        let messages: Vec<String> = kinds.iter().map(|k| k.to_string()).collect();
        let mut unique = messages.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), messages.len());
    }
}
