//! Error type definitions for authentication and token management
//!
//! Token validation failures stay distinct variants because callers branch
//! on them; the presentation layer decides how much detail leaves the
//! process (externally they all collapse into one 401 body).

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Covers both unknown email and wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User not found")]
    UserNotFound,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Insufficient permissions")]
    InsufficientPermissions,
}

/// Token-related errors
///
/// The first six are codec outcomes; the rest come from the refresh token
/// store and the rotation protocol.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The string is not a structurally valid token
    #[error("Malformed token")]
    Malformed,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token expired")]
    Expired,

    #[error("Issuer mismatch")]
    IssuerMismatch,

    #[error("Audience mismatch")]
    AudienceMismatch,

    /// Header algorithm differs from the single pinned algorithm
    #[error("Signing algorithm mismatch")]
    AlgorithmMismatch,

    #[error("Missing claim: {claim}")]
    MissingClaim { claim: String },

    #[error("Invalid claims")]
    InvalidClaims,

    /// Presented refresh token has no entry in the store
    #[error("Token not recognized")]
    NotRecognized,

    /// Store entry exists but is revoked or past its expiry
    #[error("Token not active")]
    NotActive,

    /// Insert collided with an existing token string; invariant violation
    #[error("Duplicate token")]
    DuplicateToken,

    /// Conditional revoke found the row already revoked; invariant
    /// violation outside a lost rotation race
    #[error("Token already revoked")]
    AlreadyRevoked,

    #[error("Token generation failed")]
    GenerationFailed,
}

impl TokenError {
    /// Whether this error is an internal invariant fault rather than a
    /// rejection of the presented token
    pub fn is_invariant_fault(&self) -> bool {
        matches!(self, TokenError::DuplicateToken | TokenError::AlreadyRevoked)
    }
}
