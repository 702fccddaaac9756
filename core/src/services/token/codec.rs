//! JWT encoding and validation for both signing contexts

use jsonwebtoken::{
    decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};

use crate::domain::entities::token::{AccessClaims, RefreshClaims};
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// The single signing algorithm this codec will ever produce or accept.
///
/// Validation pins the algorithm set to this value, so a token whose header
/// names anything else fails before its signature is even checked.
const ALGORITHM: Algorithm = Algorithm::HS256;

/// Stateless encoder/validator for the two token classes
///
/// Keys and validation rules are derived once from configuration; every
/// operation afterwards is pure in-memory computation.
pub struct TokenCodec {
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    access_validation: Validation,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
    refresh_validation: Validation,
}

impl TokenCodec {
    /// Builds a codec from the two signing contexts
    pub fn new(config: &TokenServiceConfig) -> Self {
        Self {
            access_encoding: EncodingKey::from_secret(config.access.secret.as_bytes()),
            access_decoding: DecodingKey::from_secret(config.access.secret.as_bytes()),
            access_validation: build_validation(&config.access.issuer, &config.access.audience),
            refresh_encoding: EncodingKey::from_secret(config.refresh.secret.as_bytes()),
            refresh_decoding: DecodingKey::from_secret(config.refresh.secret.as_bytes()),
            refresh_validation: build_validation(&config.refresh.issuer, &config.refresh.audience),
        }
    }

    /// Signs access token claims into a compact JWT
    pub fn encode_access(&self, claims: &AccessClaims) -> Result<String, DomainError> {
        encode(&Header::new(ALGORITHM), claims, &self.access_encoding)
            .map_err(|_| DomainError::Token(TokenError::GenerationFailed))
    }

    /// Signs refresh token claims into a compact JWT
    pub fn encode_refresh(&self, claims: &RefreshClaims) -> Result<String, DomainError> {
        encode(&Header::new(ALGORITHM), claims, &self.refresh_encoding)
            .map_err(|_| DomainError::Token(TokenError::GenerationFailed))
    }

    /// Validates an access token and returns its claims
    ///
    /// Checks signature, algorithm, issuer, audience and expiry against the
    /// access signing context. Expiry is evaluated with zero leeway.
    pub fn decode_access(&self, token: &str) -> Result<AccessClaims, DomainError> {
        decode::<AccessClaims>(token, &self.access_decoding, &self.access_validation)
            .map(|data| data.claims)
            .map_err(|e| DomainError::Token(map_jwt_error(&e)))
    }

    /// Validates a refresh token and returns its claims
    ///
    /// Same checks as [`decode_access`](Self::decode_access), against the
    /// refresh signing context. A refresh token signed under the access key
    /// fails here with an invalid signature.
    pub fn decode_refresh(&self, token: &str) -> Result<RefreshClaims, DomainError> {
        decode::<RefreshClaims>(token, &self.refresh_decoding, &self.refresh_validation)
            .map(|data| data.claims)
            .map_err(|e| DomainError::Token(map_jwt_error(&e)))
    }
}

fn build_validation(issuer: &str, audience: &str) -> Validation {
    let mut validation = Validation::new(ALGORITHM);
    validation.set_issuer(&[issuer]);
    validation.set_audience(&[audience]);
    validation.validate_exp = true;
    validation.validate_nbf = false;
    // No clock skew tolerance: a token one second past exp is expired.
    validation.leeway = 0;
    validation
}

/// Maps the library error onto the domain's token failure kinds
fn map_jwt_error(err: &jsonwebtoken::errors::Error) -> TokenError {
    use jsonwebtoken::errors::ErrorKind;

    match err.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        ErrorKind::InvalidAlgorithm => TokenError::AlgorithmMismatch,
        ErrorKind::InvalidIssuer => TokenError::IssuerMismatch,
        ErrorKind::InvalidAudience => TokenError::AudienceMismatch,
        ErrorKind::MissingRequiredClaim(claim) => TokenError::MissingClaim {
            claim: claim.clone(),
        },
        ErrorKind::Json(_) => TokenError::InvalidClaims,
        _ => TokenError::Malformed,
    }
}
