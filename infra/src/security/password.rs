//! bcrypt implementation of the PasswordHasher trait.

use th_core::errors::DomainError;
use th_core::services::auth::PasswordHasher;

/// Work factor used for new hashes
///
/// Verification reads the cost from the stored hash, so raising this
/// only affects passwords hashed from then on.
const BCRYPT_COST: u32 = 12;

/// bcrypt-backed password hasher
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Create a hasher with the default work factor
    pub fn new() -> Self {
        Self { cost: BCRYPT_COST }
    }

    /// Create a hasher with a custom work factor
    ///
    /// Useful in tests, where the default cost makes each hash take a
    /// noticeable fraction of a second.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        bcrypt::hash(password, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Failed to hash password: {}", e),
        })
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError> {
        bcrypt::verify(password, hash).map_err(|e| DomainError::Internal {
            message: format!("Failed to verify password: {}", e),
        })
    }
}
