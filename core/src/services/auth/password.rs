//! Password hashing seam
//!
//! The domain layer never sees a hashing algorithm, only this capability.
//! The bcrypt-backed implementation lives in the infrastructure crate.

use crate::errors::DomainError;

/// Hashing and verification of user passwords
pub trait PasswordHasher: Send + Sync {
    /// Hashes a plaintext password for storage
    ///
    /// # Returns
    /// * `Ok(String)` - The hash, self-describing enough to verify later
    /// * `Err(DomainError)` - Hashing failed
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Verifies a plaintext password against a stored hash
    ///
    /// # Returns
    /// * `Ok(true)` - Password matches
    /// * `Ok(false)` - Password does not match
    /// * `Err(DomainError)` - The stored hash could not be parsed
    fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError>;
}
