//! Security module - credential hashing implementations

pub mod password;

pub use password::BcryptPasswordHasher;
