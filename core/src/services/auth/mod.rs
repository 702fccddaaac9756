//! Authentication service module
//!
//! This module provides the account-facing authentication flows:
//! - User registration with password policy checks
//! - Login by username or email
//! - Refresh token rotation and logout
//! - Role assignment

mod config;
mod password;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use password::PasswordHasher;
pub use service::AuthService;
