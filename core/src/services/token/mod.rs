//! Token service module for JWT session management
//!
//! This module handles all token-related operations including:
//! - Access and refresh token signing under two independent contexts
//! - Access token validation with a pinned algorithm and zero leeway
//! - Refresh token checks against the durable store
//! - Refresh token revocation and rotation chaining

mod codec;
mod config;
mod service;

#[cfg(test)]
mod tests;

pub use codec::TokenCodec;
pub use config::TokenServiceConfig;
pub use service::TokenService;
