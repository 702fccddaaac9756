//! Shared utilities and common types for the Taskhive server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Pagination type definitions

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CorsConfig, DatabaseConfig, Environment, ServerConfig, SigningConfig,
};
pub use types::{PaginatedResponse, Pagination};
