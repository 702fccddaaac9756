//! Configuration for the authentication service

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Minimum accepted password length
    pub password_min_length: usize,
    /// Whether passwords must contain at least one digit
    pub password_require_digit: bool,
    /// Maximum accepted username length
    pub username_max_length: usize,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            password_min_length: 6,
            password_require_digit: true,
            username_max_length: 50,
        }
    }
}
