pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;

pub use r#trait::TokenRepository;

// Mocks ship in the crate so integration tests in dependent crates can use them.
pub mod mock;
pub use mock::MockTokenRepository;

#[cfg(test)]
mod tests;
