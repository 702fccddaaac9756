//! Category management service module

mod service;

#[cfg(test)]
mod tests;

pub use service::CategoryService;
