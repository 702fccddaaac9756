//! Shared handler utilities

pub mod error;

pub use error::{handle_domain_error, handle_session_rejection, handle_validation_errors};
