//! Type definitions shared across crates
//!
//! - `pagination` - Pagination for list endpoints

pub mod pagination;

// Re-export commonly used types at module level
pub use pagination::{PaginatedResponse, Pagination};
