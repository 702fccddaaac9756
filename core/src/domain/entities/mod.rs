//! Domain entities representing core business objects.

pub mod category;
pub mod task;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use category::Category;
pub use task::{Task, TaskPriority, TaskStatus};
pub use token::{AccessClaims, RefreshClaims, RefreshToken, TokenPair};
pub use user::{User, UserRole};
