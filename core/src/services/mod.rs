//! Business services containing domain logic and use cases.

pub mod auth;
pub mod category;
pub mod task;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig, PasswordHasher};
pub use category::CategoryService;
pub use task::{NewTask, TaskChanges, TaskService};
pub use token::{TokenCodec, TokenService, TokenServiceConfig};
