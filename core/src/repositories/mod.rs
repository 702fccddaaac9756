pub mod category;
pub mod task;
pub mod token;
pub mod user;

pub use category::{CategoryRepository, MockCategoryRepository};
pub use task::{MockTaskRepository, TaskFilter, TaskRepository};
pub use token::{MockTokenRepository, TokenRepository};
pub use user::{MockUserRepository, UserRepository};
