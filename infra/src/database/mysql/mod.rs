//! MySQL repository implementations
//!
//! Concrete SQLx-backed implementations of the repository traits defined
//! in the core crate.

pub mod category_repository_impl;
pub mod task_repository_impl;
pub mod token_repository_impl;
pub mod user_repository_impl;

pub use category_repository_impl::MySqlCategoryRepository;
pub use task_repository_impl::MySqlTaskRepository;
pub use token_repository_impl::MySqlTokenRepository;
pub use user_repository_impl::MySqlUserRepository;
