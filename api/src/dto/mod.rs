//! Data transfer objects for the HTTP layer

pub mod auth;
pub mod category;
pub mod error;
pub mod role;
pub mod task;

pub use auth::{LoginRequest, MessageResponse, RefreshTokenRequest, RegisterRequest};
pub use category::CategoryRequest;
pub use error::ErrorResponse;
pub use role::{RoleRequest, UserRolesResponse};
pub use task::{CreateTaskRequest, TaskQuery, UpdateTaskRequest};
