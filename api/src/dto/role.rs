//! Request and response bodies for the role routes

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body for `POST /roles/assign` and `POST /roles/remove`
///
/// The role arrives as a string and is parsed in the handler so an unknown
/// name maps to a 400 rather than a deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleRequest {
    pub user_id: Uuid,
    pub role: String,
}

/// Response for `GET /roles/user/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRolesResponse {
    pub user_id: Uuid,
    pub roles: Vec<String>,
}
