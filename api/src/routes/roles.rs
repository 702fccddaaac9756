//! Role management endpoints
//!
//! All role routes require the admin role. An account holds exactly one
//! role at a time; assigning a role replaces the previous one, and removing
//! a role resets the account to `user`.

use actix_web::{web, HttpResponse};
use th_core::domain::entities::user::UserRole;
use th_core::repositories::{CategoryRepository, TaskRepository, TokenRepository, UserRepository};
use th_core::services::auth::PasswordHasher;
use uuid::Uuid;

use crate::app::AppState;
use crate::dto::{ErrorResponse, MessageResponse, RoleRequest, UserRolesResponse};
use crate::handlers::handle_domain_error;
use crate::middleware::AdminContext;

/// Handler for POST /api/v1/roles/assign
///
/// # Request Body
///
/// ```json
/// {
///     "user_id": "3f8a...",
///     "role": "admin"
/// }
/// ```
///
/// # Responses
/// - 200 OK: Role assigned
/// - 400 Bad Request: Unknown role name
/// - 404 Not Found: No such user
pub async fn assign_role<U, T, K, C, P>(
    state: web::Data<AppState<U, T, K, C, P>>,
    _admin: AdminContext,
    request: web::Json<RoleRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    K: TaskRepository + 'static,
    C: CategoryRepository + 'static,
    P: PasswordHasher + 'static,
{
    let role = match parse_role(&request.role) {
        Ok(role) => role,
        Err(response) => return response,
    };

    match state.auth_service.assign_role(request.user_id, role).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Role assigned")),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/roles/remove
///
/// Resets the user back to the default role.
///
/// # Responses
/// - 200 OK: Role removed
/// - 400 Bad Request: Unknown role name, or the user does not hold the role
/// - 404 Not Found: No such user
pub async fn remove_role<U, T, K, C, P>(
    state: web::Data<AppState<U, T, K, C, P>>,
    _admin: AdminContext,
    request: web::Json<RoleRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    K: TaskRepository + 'static,
    C: CategoryRepository + 'static,
    P: PasswordHasher + 'static,
{
    let role = match parse_role(&request.role) {
        Ok(role) => role,
        Err(response) => return response,
    };

    match state.auth_service.remove_role(request.user_id, role).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Role removed")),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/roles/user/{id}
///
/// Lists the roles the user holds.
pub async fn user_roles<U, T, K, C, P>(
    state: web::Data<AppState<U, T, K, C, P>>,
    _admin: AdminContext,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    K: TaskRepository + 'static,
    C: CategoryRepository + 'static,
    P: PasswordHasher + 'static,
{
    let user_id = path.into_inner();

    match state.auth_service.user_roles(user_id).await {
        Ok(roles) => HttpResponse::Ok().json(UserRolesResponse {
            user_id,
            roles: roles.iter().map(|r| r.as_str().to_string()).collect(),
        }),
        Err(error) => handle_domain_error(error),
    }
}

fn parse_role(name: &str) -> Result<UserRole, HttpResponse> {
    name.parse::<UserRole>().map_err(|_| {
        HttpResponse::BadRequest().json(ErrorResponse::new(
            "validation_error",
            format!("unknown role '{}'", name),
        ))
    })
}
