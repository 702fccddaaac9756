//! Account registration endpoint

use actix_web::{web, HttpResponse};
use th_core::repositories::{CategoryRepository, TaskRepository, TokenRepository, UserRepository};
use th_core::services::auth::PasswordHasher;
use validator::Validate;

use crate::app::AppState;
use crate::dto::{MessageResponse, RegisterRequest};
use crate::handlers::{handle_domain_error, handle_validation_errors};

/// Handler for POST /api/v1/auth/register
///
/// Creates a new account with the default `user` role.
///
/// # Request Body
///
/// ```json
/// {
///     "username": "alice",
///     "email": "alice@example.com",
///     "password": "hunter42"
/// }
/// ```
///
/// # Responses
/// - 201 Created: Account was created
/// - 400 Bad Request: Validation failed
/// - 409 Conflict: Username or email already taken
pub async fn register<U, T, K, C, P>(
    state: web::Data<AppState<U, T, K, C, P>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    K: TaskRepository + 'static,
    C: CategoryRepository + 'static,
    P: PasswordHasher + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state
        .auth_service
        .register(&request.username, &request.email, &request.password)
        .await
    {
        Ok(_) => HttpResponse::Created().json(MessageResponse::new("Account created")),
        Err(error) => handle_domain_error(error),
    }
}
