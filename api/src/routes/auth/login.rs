//! Login endpoint

use actix_web::{web, HttpRequest, HttpResponse};
use th_core::repositories::{CategoryRepository, TaskRepository, TokenRepository, UserRepository};
use th_core::services::auth::PasswordHasher;

use super::extract_client_ip;
use crate::app::AppState;
use crate::dto::LoginRequest;
use crate::handlers::handle_domain_error;

/// Handler for POST /api/v1/auth/login
///
/// Verifies the credentials and opens a session. The `email` field also
/// accepts a username.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "alice@example.com",
///     "password": "hunter42"
/// }
/// ```
///
/// # Responses
/// - 200 OK: Token pair
///
/// ```json
/// {
///     "access_token": "eyJ...",
///     "access_token_expires_at": "2024-01-20T12:15:00Z",
///     "refresh_token": "eyJ...",
///     "refresh_token_expires_at": "2024-01-27T12:00:00Z"
/// }
/// ```
///
/// - 401 Unauthorized: Unknown account or wrong password, indistinguishably
pub async fn login<U, T, K, C, P>(
    state: web::Data<AppState<U, T, K, C, P>>,
    req: HttpRequest,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    K: TaskRepository + 'static,
    C: CategoryRepository + 'static,
    P: PasswordHasher + 'static,
{
    let client_ip = extract_client_ip(&req);

    match state
        .auth_service
        .login(&request.email, &request.password, &client_ip)
        .await
    {
        Ok((_user, pair)) => HttpResponse::Ok().json(pair),
        Err(error) => handle_domain_error(error),
    }
}
