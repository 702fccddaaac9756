//! Logout endpoint

use actix_web::{web, HttpRequest, HttpResponse};
use th_core::repositories::{CategoryRepository, TaskRepository, TokenRepository, UserRepository};
use th_core::services::auth::PasswordHasher;

use super::extract_client_ip;
use crate::app::AppState;
use crate::dto::{MessageResponse, RefreshTokenRequest};
use crate::handlers::handle_session_rejection;

/// Handler for POST /api/v1/auth/logout
///
/// Revokes the presented refresh token, ending the session. Access tokens
/// already issued stay valid until they expire on their own.
///
/// # Request Body
///
/// ```json
/// {
///     "refresh_token": "eyJ..."
/// }
/// ```
///
/// # Responses
/// - 200 OK: Session ended
/// - 401 Unauthorized: The token was not accepted; the body does not say why
pub async fn logout<U, T, K, C, P>(
    state: web::Data<AppState<U, T, K, C, P>>,
    req: HttpRequest,
    request: web::Json<RefreshTokenRequest>,
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
        .logout(&request.refresh_token, &client_ip)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Logged out")),
        Err(error) => handle_session_rejection(error),
    }
}
