//! Refresh token rotation endpoint

use actix_web::{web, HttpRequest, HttpResponse};
use th_core::repositories::{CategoryRepository, TaskRepository, TokenRepository, UserRepository};
use th_core::services::auth::PasswordHasher;

use super::extract_client_ip;
use crate::app::AppState;
use crate::dto::RefreshTokenRequest;
use crate::handlers::handle_session_rejection;

/// Handler for POST /api/v1/auth/refresh
///
/// Exchanges a refresh token for a new token pair. The presented token is
/// revoked and recorded as replaced by its successor; presenting it again
/// is rejected.
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
/// - 200 OK: New token pair
/// - 401 Unauthorized: The token was not accepted; the body does not say why
/// - 500 Internal Server Error: Token generation or store failure
pub async fn refresh<U, T, K, C, P>(
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
        .refresh_token(&request.refresh_token, &client_ip)
        .await
    {
        Ok(pair) => HttpResponse::Ok().json(pair),
        Err(error) => handle_session_rejection(error),
    }
}
