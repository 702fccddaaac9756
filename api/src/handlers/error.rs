//! Mapping from domain errors to HTTP responses

use std::collections::HashMap;

use actix_web::HttpResponse;
use th_core::errors::{AuthError, DomainError, TokenError};
use tracing::{error, warn};

use crate::dto::ErrorResponse;

/// Map a domain error to its HTTP response
///
/// Internal faults are logged here with full detail and leave the process
/// as an opaque 500.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match &error {
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorResponse::new("validation_error", message))
        }
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            "not_found",
            format!("{} not found", resource),
        )),
        DomainError::Conflict { resource } => {
            HttpResponse::Conflict().json(ErrorResponse::new("conflict", resource))
        }
        DomainError::Internal { message } => {
            error!(detail = %message, "internal error");
            internal_error_response()
        }
        DomainError::Auth(auth_error) => match auth_error {
            AuthError::InvalidCredentials => HttpResponse::Unauthorized().json(
                ErrorResponse::new("invalid_credentials", "Invalid credentials"),
            ),
            AuthError::UserNotFound => {
                HttpResponse::NotFound().json(ErrorResponse::new("not_found", "User not found"))
            }
            AuthError::UserAlreadyExists => HttpResponse::Conflict().json(ErrorResponse::new(
                "user_exists",
                "An account with this username or email already exists",
            )),
            AuthError::InsufficientPermissions => HttpResponse::Forbidden().json(
                ErrorResponse::new("forbidden", "Insufficient permissions"),
            ),
        },
        DomainError::Token(token_error) => match token_error {
            TokenError::GenerationFailed => {
                error!("token generation failed");
                internal_error_response()
            }
            faulty if faulty.is_invariant_fault() => {
                error!(detail = %faulty, "token store invariant violated");
                internal_error_response()
            }
            rejected => {
                warn!(reason = %rejected, "token rejected");
                HttpResponse::Unauthorized().json(ErrorResponse::new(
                    "invalid_token",
                    "The token is invalid or expired",
                ))
            }
        },
    }
}

/// Map a failed refresh or logout to its HTTP response
///
/// Rejections deliberately share one body whatever the reason, so a caller
/// probing with stolen tokens learns nothing from the response. The reason
/// has already been logged by the service. Store faults and internal errors
/// still surface as a 500.
pub fn handle_session_rejection(error: DomainError) -> HttpResponse {
    match &error {
        DomainError::Token(token_error) if token_error.is_invariant_fault() => {
            handle_domain_error(error)
        }
        DomainError::Token(TokenError::GenerationFailed) | DomainError::Internal { .. } => {
            handle_domain_error(error)
        }
        _ => HttpResponse::Unauthorized().json(ErrorResponse::new(
            "invalid_refresh_token",
            "The refresh token is invalid or no longer active",
        )),
    }
}

/// Turn request body validation failures into a 400 with per-field details
pub fn handle_validation_errors(errors: validator::ValidationErrors) -> HttpResponse {
    let details: HashMap<String, serde_json::Value> = errors
        .field_errors()
        .into_iter()
        .map(|(field, failures)| {
            let codes: Vec<&str> = failures.iter().map(|f| f.code.as_ref()).collect();
            (field.to_string(), serde_json::json!(codes))
        })
        .collect();

    HttpResponse::BadRequest().json(
        ErrorResponse::new("validation_error", "Request validation failed").with_details(details),
    )
}

fn internal_error_response() -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse::new(
        "internal_error",
        "An internal server error occurred",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = handle_domain_error(DomainError::NotFound {
            resource: "task 42".to_string(),
        });
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_detail_never_leaves() {
        let response = handle_domain_error(DomainError::Internal {
            message: "connection refused to db-prod-3".to_string(),
        });
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_session_rejections_share_status() {
        let reasons = [
            TokenError::Expired,
            TokenError::InvalidSignature,
            TokenError::NotRecognized,
            TokenError::NotActive,
        ];
        for reason in reasons {
            let response = handle_session_rejection(reason.into());
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        }

        let user_gone = handle_session_rejection(AuthError::UserNotFound.into());
        assert_eq!(user_gone.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_session_store_fault_is_internal() {
        let response = handle_session_rejection(TokenError::AlreadyRevoked.into());
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
