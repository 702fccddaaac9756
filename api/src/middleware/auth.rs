//! JWT authentication middleware for protecting API endpoints
//!
//! The middleware extracts the bearer token from the Authorization header,
//! validates it against the access token codec, and injects an
//! [`AuthContext`] into the request extensions. Handlers receive the context
//! through the `AuthContext` and `AdminContext` extractors.

use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::{header::AUTHORIZATION, StatusCode},
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use th_core::{
    domain::entities::token::AccessClaims,
    domain::entities::user::UserRole,
    errors::{DomainError, TokenError},
    services::token::TokenCodec,
};
use tracing::warn;
use uuid::Uuid;

use crate::dto::ErrorResponse;

/// User authentication context injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User ID from the token subject
    pub user_id: Uuid,
    /// Username carried in the token
    pub username: String,
    /// Email carried in the token
    pub email: String,
    /// Role used for capability checks
    pub role: UserRole,
    /// JWT ID for tracing
    pub jti: String,
}

impl AuthContext {
    /// Builds an authentication context from validated access token claims
    pub fn from_claims(claims: AccessClaims) -> Result<Self, DomainError> {
        let user_id = claims
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidClaims))?;
        let role = claims
            .role
            .parse::<UserRole>()
            .map_err(|_| DomainError::Token(TokenError::InvalidClaims))?;
        Ok(Self {
            user_id,
            username: claims.name,
            email: claims.email,
            role,
            jti: claims.jti,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// JWT authentication middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    codec: Arc<TokenCodec>,
}

impl JwtAuth {
    /// Creates middleware validating tokens with the given codec
    pub fn new(codec: Arc<TokenCodec>) -> Self {
        Self { codec }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            codec: Arc::clone(&self.codec),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    codec: Arc<TokenCodec>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let codec = Arc::clone(&self.codec);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    return Err(unauthorized("Missing or invalid Authorization header"));
                }
            };

            let claims = match codec.decode_access(&token) {
                Ok(claims) => claims,
                Err(reason) => {
                    // The rejection reason stays in the log; the response
                    // body is the same for every invalid token.
                    warn!(reason = %reason, "access token rejected");
                    return Err(unauthorized("The access token is invalid or expired"));
                }
            };

            let auth_context = match AuthContext::from_claims(claims) {
                Ok(context) => context,
                Err(reason) => {
                    warn!(reason = %reason, "access token claims rejected");
                    return Err(unauthorized("The access token is invalid or expired"));
                }
            };

            req.extensions_mut().insert(auth_context);

            service.call(req).await
        })
    }
}

/// Extracts the bearer token from the Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

fn unauthorized(message: &str) -> Error {
    json_error(StatusCode::UNAUTHORIZED, "unauthorized", message)
}

fn forbidden(message: &str) -> Error {
    json_error(StatusCode::FORBIDDEN, "forbidden", message)
}

fn json_error(status: StatusCode, code: &str, message: &str) -> Error {
    let response: HttpResponse = ErrorResponse::new(code, message).to_response(status);
    InternalError::from_response(message.to_string(), response).into()
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| unauthorized("Authentication required"));

        ready(result)
    }
}

/// Extractor requiring the admin role
///
/// Yields 401 when no authentication context is present and 403 when the
/// authenticated user is not an administrator.
pub struct AdminContext(pub AuthContext);

impl FromRequest for AdminContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = match req.extensions().get::<AuthContext>() {
            None => Err(unauthorized("Authentication required")),
            Some(context) if !context.is_admin() => {
                Err(forbidden("Administrator role required"))
            }
            Some(context) => Ok(AdminContext(context.clone())),
        };

        ready(result)
    }
}
