//! Category endpoints
//!
//! The category list is readable without authentication so clients can
//! render pickers before login. Everything that changes categories is
//! restricted to administrators.

use actix_web::{web, HttpResponse};
use th_core::repositories::{CategoryRepository, TaskRepository, TokenRepository, UserRepository};
use th_core::services::auth::PasswordHasher;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::dto::CategoryRequest;
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::middleware::AdminContext;

/// Handler for GET /api/v1/categories
///
/// Lists all categories ordered by name. Public.
pub async fn list_categories<U, T, K, C, P>(
    state: web::Data<AppState<U, T, K, C, P>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    K: TaskRepository + 'static,
    C: CategoryRepository + 'static,
    P: PasswordHasher + 'static,
{
    match state.category_service.list_categories().await {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/categories/{id}
///
/// Admin only.
pub async fn get_category<U, T, K, C, P>(
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
    match state.category_service.get_category(path.into_inner()).await {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/categories
///
/// Admin only.
///
/// # Responses
/// - 201 Created: The created category
/// - 409 Conflict: A category with this name already exists
pub async fn create_category<U, T, K, C, P>(
    state: web::Data<AppState<U, T, K, C, P>>,
    _admin: AdminContext,
    request: web::Json<CategoryRequest>,
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

    match state.category_service.create_category(&request.name).await {
        Ok(category) => HttpResponse::Created().json(category),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for PUT /api/v1/categories/{id}
///
/// Admin only. Renames the category.
pub async fn update_category<U, T, K, C, P>(
    state: web::Data<AppState<U, T, K, C, P>>,
    _admin: AdminContext,
    path: web::Path<Uuid>,
    request: web::Json<CategoryRequest>,
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
        .category_service
        .rename_category(path.into_inner(), &request.name)
        .await
    {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for DELETE /api/v1/categories/{id}
///
/// Admin only.
///
/// # Responses
/// - 204 No Content: Category deleted
/// - 404 Not Found: No such category
/// - 409 Conflict: Tasks still reference the category
pub async fn delete_category<U, T, K, C, P>(
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
    match state.category_service.delete_category(path.into_inner()).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(error),
    }
}
