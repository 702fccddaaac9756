//! Application state and factory
//!
//! This module defines the shared application state and the factory that
//! assembles the Actix-web application: middleware, routes and guards.

use std::sync::Arc;

use actix_web::{http::StatusCode, web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use th_core::repositories::{CategoryRepository, TaskRepository, TokenRepository, UserRepository};
use th_core::services::auth::{AuthService, PasswordHasher};
use th_core::services::category::CategoryService;
use th_core::services::task::TaskService;
use th_core::services::token::TokenCodec;
use th_shared::config::{CorsConfig, Environment};

use crate::dto::ErrorResponse;
use crate::middleware::{create_cors, JwtAuth};
use crate::routes::auth::{login::login, logout::logout, refresh::refresh, register::register};
use crate::routes::{categories, roles, tasks};

/// Shared application state handed to every handler
pub struct AppState<U, T, K, C, P>
where
    U: UserRepository,
    T: TokenRepository,
    K: TaskRepository,
    C: CategoryRepository,
    P: PasswordHasher,
{
    pub auth_service: Arc<AuthService<U, T, P>>,
    pub task_service: Arc<TaskService<K, C>>,
    pub category_service: Arc<CategoryService<C>>,
    /// Access token codec used by the authentication middleware
    pub token_codec: Arc<TokenCodec>,
    pub cors: CorsConfig,
    pub environment: Environment,
}

/// Create and configure the application with all dependencies
pub fn create_app<U, T, K, C, P>(
    app_state: web::Data<AppState<U, T, K, C, P>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    K: TaskRepository + 'static,
    C: CategoryRepository + 'static,
    P: PasswordHasher + 'static,
{
    let cors = create_cors(&app_state.cors, &app_state.environment);
    let auth = JwtAuth::new(Arc::clone(&app_state.token_codec));

    App::new()
        .app_data(app_state)
        // Middleware runs bottom-up: CORS first, request logging around it
        .wrap(TracingLogger::default())
        .wrap(cors)
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(register::<U, T, K, C, P>))
                        .route("/login", web::post().to(login::<U, T, K, C, P>))
                        .route("/refresh", web::post().to(refresh::<U, T, K, C, P>))
                        .route("/logout", web::post().to(logout::<U, T, K, C, P>)),
                )
                .service(
                    web::scope("/tasks")
                        .wrap(auth.clone())
                        .route("", web::get().to(tasks::list_tasks::<U, T, K, C, P>))
                        .route("", web::post().to(tasks::create_task::<U, T, K, C, P>))
                        .route("/{id}", web::get().to(tasks::get_task::<U, T, K, C, P>))
                        .route("/{id}", web::put().to(tasks::update_task::<U, T, K, C, P>))
                        .route("/{id}", web::delete().to(tasks::delete_task::<U, T, K, C, P>)),
                )
                .service(
                    // The category list is public; everything else in the
                    // scope authenticates per route
                    web::scope("/categories")
                        .route("", web::get().to(categories::list_categories::<U, T, K, C, P>))
                        .route(
                            "",
                            web::post()
                                .to(categories::create_category::<U, T, K, C, P>)
                                .wrap(auth.clone()),
                        )
                        .route(
                            "/{id}",
                            web::get()
                                .to(categories::get_category::<U, T, K, C, P>)
                                .wrap(auth.clone()),
                        )
                        .route(
                            "/{id}",
                            web::put()
                                .to(categories::update_category::<U, T, K, C, P>)
                                .wrap(auth.clone()),
                        )
                        .route(
                            "/{id}",
                            web::delete()
                                .to(categories::delete_category::<U, T, K, C, P>)
                                .wrap(auth.clone()),
                        ),
                )
                .service(
                    web::scope("/roles")
                        .wrap(auth.clone())
                        .route("/assign", web::post().to(roles::assign_role::<U, T, K, C, P>))
                        .route("/remove", web::post().to(roles::remove_role::<U, T, K, C, P>))
                        .route("/user/{id}", web::get().to(roles::user_roles::<U, T, K, C, P>)),
                )
                .route("/", web::get().to(api_documentation)),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "taskhive-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// API documentation endpoint
async fn api_documentation() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Taskhive API v1",
        "endpoints": {
            "health": "GET /health",
            "auth": {
                "register": "POST /api/v1/auth/register",
                "login": "POST /api/v1/auth/login",
                "refresh": "POST /api/v1/auth/refresh",
                "logout": "POST /api/v1/auth/logout"
            },
            "tasks": {
                "list": "GET /api/v1/tasks",
                "create": "POST /api/v1/tasks",
                "get": "GET /api/v1/tasks/{id}",
                "update": "PUT /api/v1/tasks/{id}",
                "delete": "DELETE /api/v1/tasks/{id}"
            },
            "categories": {
                "list": "GET /api/v1/categories",
                "get": "GET /api/v1/categories/{id}",
                "create": "POST /api/v1/categories",
                "update": "PUT /api/v1/categories/{id}",
                "delete": "DELETE /api/v1/categories/{id}"
            },
            "roles": {
                "assign": "POST /api/v1/roles/assign",
                "remove": "POST /api/v1/roles/remove",
                "user_roles": "GET /api/v1/roles/user/{id}"
            }
        }
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    ErrorResponse::new("not_found", "The requested resource was not found")
        .to_response(StatusCode::NOT_FOUND)
}
