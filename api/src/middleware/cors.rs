//! CORS middleware configuration for cross-origin requests
//!
//! The configuration is environment-aware: development gets a permissive
//! policy for local front-ends and API tooling, production restricts
//! origins to the configured list.

use actix_cors::Cors;
use actix_web::http::Method;
use th_shared::config::{CorsConfig, Environment};
use tracing::info;

/// Creates a CORS middleware instance for the current environment.
///
/// In development, or when the configuration explicitly allows any origin,
/// every origin is accepted. Otherwise only the configured origins are; an
/// empty list means same-origin clients only.
pub fn create_cors(config: &CorsConfig, environment: &Environment) -> Cors {
    if environment.is_development() || config.allows_any_origin() {
        return create_permissive_cors(config.max_age as usize);
    }

    create_restricted_cors(config)
}

fn create_permissive_cors(max_age: usize) -> Cors {
    info!("Configuring permissive CORS");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_any_header()
        .max_age(max_age)
}

fn create_restricted_cors(config: &CorsConfig) -> Cors {
    info!(origins = config.allowed_origins.len(), "Configuring restricted CORS");

    let mut cors = Cors::default()
        .allowed_methods(
            config
                .allowed_methods
                .iter()
                .filter_map(|m| m.parse::<Method>().ok())
                .collect::<Vec<_>>(),
        )
        .allowed_headers(config.allowed_headers.iter().map(String::as_str).collect::<Vec<_>>())
        .supports_credentials()
        .max_age(config.max_age as usize);

    for origin in &config.allowed_origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}
