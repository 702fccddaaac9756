//! Taskhive API server binary
//!
//! Loads configuration from the environment, connects to MySQL, runs the
//! pending migrations and serves the HTTP API.

use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use th_api::app::{create_app, AppState};
use th_core::services::auth::{AuthService, AuthServiceConfig};
use th_core::services::category::CategoryService;
use th_core::services::task::TaskService;
use th_core::services::token::{TokenCodec, TokenService, TokenServiceConfig};
use th_infra::database::{
    DatabasePool, MySqlCategoryRepository, MySqlTaskRepository, MySqlTokenRepository,
    MySqlUserRepository,
};
use th_infra::security::BcryptPasswordHasher;
use th_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting Taskhive API server");

    let config = AppConfig::from_env();
    if config.environment.is_production() && config.auth.is_using_default_secret() {
        anyhow::bail!("JWT secrets must be configured in production");
    }

    // Rejecting a bad algorithm here keeps it a startup failure instead of
    // a per-request one
    let token_config = TokenServiceConfig::from_auth_config(&config.auth)?;

    let database = DatabasePool::new(config.database.clone()).await?;
    database.run_migrations().await?;
    info!("{}", database.get_statistics());

    let user_repository = Arc::new(MySqlUserRepository::new(database.get_pool().clone()));
    let token_repository = MySqlTokenRepository::new(database.get_pool().clone());
    let task_repository = Arc::new(MySqlTaskRepository::new(database.get_pool().clone()));
    let category_repository = Arc::new(MySqlCategoryRepository::new(database.get_pool().clone()));

    let token_codec = Arc::new(TokenCodec::new(&token_config));
    let token_service = Arc::new(TokenService::new(token_repository, token_config));

    let auth_service = Arc::new(AuthService::new(
        user_repository,
        token_service,
        Arc::new(BcryptPasswordHasher::new()),
        AuthServiceConfig::default(),
    ));
    let task_service = Arc::new(TaskService::new(
        task_repository,
        Arc::clone(&category_repository),
    ));
    let category_service = Arc::new(CategoryService::new(category_repository));

    let app_state = web::Data::new(AppState {
        auth_service,
        task_service,
        category_service,
        token_codec,
        cors: config.cors.clone(),
        environment: config.environment,
    });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await?;

    Ok(())
}
