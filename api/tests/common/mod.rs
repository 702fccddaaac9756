//! Shared fixtures for the API integration tests
//!
//! Assembles the full application over the in-memory repositories, with a
//! low bcrypt cost so registration and login stay fast.

use std::sync::Arc;

use actix_web::web;
use th_api::app::AppState;
use th_core::domain::entities::token::TokenPair;
use th_core::domain::entities::user::{User, UserRole};
use th_core::repositories::{
    MockCategoryRepository, MockTaskRepository, MockTokenRepository, MockUserRepository,
};
use th_core::services::auth::{AuthService, AuthServiceConfig, PasswordHasher};
use th_core::services::category::CategoryService;
use th_core::services::task::TaskService;
use th_core::services::token::{TokenCodec, TokenService, TokenServiceConfig};
use th_infra::security::BcryptPasswordHasher;
use th_shared::config::{CorsConfig, Environment};

pub type TestAppState = AppState<
    MockUserRepository,
    MockTokenRepository,
    MockTaskRepository,
    MockCategoryRepository,
    BcryptPasswordHasher,
>;

pub struct TestContext {
    pub state: web::Data<TestAppState>,
    pub user_repo: Arc<MockUserRepository>,
    pub task_repo: Arc<MockTaskRepository>,
    pub category_repo: Arc<MockCategoryRepository>,
    pub token_service: Arc<TokenService<MockTokenRepository>>,
}

pub fn test_context() -> TestContext {
    let user_repo = Arc::new(MockUserRepository::new());
    let token_repo = MockTokenRepository::new();
    let task_repo = Arc::new(MockTaskRepository::new());
    let category_repo = Arc::new(MockCategoryRepository::new());

    let token_config = TokenServiceConfig::default();
    let token_codec = Arc::new(TokenCodec::new(&token_config));
    let token_service = Arc::new(TokenService::new(token_repo.clone(), token_config));

    let auth_service = Arc::new(AuthService::new(
        user_repo.clone(),
        token_service.clone(),
        Arc::new(BcryptPasswordHasher::with_cost(4)),
        AuthServiceConfig::default(),
    ));
    let task_service = Arc::new(TaskService::new(task_repo.clone(), category_repo.clone()));
    let category_service = Arc::new(CategoryService::new(category_repo.clone()));

    let state = web::Data::new(AppState {
        auth_service,
        task_service,
        category_service,
        token_codec,
        cors: CorsConfig::default(),
        environment: Environment::Development,
    });

    TestContext {
        state,
        user_repo,
        task_repo,
        category_repo,
        token_service,
    }
}

/// Seeds a user with password `hunter42` and opens a session for them
pub async fn seed_user(ctx: &TestContext, username: &str, role: UserRole) -> (User, TokenPair) {
    let hasher = BcryptPasswordHasher::with_cost(4);
    let mut user = User::new(
        username,
        format!("{}@example.com", username),
        hasher.hash("hunter42").unwrap(),
    );
    user.role = role;
    ctx.user_repo.insert(user.clone()).await;

    let pair = ctx
        .token_service
        .issue_pair(&user, "127.0.0.1")
        .await
        .unwrap();
    (user, pair)
}

pub fn bearer(token: &str) -> (actix_web::http::header::HeaderName, String) {
    (
        actix_web::http::header::AUTHORIZATION,
        format!("Bearer {}", token),
    )
}
