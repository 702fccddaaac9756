//! Task endpoints
//!
//! All task routes require authentication, and every operation is scoped to
//! the authenticated user: another user's task is indistinguishable from a
//! missing one.

use actix_web::{web, HttpResponse};
use th_core::repositories::{
    CategoryRepository, TaskFilter, TaskRepository, TokenRepository, UserRepository,
};
use th_core::services::auth::PasswordHasher;
use th_core::services::task::{NewTask, TaskChanges};
use th_shared::types::pagination::Pagination;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::dto::{CreateTaskRequest, TaskQuery, UpdateTaskRequest};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::middleware::AuthContext;

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_PER_PAGE: u32 = 10;

/// Handler for GET /api/v1/tasks
///
/// Lists one page of the user's tasks ordered by due date, soonest first.
/// Supports `page`, `per_page`, `status`, `priority`, `due_from` and
/// `due_to` query parameters.
pub async fn list_tasks<U, T, K, C, P>(
    state: web::Data<AppState<U, T, K, C, P>>,
    auth: AuthContext,
    query: web::Query<TaskQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    K: TaskRepository + 'static,
    C: CategoryRepository + 'static,
    P: PasswordHasher + 'static,
{
    let query = query.into_inner();
    let pagination = Pagination::new(
        query.page.unwrap_or(DEFAULT_PAGE),
        query.per_page.unwrap_or(DEFAULT_PER_PAGE),
    );
    let filter = TaskFilter {
        status: query.status,
        priority: query.priority,
        due_from: query.due_from,
        due_to: query.due_to,
    };

    match state
        .task_service
        .list_tasks(auth.user_id, filter, pagination)
        .await
    {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/tasks
///
/// Creates a task owned by the authenticated user. New tasks always start
/// as pending; the priority defaults to medium when absent.
///
/// # Responses
/// - 201 Created: The created task
/// - 400 Bad Request: Bad title or unknown category
pub async fn create_task<U, T, K, C, P>(
    state: web::Data<AppState<U, T, K, C, P>>,
    auth: AuthContext,
    request: web::Json<CreateTaskRequest>,
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

    let request = request.into_inner();
    let new_task = NewTask {
        title: request.title,
        description: request.description,
        due_date: request.due_date,
        status: None,
        priority: request.priority,
        category_id: request.category_id,
    };

    match state.task_service.create_task(auth.user_id, new_task).await {
        Ok(task) => HttpResponse::Created().json(task),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/tasks/{id}
pub async fn get_task<U, T, K, C, P>(
    state: web::Data<AppState<U, T, K, C, P>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    K: TaskRepository + 'static,
    C: CategoryRepository + 'static,
    P: PasswordHasher + 'static,
{
    match state
        .task_service
        .get_task(auth.user_id, path.into_inner())
        .await
    {
        Ok(task) => HttpResponse::Ok().json(task),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for PUT /api/v1/tasks/{id}
///
/// Applies a partial update. Absent fields keep their stored value; the
/// nullable description and due date are cleared by an explicit `null`.
pub async fn update_task<U, T, K, C, P>(
    state: web::Data<AppState<U, T, K, C, P>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    request: web::Json<UpdateTaskRequest>,
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

    let request = request.into_inner();
    let changes = TaskChanges {
        title: request.title,
        description: request.description,
        due_date: request.due_date,
        status: request.status,
        priority: request.priority,
        category_id: request.category_id,
    };

    match state
        .task_service
        .update_task(auth.user_id, path.into_inner(), changes)
        .await
    {
        Ok(task) => HttpResponse::Ok().json(task),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for DELETE /api/v1/tasks/{id}
///
/// # Responses
/// - 204 No Content: Task deleted
/// - 404 Not Found: No such task, or owned by another user
pub async fn delete_task<U, T, K, C, P>(
    state: web::Data<AppState<U, T, K, C, P>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    K: TaskRepository + 'static,
    C: CategoryRepository + 'static,
    P: PasswordHasher + 'static,
{
    match state
        .task_service
        .delete_task(auth.user_id, path.into_inner())
        .await
    {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(error),
    }
}
