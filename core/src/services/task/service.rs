//! Task management service implementation

use std::sync::Arc;

use chrono::{DateTime, Utc};
use th_shared::types::pagination::{PaginatedResponse, Pagination};
use tracing::info;
use uuid::Uuid;

use crate::domain::entities::task::{Task, TaskPriority, TaskStatus};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{CategoryRepository, TaskFilter, TaskRepository};

/// Maximum accepted title length, matching the column width
const TITLE_MAX_LENGTH: usize = 200;

/// Fields for creating a task
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub category_id: Uuid,
}

/// Partial update of a task; unset fields keep their value
#[derive(Debug, Clone, Default)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub due_date: Option<Option<DateTime<Utc>>>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub category_id: Option<Uuid>,
}

/// Service for owner-scoped task management
///
/// Every operation takes the acting user's id; tasks belonging to someone
/// else behave exactly like tasks that do not exist.
pub struct TaskService<T, C>
where
    T: TaskRepository,
    C: CategoryRepository,
{
    task_repository: Arc<T>,
    category_repository: Arc<C>,
}

impl<T, C> TaskService<T, C>
where
    T: TaskRepository,
    C: CategoryRepository,
{
    /// Create a new task service
    pub fn new(task_repository: Arc<T>, category_repository: Arc<C>) -> Self {
        Self {
            task_repository,
            category_repository,
        }
    }

    /// Create a task owned by `user_id`
    ///
    /// # Returns
    /// * `Ok(Task)` - The created task
    /// * `Err(DomainError::Validation)` - Bad title or unknown category
    pub async fn create_task(&self, user_id: Uuid, new_task: NewTask) -> DomainResult<Task> {
        validate_title(&new_task.title)?;
        self.require_category(new_task.category_id).await?;

        let mut task = Task::new(new_task.title, user_id, new_task.category_id);
        task.description = new_task.description;
        task.due_date = new_task.due_date;
        if let Some(status) = new_task.status {
            task.status = status;
        }
        if let Some(priority) = new_task.priority {
            task.priority = priority;
        }

        let task = self.task_repository.create(task).await?;
        info!(task_id = %task.id, user_id = %user_id, "task created");
        Ok(task)
    }

    /// Fetch a single task owned by `user_id`
    ///
    /// # Returns
    /// * `Ok(Task)` - The task
    /// * `Err(DomainError::NotFound)` - No such task, or owned by another user
    pub async fn get_task(&self, user_id: Uuid, task_id: Uuid) -> DomainResult<Task> {
        let task = self
            .task_repository
            .find_by_id(task_id)
            .await?
            .filter(|t| t.is_owned_by(user_id))
            .ok_or(DomainError::NotFound {
                resource: format!("task {}", task_id),
            })?;
        Ok(task)
    }

    /// List one page of the user's tasks
    ///
    /// Results are ordered by due date ascending; the total count reflects
    /// the filter, not the page.
    pub async fn list_tasks(
        &self,
        user_id: Uuid,
        filter: TaskFilter,
        pagination: Pagination,
    ) -> DomainResult<PaginatedResponse<Task>> {
        let pagination = pagination.validate();
        let (tasks, total) = self
            .task_repository
            .list_for_user(user_id, &filter, &pagination)
            .await?;
        Ok(PaginatedResponse::new(tasks, pagination, total))
    }

    /// Apply a partial update to a task owned by `user_id`
    ///
    /// # Returns
    /// * `Ok(Task)` - The updated task
    /// * `Err(DomainError::NotFound)` - No such task, or owned by another user
    /// * `Err(DomainError::Validation)` - Bad title or unknown category
    pub async fn update_task(
        &self,
        user_id: Uuid,
        task_id: Uuid,
        changes: TaskChanges,
    ) -> DomainResult<Task> {
        let mut task = self.get_task(user_id, task_id).await?;

        if let Some(title) = changes.title {
            validate_title(&title)?;
            task.title = title;
        }
        if let Some(description) = changes.description {
            task.description = description;
        }
        if let Some(due_date) = changes.due_date {
            task.due_date = due_date;
        }
        if let Some(status) = changes.status {
            task.status = status;
        }
        if let Some(priority) = changes.priority {
            task.priority = priority;
        }
        if let Some(category_id) = changes.category_id {
            self.require_category(category_id).await?;
            task.category_id = category_id;
        }

        task.touch();
        let task = self.task_repository.update(task).await?;
        info!(task_id = %task.id, user_id = %user_id, "task updated");
        Ok(task)
    }

    /// Delete a task owned by `user_id`
    ///
    /// # Returns
    /// * `Ok(())` - Task deleted
    /// * `Err(DomainError::NotFound)` - No such task, or owned by another user
    pub async fn delete_task(&self, user_id: Uuid, task_id: Uuid) -> DomainResult<()> {
        let task = self.get_task(user_id, task_id).await?;

        if !self.task_repository.delete(task.id).await? {
            return Err(DomainError::NotFound {
                resource: format!("task {}", task_id),
            });
        }

        info!(task_id = %task_id, user_id = %user_id, "task deleted");
        Ok(())
    }

    async fn require_category(&self, category_id: Uuid) -> DomainResult<()> {
        self.category_repository
            .find_by_id(category_id)
            .await?
            .ok_or(DomainError::Validation {
                message: format!("unknown category {}", category_id),
            })?;
        Ok(())
    }
}

fn validate_title(title: &str) -> DomainResult<()> {
    if title.trim().is_empty() {
        return Err(DomainError::Validation {
            message: "title must not be empty".to_string(),
        });
    }
    if title.len() > TITLE_MAX_LENGTH {
        return Err(DomainError::Validation {
            message: format!("title must be at most {} characters", TITLE_MAX_LENGTH),
        });
    }
    Ok(())
}
