//! Task repository trait defining the interface for task persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use th_shared::types::pagination::Pagination;
use uuid::Uuid;

use crate::domain::entities::task::{Task, TaskPriority, TaskStatus};
use crate::errors::DomainError;

/// Optional filters applied when listing tasks
///
/// Empty filters match everything. All set filters must match at once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFilter {
    /// Match tasks in this status
    pub status: Option<TaskStatus>,
    /// Match tasks with this priority
    pub priority: Option<TaskPriority>,
    /// Match tasks due on or after this instant
    pub due_from: Option<DateTime<Utc>>,
    /// Match tasks due on or before this instant
    pub due_to: Option<DateTime<Utc>>,
}

impl TaskFilter {
    /// Whether no filter is set
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.priority.is_none()
            && self.due_from.is_none()
            && self.due_to.is_none()
    }
}

/// Repository trait for Task entity persistence operations
///
/// Listing is always scoped to one owner; cross-user queries are not part of
/// the contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Create a new task in the repository
    ///
    /// # Arguments
    /// * `task` - The Task entity to persist
    ///
    /// # Returns
    /// * `Ok(Task)` - The created task
    /// * `Err(DomainError)` - Creation failed
    async fn create(&self, task: Task) -> Result<Task, DomainError>;

    /// Find a task by its unique identifier
    ///
    /// The lookup is not owner-scoped; callers enforce ownership on the
    /// returned entity.
    ///
    /// # Arguments
    /// * `id` - The UUID of the task
    ///
    /// # Returns
    /// * `Ok(Some(Task))` - Task found
    /// * `Ok(None)` - No task found with given ID
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>, DomainError>;

    /// List one page of a user's tasks, ordered by due date ascending
    ///
    /// # Arguments
    /// * `user_id` - Owner whose tasks are listed
    /// * `filter` - Filters to apply before paging
    /// * `pagination` - Page to fetch
    ///
    /// # Returns
    /// * `Ok((Vec<Task>, u64))` - The page of tasks and the total match count
    /// * `Err(DomainError)` - Database error occurred
    async fn list_for_user(
        &self,
        user_id: Uuid,
        filter: &TaskFilter,
        pagination: &Pagination,
    ) -> Result<(Vec<Task>, u64), DomainError>;

    /// Update an existing task in the repository
    ///
    /// # Arguments
    /// * `task` - The Task entity with updated fields
    ///
    /// # Returns
    /// * `Ok(Task)` - The updated task
    /// * `Err(DomainError::NotFound)` - No task found with given ID
    /// * `Err(DomainError)` - Update failed
    async fn update(&self, task: Task) -> Result<Task, DomainError>;

    /// Delete a task from the repository
    ///
    /// # Arguments
    /// * `id` - The UUID of the task to delete
    ///
    /// # Returns
    /// * `Ok(true)` - Task was deleted
    /// * `Ok(false)` - Task not found
    /// * `Err(DomainError)` - Deletion failed
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
