//! Mock implementation of TaskRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use th_shared::types::pagination::Pagination;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::task::Task;
use crate::errors::DomainError;

use super::r#trait::{TaskFilter, TaskRepository};

/// In-memory task repository for testing
///
/// Clones share the underlying store.
#[derive(Clone)]
pub struct MockTaskRepository {
    tasks: Arc<RwLock<HashMap<Uuid, Task>>>,
}

impl MockTaskRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            tasks: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    fn matches(task: &Task, filter: &TaskFilter) -> bool {
        if let Some(status) = filter.status {
            if task.status != status {
                return false;
            }
        }
        if let Some(priority) = filter.priority {
            if task.priority != priority {
                return false;
            }
        }
        if let Some(from) = filter.due_from {
            match task.due_date {
                Some(due) if due >= from => {}
                _ => return false,
            }
        }
        if let Some(to) = filter.due_to {
            match task.due_date {
                Some(due) if due <= to => {}
                _ => return false,
            }
        }
        true
    }
}

impl Default for MockTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskRepository for MockTaskRepository {
    async fn create(&self, task: Task) -> Result<Task, DomainError> {
        let mut tasks = self.tasks.write().await;
        tasks.insert(task.id, task.clone());
        Ok(task)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>, DomainError> {
        let tasks = self.tasks.read().await;
        Ok(tasks.get(&id).cloned())
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
        filter: &TaskFilter,
        pagination: &Pagination,
    ) -> Result<(Vec<Task>, u64), DomainError> {
        let tasks = self.tasks.read().await;

        let mut matched: Vec<Task> = tasks
            .values()
            .filter(|t| t.user_id == user_id && Self::matches(t, filter))
            .cloned()
            .collect();

        // Same ordering as the SQL implementation: due date ascending,
        // undated tasks first, ties broken by creation time.
        matched.sort_by(|a, b| {
            a.due_date
                .cmp(&b.due_date)
                .then_with(|| a.created_at.cmp(&b.created_at))
        });

        let total = matched.len() as u64;
        let page = matched
            .into_iter()
            .skip(pagination.offset() as usize)
            .take(pagination.limit() as usize)
            .collect();

        Ok((page, total))
    }

    async fn update(&self, task: Task) -> Result<Task, DomainError> {
        let mut tasks = self.tasks.write().await;

        if !tasks.contains_key(&task.id) {
            return Err(DomainError::NotFound {
                resource: format!("task {}", task.id),
            });
        }

        tasks.insert(task.id, task.clone());
        Ok(task)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut tasks = self.tasks.write().await;
        Ok(tasks.remove(&id).is_some())
    }
}
