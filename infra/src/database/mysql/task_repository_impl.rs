//! MySQL implementation of the TaskRepository trait.
//!
//! This module provides the concrete implementation of task persistence
//! using MySQL database with SQLx, including the filtered and paginated
//! listing query.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlArguments;
use sqlx::query::Query;
use sqlx::{MySql, MySqlPool, Row};
use uuid::Uuid;

use th_core::domain::entities::task::{Task, TaskPriority, TaskStatus};
use th_core::errors::DomainError;
use th_core::repositories::{TaskFilter, TaskRepository};
use th_shared::types::pagination::Pagination;

/// Columns selected for every task query
const TASK_COLUMNS: &str =
    "id, title, description, due_date, status, priority, created_at, updated_at, user_id, category_id";

/// MySQL implementation of TaskRepository
pub struct MySqlTaskRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlTaskRepository {
    /// Create a new MySQL task repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Task entity
    fn row_to_task(row: &sqlx::mysql::MySqlRow) -> Result<Task, DomainError> {
        let id: String = row.try_get("id")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get id: {}", e) })?;

        let user_id: String = row.try_get("user_id")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get user_id: {}", e) })?;

        let category_id: String = row.try_get("category_id")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get category_id: {}", e) })?;

        let status: String = row.try_get("status")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get status: {}", e) })?;

        let priority: String = row.try_get("priority")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get priority: {}", e) })?;

        Ok(Task {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::Internal { message: format!("Invalid task UUID: {}", e) })?,
            title: row.try_get("title")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get title: {}", e) })?,
            description: row.try_get("description")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get description: {}", e) })?,
            due_date: row.try_get::<Option<DateTime<Utc>>, _>("due_date")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get due_date: {}", e) })?,
            status: status.parse::<TaskStatus>()
                .map_err(|e| DomainError::Internal { message: format!("Invalid status: {}", e) })?,
            priority: priority.parse::<TaskPriority>()
                .map_err(|e| DomainError::Internal { message: format!("Invalid priority: {}", e) })?,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get created_at: {}", e) })?,
            updated_at: row.try_get::<Option<DateTime<Utc>>, _>("updated_at")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get updated_at: {}", e) })?,
            user_id: Uuid::parse_str(&user_id)
                .map_err(|e| DomainError::Internal { message: format!("Invalid user UUID: {}", e) })?,
            category_id: Uuid::parse_str(&category_id)
                .map_err(|e| DomainError::Internal { message: format!("Invalid category UUID: {}", e) })?,
        })
    }

    /// Build the `AND` clauses matching the set filters
    ///
    /// The clause order must match the bind order in [`bind_filter`].
    fn filter_clauses(filter: &TaskFilter) -> String {
        let mut clauses = String::new();
        if filter.status.is_some() {
            clauses.push_str(" AND status = ?");
        }
        if filter.priority.is_some() {
            clauses.push_str(" AND priority = ?");
        }
        if filter.due_from.is_some() {
            clauses.push_str(" AND due_date >= ?");
        }
        if filter.due_to.is_some() {
            clauses.push_str(" AND due_date <= ?");
        }
        clauses
    }

    /// Bind the set filter values in clause order
    fn bind_filter<'q>(
        mut query: Query<'q, MySql, MySqlArguments>,
        filter: &TaskFilter,
    ) -> Query<'q, MySql, MySqlArguments> {
        if let Some(status) = filter.status {
            query = query.bind(status.as_str());
        }
        if let Some(priority) = filter.priority {
            query = query.bind(priority.as_str());
        }
        if let Some(due_from) = filter.due_from {
            query = query.bind(due_from);
        }
        if let Some(due_to) = filter.due_to {
            query = query.bind(due_to);
        }
        query
    }
}

#[async_trait]
impl TaskRepository for MySqlTaskRepository {
    async fn create(&self, task: Task) -> Result<Task, DomainError> {
        let query = r#"
            INSERT INTO tasks (
                id, title, description, due_date, status, priority,
                created_at, updated_at, user_id, category_id
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(task.id.to_string())
            .bind(&task.title)
            .bind(&task.description)
            .bind(task.due_date)
            .bind(task.status.as_str())
            .bind(task.priority.as_str())
            .bind(task.created_at)
            .bind(task.updated_at)
            .bind(task.user_id.to_string())
            .bind(task.category_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                // A foreign key failure means the owner or category vanished
                // after the service-level checks.
                sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                    DomainError::Validation {
                        message: "task references a missing user or category".to_string(),
                    }
                }
                _ => DomainError::Internal {
                    message: format!("Failed to create task: {}", e),
                },
            })?;

        Ok(task)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>, DomainError> {
        let query = format!(
            "SELECT {} FROM tasks WHERE id = ? LIMIT 1",
            TASK_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to find task: {}", e) })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_task(&row)?)),
            None => Ok(None),
        }
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
        filter: &TaskFilter,
        pagination: &Pagination,
    ) -> Result<(Vec<Task>, u64), DomainError> {
        let where_clause = format!("WHERE user_id = ?{}", Self::filter_clauses(filter));
        let user_id = user_id.to_string();

        let count_sql = format!("SELECT COUNT(*) as total FROM tasks {}", where_clause);
        let count_row = Self::bind_filter(sqlx::query(&count_sql).bind(&user_id), filter)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to count tasks: {}", e) })?;

        let total: i64 = count_row.try_get("total")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get count: {}", e) })?;

        // Undated tasks sort first: MySQL places NULLs at the start of an
        // ascending order.
        let page_sql = format!(
            "SELECT {} FROM tasks {} ORDER BY due_date ASC, created_at ASC LIMIT ? OFFSET ?",
            TASK_COLUMNS, where_clause
        );

        let rows = Self::bind_filter(sqlx::query(&page_sql).bind(&user_id), filter)
            .bind(pagination.limit_i64())
            .bind(pagination.offset_i64())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to list tasks: {}", e) })?;

        let mut tasks = Vec::with_capacity(rows.len());
        for row in &rows {
            tasks.push(Self::row_to_task(row)?);
        }

        Ok((tasks, total as u64))
    }

    async fn update(&self, task: Task) -> Result<Task, DomainError> {
        let query = r#"
            UPDATE tasks SET
                title = ?,
                description = ?,
                due_date = ?,
                status = ?,
                priority = ?,
                updated_at = ?,
                category_id = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&task.title)
            .bind(&task.description)
            .bind(task.due_date)
            .bind(task.status.as_str())
            .bind(task.priority.as_str())
            .bind(task.updated_at)
            .bind(task.category_id.to_string())
            .bind(task.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                    DomainError::Validation {
                        message: "task references a missing category".to_string(),
                    }
                }
                _ => DomainError::Internal {
                    message: format!("Failed to update task: {}", e),
                },
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: format!("task {}", task.id),
            });
        }

        Ok(task)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let query = "DELETE FROM tasks WHERE id = ?";

        let result = sqlx::query(query)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to delete task: {}", e) })?;

        Ok(result.rows_affected() > 0)
    }
}