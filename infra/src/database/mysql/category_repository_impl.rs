//! MySQL implementation of the CategoryRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use th_core::domain::entities::category::Category;
use th_core::errors::DomainError;
use th_core::repositories::CategoryRepository;

/// MySQL implementation of CategoryRepository
pub struct MySqlCategoryRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlCategoryRepository {
    /// Create a new MySQL category repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Category entity
    fn row_to_category(row: &sqlx::mysql::MySqlRow) -> Result<Category, DomainError> {
        let id: String = row.try_get("id")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get id: {}", e) })?;

        Ok(Category {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::Internal { message: format!("Invalid category UUID: {}", e) })?,
            name: row.try_get("name")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get name: {}", e) })?,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get created_at: {}", e) })?,
            updated_at: row.try_get::<Option<DateTime<Utc>>, _>("updated_at")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get updated_at: {}", e) })?,
        })
    }
}

#[async_trait]
impl CategoryRepository for MySqlCategoryRepository {
    async fn create(&self, category: Category) -> Result<Category, DomainError> {
        let query = r#"
            INSERT INTO categories (id, name, created_at, updated_at)
            VALUES (?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(category.id.to_string())
            .bind(&category.name)
            .bind(category.created_at)
            .bind(category.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_unique_violation() => DomainError::Conflict {
                    resource: format!("category '{}' already exists", category.name),
                },
                _ => DomainError::Internal {
                    message: format!("Failed to create category: {}", e),
                },
            })?;

        Ok(category)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, DomainError> {
        let query = r#"
            SELECT id, name, created_at, updated_at
            FROM categories
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to find category: {}", e) })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_category(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<Category>, DomainError> {
        let query = r#"
            SELECT id, name, created_at, updated_at
            FROM categories
            ORDER BY name ASC
        "#;

        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to list categories: {}", e) })?;

        let mut categories = Vec::with_capacity(rows.len());
        for row in &rows {
            categories.push(Self::row_to_category(row)?);
        }

        Ok(categories)
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, DomainError> {
        let query = "SELECT EXISTS(SELECT 1 FROM categories WHERE name = ?) as category_exists";

        let row = sqlx::query(query)
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to check category existence: {}", e) })?;

        let exists: i8 = row.try_get("category_exists")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get existence result: {}", e) })?;

        Ok(exists == 1)
    }

    async fn update(&self, category: Category) -> Result<Category, DomainError> {
        let query = r#"
            UPDATE categories
            SET name = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&category.name)
            .bind(category.updated_at)
            .bind(category.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_unique_violation() => DomainError::Conflict {
                    resource: format!("category '{}' already exists", category.name),
                },
                _ => DomainError::Internal {
                    message: format!("Failed to update category: {}", e),
                },
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: format!("category {}", category.id),
            });
        }

        Ok(category)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let query = "DELETE FROM categories WHERE id = ?";

        let result = sqlx::query(query)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                // Tasks hold a restricting foreign key on categories.
                sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                    DomainError::Conflict {
                        resource: format!("category {} still has tasks", id),
                    }
                }
                _ => DomainError::Internal {
                    message: format!("Failed to delete category: {}", e),
                },
            })?;

        Ok(result.rows_affected() > 0)
    }
}