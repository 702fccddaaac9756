//! MySQL implementation of the UserRepository trait.
//!
//! This module provides the concrete implementation of user data persistence
//! using MySQL database with SQLx.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use th_core::domain::entities::user::{User, UserRole};
use th_core::errors::{AuthError, DomainError};
use th_core::repositories::UserRepository;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row.try_get("id")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get id: {}", e) })?;

        let role: String = row.try_get("role")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get role: {}", e) })?;

        Ok(User {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::Internal { message: format!("Invalid user UUID: {}", e) })?,
            username: row.try_get("username")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get username: {}", e) })?,
            email: row.try_get("email")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get email: {}", e) })?,
            password_hash: row.try_get("password_hash")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get password_hash: {}", e) })?,
            role: role.parse::<UserRole>()
                .map_err(|e| DomainError::Internal { message: format!("Invalid role: {}", e) })?,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get created_at: {}", e) })?,
        })
    }

    /// Run a `SELECT EXISTS` query with a single string binding
    async fn exists_where(&self, query: &str, value: &str) -> Result<bool, DomainError> {
        let row = sqlx::query(query)
            .bind(value)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to check user existence: {}", e) })?;

        let exists: i8 = row.try_get("user_exists")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get existence result: {}", e) })?;

        Ok(exists == 1)
    }

    async fn find_where(&self, query: &str, value: &str) -> Result<Option<User>, DomainError> {
        let result = sqlx::query(query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Database query failed: {}", e) })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (
                id, username, email, password_hash, role, created_at
            ) VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.role.as_str())
            .bind(user.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                // Unique keys on username and email back the service-level
                // duplicate checks against concurrent registrations.
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    AuthError::UserAlreadyExists.into()
                }
                _ => DomainError::Internal {
                    message: format!("Failed to create user: {}", e),
                },
            })?;

        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, username, email, password_hash, role, created_at
            FROM users
            WHERE id = ?
            LIMIT 1
        "#;

        self.find_where(query, &id.to_string()).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, username, email, password_hash, role, created_at
            FROM users
            WHERE email = ?
            LIMIT 1
        "#;

        self.find_where(query, email).await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, username, email, password_hash, role, created_at
            FROM users
            WHERE username = ?
            LIMIT 1
        "#;

        self.find_where(query, username).await
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let query = "SELECT EXISTS(SELECT 1 FROM users WHERE email = ?) as user_exists";
        self.exists_where(query, email).await
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        let query = "SELECT EXISTS(SELECT 1 FROM users WHERE username = ?) as user_exists";
        self.exists_where(query, username).await
    }

    async fn update_role(&self, id: Uuid, role: UserRole) -> Result<(), DomainError> {
        let query = "UPDATE users SET role = ? WHERE id = ?";

        let result = sqlx::query(query)
            .bind(role.as_str())
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to update role: {}", e) })?;

        // MySQL reports changed rows, not matched rows, so re-assigning the
        // role a user already holds also affects zero rows.
        if result.rows_affected() == 0 && self.find_by_id(id).await?.is_none() {
            return Err(DomainError::NotFound {
                resource: format!("user {}", id),
            });
        }

        Ok(())
    }
}