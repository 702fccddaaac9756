//! User repository trait defining the interface for user data persistence.
//!
//! This module defines the repository pattern interface for User entities.
//! The trait is async-first and uses Result types for proper error handling.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::{User, UserRole};
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// This trait defines the contract for data access operations related to users.
/// Implementations of this trait should handle the actual database operations
/// while maintaining the abstraction boundary between domain and infrastructure layers.
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use th_core::repositories::UserRepository;
/// use th_core::domain::entities::user::User;
/// use th_core::errors::DomainError;
/// # use th_core::domain::entities::user::UserRole;
/// # use uuid::Uuid;
///
/// struct MySqlUserRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl UserRepository for MySqlUserRepository {
///     async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
///         // Implementation here
///         Ok(None)
///     }
///
///     // ... other methods
/// #     async fn create(&self, _user: User) -> Result<User, DomainError> { unimplemented!() }
/// #     async fn find_by_id(&self, _id: Uuid) -> Result<Option<User>, DomainError> { unimplemented!() }
/// #     async fn find_by_username(&self, _username: &str) -> Result<Option<User>, DomainError> { unimplemented!() }
/// #     async fn exists_by_email(&self, _email: &str) -> Result<bool, DomainError> { unimplemented!() }
/// #     async fn exists_by_username(&self, _username: &str) -> Result<bool, DomainError> { unimplemented!() }
/// #     async fn update_role(&self, _id: Uuid, _role: UserRole) -> Result<(), DomainError> { unimplemented!() }
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user in the repository
    ///
    /// # Arguments
    /// * `user` - The User entity to persist
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError)` - Creation failed (e.g., duplicate email or username)
    ///
    /// # Example
    /// ```no_run
    /// # use th_core::repositories::UserRepository;
    /// # use th_core::domain::entities::user::User;
    /// # async fn example(repo: &impl UserRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let new_user = User::new("alice", "alice@example.com", "$2b$12$bcrypt-hash");
    ///
    /// let created_user = repo.create(new_user).await?;
    /// println!("Created user with ID: {}", created_user.id);
    /// # Ok(())
    /// # }
    /// ```
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Find a user by their unique identifier
    ///
    /// # Arguments
    /// * `id` - The UUID of the user
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user found with given ID
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by their email address
    ///
    /// # Arguments
    /// * `email` - The email address to search for
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user found with given email
    /// * `Err(DomainError)` - Database error occurred
    ///
    /// # Example
    /// ```no_run
    /// # use th_core::repositories::UserRepository;
    /// # async fn example(repo: &impl UserRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// match repo.find_by_email("alice@example.com").await? {
    ///     Some(user) => println!("User found: {}", user.id),
    ///     None => println!("User not found"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their username
    ///
    /// # Arguments
    /// * `username` - The username to search for
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user found with given username
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Check if a user exists with the given email address
    ///
    /// # Arguments
    /// * `email` - The email address to check
    ///
    /// # Returns
    /// * `Ok(true)` - User exists
    /// * `Ok(false)` - User does not exist
    /// * `Err(DomainError)` - Database error occurred
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Check if a user exists with the given username
    ///
    /// # Arguments
    /// * `username` - The username to check
    ///
    /// # Returns
    /// * `Ok(true)` - User exists
    /// * `Ok(false)` - User does not exist
    /// * `Err(DomainError)` - Database error occurred
    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError>;

    /// Change the role of an existing user
    ///
    /// # Arguments
    /// * `id` - The UUID of the user
    /// * `role` - The role to assign
    ///
    /// # Returns
    /// * `Ok(())` - Role was updated
    /// * `Err(DomainError::NotFound)` - No user found with given ID
    /// * `Err(DomainError)` - Database error occurred
    async fn update_role(&self, id: Uuid, role: UserRole) -> Result<(), DomainError>;
}
