//! Category repository trait defining the interface for category persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::category::Category;
use crate::errors::DomainError;

/// Repository trait for Category entity persistence operations
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Create a new category in the repository
    ///
    /// # Arguments
    /// * `category` - The Category entity to persist
    ///
    /// # Returns
    /// * `Ok(Category)` - The created category
    /// * `Err(DomainError::Conflict)` - A category with the same name exists
    /// * `Err(DomainError)` - Creation failed
    async fn create(&self, category: Category) -> Result<Category, DomainError>;

    /// Find a category by its unique identifier
    ///
    /// # Arguments
    /// * `id` - The UUID of the category
    ///
    /// # Returns
    /// * `Ok(Some(Category))` - Category found
    /// * `Ok(None)` - No category found with given ID
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, DomainError>;

    /// List all categories, ordered by name ascending
    ///
    /// # Returns
    /// * `Ok(Vec<Category>)` - All categories
    /// * `Err(DomainError)` - Database error occurred
    async fn find_all(&self) -> Result<Vec<Category>, DomainError>;

    /// Check if a category exists with the given name
    ///
    /// # Arguments
    /// * `name` - The category name to check
    ///
    /// # Returns
    /// * `Ok(true)` - Category exists
    /// * `Ok(false)` - Category does not exist
    /// * `Err(DomainError)` - Database error occurred
    async fn exists_by_name(&self, name: &str) -> Result<bool, DomainError>;

    /// Update an existing category in the repository
    ///
    /// # Arguments
    /// * `category` - The Category entity with updated fields
    ///
    /// # Returns
    /// * `Ok(Category)` - The updated category
    /// * `Err(DomainError::NotFound)` - No category found with given ID
    /// * `Err(DomainError)` - Update failed
    async fn update(&self, category: Category) -> Result<Category, DomainError>;

    /// Delete a category from the repository
    ///
    /// # Arguments
    /// * `id` - The UUID of the category to delete
    ///
    /// # Returns
    /// * `Ok(true)` - Category was deleted
    /// * `Ok(false)` - Category not found
    /// * `Err(DomainError)` - Deletion failed
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
