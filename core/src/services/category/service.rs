//! Category management service implementation

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::entities::category::Category;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::CategoryRepository;

/// Maximum accepted category name length, matching the column width
const NAME_MAX_LENGTH: usize = 100;

/// Service for the shared category catalogue
///
/// Categories are global: every user sees the same list. Mutation is
/// restricted to administrators by the request layer.
pub struct CategoryService<C: CategoryRepository> {
    repository: Arc<C>,
}

impl<C: CategoryRepository> CategoryService<C> {
    /// Create a new category service
    pub fn new(repository: Arc<C>) -> Self {
        Self { repository }
    }

    /// List all categories, ordered by name
    pub async fn list_categories(&self) -> DomainResult<Vec<Category>> {
        self.repository.find_all().await
    }

    /// Fetch a single category
    ///
    /// # Returns
    /// * `Ok(Category)` - The category
    /// * `Err(DomainError::NotFound)` - No such category
    pub async fn get_category(&self, id: Uuid) -> DomainResult<Category> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: format!("category {}", id),
            })
    }

    /// Create a new category
    ///
    /// # Returns
    /// * `Ok(Category)` - The created category
    /// * `Err(DomainError::Conflict)` - The name is already taken
    /// * `Err(DomainError::Validation)` - Bad name
    pub async fn create_category(&self, name: &str) -> DomainResult<Category> {
        let name = validate_name(name)?;

        if self.repository.exists_by_name(name).await? {
            return Err(DomainError::Conflict {
                resource: format!("category '{}' already exists", name),
            });
        }

        let category = self.repository.create(Category::new(name)).await?;
        info!(category_id = %category.id, "category created");
        Ok(category)
    }

    /// Rename an existing category
    ///
    /// # Returns
    /// * `Ok(Category)` - The updated category
    /// * `Err(DomainError::NotFound)` - No such category
    /// * `Err(DomainError::Conflict)` - The new name is already taken
    pub async fn rename_category(&self, id: Uuid, name: &str) -> DomainResult<Category> {
        let name = validate_name(name)?;

        let mut category =
            self.repository
                .find_by_id(id)
                .await?
                .ok_or(DomainError::NotFound {
                    resource: format!("category {}", id),
                })?;

        if category.name != name && self.repository.exists_by_name(name).await? {
            return Err(DomainError::Conflict {
                resource: format!("category '{}' already exists", name),
            });
        }

        category.rename(name);
        let category = self.repository.update(category).await?;
        info!(category_id = %category.id, "category renamed");
        Ok(category)
    }

    /// Delete a category
    ///
    /// Deletion fails while tasks still reference the category; the store
    /// surfaces that as a conflict.
    ///
    /// # Returns
    /// * `Ok(())` - Category deleted
    /// * `Err(DomainError::NotFound)` - No such category
    pub async fn delete_category(&self, id: Uuid) -> DomainResult<()> {
        if !self.repository.delete(id).await? {
            return Err(DomainError::NotFound {
                resource: format!("category {}", id),
            });
        }

        info!(category_id = %id, "category deleted");
        Ok(())
    }
}

fn validate_name(name: &str) -> DomainResult<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::Validation {
            message: "category name must not be empty".to_string(),
        });
    }
    if name.len() > NAME_MAX_LENGTH {
        return Err(DomainError::Validation {
            message: format!(
                "category name must be at most {} characters",
                NAME_MAX_LENGTH
            ),
        });
    }
    Ok(name)
}
