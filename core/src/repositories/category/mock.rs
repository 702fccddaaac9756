//! Mock implementation of CategoryRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::category::Category;
use crate::errors::DomainError;

use super::r#trait::CategoryRepository;

/// In-memory category repository for testing
///
/// Clones share the underlying store.
#[derive(Clone)]
pub struct MockCategoryRepository {
    categories: Arc<RwLock<HashMap<Uuid, Category>>>,
}

impl MockCategoryRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            categories: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockCategoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CategoryRepository for MockCategoryRepository {
    async fn create(&self, category: Category) -> Result<Category, DomainError> {
        let mut categories = self.categories.write().await;

        if categories.values().any(|c| c.name == category.name) {
            return Err(DomainError::Conflict {
                resource: format!("category '{}' already exists", category.name),
            });
        }

        categories.insert(category.id, category.clone());
        Ok(category)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, DomainError> {
        let categories = self.categories.read().await;
        Ok(categories.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Category>, DomainError> {
        let categories = self.categories.read().await;

        let mut all: Vec<Category> = categories.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, DomainError> {
        let categories = self.categories.read().await;
        Ok(categories.values().any(|c| c.name == name))
    }

    async fn update(&self, category: Category) -> Result<Category, DomainError> {
        let mut categories = self.categories.write().await;

        if !categories.contains_key(&category.id) {
            return Err(DomainError::NotFound {
                resource: format!("category {}", category.id),
            });
        }

        categories.insert(category.id, category.clone());
        Ok(category)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut categories = self.categories.write().await;
        Ok(categories.remove(&id).is_some())
    }
}
