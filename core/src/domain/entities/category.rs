//! Category entity for grouping tasks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task category, shared by all users
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier for the category
    pub id: Uuid,

    /// Display name, unique
    pub name: String,

    /// Timestamp when the category was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last modification
    pub updated_at: Option<DateTime<Utc>>,
}

impl Category {
    /// Creates a new category
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Renames the category and records the modification time
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.updated_at = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category() {
        let category = Category::new("Work");
        assert_eq!(category.name, "Work");
        assert!(category.updated_at.is_none());
    }

    #[test]
    fn test_rename_updates_timestamp() {
        let mut category = Category::new("Work");
        category.rename("Office");
        assert_eq!(category.name, "Office");
        assert!(category.updated_at.is_some());
    }
}
