//! Request bodies for the category routes

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body for `POST /categories` and `PUT /categories/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CategoryRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}
