//! Request bodies and query parameters for the task routes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use th_core::domain::entities::task::{TaskPriority, TaskStatus};
use uuid::Uuid;
use validator::Validate;

/// Body for `POST /tasks`
///
/// There is no status field: new tasks always start out pending.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTaskRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub priority: Option<TaskPriority>,
    pub category_id: Uuid,
}

/// Body for `PUT /tasks/{id}`
///
/// All fields are optional; an absent field keeps the stored value. The
/// nullable fields use a double option so that an explicit JSON `null`
/// clears the value instead of being ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub due_date: Option<Option<DateTime<Utc>>>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub category_id: Option<Uuid>,
}

/// Query parameters for `GET /tasks`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub due_from: Option<DateTime<Utc>>,
    pub due_to: Option<DateTime<Utc>>,
}

/// Distinguishes a missing field from a field set to `null`. Missing falls
/// back to the `default` of `None`; a present field, null or not, lands in
/// `Some`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_absent_vs_null() {
        let absent: UpdateTaskRequest = serde_json::from_str(r#"{}"#).unwrap();
        assert!(absent.description.is_none());

        let cleared: UpdateTaskRequest =
            serde_json::from_str(r#"{"description": null}"#).unwrap();
        assert_eq!(cleared.description, Some(None));

        let set: UpdateTaskRequest =
            serde_json::from_str(r#"{"description": "buy milk"}"#).unwrap();
        assert_eq!(set.description, Some(Some("buy milk".to_string())));
    }

    #[test]
    fn test_status_parses_snake_case() {
        let body: UpdateTaskRequest =
            serde_json::from_str(r#"{"status": "in_progress"}"#).unwrap();
        assert_eq!(body.status, Some(TaskStatus::InProgress));

        let bad = serde_json::from_str::<UpdateTaskRequest>(r#"{"status": "done"}"#);
        assert!(bad.is_err());
    }
}
