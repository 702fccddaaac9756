//! Unit tests for the task service

use std::sync::Arc;

use chrono::{Duration, Utc};
use th_shared::types::pagination::Pagination;
use uuid::Uuid;

use crate::domain::entities::category::Category;
use crate::domain::entities::task::{TaskPriority, TaskStatus};
use crate::errors::DomainError;
use crate::repositories::{
    CategoryRepository, MockCategoryRepository, MockTaskRepository, TaskFilter,
};
use crate::services::task::{NewTask, TaskChanges, TaskService};

type TestTaskService = TaskService<MockTaskRepository, MockCategoryRepository>;

fn test_service() -> (TestTaskService, Arc<MockCategoryRepository>) {
    let task_repo = Arc::new(MockTaskRepository::new());
    let category_repo = Arc::new(MockCategoryRepository::new());
    let service = TaskService::new(task_repo, category_repo.clone());
    (service, category_repo)
}

async fn seed_category(repo: &MockCategoryRepository) -> Category {
    repo.create(Category::new("Chores")).await.unwrap()
}

fn new_task(title: &str, category_id: Uuid) -> NewTask {
    NewTask {
        title: title.to_string(),
        description: None,
        due_date: None,
        status: None,
        priority: None,
        category_id,
    }
}

#[tokio::test]
async fn test_create_task_defaults() {
    let (service, categories) = test_service();
    let category = seed_category(&categories).await;
    let user_id = Uuid::new_v4();

    let task = service
        .create_task(user_id, new_task("Buy milk", category.id))
        .await
        .unwrap();

    assert_eq!(task.title, "Buy milk");
    assert_eq!(task.user_id, user_id);
    assert_eq!(task.category_id, category.id);
    assert_eq!(task.status, TaskStatus::Pending);
    assert_eq!(task.priority, TaskPriority::Medium);
    assert!(task.updated_at.is_none());
}

#[tokio::test]
async fn test_create_task_rejects_unknown_category() {
    let (service, _) = test_service();

    let result = service
        .create_task(Uuid::new_v4(), new_task("Buy milk", Uuid::new_v4()))
        .await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));
}

#[tokio::test]
async fn test_create_task_rejects_empty_title() {
    let (service, categories) = test_service();
    let category = seed_category(&categories).await;

    let result = service
        .create_task(Uuid::new_v4(), new_task("   ", category.id))
        .await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));
}

#[tokio::test]
async fn test_get_task_hides_foreign_tasks() {
    let (service, categories) = test_service();
    let category = seed_category(&categories).await;
    let owner = Uuid::new_v4();
    let stranger = Uuid::new_v4();

    let task = service
        .create_task(owner, new_task("Private", category.id))
        .await
        .unwrap();

    assert_eq!(service.get_task(owner, task.id).await.unwrap().id, task.id);

    // Someone else's task looks exactly like a missing one.
    let result = service.get_task(stranger, task.id).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_list_tasks_filters_and_pages() {
    let (service, categories) = test_service();
    let category = seed_category(&categories).await;
    let user_id = Uuid::new_v4();

    for i in 0..15 {
        let mut task = new_task(&format!("task {}", i), category.id);
        task.due_date = Some(Utc::now() + Duration::days(i));
        task.status = Some(if i % 3 == 0 {
            TaskStatus::Completed
        } else {
            TaskStatus::Pending
        });
        service.create_task(user_id, task).await.unwrap();
    }

    // Default page size is 10.
    let page = service
        .list_tasks(user_id, TaskFilter::default(), Pagination::default())
        .await
        .unwrap();
    assert_eq!(page.data.len(), 10);
    assert_eq!(page.total, 15);
    assert!(page.has_next);
    assert!(!page.has_prev);

    let page_two = service
        .list_tasks(user_id, TaskFilter::default(), Pagination::new(2, 10))
        .await
        .unwrap();
    assert_eq!(page_two.data.len(), 5);
    assert!(!page_two.has_next);
    assert!(page_two.has_prev);

    // Status filter narrows the total, not just the page.
    let completed = service
        .list_tasks(
            user_id,
            TaskFilter {
                status: Some(TaskStatus::Completed),
                ..TaskFilter::default()
            },
            Pagination::default(),
        )
        .await
        .unwrap();
    assert_eq!(completed.total, 5);
    assert!(completed
        .data
        .iter()
        .all(|t| t.status == TaskStatus::Completed));
}

#[tokio::test]
async fn test_list_tasks_ordered_by_due_date() {
    let (service, categories) = test_service();
    let category = seed_category(&categories).await;
    let user_id = Uuid::new_v4();

    for days in [5_i64, 1, 3] {
        let mut task = new_task(&format!("due in {}", days), category.id);
        task.due_date = Some(Utc::now() + Duration::days(days));
        service.create_task(user_id, task).await.unwrap();
    }
    // One undated task sorts first.
    service
        .create_task(user_id, new_task("undated", category.id))
        .await
        .unwrap();

    let page = service
        .list_tasks(user_id, TaskFilter::default(), Pagination::default())
        .await
        .unwrap();

    let titles: Vec<&str> = page.data.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["undated", "due in 1", "due in 3", "due in 5"]);
}

#[tokio::test]
async fn test_list_tasks_due_window() {
    let (service, categories) = test_service();
    let category = seed_category(&categories).await;
    let user_id = Uuid::new_v4();
    let now = Utc::now();

    for days in [1_i64, 5, 10] {
        let mut task = new_task(&format!("due in {}", days), category.id);
        task.due_date = Some(now + Duration::days(days));
        service.create_task(user_id, task).await.unwrap();
    }

    let filter = TaskFilter {
        due_from: Some(now + Duration::days(2)),
        due_to: Some(now + Duration::days(7)),
        ..TaskFilter::default()
    };
    let page = service
        .list_tasks(user_id, filter, Pagination::default())
        .await
        .unwrap();

    assert_eq!(page.total, 1);
    assert_eq!(page.data[0].title, "due in 5");
}

#[tokio::test]
async fn test_update_task_applies_partial_changes() {
    let (service, categories) = test_service();
    let category = seed_category(&categories).await;
    let user_id = Uuid::new_v4();

    let task = service
        .create_task(user_id, new_task("Original", category.id))
        .await
        .unwrap();

    let updated = service
        .update_task(
            user_id,
            task.id,
            TaskChanges {
                title: Some("Renamed".to_string()),
                status: Some(TaskStatus::InProgress),
                ..TaskChanges::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.status, TaskStatus::InProgress);
    // Untouched fields survive.
    assert_eq!(updated.category_id, category.id);
    assert_eq!(updated.priority, TaskPriority::Medium);
    assert!(updated.updated_at.is_some());
}

#[tokio::test]
async fn test_update_task_can_clear_due_date() {
    let (service, categories) = test_service();
    let category = seed_category(&categories).await;
    let user_id = Uuid::new_v4();

    let mut fields = new_task("Dated", category.id);
    fields.due_date = Some(Utc::now() + Duration::days(3));
    let task = service.create_task(user_id, fields).await.unwrap();

    let updated = service
        .update_task(
            user_id,
            task.id,
            TaskChanges {
                due_date: Some(None),
                ..TaskChanges::default()
            },
        )
        .await
        .unwrap();

    assert!(updated.due_date.is_none());
}

#[tokio::test]
async fn test_update_task_rejects_unknown_category() {
    let (service, categories) = test_service();
    let category = seed_category(&categories).await;
    let user_id = Uuid::new_v4();

    let task = service
        .create_task(user_id, new_task("Task", category.id))
        .await
        .unwrap();

    let result = service
        .update_task(
            user_id,
            task.id,
            TaskChanges {
                category_id: Some(Uuid::new_v4()),
                ..TaskChanges::default()
            },
        )
        .await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));
}

#[tokio::test]
async fn test_update_foreign_task_is_not_found() {
    let (service, categories) = test_service();
    let category = seed_category(&categories).await;
    let owner = Uuid::new_v4();

    let task = service
        .create_task(owner, new_task("Mine", category.id))
        .await
        .unwrap();

    let result = service
        .update_task(
            Uuid::new_v4(),
            task.id,
            TaskChanges {
                title: Some("Stolen".to_string()),
                ..TaskChanges::default()
            },
        )
        .await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_delete_task() {
    let (service, categories) = test_service();
    let category = seed_category(&categories).await;
    let user_id = Uuid::new_v4();

    let task = service
        .create_task(user_id, new_task("Done soon", category.id))
        .await
        .unwrap();

    service.delete_task(user_id, task.id).await.unwrap();

    let result = service.get_task(user_id, task.id).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));

    // Deleting again reports not found.
    let result = service.delete_task(user_id, task.id).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}
