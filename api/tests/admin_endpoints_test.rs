//! Integration tests for the category and role endpoints
//!
//! The category list is public; every mutation and the role routes demand
//! the admin role.

mod common;

use actix_web::test;
use serde_json::json;
use th_api::app::create_app;
use th_core::domain::entities::user::UserRole;
use uuid::Uuid;

use common::{bearer, seed_user, test_context};

#[actix_web::test]
async fn test_category_list_is_public() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get().uri("/api/v1/categories").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_category_mutation_requires_admin() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;
    let (_, member) = seed_user(&ctx, "alice", UserRole::User).await;

    // Unauthenticated
    let req = test::TestRequest::post()
        .uri("/api/v1/categories")
        .set_json(json!({"name": "Work"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 401);

    // Authenticated but not admin
    let req = test::TestRequest::post()
        .uri("/api/v1/categories")
        .insert_header(bearer(&member.access_token))
        .set_json(json!({"name": "Work"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "forbidden");
}

#[actix_web::test]
async fn test_category_crud_as_admin() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;
    let (_, admin) = seed_user(&ctx, "root", UserRole::Admin).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/categories")
        .insert_header(bearer(&admin.access_token))
        .set_json(json!({"name": "Work"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let created: serde_json::Value = test::read_body_json(resp).await;
    let category_id = created["id"].as_str().unwrap().to_string();

    // Duplicate name
    let req = test::TestRequest::post()
        .uri("/api/v1/categories")
        .insert_header(bearer(&admin.access_token))
        .set_json(json!({"name": "Work"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 409);

    // Fetch and rename
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/categories/{}", category_id))
        .insert_header(bearer(&admin.access_token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/categories/{}", category_id))
        .insert_header(bearer(&admin.access_token))
        .set_json(json!({"name": "Office"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let renamed: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(renamed["name"], "Office");

    // The public list sees it
    let req = test::TestRequest::get().uri("/api/v1/categories").to_request();
    let listed: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    // Delete, then it is gone
    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/categories/{}", category_id))
        .insert_header(bearer(&admin.access_token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 204);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/categories/{}", category_id))
        .insert_header(bearer(&admin.access_token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);
}

#[actix_web::test]
async fn test_role_assignment_lifecycle() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;
    let (_, admin) = seed_user(&ctx, "root", UserRole::Admin).await;
    let (member, _) = seed_user(&ctx, "alice", UserRole::User).await;

    // Promote
    let req = test::TestRequest::post()
        .uri("/api/v1/roles/assign")
        .insert_header(bearer(&admin.access_token))
        .set_json(json!({"user_id": member.id, "role": "admin"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/roles/user/{}", member.id))
        .insert_header(bearer(&admin.access_token))
        .to_request();
    let roles: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(roles["roles"], json!(["admin"]));

    // Demote back to the default role
    let req = test::TestRequest::post()
        .uri("/api/v1/roles/remove")
        .insert_header(bearer(&admin.access_token))
        .set_json(json!({"user_id": member.id, "role": "admin"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/roles/user/{}", member.id))
        .insert_header(bearer(&admin.access_token))
        .to_request();
    let roles: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(roles["roles"], json!(["user"]));

    // Removing a role the user does not hold fails
    let req = test::TestRequest::post()
        .uri("/api/v1/roles/remove")
        .insert_header(bearer(&admin.access_token))
        .set_json(json!({"user_id": member.id, "role": "admin"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);
}

#[actix_web::test]
async fn test_role_endpoint_error_cases() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;
    let (_, admin) = seed_user(&ctx, "root", UserRole::Admin).await;
    let (member, member_pair) = seed_user(&ctx, "alice", UserRole::User).await;

    // Unknown role name
    let req = test::TestRequest::post()
        .uri("/api/v1/roles/assign")
        .insert_header(bearer(&admin.access_token))
        .set_json(json!({"user_id": member.id, "role": "superuser"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    // Unknown user
    let req = test::TestRequest::post()
        .uri("/api/v1/roles/assign")
        .insert_header(bearer(&admin.access_token))
        .set_json(json!({"user_id": Uuid::new_v4(), "role": "admin"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);

    // Role routes are admin only
    let req = test::TestRequest::post()
        .uri("/api/v1/roles/assign")
        .insert_header(bearer(&member_pair.access_token))
        .set_json(json!({"user_id": member.id, "role": "admin"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 403);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/roles/user/{}", member.id))
        .insert_header(bearer(&member_pair.access_token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 403);
}
