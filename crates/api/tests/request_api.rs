//! HTTP-level integration tests for the maintenance-request lifecycle:
//! creation with equipment-driven assignment, partial updates, deletion.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, post_json_auth, put_json_auth};
use sqlx::PgPool;

fn create_body(equipment_id: i64) -> serde_json::Value {
    serde_json::json!({
        "subject": "Grinding noise",
        "description": "Bearing is audibly failing",
        "equipment_id": equipment_id,
        "request_type": "Corrective",
        "scheduled_date": "2026-09-01",
    })
}

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

/// Creating a request copies the equipment's routing defaults, defaults the
/// stage to New, and records an audit entry.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_request_copies_equipment_routing(pool: PgPool) {
    let (_user, token) =
        common::seed_and_login(&pool, "Rita", "rita@test.com", "Company User").await;
    let team_id = common::seed_team(&pool, "Mechanical").await;
    let tech_id = common::seed_technician(&pool, "Tom", Some(team_id), None).await;
    let equipment = common::seed_equipment(&pool, "Lathe", Some(team_id), Some(tech_id)).await;

    let app = common::build_test_app(pool.clone()).await;
    let response = post_json_auth(app, "/api/v1/requests", create_body(equipment.id), &token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["stage"], "New");
    assert_eq!(json["data"]["team_id"], team_id);
    assert_eq!(json["data"]["technician_id"], tech_id);
    assert_eq!(json["data"]["equipment_id"], equipment.id);
    common::wait_for_audit(&pool, "CREATE_REQUEST", 1).await;
}

/// Routing is equipment-driven, never client-driven: `team_id` and
/// `technician_id` in the creation payload are ignored and the equipment's
/// configured defaults win.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_request_ignores_client_supplied_routing(pool: PgPool) {
    let (_user, token) =
        common::seed_and_login(&pool, "Rita", "rita@test.com", "Company User").await;
    let team_id = common::seed_team(&pool, "Mechanical").await;
    let tech_id = common::seed_technician(&pool, "Tom", Some(team_id), None).await;
    let other_team = common::seed_team(&pool, "Electrical").await;
    let other_tech = common::seed_technician(&pool, "Zoe", Some(other_team), None).await;
    let equipment = common::seed_equipment(&pool, "Lathe", Some(team_id), Some(tech_id)).await;

    let app = common::build_test_app(pool).await;
    let mut body = create_body(equipment.id);
    body["team_id"] = serde_json::json!(other_team);
    body["technician_id"] = serde_json::json!(other_tech);
    let response = post_json_auth(app, "/api/v1/requests", body, &token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["team_id"], team_id);
    assert_eq!(json["data"]["technician_id"], tech_id);
}

/// Equipment without routing defaults yields an unassigned request.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_request_unconfigured_equipment(pool: PgPool) {
    let (_user, token) =
        common::seed_and_login(&pool, "Rita", "rita@test.com", "Company User").await;
    let equipment = common::seed_equipment(&pool, "Old press", None, None).await;

    let app = common::build_test_app(pool).await;
    let response = post_json_auth(app, "/api/v1/requests", create_body(equipment.id), &token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["data"]["team_id"].is_null());
    assert!(json["data"]["technician_id"].is_null());
}

/// Missing equipment_id is a validation error.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_request_requires_equipment(pool: PgPool) {
    let (_user, token) =
        common::seed_and_login(&pool, "Rita", "rita@test.com", "Company User").await;

    let app = common::build_test_app(pool).await;
    let mut body = create_body(1);
    body.as_object_mut().unwrap().remove("equipment_id");
    let response = post_json_auth(app, "/api/v1/requests", body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Missing scheduled_date is rejected with guidance, persists nothing, and
/// leaves no audit trace.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_request_requires_scheduled_date(pool: PgPool) {
    let (_user, token) =
        common::seed_and_login(&pool, "Rita", "rita@test.com", "Company User").await;
    let equipment = common::seed_equipment(&pool, "Lathe", None, None).await;

    let app = common::build_test_app(pool.clone()).await;
    let mut body = create_body(equipment.id);
    body.as_object_mut().unwrap().remove("scheduled_date");
    let response = post_json_auth(app, "/api/v1/requests", body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["error"],
        "Scheduled date is required. Please create requests via the calendar."
    );

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM maintenance_requests")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0, "rejected creation must not persist a row");
    assert_eq!(common::audit_count(&pool, "CREATE_REQUEST").await, 0);
}

/// Unknown equipment id returns 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_request_unknown_equipment(pool: PgPool) {
    let (_user, token) =
        common::seed_and_login(&pool, "Rita", "rita@test.com", "Company User").await;

    let app = common::build_test_app(pool).await;
    let response = post_json_auth(app, "/api/v1/requests", create_body(99999), &token).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Unknown request_type strings are rejected with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_request_invalid_type(pool: PgPool) {
    let (_user, token) =
        common::seed_and_login(&pool, "Rita", "rita@test.com", "Company User").await;
    let equipment = common::seed_equipment(&pool, "Lathe", None, None).await;

    let app = common::build_test_app(pool).await;
    let mut body = create_body(equipment.id);
    body["request_type"] = serde_json::json!("Speculative");
    let response = post_json_auth(app, "/api/v1/requests", body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Only Company Users create requests; technicians get 403.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_request_technician_forbidden(pool: PgPool) {
    let (_user, token) = common::seed_and_login(&pool, "Tom", "tom@test.com", "Technician").await;
    let equipment = common::seed_equipment(&pool, "Lathe", None, None).await;

    let app = common::build_test_app(pool).await;
    let response = post_json_auth(app, "/api/v1/requests", create_body(equipment.id), &token).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Admins do not create requests either; creation is the requester's act.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_request_admin_forbidden(pool: PgPool) {
    let (_user, token) = common::seed_and_login(&pool, "Ada", "ada@test.com", "Admin").await;
    let equipment = common::seed_equipment(&pool, "Lathe", None, None).await;

    let app = common::build_test_app(pool).await;
    let response = post_json_auth(app, "/api/v1/requests", create_body(equipment.id), &token).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Updates
// ---------------------------------------------------------------------------

/// A normal stage advance succeeds and records the changed fields.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_request_stage_advance(pool: PgPool) {
    let (_user, token) =
        common::seed_and_login(&pool, "Rita", "rita@test.com", "Company User").await;
    let equipment = common::seed_equipment(&pool, "Lathe", None, None).await;

    let app = common::build_test_app(pool.clone()).await;
    let response = post_json_auth(app, "/api/v1/requests", create_body(equipment.id), &token).await;
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone()).await;
    let body = serde_json::json!({ "stage": "In Progress", "duration_hours": 2.5 });
    let response = put_json_auth(app, &format!("/api/v1/requests/{id}"), body, &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["stage"], "In Progress");
    assert_eq!(json["data"]["duration_hours"], 2.5);
    common::wait_for_audit(&pool, "UPDATE_REQUEST", 1).await;
}

/// An update supplying none of the mutable fields is rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_request_empty_body(pool: PgPool) {
    let (_user, token) =
        common::seed_and_login(&pool, "Rita", "rita@test.com", "Company User").await;
    let equipment = common::seed_equipment(&pool, "Lathe", None, None).await;

    let app = common::build_test_app(pool.clone()).await;
    let response = post_json_auth(app, "/api/v1/requests", create_body(equipment.id), &token).await;
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool).await;
    let response =
        put_json_auth(app, &format!("/api/v1/requests/{id}"), serde_json::json!({}), &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Updating a nonexistent request returns 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_request_not_found(pool: PgPool) {
    let (_user, token) =
        common::seed_and_login(&pool, "Rita", "rita@test.com", "Company User").await;

    let app = common::build_test_app(pool).await;
    let body = serde_json::json!({ "stage": "In Progress" });
    let response = put_json_auth(app, "/api/v1/requests/99999", body, &token).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Garbage stage strings are rejected with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_request_invalid_stage(pool: PgPool) {
    let (_user, token) =
        common::seed_and_login(&pool, "Rita", "rita@test.com", "Company User").await;
    let equipment = common::seed_equipment(&pool, "Lathe", None, None).await;

    let app = common::build_test_app(pool.clone()).await;
    let response = post_json_auth(app, "/api/v1/requests", create_body(equipment.id), &token).await;
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool).await;
    let body = serde_json::json!({ "stage": "Condemned" });
    let response = put_json_auth(app, &format!("/api/v1/requests/{id}"), body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

/// Deletion is admin-only and leaves the equipment untouched.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_request_admin_only(pool: PgPool) {
    let (_user, user_token) =
        common::seed_and_login(&pool, "Rita", "rita@test.com", "Company User").await;
    let (_admin, admin_token) =
        common::seed_and_login(&pool, "Ada", "ada@test.com", "Admin").await;
    let equipment = common::seed_equipment(&pool, "Lathe", None, None).await;

    let app = common::build_test_app(pool.clone()).await;
    let response =
        post_json_auth(app, "/api/v1/requests", create_body(equipment.id), &user_token).await;
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    // Creator cannot delete.
    let app = common::build_test_app(pool.clone()).await;
    let response = delete_auth(app, &format!("/api/v1/requests/{id}"), &user_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Admin can.
    let app = common::build_test_app(pool.clone()).await;
    let response = delete_auth(app, &format!("/api/v1/requests/{id}"), &admin_token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let scrapped: bool = sqlx::query_scalar("SELECT is_scrapped FROM equipment WHERE id = $1")
        .bind(equipment.id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert!(!scrapped, "deletion must not touch the equipment");
    common::wait_for_audit(&pool, "DELETE_REQUEST", 1).await;
}

/// Deleting a nonexistent request returns 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_request_not_found(pool: PgPool) {
    let (_admin, token) = common::seed_and_login(&pool, "Ada", "ada@test.com", "Admin").await;

    let app = common::build_test_app(pool).await;
    let response = delete_auth(app, "/api/v1/requests/99999", &token).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
