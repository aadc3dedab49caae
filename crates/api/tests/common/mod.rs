//! Shared helpers for HTTP-level integration tests.
//!
//! `build_test_app` uses the same [`build_app_router`] the production
//! binary uses, so tests exercise the full middleware stack (CORS, request
//! ID, timeout, tracing, panic recovery). It also spawns the audit
//! recorder, subscribed before the app serves its first request, so tests
//! can assert on persisted `audit_logs` rows.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use upkeep_api::auth::jwt::JwtConfig;
use upkeep_api::auth::password::hash_password;
use upkeep_api::config::ServerConfig;
use upkeep_api::router::build_app_router;
use upkeep_api::state::AppState;
use upkeep_core::types::DbId;
use upkeep_db::models::equipment::{CreateEquipment, Equipment};
use upkeep_db::models::user::{CreateUser, User};
use upkeep_db::repositories::{EquipmentRepo, TeamRepo, TechnicianRepo, UserRepo};
use upkeep_events::{AuditBus, AuditRecorder};

/// Password used for every seeded test account.
pub const TEST_PASSWORD: &str = "test_password_123!";

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool, and start the audit recorder against the same pool.
pub async fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let audit = Arc::new(AuditBus::default());

    // Subscribe before any request can publish.
    tokio::spawn(AuditRecorder::run(pool.clone(), audit.subscribe()));

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        audit,
    };

    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("PUT")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Consume a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be valid JSON")
}

// ---------------------------------------------------------------------------
// Seeding helpers
// ---------------------------------------------------------------------------

/// Create a user row directly in the database with [`TEST_PASSWORD`].
///
/// `role` must be one of `"Admin"`, `"Company User"`, `"Technician"`.
/// A Technician seeded this way has no technician row; use the signup
/// endpoint or `TechnicianRepo::insert` when the link matters.
pub async fn seed_user(pool: &PgPool, name: &str, email: &str, role: &str) -> User {
    let password_hash = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    UserRepo::insert(
        pool,
        &CreateUser {
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
            role: role.to_string(),
        },
    )
    .await
    .expect("user creation should succeed")
}

/// Log in via the API and return the bearer access token.
pub async fn login(app: Router, email: &str) -> String {
    let body = serde_json::json!({ "email": email, "password": TEST_PASSWORD });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["access_token"]
        .as_str()
        .expect("login response must contain access_token")
        .to_string()
}

/// Seed a user and log them in, returning `(user, token)`.
pub async fn seed_and_login(pool: &PgPool, name: &str, email: &str, role: &str) -> (User, String) {
    let user = seed_user(pool, name, email, role).await;
    let token = login(build_test_app(pool.clone()).await, email).await;
    (user, token)
}

/// Seed a maintenance team and return its id.
pub async fn seed_team(pool: &PgPool, name: &str) -> DbId {
    TeamRepo::insert(pool, name)
        .await
        .expect("team creation should succeed")
        .id
}

/// Seed a technician row linked to an optional team and user account.
pub async fn seed_technician(
    pool: &PgPool,
    name: &str,
    team_id: Option<DbId>,
    user_id: Option<DbId>,
) -> DbId {
    TechnicianRepo::insert(pool, name, team_id, user_id)
        .await
        .expect("technician creation should succeed")
        .id
}

/// Seed equipment with the given routing defaults.
pub async fn seed_equipment(
    pool: &PgPool,
    name: &str,
    team_id: Option<DbId>,
    technician_id: Option<DbId>,
) -> Equipment {
    EquipmentRepo::insert(
        pool,
        &CreateEquipment {
            name: name.to_string(),
            equipment_type: Some("Machine".to_string()),
            serial_number: None,
            category_id: None,
            work_center_id: None,
            department: None,
            location: None,
            assigned_employee: None,
            purchase_date: None,
            warranty_info: None,
            description: None,
            maintenance_team_id: team_id,
            default_technician_id: technician_id,
        },
    )
    .await
    .expect("equipment creation should succeed")
}

// ---------------------------------------------------------------------------
// Audit helpers
// ---------------------------------------------------------------------------

/// Count persisted audit rows for a given action.
pub async fn audit_count(pool: &PgPool, action: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM audit_logs WHERE action = $1")
        .bind(action)
        .fetch_one(pool)
        .await
        .expect("audit count query should succeed")
}

/// Wait until at least `expected` audit rows with `action` are persisted.
///
/// The recorder runs asynchronously, so tests that assert on `audit_logs`
/// must poll. Panics after ~2 seconds without convergence.
pub async fn wait_for_audit(pool: &PgPool, action: &str, expected: i64) {
    for _ in 0..40 {
        if audit_count(pool, action).await >= expected {
            return;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    panic!("timed out waiting for {expected} '{action}' audit row(s)");
}
