#![allow(dead_code)]

// Shared helpers for integration tests. Each test builds its own AppState
// backed by a freshly migrated in-memory SQLite database, so tests are
// fully isolated from one another.

use std::sync::OnceLock;

use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::test;
use backend::test_support::{create_test_app_builder, create_test_state};
use serde_json::{json, Value};
use tracing_subscriber::{fmt, EnvFilter};

#[ctor::ctor]
fn init_logging() {
    static INITIALIZED: OnceLock<()> = OnceLock::new();
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));
        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Shorthand for the opaque test service type.
pub trait TestService:
    Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>
{
}

impl<S> TestService for S where
    S: Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>
{
}

/// Build a test service running the production routes against a fresh,
/// migrated in-memory database.
pub async fn spawn_app() -> impl TestService {
    let state = create_test_state()
        .with_db()
        .build()
        .await
        .expect("failed to build test state");
    create_test_app_builder(state)
        .with_prod_routes()
        .build()
        .await
        .expect("failed to build test app")
}

/// Register a user and return `(id, token)`.
pub async fn register_user(app: &impl TestService, username: &str) -> (i64, String) {
    let req = test::TestRequest::post()
        .uri("/api/users/register")
        .set_json(json!({ "username": username, "password": "secret" }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status().as_u16(), 201, "registration should succeed");
    let body: Value = test::read_body_json(resp).await;
    let id = body["user"]["id"].as_i64().expect("user id");
    let token = body["token"].as_str().expect("token").to_string();
    (id, token)
}

/// A 10x10 grid of "empty" cells as JSON.
pub fn empty_grid() -> Value {
    json!(vec![vec!["empty"; 10]; 10])
}

/// Layout with no ships at all.
pub fn empty_layout() -> Value {
    json!({ "ships": [], "boardCells": empty_grid() })
}

/// Layout with a single length-5 carrier at (0,0), horizontal.
pub fn carrier_layout() -> Value {
    let mut grid = vec![vec!["empty"; 10]; 10];
    for x in 0..5 {
        grid[0][x] = "ship";
    }
    json!({
        "ships": [{
            "name": "carrier",
            "length": 5,
            "position": { "x": 0, "y": 0 },
            "orientation": "horizontal",
            "sunk": false
        }],
        "boardCells": grid
    })
}

pub async fn create_game(app: &impl TestService, token: &str, layout: Value) -> Value {
    let req = test::TestRequest::post()
        .uri("/api/games")
        .insert_header(("x-auth-token", token))
        .set_json(json!({ "ships1Layout": layout }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status().as_u16(), 201, "game creation should succeed");
    test::read_body_json(resp).await
}

pub async fn join_game(
    app: &impl TestService,
    token: &str,
    game_id: i64,
    layout: Value,
) -> ServiceResponse<BoxBody> {
    let req = test::TestRequest::put()
        .uri(&format!("/api/games/{game_id}/join"))
        .insert_header(("x-auth-token", token))
        .set_json(json!({ "ships2Layout": layout }))
        .to_request();
    test::call_service(app, req).await
}

/// Fire an attack. The advisory outcome fields are filled with lies on
/// purpose: the server must compute the real outcome itself.
pub async fn attack(
    app: &impl TestService,
    token: &str,
    game_id: i64,
    target_id: i64,
    x: i32,
    y: i32,
) -> ServiceResponse<BoxBody> {
    let req = test::TestRequest::post()
        .uri(&format!("/api/games/{game_id}/attack"))
        .insert_header(("x-auth-token", token))
        .set_json(json!({
            "targetPlayerId": target_id,
            "coordinates": { "x": x, "y": y },
            "hit": false,
            "sunkShipName": null,
            "allPlayerShipsSunk": false
        }))
        .to_request();
    test::call_service(app, req).await
}

pub async fn surrender(
    app: &impl TestService,
    token: &str,
    game_id: i64,
) -> ServiceResponse<BoxBody> {
    let req = test::TestRequest::put()
        .uri(&format!("/api/games/{game_id}/surrender"))
        .insert_header(("x-auth-token", token))
        .to_request();
    test::call_service(app, req).await
}

pub async fn get_game(app: &impl TestService, game_id: i64) -> Value {
    let req = test::TestRequest::get()
        .uri(&format!("/api/games/{game_id}"))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status().as_u16(), 200, "game fetch should succeed");
    test::read_body_json(resp).await
}

/// Assert a problem-details response: status, code, content type, and that
/// the body trace id matches the x-trace-id header.
pub async fn assert_problem(
    resp: ServiceResponse<BoxBody>,
    expected_status: u16,
    expected_code: &str,
) -> Value {
    assert_eq!(resp.status().as_u16(), expected_status);

    let headers = resp.headers().clone();
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(
        content_type.starts_with("application/problem+json"),
        "expected problem+json, got {content_type}"
    );

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], expected_code, "unexpected error code: {body}");
    assert_eq!(body["status"], expected_status);

    let header_trace = headers
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-trace-id header");
    assert_eq!(body["trace_id"].as_str(), Some(header_trace));

    body
}
