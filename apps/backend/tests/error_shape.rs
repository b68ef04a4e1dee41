mod common;

use actix_web::test;
use common::{assert_problem, spawn_app};

#[actix_web::test]
async fn missing_token_yields_problem_details() {
    let app = spawn_app().await;

    let req = test::TestRequest::get().uri("/api/users/me").to_request();
    let resp = test::call_service(&app, req).await;
    let body = assert_problem(resp, 401, "UNAUTHORIZED_MISSING_TOKEN").await;

    // Full RFC 7807 shape.
    assert!(body["type"]
        .as_str()
        .unwrap()
        .ends_with("UNAUTHORIZED_MISSING_TOKEN"));
    assert!(body["title"].is_string());
    assert!(body["detail"].is_string());
}

#[actix_web::test]
async fn malformed_game_id_yields_problem_details() {
    let app = spawn_app().await;

    let req = test::TestRequest::get().uri("/api/games/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, 400, "INVALID_GAME_ID").await;
}

#[actix_web::test]
async fn malformed_json_body_yields_bad_request() {
    let app = spawn_app().await;
    let (_, token) = common::register_user(&app, "shaper").await;

    let req = test::TestRequest::post()
        .uri("/api/games")
        .insert_header(("x-auth-token", token.as_str()))
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, 400, "BAD_REQUEST").await;
}
