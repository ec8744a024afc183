//! Tests for worksheet HTTP handlers.

use std::sync::Arc;

use actix_web::test::TestRequest;
use rstest::rstest;
use serde_json::json;

use crate::inbound::http::test_utils::{call_json, init_app, seed_user};
use crate::outbound::memory::InMemoryStore;

fn register_payload(user_id: i64) -> serde_json::Value {
    json!({
        "user_id": user_id,
        "title": "A",
        "content": "Weekend cafe shift",
        "total_pay": 10000,
        "extra_pay": false,
        "week_pay": true,
        "night_pay": false,
        "overtime_pay": false,
        "holiday_pay": false,
    })
}

#[rstest]
#[actix_web::test]
async fn register_then_share_twice_flips_back() {
    let store = Arc::new(InMemoryStore::new());
    let user = seed_user(&store, "mina");
    let app = init_app(&store).await;

    let (status, body) = call_json(
        &app,
        TestRequest::post()
            .uri("/api/worksheet")
            .set_json(register_payload(user.get())),
    )
    .await;
    assert_eq!(status, 201);
    assert_eq!(body["status_code"], json!(201));
    assert_eq!(body["success"], json!(true));
    let worksheet_id = body["data"]["worksheet_id"].as_i64().expect("worksheet id");

    let share_uri = format!("/api/worksheet/{worksheet_id}/share");
    let (status, first) = call_json(&app, TestRequest::put().uri(&share_uri)).await;
    assert_eq!(status, 200);
    assert_eq!(
        first["data"],
        json!({"worksheet_id": worksheet_id, "is_open": true})
    );

    let (status, second) = call_json(&app, TestRequest::put().uri(&share_uri)).await;
    assert_eq!(status, 200);
    assert_eq!(second["data"]["is_open"], json!(false));
}

#[rstest]
#[actix_web::test]
async fn register_for_unknown_user_is_not_found() {
    let store = Arc::new(InMemoryStore::new());
    let app = init_app(&store).await;

    let (status, body) = call_json(
        &app,
        TestRequest::post()
            .uri("/api/worksheet")
            .set_json(register_payload(42)),
    )
    .await;

    assert_eq!(status, 404);
    assert_eq!(
        body,
        json!({
            "status_code": 404,
            "success": false,
            "message": "user 42 not found",
            "data": null,
        })
    );
}

#[rstest]
#[actix_web::test]
async fn get_worksheet_returns_stored_fields() {
    let store = Arc::new(InMemoryStore::new());
    let user = seed_user(&store, "mina");
    let app = init_app(&store).await;
    let (_, created) = call_json(
        &app,
        TestRequest::post()
            .uri("/api/worksheet")
            .set_json(register_payload(user.get())),
    )
    .await;
    let worksheet_id = created["data"]["worksheet_id"].as_i64().expect("worksheet id");

    let (status, body) = call_json(
        &app,
        TestRequest::get().uri(&format!("/api/worksheet/{worksheet_id}")),
    )
    .await;

    assert_eq!(status, 200);
    let data = &body["data"];
    assert_eq!(data["user_id"], json!(user.get()));
    assert_eq!(data["total_pay"], json!(10000));
    assert_eq!(data["week_pay"], json!(true));
    assert_eq!(data["is_open"], json!(false));
    let created_at = data["created_at"].as_str().expect("created_at string");
    assert_eq!(created_at.len(), "2024-03-09 07:05:01".len());
    assert_eq!(&created_at[10..11], " ");
}

#[rstest]
#[actix_web::test]
async fn share_unknown_worksheet_is_not_found() {
    let store = Arc::new(InMemoryStore::new());
    let app = init_app(&store).await;

    let (status, body) =
        call_json(&app, TestRequest::put().uri("/api/worksheet/77/share")).await;

    assert_eq!(status, 404);
    assert_eq!(body["message"], json!("worksheet 77 not found"));
}

#[rstest]
#[case(json!({"user_id": 1, "title": "A", "content": "x", "total_pay": -1}))]
#[case(json!({"user_id": 1, "title": "  ", "content": "x", "total_pay": 0}))]
#[case(json!({"user_id": 1, "title": "x".repeat(256), "content": "x", "total_pay": 0}))]
#[case(json!({"user_id": 0, "title": "A", "content": "x", "total_pay": 0}))]
#[case(json!({"user_id": 1, "title": "A"}))]
#[actix_web::test]
async fn invalid_payloads_are_bad_requests(#[case] payload: serde_json::Value) {
    let store = Arc::new(InMemoryStore::new());
    seed_user(&store, "mina");
    let app = init_app(&store).await;

    let (status, body) = call_json(
        &app,
        TestRequest::post().uri("/api/worksheet").set_json(payload),
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["status_code"], json!(400));
}

#[rstest]
#[actix_web::test]
async fn non_numeric_path_is_a_bad_request() {
    let store = Arc::new(InMemoryStore::new());
    let app = init_app(&store).await;

    let (status, body) = call_json(&app, TestRequest::get().uri("/api/worksheet/abc")).await;

    assert_eq!(status, 400);
    assert_eq!(body["data"]["code"], json!("malformed_path"));
}
