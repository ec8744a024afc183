//! Tests for posting and bookmark HTTP handlers.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::test::TestRequest;
use rstest::rstest;
use serde_json::{Value, json};

use crate::domain::{PostingId, UserId};
use crate::inbound::http::test_utils::{call_json, init_app, seed_user};
use crate::outbound::memory::InMemoryStore;

async fn publish<S>(app: &S, user: UserId) -> i64
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let (_, worksheet) = call_json(
        app,
        TestRequest::post().uri("/api/worksheet").set_json(json!({
            "user_id": user.get(),
            "title": "A",
            "content": "cafe shift",
            "total_pay": 10000,
        })),
    )
    .await;
    let (status, posting) = call_json(
        app,
        TestRequest::post().uri("/api/posting").set_json(json!({
            "user_id": user.get(),
            "worksheet_id": worksheet["data"]["worksheet_id"],
            "title": "Is my night pay right?",
            "content": "Numbers attached",
        })),
    )
    .await;
    assert_eq!(status, 201);
    posting["data"]["posting_id"].as_i64().expect("posting id")
}

fn bookmark(user: UserId, post_id: i64, bookmarked: bool) -> TestRequest {
    TestRequest::post()
        .uri("/api/posting/bookmark")
        .set_json(json!({"user_id": user.get(), "post_id": post_id, "bookmarked": bookmarked}))
}

#[rstest]
#[actix_web::test]
async fn empty_board_is_not_found() {
    let store = Arc::new(InMemoryStore::new());
    let app = init_app(&store).await;

    let (status, body) = call_json(&app, TestRequest::get().uri("/api/posting")).await;

    assert_eq!(status, 404);
    assert_eq!(body["message"], json!("no postings found"));
    assert_eq!(body["success"], json!(false));
}

#[rstest]
#[actix_web::test]
async fn listed_postings_carry_summary_fields() {
    let store = Arc::new(InMemoryStore::new());
    let user = seed_user(&store, "mina");
    let app = init_app(&store).await;
    let posting_id = publish(&app, user).await;

    let (status, body) = call_json(&app, TestRequest::get().uri("/api/posting")).await;

    assert_eq!(status, 200);
    let entries = body["data"].as_array().expect("list payload");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["posting_id"], json!(posting_id));
    assert_eq!(entries[0]["bookmark_count"], json!(0));
    assert!(entries[0]["created_at"].is_string());
}

#[rstest]
#[actix_web::test]
async fn posting_on_missing_worksheet_writes_nothing() {
    let store = Arc::new(InMemoryStore::new());
    let user = seed_user(&store, "mina");
    let app = init_app(&store).await;

    let (status, body) = call_json(
        &app,
        TestRequest::post().uri("/api/posting").set_json(json!({
            "user_id": user.get(),
            "worksheet_id": 999,
            "title": "t",
            "content": "c",
        })),
    )
    .await;

    assert_eq!(status, 404);
    assert_eq!(body["message"], json!("worksheet 999 not found"));
    let (status, _) = call_json(&app, TestRequest::get().uri("/api/posting")).await;
    assert_eq!(status, 404);
}

#[rstest]
#[actix_web::test]
async fn overlong_title_is_rejected_before_lookups() {
    let store = Arc::new(InMemoryStore::new());
    let app = init_app(&store).await;

    let (status, body) = call_json(
        &app,
        TestRequest::post().uri("/api/posting").set_json(json!({
            "user_id": 999,
            "worksheet_id": 999,
            "title": "x".repeat(300),
            "content": "c",
        })),
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["success"], json!(false));
    assert_eq!(
        body["message"],
        json!("invalid posting: title must be at most 255 characters")
    );
}

#[rstest]
#[actix_web::test]
async fn bookmark_lifecycle_keeps_counter_in_step() {
    let store = Arc::new(InMemoryStore::new());
    let author = seed_user(&store, "mina");
    let reader = seed_user(&store, "jun");
    let app = init_app(&store).await;
    let posting_id = publish(&app, author).await;

    let (status, added) = call_json(&app, bookmark(reader, posting_id, true)).await;
    assert_eq!(status, 201);
    assert_eq!(added["data"], json!({"bookmark_count": 1}));

    let (status, duplicate) = call_json(&app, bookmark(reader, posting_id, true)).await;
    assert_eq!(status, 409);
    assert_eq!(duplicate["message"], json!("bookmark already exists"));

    let (status, removed) = call_json(&app, bookmark(reader, posting_id, false)).await;
    assert_eq!(status, 200);
    assert_eq!(removed["data"], json!({"bookmark_count": 0}));

    let (status, missing) = call_json(&app, bookmark(reader, posting_id, false)).await;
    assert_eq!(status, 404);
    assert_eq!(missing["message"], json!("bookmark not found"));

    assert_eq!(
        store
            .bookmark_rows(PostingId::new(posting_id))
            .expect("rows counted"),
        0
    );
}

#[rstest]
#[case(true)]
#[case(false)]
#[actix_web::test]
async fn bookmark_on_unknown_posting_is_not_found(#[case] bookmarked: bool) {
    let store = Arc::new(InMemoryStore::new());
    let user = seed_user(&store, "mina");
    let app = init_app(&store).await;

    let (status, body): (u16, Value) = call_json(&app, bookmark(user, 404, bookmarked)).await;

    assert_eq!(status, 404);
    assert_eq!(body["message"], json!("posting 404 not found"));
}

#[rstest]
#[actix_web::test]
async fn bookmark_requires_boolean_flag() {
    let store = Arc::new(InMemoryStore::new());
    let app = init_app(&store).await;

    let (status, body) = call_json(
        &app,
        TestRequest::post()
            .uri("/api/posting/bookmark")
            .set_json(json!({"user_id": 1, "post_id": 1, "bookmarked": "yes"})),
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["data"]["code"], json!("malformed_body"));
}
