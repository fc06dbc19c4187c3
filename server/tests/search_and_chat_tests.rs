// tests/search_and_chat_tests.rs
mod common;
use common::*;

use actix_web::http::StatusCode;
use actix_web::test;
use catalog_server::web::create_app;
use serde_json::{json, Value};

async fn post_json(uri: &str, payload: Value, state: catalog_server::AppState) -> (StatusCode, Value) {
  let app = test::init_service(create_app(state, &origins())).await;
  let req = test::TestRequest::post().uri(uri).set_json(payload).to_request();
  let resp = test::call_service(&app, req).await;
  let status = resp.status();
  (status, test::read_body_json(resp).await)
}

#[actix_web::test]
async fn image_search_requires_image_data() {
  setup_tracing();
  for payload in [json!({}), json!({"image_data": ""}), json!({"image_data": null})] {
    let (status, body) = post_json("/image-search", payload.clone(), default_state(catalog())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{payload}");
    assert_eq!(body["error"], "No image data provided");
  }
}

#[actix_web::test]
async fn image_search_returns_delegate_results() {
  setup_tracing();
  let (status, body) = post_json(
    "/image-search",
    json!({"image_data": "iVBORw0KGgoAAAANSUhEUgAAAAEAAAAB"}),
    default_state(catalog()),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["success"], true);
  assert_eq!(body["products"][0]["product_id"], LAMP_ID);
  assert_eq!(body["products"][0]["score"], json!(0.87));
}

#[actix_web::test]
async fn image_search_delegate_failure_is_500() {
  setup_tracing();
  let state = state_with(
    catalog(),
    FixedImageSearcher {
      outcome: Err("CLIP model failed to load".to_string()),
    },
  );
  let (status, body) = post_json("/image-search", json!({"image_data": "abcd"}), state).await;
  assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
  assert_eq!(body["error"], "CLIP model failed to load");
}

#[actix_web::test]
async fn malformed_json_is_a_json_400() {
  setup_tracing();
  let app = test::init_service(create_app(default_state(catalog()), &origins())).await;
  let req = test::TestRequest::post()
    .uri("/image-search")
    .insert_header(("content-type", "application/json"))
    .set_payload("{not json")
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body: Value = test::read_body_json(resp).await;
  assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON body"));
}

#[actix_web::test]
async fn chat_requires_message() {
  setup_tracing();
  let (status, body) = post_json("/api/chat/message", json!({}), default_state(catalog())).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body["error"], "No message provided");
}

#[actix_web::test]
async fn chat_reply_has_contract_shape() {
  setup_tracing();
  let (status, body) = post_json("/api/chat/message", json!({"message": "hello"}), default_state(catalog())).await;
  assert_eq!(status, StatusCode::OK);
  assert!(body["message"].is_string());
  assert_eq!(body["intent"], "product_search");
  assert!(body["product_ids"].is_array());
}

#[actix_web::test]
async fn chat_session_id_does_not_change_reply() {
  setup_tracing();
  let (_, without) = post_json("/api/chat/message", json!({"message": "hello"}), default_state(catalog())).await;
  let (_, with) = post_json(
    "/api/chat/message",
    json!({"message": "hello", "session_id": "session-42"}),
    default_state(catalog()),
  )
  .await;
  assert_eq!(without, with);
}
