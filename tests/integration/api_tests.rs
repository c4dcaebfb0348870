//! API integration tests
//!
//! These tests run against a live server with a migrated database:
//! `cargo test -- --ignored`

use reqwest::Client;
use serde_json::{json, Value};
use std::time::{SystemTime, UNIX_EPOCH};

const BASE_URL: &str = "http://localhost:8080";
const USER_HEADER: &str = "X-Sharer-User-Id";

/// Unique email suffix so test runs do not collide on the email constraint
fn unique_suffix() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos()
}

async fn create_user(client: &Client, name: &str) -> i64 {
    let response = client
        .post(format!("{}/users", BASE_URL))
        .json(&json!({
            "name": name,
            "email": format!("{}-{}@lendhub.test", name, unique_suffix())
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_i64().expect("No user ID")
}

async fn create_item(client: &Client, owner_id: i64, name: &str, available: bool) -> i64 {
    let response = client
        .post(format!("{}/items", BASE_URL))
        .header(USER_HEADER, owner_id)
        .json(&json!({
            "name": name,
            "description": format!("{} for sharing", name),
            "available": available
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_i64().expect("No item ID")
}

fn in_days(days: i64) -> String {
    (chrono::Utc::now() + chrono::Duration::days(days)).to_rfc3339()
}

fn in_seconds(seconds: i64) -> String {
    (chrono::Utc::now() + chrono::Duration::seconds(seconds)).to_rfc3339()
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_create_user_duplicate_email_conflicts() {
    let client = Client::new();
    let email = format!("dup-{}@lendhub.test", unique_suffix());

    let response = client
        .post(format!("{}/users", BASE_URL))
        .json(&json!({"name": "First", "email": email}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .post(format!("{}/users", BASE_URL))
        .json(&json!({"name": "Second", "email": email}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_update_user_email_uniqueness() {
    let client = Client::new();
    let taken = format!("taken-{}@lendhub.test", unique_suffix());

    let response = client
        .post(format!("{}/users", BASE_URL))
        .json(&json!({"name": "Holder", "email": taken}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let user_id = create_user(&client, "mover").await;

    // Taking another user's email conflicts
    let response = client
        .patch(format!("{}/users/{}", BASE_URL, user_id))
        .json(&json!({"email": taken}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);

    // Re-submitting one's own current email succeeds
    let response = client
        .get(format!("{}/users/{}", BASE_URL, user_id))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    let own_email = body["email"].as_str().expect("No email").to_string();

    let response = client
        .patch(format!("{}/users/{}", BASE_URL, user_id))
        .json(&json!({"name": "Mover Renamed", "email": own_email}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["name"], "Mover Renamed");
}

#[tokio::test]
#[ignore]
async fn test_unknown_user_is_not_found() {
    let client = Client::new();

    let response = client
        .get(format!("{}/users/999999999", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);

    let response = client
        .delete(format!("{}/users/999999999", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_item_update_is_owner_only() {
    let client = Client::new();
    let owner = create_user(&client, "owner-only").await;
    let stranger = create_user(&client, "stranger").await;
    let item_id = create_item(&client, owner, "Ladder", true).await;

    let response = client
        .patch(format!("{}/items/{}", BASE_URL, item_id))
        .header(USER_HEADER, stranger)
        .json(&json!({"name": "Stolen ladder"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 403);

    // Blank fields leave the item unchanged, present ones are applied
    let response = client
        .patch(format!("{}/items/{}", BASE_URL, item_id))
        .header(USER_HEADER, owner)
        .json(&json!({"name": "  ", "available": false}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["name"], "Ladder");
    assert_eq!(body["available"], false);
}

#[tokio::test]
#[ignore]
async fn test_search_blank_text_returns_empty() {
    let client = Client::new();

    let response = client
        .get(format!("{}/items/search?text=", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body.as_array().expect("Not an array").len(), 0);
}

#[tokio::test]
#[ignore]
async fn test_search_finds_available_items_only() {
    let client = Client::new();
    let owner = create_user(&client, "searcher").await;
    let marker = format!("needle{}", unique_suffix());
    create_item(&client, owner, &format!("Visible {}", marker), true).await;
    create_item(&client, owner, &format!("Hidden {}", marker), false).await;

    let response = client
        .get(format!("{}/items/search?text={}", BASE_URL, marker))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    let items = body.as_array().expect("Not an array");
    assert_eq!(items.len(), 1);
    assert!(items[0]["name"].as_str().unwrap().starts_with("Visible"));
}

#[tokio::test]
#[ignore]
async fn test_booking_lifecycle() {
    let client = Client::new();
    let owner = create_user(&client, "lender").await;
    let booker = create_user(&client, "borrower").await;
    let item_id = create_item(&client, owner, "Tent", true).await;

    // Booker submits a future window
    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .header(USER_HEADER, booker)
        .json(&json!({
            "item_id": item_id,
            "start": in_days(1),
            "end": in_days(2)
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    let booking_id = body["id"].as_i64().expect("No booking ID");
    assert_eq!(body["status"], "WAITING");
    assert_eq!(body["booker"]["id"].as_i64().unwrap(), booker);

    // A stranger may not view it
    let stranger = create_user(&client, "peeker").await;
    let response = client
        .get(format!("{}/bookings/{}", BASE_URL, booking_id))
        .header(USER_HEADER, stranger)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);

    // Only the owner decides; the booker trying is a 404
    let response = client
        .patch(format!("{}/bookings/{}?approved=true", BASE_URL, booking_id))
        .header(USER_HEADER, booker)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);

    // Owner approves
    let response = client
        .patch(format!("{}/bookings/{}?approved=true", BASE_URL, booking_id))
        .header(USER_HEADER, owner)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "APPROVED");

    // Approval is one-shot: a second decision fails
    let response = client
        .patch(format!("{}/bookings/{}?approved=false", BASE_URL, booking_id))
        .header(USER_HEADER, owner)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    // The booking shows up for both sides, state-filtered
    let response = client
        .get(format!("{}/bookings?state=ALL", BASE_URL))
        .header(USER_HEADER, booker)
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body
        .as_array()
        .unwrap()
        .iter()
        .any(|b| b["id"].as_i64() == Some(booking_id)));

    let response = client
        .get(format!("{}/bookings/owner?state=FUTURE", BASE_URL))
        .header(USER_HEADER, owner)
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body
        .as_array()
        .unwrap()
        .iter()
        .any(|b| b["id"].as_i64() == Some(booking_id)));

    // But not under a non-matching state
    let response = client
        .get(format!("{}/bookings?state=REJECTED", BASE_URL))
        .header(USER_HEADER, booker)
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(!body
        .as_array()
        .unwrap()
        .iter()
        .any(|b| b["id"].as_i64() == Some(booking_id)));
}

#[tokio::test]
#[ignore]
async fn test_booking_own_item_is_hidden() {
    let client = Client::new();
    let owner = create_user(&client, "self-booker").await;
    let item_id = create_item(&client, owner, "Bike", true).await;

    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .header(USER_HEADER, owner)
        .json(&json!({
            "item_id": item_id,
            "start": in_days(1),
            "end": in_days(2)
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_booking_rejects_bad_windows() {
    let client = Client::new();
    let owner = create_user(&client, "window-owner").await;
    let booker = create_user(&client, "window-booker").await;
    let item_id = create_item(&client, owner, "Canoe", true).await;

    // Start in the past
    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .header(USER_HEADER, booker)
        .json(&json!({
            "item_id": item_id,
            "start": in_days(-1),
            "end": in_days(1)
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    // End not after start
    let start = in_days(1);
    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .header(USER_HEADER, booker)
        .json(&json!({
            "item_id": item_id,
            "start": start,
            "end": start
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    // Missing end
    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .header(USER_HEADER, booker)
        .json(&json!({
            "item_id": item_id,
            "start": in_days(1)
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_booking_unavailable_item_fails() {
    let client = Client::new();
    let owner = create_user(&client, "unavail-owner").await;
    let booker = create_user(&client, "unavail-booker").await;
    let item_id = create_item(&client, owner, "Broken mower", false).await;

    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .header(USER_HEADER, booker)
        .json(&json!({
            "item_id": item_id,
            "start": in_days(1),
            "end": in_days(2)
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_unknown_booking_state_is_rejected() {
    let client = Client::new();
    let user = create_user(&client, "state-user").await;

    let response = client
        .get(format!("{}/bookings?state=SOMETIMES", BASE_URL))
        .header(USER_HEADER, user)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Unknown state: SOMETIMES");
}

#[tokio::test]
#[ignore]
async fn test_request_without_items_is_empty() {
    let client = Client::new();
    let requestor = create_user(&client, "requestor").await;

    let response = client
        .post(format!("{}/requests", BASE_URL))
        .header(USER_HEADER, requestor)
        .json(&json!({"description": "Looking for a ladder"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let request_id = body["id"].as_i64().expect("No request ID");

    let response = client
        .get(format!("{}/requests/{}", BASE_URL, request_id))
        .header(USER_HEADER, requestor)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["items"].as_array().expect("No items array").len(), 0);
}

#[tokio::test]
#[ignore]
async fn test_request_collects_fulfilling_items() {
    let client = Client::new();
    let requestor = create_user(&client, "asker").await;
    let offerer = create_user(&client, "offerer").await;

    let response = client
        .post(format!("{}/requests", BASE_URL))
        .header(USER_HEADER, requestor)
        .json(&json!({"description": "Need a projector for the weekend"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let request_id = body["id"].as_i64().expect("No request ID");

    let response = client
        .post(format!("{}/items", BASE_URL))
        .header(USER_HEADER, offerer)
        .json(&json!({
            "name": "Projector",
            "description": "1080p projector",
            "available": true,
            "request_id": request_id
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    // The requestor sees the offered item on their own request
    let response = client
        .get(format!("{}/requests", BASE_URL))
        .header(USER_HEADER, requestor)
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    let request = body
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["id"].as_i64() == Some(request_id))
        .expect("Request missing from own list")
        .clone();
    assert_eq!(request["items"].as_array().unwrap().len(), 1);

    // Others see it under /requests/all, the requestor does not
    let response = client
        .get(format!("{}/requests/all", BASE_URL))
        .header(USER_HEADER, offerer)
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body
        .as_array()
        .unwrap()
        .iter()
        .any(|r| r["id"].as_i64() == Some(request_id)));

    let response = client
        .get(format!("{}/requests/all", BASE_URL))
        .header(USER_HEADER, requestor)
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(!body
        .as_array()
        .unwrap()
        .iter()
        .any(|r| r["id"].as_i64() == Some(request_id)));
}

#[tokio::test]
#[ignore]
async fn test_comment_requires_completed_booking() {
    let client = Client::new();
    let owner = create_user(&client, "comment-owner").await;
    let booker = create_user(&client, "commenter").await;
    let item_id = create_item(&client, owner, "Sander", true).await;

    // No booking at all: rejected
    let response = client
        .post(format!("{}/items/{}/comment", BASE_URL, item_id))
        .header(USER_HEADER, booker)
        .json(&json!({"text": "Great sander"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    // Book a window a few seconds long
    let start = in_seconds(2);
    let end = in_seconds(4);
    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .header(USER_HEADER, booker)
        .json(&json!({"item_id": item_id, "start": start, "end": end}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let booking_id = body["id"].as_i64().expect("No booking ID");

    let response = client
        .patch(format!("{}/bookings/{}?approved=true", BASE_URL, booking_id))
        .header(USER_HEADER, owner)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    // Before the booking ends: still rejected
    let response = client
        .post(format!("{}/items/{}/comment", BASE_URL, item_id))
        .header(USER_HEADER, booker)
        .json(&json!({"text": "Too early"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    // After the booking ends: accepted and attached to the item
    tokio::time::sleep(std::time::Duration::from_secs(5)).await;

    let response = client
        .post(format!("{}/items/{}/comment", BASE_URL, item_id))
        .header(USER_HEADER, booker)
        .json(&json!({"text": "Worked great"}))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = client
        .get(format!("{}/items/{}", BASE_URL, item_id))
        .header(USER_HEADER, owner)
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    let comments = body["comments"].as_array().expect("No comments array");
    assert!(comments.iter().any(|c| c["text"] == "Worked great"));
    // The owner also sees the past booking on the item
    assert!(body["last_booking"].is_object());
}

#[tokio::test]
#[ignore]
async fn test_missing_sharer_header_is_rejected() {
    let client = Client::new();

    let response = client
        .get(format!("{}/bookings", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
}
