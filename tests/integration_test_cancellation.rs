mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp};
use serde_json::json;

fn venue_payload() -> serde_json::Value {
    json!({
        "name": "Loft Space",
        "description": "Industrial loft",
        "address": "Heliopolis, Cairo",
        "capacity": 25,
        "min_booking_minutes": 60,
        "max_booking_minutes": null,
        "buffer_minutes": 30,
        "base_hourly_price_egp": 120
    })
}

async fn setup_with_booking(app: &TestApp) -> (String, String) {
    let venue_id = app.create_venue(venue_payload()).await;
    app.add_rule(&venue_id, 1, "09:00", "17:00").await;

    let booking = parse_body(app.post_json(
        &format!("/api/v1/venues/{}/bookings", venue_id),
        json!({
            "guest_id": "guest-1",
            "start_time": "2025-06-02T10:00:00Z",
            "end_time": "2025-06-02T12:00:00Z"
        }),
    ).await).await;

    (venue_id, booking["id"].as_str().unwrap().to_string())
}

#[tokio::test]
async fn test_cancel_is_idempotent() {
    let app = TestApp::new().await;
    let (_, booking_id) = setup_with_booking(&app).await;

    let response = app.post_json(&format!("/api/v1/bookings/{}/cancel", booking_id), json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let cancelled = parse_body(response).await;
    assert_eq!(cancelled["status"], "CANCELLED");

    // Second cancel: same terminal state, no error
    let response = app.post_json(&format!("/api/v1/bookings/{}/cancel", booking_id), json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let cancelled_again = parse_body(response).await;
    assert_eq!(cancelled_again["status"], "CANCELLED");
    assert_eq!(cancelled_again["id"], cancelled["id"]);
}

#[tokio::test]
async fn test_cancelled_booking_frees_the_slot() {
    let app = TestApp::new().await;
    let (venue_id, booking_id) = setup_with_booking(&app).await;

    // Slot is taken
    let response = app.post_json(
        &format!("/api/v1/venues/{}/bookings", venue_id),
        json!({
            "guest_id": "guest-2",
            "start_time": "2025-06-02T10:00:00Z",
            "end_time": "2025-06-02T12:00:00Z"
        }),
    ).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    app.post_json(&format!("/api/v1/bookings/{}/cancel", booking_id), json!({})).await;

    // Cancelled bookings are inert for conflict purposes
    let response = app.post_json(
        &format!("/api/v1/venues/{}/bookings", venue_id),
        json!({
            "guest_id": "guest-2",
            "start_time": "2025-06-02T10:00:00Z",
            "end_time": "2025-06-02T12:00:00Z"
        }),
    ).await;
    assert_eq!(response.status(), StatusCode::OK);

    // History retains both rows
    let bookings = parse_body(app.get(&format!("/api/v1/venues/{}/bookings", venue_id)).await).await;
    assert_eq!(bookings.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_cancel_unknown_booking() {
    let app = TestApp::new().await;

    let response = app.post_json("/api/v1/bookings/missing/cancel", json!({})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
