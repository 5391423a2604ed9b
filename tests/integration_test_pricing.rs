mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp};
use serde_json::json;

fn venue_payload() -> serde_json::Value {
    json!({
        "name": "Band Room",
        "description": "Rehearsal room",
        "address": "Giza",
        "capacity": 8,
        "min_booking_minutes": 30,
        "max_booking_minutes": null,
        "buffer_minutes": 0,
        "base_hourly_price_egp": 100
    })
}

async fn quote(app: &TestApp, venue_id: &str, start: &str, end: &str) -> serde_json::Value {
    let response = app.post_json(
        &format!("/api/v1/venues/{}/quote", venue_id),
        json!({"start_time": start, "end_time": end}),
    ).await;
    assert_eq!(response.status(), StatusCode::OK);
    parse_body(response).await
}

#[tokio::test]
async fn test_partial_hours_round_up() {
    let app = TestApp::new().await;
    let id = app.create_venue(venue_payload()).await;
    app.add_rule(&id, 1, "08:00", "20:00").await;

    // 90 min at 100 EGP/h -> 150
    let q = quote(&app, &id, "2025-06-02T10:00:00Z", "2025-06-02T11:30:00Z").await;
    assert_eq!(q["duration_minutes"], 90);
    assert_eq!(q["total_price_egp"], 150);

    // 91 min -> ceil(151.67) = 152, never undercharged
    let q = quote(&app, &id, "2025-06-02T10:00:00Z", "2025-06-02T11:31:00Z").await;
    assert_eq!(q["duration_minutes"], 91);
    assert_eq!(q["total_price_egp"], 152);

    // Whole hours are exact
    let q = quote(&app, &id, "2025-06-02T10:00:00Z", "2025-06-02T12:00:00Z").await;
    assert_eq!(q["total_price_egp"], 200);
}

#[tokio::test]
async fn test_quote_uses_package_rate() {
    let app = TestApp::new().await;
    let id = app.create_venue(venue_payload()).await;
    app.add_rule(&id, 1, "08:00", "20:00").await;

    let package = parse_body(app.post_json(
        &format!("/api/v1/hosts/host-1/venues/{}/packages", id),
        json!({"name": "Recording", "hourly_price_egp": 250}),
    ).await).await;

    let response = app.post_json(
        &format!("/api/v1/venues/{}/quote", id),
        json!({
            "start_time": "2025-06-02T10:00:00Z",
            "end_time": "2025-06-02T11:00:00Z",
            "package_id": package["id"].as_str().unwrap()
        }),
    ).await;
    assert_eq!(response.status(), StatusCode::OK);
    let q = parse_body(response).await;
    assert_eq!(q["hourly_rate_egp"], 250);
    assert_eq!(q["total_price_egp"], 250);
}

#[tokio::test]
async fn test_stored_booking_price_matches_quote() {
    let app = TestApp::new().await;
    let id = app.create_venue(venue_payload()).await;
    app.add_rule(&id, 1, "08:00", "20:00").await;

    let q = quote(&app, &id, "2025-06-02T10:00:00Z", "2025-06-02T11:31:00Z").await;

    let booking = parse_body(app.post_json(
        &format!("/api/v1/venues/{}/bookings", id),
        json!({
            "guest_id": "guest-1",
            "start_time": "2025-06-02T10:00:00Z",
            "end_time": "2025-06-02T11:31:00Z"
        }),
    ).await).await;

    assert_eq!(booking["total_price_egp"], q["total_price_egp"]);
}
