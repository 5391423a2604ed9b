mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::{parse_body, TestApp};
use serde_json::json;
use tower::ServiceExt;

// Racing requests for the same slot must produce exactly one confirmed
// booking; the storage-layer re-check is the second line of defense when
// both pass the pure validator against the same snapshot.
#[tokio::test]
async fn test_concurrent_bookings_single_winner() {
    let app = TestApp::new().await;

    let venue_id = app.create_venue(json!({
        "name": "Race Hall",
        "description": "",
        "address": "Cairo",
        "capacity": 100,
        "min_booking_minutes": 60,
        "max_booking_minutes": null,
        "buffer_minutes": 0,
        "base_hourly_price_egp": 100
    })).await;
    app.add_rule(&venue_id, 1, "09:00", "17:00").await;

    let mut handles = Vec::new();
    for i in 0..5 {
        let router = app.router.clone();
        let uri = format!("/api/v1/venues/{}/bookings", venue_id);
        let payload = json!({
            "guest_id": format!("guest-{}", i),
            "start_time": "2025-06-02T10:00:00Z",
            "end_time": "2025-06-02T11:00:00Z"
        });

        handles.push(tokio::spawn(async move {
            let response = router.oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap()
            ).await.unwrap();
            response.status()
        }));
    }

    let mut ok = 0;
    let mut conflict = 0;
    for handle in handles {
        match handle.await.unwrap() {
            StatusCode::OK => ok += 1,
            StatusCode::CONFLICT => conflict += 1,
            other => panic!("unexpected status: {}", other),
        }
    }

    assert_eq!(ok, 1, "exactly one request may win the slot");
    assert_eq!(conflict, 4);

    let bookings = parse_body(app.get(&format!("/api/v1/venues/{}/bookings", venue_id)).await).await;
    assert_eq!(bookings.as_array().unwrap().len(), 1);
}
