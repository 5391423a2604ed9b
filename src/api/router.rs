use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{health, venue, schedule, booking};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Public venue discovery
        .route("/api/v1/venues", get(venue::list_venues))
        .route("/api/v1/venues/{venue_id}", get(venue::get_venue))
        .route("/api/v1/venues/{venue_id}/availability", get(schedule::get_day_availability))

        // Host venue management
        .route("/api/v1/hosts/{host_id}/venues", post(venue::create_venue).get(venue::list_host_venues))
        .route("/api/v1/hosts/{host_id}/venues/{venue_id}", put(venue::update_venue).delete(venue::delete_venue))
        .route("/api/v1/hosts/{host_id}/venues/{venue_id}/packages", post(venue::create_package).get(venue::list_packages))
        .route("/api/v1/hosts/{host_id}/venues/{venue_id}/packages/{package_id}", axum::routing::delete(venue::delete_package))

        // Host scheduling
        .route("/api/v1/hosts/{host_id}/venues/{venue_id}/availability-rules", post(schedule::create_rule).get(schedule::list_rules))
        .route("/api/v1/hosts/{host_id}/venues/{venue_id}/availability-rules/{rule_id}", axum::routing::delete(schedule::delete_rule))
        .route("/api/v1/hosts/{host_id}/venues/{venue_id}/blackouts", post(schedule::create_blackout).get(schedule::list_blackouts))
        .route("/api/v1/hosts/{host_id}/venues/{venue_id}/blackouts/{blackout_id}", axum::routing::delete(schedule::delete_blackout))

        // Admin moderation
        .route("/api/v1/admin/venues/{venue_id}/status", put(venue::set_venue_status))

        // Booking flow
        .route("/api/v1/venues/{venue_id}/quote", post(booking::quote_booking))
        .route("/api/v1/venues/{venue_id}/bookings", post(booking::create_booking).get(booking::list_venue_bookings))
        .route("/api/v1/bookings/{booking_id}", get(booking::get_booking))
        .route("/api/v1/bookings/{booking_id}/calendar.ics", get(booking::booking_ics))
        .route("/api/v1/bookings/{booking_id}/cancel", post(booking::cancel_booking))
        .route("/api/v1/guests/{guest_id}/bookings", get(booking::list_guest_bookings))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
