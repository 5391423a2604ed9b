use axum::{extract::{State, Path}, http::header, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{requests::{CreateBookingRequest, QuoteRequest}, responses::QuoteResponse};
use crate::domain::models::booking::{Booking, NewBookingParams, BOOKING_CANCELLED};
use crate::domain::models::venue::{Venue, VenuePackage};
use crate::domain::services::availability::{day_bounds, open_intervals_for_date};
use crate::domain::services::calendar::generate_ics;
use crate::domain::services::intervals::Interval;
use crate::domain::services::pricing;
use crate::domain::services::validator::{validate_booking, BookingDraft};
use crate::error::AppError;
use std::sync::Arc;
use chrono::{DateTime, Utc};
use tracing::info;

async fn load_package(
    state: &AppState,
    venue: &Venue,
    package_id: Option<&String>,
) -> Result<Option<VenuePackage>, AppError> {
    match package_id {
        Some(pid) => {
            let package = state.venue_repo.find_package(&venue.id, pid).await?
                .ok_or(AppError::NotFound("Package not found".into()))?;
            Ok(Some(package))
        }
        None => Ok(None),
    }
}

/// Loads the day's rules, blackouts and surrounding confirmed bookings, then
/// runs the pure validation sequence against them.
async fn validate_request(
    state: &AppState,
    venue: &Venue,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<BookingDraft, AppError> {
    let requested = Interval::new(start, end);
    let date = start.with_timezone(&state.timezone).date_naive();
    let bounds = day_bounds(date, state.timezone);
    let buffer = venue.buffer_minutes as i64;

    let rules = state.schedule_repo.list_rules(&venue.id).await?;
    let blackouts = state.schedule_repo.list_blackouts_in_range(&venue.id, bounds.start, bounds.end).await?;
    let open = open_intervals_for_date(&rules, &blackouts, date, state.timezone);

    // Widen the load window by the buffer so bookings whose buffered span
    // reaches into this day are seen by the conflict check.
    let padded = bounds.padded(buffer);
    let existing = state.booking_repo.list_confirmed_in_range(&venue.id, padded.start, padded.end).await?;

    let draft = validate_booking(venue, &open, &existing, requested)?;
    Ok(draft)
}

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Path(venue_id): Path<String>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let venue = state.venue_repo.find_by_id(&venue_id).await?
        .ok_or(AppError::NotFound("Venue not found".into()))?;

    if !venue.is_active() {
        return Err(AppError::Forbidden("Venue is not accepting bookings".into()));
    }

    let package = load_package(&state, &venue, payload.package_id.as_ref()).await?;
    let draft = validate_request(&state, &venue, payload.start_time, payload.end_time).await?;

    let rate = pricing::hourly_rate_egp(&venue, package.as_ref());
    let total = pricing::total_price_egp(draft.duration_minutes, rate);

    let booking = Booking::new(NewBookingParams {
        venue_id: venue.id.clone(),
        guest_id: payload.guest_id,
        package_id: payload.package_id,
        start: draft.interval.start,
        end: draft.interval.end,
        total_price_egp: total,
    });

    let created = state.booking_repo.create_checked(&booking, venue.buffer_minutes as i64).await?;
    info!("Booking confirmed: {} for venue {} ({} EGP)", created.id, venue.id, created.total_price_egp);
    Ok(Json(created))
}

/// Runs the same validation and pricing as booking creation without
/// persisting anything.
pub async fn quote_booking(
    State(state): State<Arc<AppState>>,
    Path(venue_id): Path<String>,
    Json(payload): Json<QuoteRequest>,
) -> Result<impl IntoResponse, AppError> {
    let venue = state.venue_repo.find_by_id(&venue_id).await?
        .ok_or(AppError::NotFound("Venue not found".into()))?;

    if !venue.is_active() {
        return Err(AppError::Forbidden("Venue is not accepting bookings".into()));
    }

    let package = load_package(&state, &venue, payload.package_id.as_ref()).await?;
    let draft = validate_request(&state, &venue, payload.start_time, payload.end_time).await?;

    let rate = pricing::hourly_rate_egp(&venue, package.as_ref());
    let total = pricing::total_price_egp(draft.duration_minutes, rate);

    Ok(Json(QuoteResponse {
        venue_id: venue.id,
        start_time: draft.interval.start,
        end_time: draft.interval.end,
        duration_minutes: draft.duration_minutes,
        hourly_rate_egp: rate,
        total_price_egp: total,
    }))
}

pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.booking_repo.find_by_id(&booking_id).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;
    Ok(Json(booking))
}

pub async fn cancel_booking(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.booking_repo.find_by_id(&booking_id).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    // Idempotent: a second cancel returns the already-cancelled booking.
    if booking.status == BOOKING_CANCELLED {
        return Ok(Json(booking));
    }

    let cancelled = state.booking_repo.cancel(&booking.id).await?;
    info!("Booking cancelled: {}", cancelled.id);
    Ok(Json(cancelled))
}

pub async fn booking_ics(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.booking_repo.find_by_id(&booking_id).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;
    let venue = state.venue_repo.find_by_id(&booking.venue_id).await?
        .ok_or(AppError::Internal)?;

    let ics = generate_ics(&venue, &booking);
    Ok(([(header::CONTENT_TYPE, "text/calendar; charset=utf-8")], ics))
}

pub async fn list_venue_bookings(
    State(state): State<Arc<AppState>>,
    Path(venue_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let venue = state.venue_repo.find_by_id(&venue_id).await?
        .ok_or(AppError::NotFound("Venue not found".into()))?;
    let bookings = state.booking_repo.list_by_venue(&venue.id).await?;
    Ok(Json(bookings))
}

pub async fn list_guest_bookings(
    State(state): State<Arc<AppState>>,
    Path(guest_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let bookings = state.booking_repo.list_by_guest(&guest_id).await?;
    Ok(Json(bookings))
}
