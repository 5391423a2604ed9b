use axum::{extract::{State, Path, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{requests::{CreateRuleRequest, CreateBlackoutRequest}, responses::DayAvailabilityResponse};
use crate::api::handlers::venue::find_host_venue;
use crate::domain::models::schedule::{AvailabilityRule, Blackout};
use crate::domain::services::availability::{day_bounds, open_intervals_for_date};
use crate::domain::services::conflict::blocked_interval;
use crate::error::AppError;
use std::collections::HashMap;
use std::sync::Arc;
use chrono::{NaiveDate, NaiveTime};
use tracing::info;

pub async fn create_rule(
    State(state): State<Arc<AppState>>,
    Path((host_id, venue_id)): Path<(String, String)>,
    Json(payload): Json<CreateRuleRequest>,
) -> Result<impl IntoResponse, AppError> {
    find_host_venue(&state, &host_id, &venue_id).await?;

    if !(0..=6).contains(&payload.day_of_week) {
        return Err(AppError::Validation("day_of_week must be 0-6 (0 = Sunday)".into()));
    }
    let open = NaiveTime::parse_from_str(&payload.open_time, "%H:%M")
        .map_err(|_| AppError::Validation("Invalid open_time format (HH:MM)".into()))?;
    let close = NaiveTime::parse_from_str(&payload.close_time, "%H:%M")
        .map_err(|_| AppError::Validation("Invalid close_time format (HH:MM)".into()))?;
    if close <= open {
        return Err(AppError::Validation("close_time must be after open_time".into()));
    }

    let rule = AvailabilityRule::new(venue_id, payload.day_of_week, payload.open_time, payload.close_time);
    let created = state.schedule_repo.create_rule(&rule).await?;
    info!("Availability rule created: {} for venue {}", created.id, created.venue_id);
    Ok(Json(created))
}

pub async fn list_rules(
    State(state): State<Arc<AppState>>,
    Path((host_id, venue_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    find_host_venue(&state, &host_id, &venue_id).await?;
    let rules = state.schedule_repo.list_rules(&venue_id).await?;
    Ok(Json(rules))
}

pub async fn delete_rule(
    State(state): State<Arc<AppState>>,
    Path((host_id, venue_id, rule_id)): Path<(String, String, String)>,
) -> Result<impl IntoResponse, AppError> {
    find_host_venue(&state, &host_id, &venue_id).await?;
    state.schedule_repo.delete_rule(&venue_id, &rule_id).await?;
    info!("Availability rule deleted: {}", rule_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}

pub async fn create_blackout(
    State(state): State<Arc<AppState>>,
    Path((host_id, venue_id)): Path<(String, String)>,
    Json(payload): Json<CreateBlackoutRequest>,
) -> Result<impl IntoResponse, AppError> {
    find_host_venue(&state, &host_id, &venue_id).await?;

    if payload.end_time <= payload.start_time {
        return Err(AppError::Validation("end_time must be after start_time".into()));
    }

    let blackout = Blackout::new(
        venue_id,
        payload.start_time,
        payload.end_time,
        payload.reason.unwrap_or_default(),
    );
    let created = state.schedule_repo.create_blackout(&blackout).await?;
    info!("Blackout created: {} for venue {}", created.id, created.venue_id);
    Ok(Json(created))
}

pub async fn list_blackouts(
    State(state): State<Arc<AppState>>,
    Path((host_id, venue_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    find_host_venue(&state, &host_id, &venue_id).await?;
    let blackouts = state.schedule_repo.list_blackouts(&venue_id).await?;
    Ok(Json(blackouts))
}

pub async fn delete_blackout(
    State(state): State<Arc<AppState>>,
    Path((host_id, venue_id, blackout_id)): Path<(String, String, String)>,
) -> Result<impl IntoResponse, AppError> {
    find_host_venue(&state, &host_id, &venue_id).await?;
    state.schedule_repo.delete_blackout(&venue_id, &blackout_id).await?;
    info!("Blackout deleted: {}", blackout_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}

/// Public day view: the venue's open windows for a date, and what is still
/// bookable once confirmed bookings and their buffers are carved out.
pub async fn get_day_availability(
    State(state): State<Arc<AppState>>,
    Path(venue_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let venue = state.venue_repo.find_by_id(&venue_id).await?
        .ok_or(AppError::NotFound("Venue not found".into()))?;

    let date_str = params.get("date").ok_or(AppError::Validation("date required".into()))?;
    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format (YYYY-MM-DD)".into()))?;

    let bounds = day_bounds(date, state.timezone);
    let buffer = venue.buffer_minutes as i64;

    let rules = state.schedule_repo.list_rules(&venue.id).await?;
    let blackouts = state.schedule_repo.list_blackouts_in_range(&venue.id, bounds.start, bounds.end).await?;
    let open = open_intervals_for_date(&rules, &blackouts, date, state.timezone);

    let padded = bounds.padded(buffer);
    let bookings = state.booking_repo.list_confirmed_in_range(&venue.id, padded.start, padded.end).await?;

    let mut bookable = open.clone();
    for booking in &bookings {
        bookable.subtract(blocked_interval(booking, buffer));
    }

    Ok(Json(DayAvailabilityResponse {
        date: date_str.clone(),
        open_windows: open.as_slice().to_vec(),
        bookable_windows: bookable.as_slice().to_vec(),
    }))
}
