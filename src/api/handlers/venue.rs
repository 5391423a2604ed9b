use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{CreateVenueRequest, UpdateVenueRequest, UpdateVenueStatusRequest, CreatePackageRequest};
use crate::domain::models::venue::{Venue, VenuePackage, VENUE_ACTIVE, VENUE_SUSPENDED};
use crate::error::AppError;
use std::sync::Arc;
use chrono::Utc;
use uuid::Uuid;
use tracing::info;

fn check_booking_limits(min_minutes: i32, max_minutes: Option<i32>, buffer_minutes: i32, price: i64) -> Result<(), AppError> {
    if min_minutes <= 0 {
        return Err(AppError::Validation("min_booking_minutes must be positive".into()));
    }
    if let Some(max) = max_minutes {
        if max < min_minutes {
            return Err(AppError::Validation("max_booking_minutes must be >= min_booking_minutes".into()));
        }
    }
    if buffer_minutes < 0 {
        return Err(AppError::Validation("buffer_minutes must not be negative".into()));
    }
    if price <= 0 {
        return Err(AppError::Validation("base_hourly_price_egp must be positive".into()));
    }
    Ok(())
}

pub(crate) async fn find_host_venue(state: &AppState, host_id: &str, venue_id: &str) -> Result<Venue, AppError> {
    let venue = state.venue_repo.find_by_id(venue_id).await?
        .ok_or(AppError::NotFound("Venue not found".into()))?;
    if venue.host_id != host_id {
        return Err(AppError::NotFound("Venue not found".into()));
    }
    Ok(venue)
}

pub async fn create_venue(
    State(state): State<Arc<AppState>>,
    Path(host_id): Path<String>,
    Json(payload): Json<CreateVenueRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.capacity <= 0 {
        return Err(AppError::Validation("capacity must be positive".into()));
    }
    let buffer_minutes = payload.buffer_minutes.unwrap_or(0);
    check_booking_limits(payload.min_booking_minutes, payload.max_booking_minutes, buffer_minutes, payload.base_hourly_price_egp)?;

    let venue = Venue {
        id: Uuid::new_v4().to_string(),
        host_id: host_id.clone(),
        name: payload.name,
        description: payload.description,
        address: payload.address,
        capacity: payload.capacity,
        min_booking_minutes: payload.min_booking_minutes,
        max_booking_minutes: payload.max_booking_minutes,
        buffer_minutes,
        base_hourly_price_egp: payload.base_hourly_price_egp,
        status: VENUE_ACTIVE.to_string(),
        created_at: Utc::now(),
    };

    let created = state.venue_repo.create(&venue).await?;
    info!("Venue created: {} for host {}", created.id, host_id);
    Ok(Json(created))
}

pub async fn list_host_venues(
    State(state): State<Arc<AppState>>,
    Path(host_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let venues = state.venue_repo.list_by_host(&host_id).await?;
    Ok(Json(venues))
}

pub async fn list_venues(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let venues = state.venue_repo.list_active().await?;
    Ok(Json(venues))
}

pub async fn get_venue(
    State(state): State<Arc<AppState>>,
    Path(venue_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let venue = state.venue_repo.find_by_id(&venue_id).await?
        .ok_or(AppError::NotFound("Venue not found".into()))?;
    Ok(Json(venue))
}

pub async fn update_venue(
    State(state): State<Arc<AppState>>,
    Path((host_id, venue_id)): Path<(String, String)>,
    Json(payload): Json<UpdateVenueRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut venue = find_host_venue(&state, &host_id, &venue_id).await?;

    if let Some(val) = payload.name { venue.name = val; }
    if let Some(val) = payload.description { venue.description = val; }
    if let Some(val) = payload.address { venue.address = val; }
    if let Some(val) = payload.capacity {
        if val <= 0 {
            return Err(AppError::Validation("capacity must be positive".into()));
        }
        venue.capacity = val;
    }
    if let Some(val) = payload.min_booking_minutes { venue.min_booking_minutes = val; }
    if let Some(val) = payload.max_booking_minutes { venue.max_booking_minutes = Some(val); }
    if let Some(val) = payload.buffer_minutes { venue.buffer_minutes = val; }
    if let Some(val) = payload.base_hourly_price_egp { venue.base_hourly_price_egp = val; }

    check_booking_limits(venue.min_booking_minutes, venue.max_booking_minutes, venue.buffer_minutes, venue.base_hourly_price_egp)?;

    let updated = state.venue_repo.update(&venue).await?;
    info!("Venue updated: {}", updated.id);
    Ok(Json(updated))
}

pub async fn delete_venue(
    State(state): State<Arc<AppState>>,
    Path((host_id, venue_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    state.venue_repo.delete(&host_id, &venue_id).await?;
    info!("Venue deleted: {}", venue_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}

/// Admin moderation: suspend or reactivate a listing. Suspended venues stay
/// visible to their host but accept no bookings.
pub async fn set_venue_status(
    State(state): State<Arc<AppState>>,
    Path(venue_id): Path<String>,
    Json(payload): Json<UpdateVenueStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    match payload.status.as_str() {
        VENUE_ACTIVE | VENUE_SUSPENDED => {},
        _ => return Err(AppError::Validation("Invalid status".into())),
    }

    let mut venue = state.venue_repo.find_by_id(&venue_id).await?
        .ok_or(AppError::NotFound("Venue not found".into()))?;
    venue.status = payload.status;

    let updated = state.venue_repo.update(&venue).await?;
    info!("Venue {} status set to {}", updated.id, updated.status);
    Ok(Json(updated))
}

pub async fn create_package(
    State(state): State<Arc<AppState>>,
    Path((host_id, venue_id)): Path<(String, String)>,
    Json(payload): Json<CreatePackageRequest>,
) -> Result<impl IntoResponse, AppError> {
    find_host_venue(&state, &host_id, &venue_id).await?;

    if payload.hourly_price_egp <= 0 {
        return Err(AppError::Validation("hourly_price_egp must be positive".into()));
    }

    let package = VenuePackage::new(venue_id, payload.name, payload.hourly_price_egp);
    let created = state.venue_repo.create_package(&package).await?;
    info!("Package created: {} for venue {}", created.id, created.venue_id);
    Ok(Json(created))
}

pub async fn list_packages(
    State(state): State<Arc<AppState>>,
    Path((host_id, venue_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    find_host_venue(&state, &host_id, &venue_id).await?;
    let packages = state.venue_repo.list_packages(&venue_id).await?;
    Ok(Json(packages))
}

pub async fn delete_package(
    State(state): State<Arc<AppState>>,
    Path((host_id, venue_id, package_id)): Path<(String, String, String)>,
) -> Result<impl IntoResponse, AppError> {
    find_host_venue(&state, &host_id, &venue_id).await?;
    state.venue_repo.delete_package(&venue_id, &package_id).await?;
    info!("Package deleted: {}", package_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
