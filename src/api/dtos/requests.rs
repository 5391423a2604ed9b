use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct CreateVenueRequest {
    pub name: String,
    pub description: String,
    pub address: String,
    pub capacity: i32,
    pub min_booking_minutes: i32,
    pub max_booking_minutes: Option<i32>,
    pub buffer_minutes: Option<i32>,
    pub base_hourly_price_egp: i64,
}

#[derive(Deserialize)]
pub struct UpdateVenueRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub capacity: Option<i32>,
    pub min_booking_minutes: Option<i32>,
    pub max_booking_minutes: Option<i32>,
    pub buffer_minutes: Option<i32>,
    pub base_hourly_price_egp: Option<i64>,
}

#[derive(Deserialize)]
pub struct UpdateVenueStatusRequest {
    pub status: String,
}

#[derive(Deserialize)]
pub struct CreatePackageRequest {
    pub name: String,
    pub hourly_price_egp: i64,
}

#[derive(Deserialize)]
pub struct CreateRuleRequest {
    pub day_of_week: i32,
    pub open_time: String,
    pub close_time: String,
}

#[derive(Deserialize)]
pub struct CreateBlackoutRequest {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub reason: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateBookingRequest {
    pub guest_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub package_id: Option<String>,
}

#[derive(Deserialize)]
pub struct QuoteRequest {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub package_id: Option<String>,
}
