use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::services::intervals::Interval;

#[derive(Serialize)]
pub struct DayAvailabilityResponse {
    pub date: String,
    /// Open hours for the date after blackout subtraction.
    pub open_windows: Vec<Interval>,
    /// Open windows minus existing bookings and their buffers.
    pub bookable_windows: Vec<Interval>,
}

#[derive(Serialize)]
pub struct QuoteResponse {
    pub venue_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration_minutes: i64,
    pub hourly_rate_egp: i64,
    pub total_price_egp: i64,
}
