use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub const BOOKING_CONFIRMED: &str = "CONFIRMED";
pub const BOOKING_CANCELLED: &str = "CANCELLED";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Booking {
    pub id: String,
    pub venue_id: String,
    pub guest_id: String,
    pub package_id: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: String,
    pub total_price_egp: i64,
    pub created_at: DateTime<Utc>,
}

pub struct NewBookingParams {
    pub venue_id: String,
    pub guest_id: String,
    pub package_id: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub total_price_egp: i64,
}

impl Booking {
    pub fn new(params: NewBookingParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            venue_id: params.venue_id,
            guest_id: params.guest_id,
            package_id: params.package_id,
            start_time: params.start,
            end_time: params.end,
            status: BOOKING_CONFIRMED.to_string(),
            total_price_egp: params.total_price_egp,
            created_at: Utc::now(),
        }
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == BOOKING_CONFIRMED
    }
}
