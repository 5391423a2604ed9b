use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

pub const VENUE_ACTIVE: &str = "ACTIVE";
pub const VENUE_SUSPENDED: &str = "SUSPENDED";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Venue {
    pub id: String,
    pub host_id: String,
    pub name: String,
    pub description: String,
    pub address: String,
    pub capacity: i32,
    pub min_booking_minutes: i32,
    pub max_booking_minutes: Option<i32>,
    pub buffer_minutes: i32,
    pub base_hourly_price_egp: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Venue {
    pub fn is_active(&self) -> bool {
        self.status == VENUE_ACTIVE
    }
}

/// An alternative hourly rate a guest can select at booking time.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct VenuePackage {
    pub id: String,
    pub venue_id: String,
    pub name: String,
    pub hourly_price_egp: i64,
    pub created_at: DateTime<Utc>,
}

impl VenuePackage {
    pub fn new(venue_id: String, name: String, hourly_price_egp: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            venue_id,
            name,
            hourly_price_egp,
            created_at: Utc::now(),
        }
    }
}
