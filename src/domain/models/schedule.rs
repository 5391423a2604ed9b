use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Weekly opening window. `day_of_week` is 0-6 with 0 = Sunday.
/// Times are "HH:MM" wall-clock strings in the product timezone.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct AvailabilityRule {
    pub id: String,
    pub venue_id: String,
    pub day_of_week: i32,
    pub open_time: String,
    pub close_time: String,
    pub created_at: DateTime<Utc>,
}

impl AvailabilityRule {
    pub fn new(venue_id: String, day_of_week: i32, open_time: String, close_time: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            venue_id,
            day_of_week,
            open_time,
            close_time,
            created_at: Utc::now(),
        }
    }
}

/// Hard unavailability window. Overrides availability rules regardless of weekday.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Blackout {
    pub id: String,
    pub venue_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}

impl Blackout {
    pub fn new(venue_id: String, start_time: DateTime<Utc>, end_time: DateTime<Utc>, reason: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            venue_id,
            start_time,
            end_time,
            reason,
            created_at: Utc::now(),
        }
    }
}
