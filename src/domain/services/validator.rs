use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::models::booking::Booking;
use crate::domain::models::venue::Venue;
use crate::domain::services::conflict::find_conflict;
use crate::domain::services::intervals::{Interval, IntervalSet};

/// Expected, recoverable rejection of a booking request. Distinct from
/// infrastructure failures, which travel as `AppError::Database`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingRejection {
    #[error("End time must be after start time")]
    InvalidRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    #[error("Booking of {minutes} minutes is outside the allowed duration")]
    DurationOutOfBounds {
        minutes: i64,
        min_minutes: i64,
        max_minutes: Option<i64>,
    },
    #[error("Requested time falls outside the venue's open hours")]
    OutsideAvailability {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    #[error("Requested time conflicts with booking {booking_id}")]
    SchedulingConflict { booking_id: String },
}

impl BookingRejection {
    pub fn reason(&self) -> &'static str {
        match self {
            BookingRejection::InvalidRange { .. } => "invalid_range",
            BookingRejection::DurationOutOfBounds { .. } => "duration_out_of_bounds",
            BookingRejection::OutsideAvailability { .. } => "outside_availability",
            BookingRejection::SchedulingConflict { .. } => "conflict",
        }
    }
}

/// A validated booking request, ready for pricing and persistence.
#[derive(Debug, Clone, Copy)]
pub struct BookingDraft {
    pub interval: Interval,
    pub duration_minutes: i64,
}

/// Runs the validation sequence, short-circuiting at the first failure:
/// range, duration bounds, containment in the open windows, conflicts.
/// Pure computation; `open` must already have blackouts subtracted and
/// `existing` must hold the venue's bookings around the requested window.
pub fn validate_booking(
    venue: &Venue,
    open: &IntervalSet,
    existing: &[Booking],
    requested: Interval,
) -> Result<BookingDraft, BookingRejection> {
    if requested.is_empty() {
        return Err(BookingRejection::InvalidRange {
            start: requested.start,
            end: requested.end,
        });
    }

    let minutes = requested.duration_minutes();
    let min_minutes = venue.min_booking_minutes as i64;
    let max_minutes = venue.max_booking_minutes.map(|m| m as i64);
    if minutes < min_minutes || max_minutes.is_some_and(|max| minutes > max) {
        return Err(BookingRejection::DurationOutOfBounds {
            minutes,
            min_minutes,
            max_minutes,
        });
    }

    if !open.covers(&requested) {
        return Err(BookingRejection::OutsideAvailability {
            start: requested.start,
            end: requested.end,
        });
    }

    if let Some(conflicting) = find_conflict(&requested, venue.buffer_minutes as i64, existing) {
        return Err(BookingRejection::SchedulingConflict {
            booking_id: conflicting.id.clone(),
        });
    }

    Ok(BookingDraft {
        interval: requested,
        duration_minutes: minutes,
    })
}
