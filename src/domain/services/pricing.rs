use crate::domain::models::venue::{Venue, VenuePackage};

/// Hourly rate applied to a booking: the selected package's rate when a
/// package is chosen, otherwise the venue base rate.
pub fn hourly_rate_egp(venue: &Venue, package: Option<&VenuePackage>) -> i64 {
    package.map_or(venue.base_hourly_price_egp, |p| p.hourly_price_egp)
}

/// Total price in whole EGP: `ceil(minutes / 60 * rate)`. Partial hours
/// always round up, never undercharging. Integer arithmetic throughout.
pub fn total_price_egp(duration_minutes: i64, hourly_rate_egp: i64) -> i64 {
    (duration_minutes * hourly_rate_egp + 59) / 60
}
