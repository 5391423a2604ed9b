use crate::domain::models::booking::Booking;
use crate::domain::services::intervals::Interval;

/// The span a confirmed booking blocks once the venue buffer is applied to
/// both sides: `[start - buffer, end + buffer)`.
pub fn blocked_interval(booking: &Booking, buffer_minutes: i64) -> Interval {
    Interval::new(booking.start_time, booking.end_time).padded(buffer_minutes)
}

/// Returns the first confirmed booking whose buffered span overlaps the
/// proposed interval. Cancelled bookings are inert. Expanding the existing
/// booking by the buffer is equivalent to expanding the proposal itself:
/// reject iff `s < b.end + buf && b.start - buf < e`.
pub fn find_conflict<'a>(
    proposed: &Interval,
    buffer_minutes: i64,
    existing: &'a [Booking],
) -> Option<&'a Booking> {
    existing
        .iter()
        .filter(|b| b.is_confirmed())
        .find(|b| proposed.overlaps(&blocked_interval(b, buffer_minutes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::booking::{Booking, NewBookingParams, BOOKING_CANCELLED};
    use chrono::{DateTime, TimeZone, Utc};

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 2, h, m, 0).unwrap()
    }

    fn booking(sh: u32, sm: u32, eh: u32, em: u32) -> Booking {
        Booking::new(NewBookingParams {
            venue_id: "v1".into(),
            guest_id: "g1".into(),
            package_id: None,
            start: at(sh, sm),
            end: at(eh, em),
            total_price_egp: 100,
        })
    }

    #[test]
    fn zero_gap_violates_buffer() {
        let existing = vec![booking(10, 0, 11, 0)];
        let proposed = Interval::new(at(11, 0), at(12, 0));
        assert!(find_conflict(&proposed, 15, &existing).is_some());
    }

    #[test]
    fn gap_equal_to_buffer_is_allowed() {
        let existing = vec![booking(10, 0, 11, 0)];
        let proposed = Interval::new(at(11, 15), at(12, 15));
        assert!(find_conflict(&proposed, 15, &existing).is_none());
    }

    #[test]
    fn back_to_back_is_fine_without_buffer() {
        let existing = vec![booking(10, 0, 11, 0)];
        let proposed = Interval::new(at(11, 0), at(12, 0));
        assert!(find_conflict(&proposed, 0, &existing).is_none());
    }

    #[test]
    fn direct_overlap_conflicts() {
        let existing = vec![booking(10, 0, 11, 0)];
        let proposed = Interval::new(at(10, 30), at(11, 30));
        assert!(find_conflict(&proposed, 0, &existing).is_some());
    }

    #[test]
    fn cancelled_bookings_do_not_block() {
        let mut cancelled = booking(10, 0, 11, 0);
        cancelled.status = BOOKING_CANCELLED.to_string();
        let proposed = Interval::new(at(10, 0), at(11, 0));
        assert!(find_conflict(&proposed, 15, &[cancelled]).is_none());
    }
}
