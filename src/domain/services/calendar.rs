use crate::domain::models::{booking::Booking, venue::Venue};
use icalendar::{Calendar, Component, Event as IcalEvent, EventLike};

/// Generates an iCalendar (.ics) string for a confirmed booking
pub fn generate_ics(venue: &Venue, booking: &Booking) -> String {
    let mut calendar = Calendar::new();

    let ical_event = IcalEvent::new()
        .summary(&venue.name)
        .description(&venue.description)
        .location(&venue.address)
        .starts(booking.start_time)
        .ends(booking.end_time)
        .uid(&booking.id)
        .done();

    calendar.push(ical_event);
    calendar.to_string()
}
