use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::domain::models::schedule::{AvailabilityRule, Blackout};
use crate::domain::services::intervals::{Interval, IntervalSet};

/// 0 = Sunday .. 6 = Saturday, matching the stored `day_of_week` convention.
pub fn weekday_index(date: NaiveDate) -> i32 {
    date.weekday().num_days_from_sunday() as i32
}

/// Resolves a wall-clock time on a date to a UTC instant. A time skipped by a
/// DST transition yields None; an ambiguous time resolves to the earlier instant.
pub fn localize(date: NaiveDate, time: NaiveTime, tz: Tz) -> Option<DateTime<Utc>> {
    match tz.from_local_datetime(&date.and_time(time)) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Some(earliest.with_timezone(&Utc)),
        LocalResult::None => None,
    }
}

fn day_start(date: NaiveDate, tz: Tz) -> DateTime<Utc> {
    let mut naive = date.and_hms_opt(0, 0, 0).unwrap();
    loop {
        match tz.from_local_datetime(&naive) {
            LocalResult::Single(dt) => return dt.with_timezone(&Utc),
            LocalResult::Ambiguous(earliest, _) => return earliest.with_timezone(&Utc),
            // Midnight can sit inside a DST gap (Cairo springs forward at
            // 00:00), walk forward to the first representable wall-clock time.
            LocalResult::None => naive += Duration::minutes(30),
        }
    }
}

/// The UTC span of a local calendar date, for range-loading bookings and blackouts.
pub fn day_bounds(date: NaiveDate, tz: Tz) -> Interval {
    Interval::new(day_start(date, tz), day_start(date + Duration::days(1), tz))
}

/// Open intervals for a date from the venue's weekly rules alone.
///
/// Rules whose weekday does not match are ignored; a rule with
/// `close_time <= open_time` or an unparseable time is skipped entirely
/// (overnight windows are not supported). Overlapping rules union.
pub fn rule_intervals_for_date(rules: &[AvailabilityRule], date: NaiveDate, tz: Tz) -> IntervalSet {
    let weekday = weekday_index(date);
    let mut open = IntervalSet::new();

    for rule in rules.iter().filter(|r| r.day_of_week == weekday) {
        let (open_t, close_t) = match (
            NaiveTime::parse_from_str(&rule.open_time, "%H:%M"),
            NaiveTime::parse_from_str(&rule.close_time, "%H:%M"),
        ) {
            (Ok(o), Ok(c)) => (o, c),
            _ => continue,
        };
        if close_t <= open_t {
            continue;
        }
        if let (Some(start), Some(end)) = (localize(date, open_t, tz), localize(date, close_t, tz)) {
            open.insert(Interval::new(start, end));
        }
    }
    open
}

/// Open intervals for a date after subtracting every blackout window.
/// Subtraction is cumulative and order-independent.
pub fn open_intervals_for_date(
    rules: &[AvailabilityRule],
    blackouts: &[Blackout],
    date: NaiveDate,
    tz: Tz,
) -> IntervalSet {
    let mut open = rule_intervals_for_date(rules, date, tz);
    for blackout in blackouts {
        open.subtract(Interval::new(blackout.start_time, blackout.end_time));
    }
    open
}
