use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Half-open time interval `[start, end)` in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Interval {
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Open-interval overlap: touching endpoints do NOT overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn contains(&self, other: &Interval) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    pub fn intersect(&self, other: &Interval) -> Option<Interval> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start < end).then_some(Interval::new(start, end))
    }

    /// Expands both endpoints outward by `minutes`.
    pub fn padded(&self, minutes: i64) -> Interval {
        Interval::new(
            self.start - Duration::minutes(minutes),
            self.end + Duration::minutes(minutes),
        )
    }
}

/// Ordered, non-overlapping interval list. Inserts merge overlapping or
/// touching members, so containment in the union reduces to containment in a
/// single member. Mutations work by index on the flat vec.
#[derive(Debug, Clone, Default)]
pub struct IntervalSet {
    intervals: Vec<Interval>,
}

impl IntervalSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn as_slice(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn insert(&mut self, interval: Interval) {
        if interval.is_empty() {
            return;
        }

        // Find the insertion point, then absorb every member that overlaps or
        // touches the new interval into it.
        let mut idx = self
            .intervals
            .partition_point(|iv| iv.end < interval.start);
        let mut merged = interval;

        while idx < self.intervals.len() && self.intervals[idx].start <= merged.end {
            let existing = self.intervals.remove(idx);
            merged.start = merged.start.min(existing.start);
            merged.end = merged.end.max(existing.end);
        }
        self.intervals.insert(idx, merged);
    }

    /// Removes `cut` from every member, splitting around it where needed.
    /// Each affected member yields zero, one, or two fragments.
    pub fn subtract(&mut self, cut: Interval) {
        if cut.is_empty() {
            return;
        }

        let mut i = 0;
        while i < self.intervals.len() {
            let iv = self.intervals[i];
            if !iv.overlaps(&cut) {
                i += 1;
                continue;
            }
            let left = (iv.start < cut.start).then(|| Interval::new(iv.start, cut.start));
            let right = (cut.end < iv.end).then(|| Interval::new(cut.end, iv.end));
            match (left, right) {
                (Some(l), Some(r)) => {
                    self.intervals[i] = l;
                    self.intervals.insert(i + 1, r);
                    i += 2;
                }
                (Some(frag), None) | (None, Some(frag)) => {
                    self.intervals[i] = frag;
                    i += 1;
                }
                (None, None) => {
                    self.intervals.remove(i);
                }
            }
        }
    }

    /// True when `interval` lies entirely inside the union of members.
    pub fn covers(&self, interval: &Interval) -> bool {
        if interval.is_empty() {
            return false;
        }
        let idx = self
            .intervals
            .partition_point(|iv| iv.start <= interval.start);
        idx > 0 && self.intervals[idx - 1].contains(interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 2, h, m, 0).unwrap()
    }

    fn iv(sh: u32, sm: u32, eh: u32, em: u32) -> Interval {
        Interval::new(at(sh, sm), at(eh, em))
    }

    #[test]
    fn touching_endpoints_do_not_overlap() {
        assert!(!iv(9, 0, 10, 0).overlaps(&iv(10, 0, 11, 0)));
        assert!(iv(9, 0, 10, 1).overlaps(&iv(10, 0, 11, 0)));
    }

    #[test]
    fn intersect_clips_to_common_range() {
        assert_eq!(iv(9, 0, 12, 0).intersect(&iv(10, 0, 14, 0)), Some(iv(10, 0, 12, 0)));
        assert_eq!(iv(9, 0, 10, 0).intersect(&iv(10, 0, 11, 0)), None);
    }

    #[test]
    fn insert_merges_overlapping_and_touching() {
        let mut set = IntervalSet::new();
        set.insert(iv(9, 0, 11, 0));
        set.insert(iv(13, 0, 15, 0));
        set.insert(iv(10, 30, 13, 0));
        assert_eq!(set.as_slice(), &[iv(9, 0, 15, 0)]);
    }

    #[test]
    fn insert_keeps_disjoint_members_sorted() {
        let mut set = IntervalSet::new();
        set.insert(iv(14, 0, 16, 0));
        set.insert(iv(9, 0, 11, 0));
        assert_eq!(set.as_slice(), &[iv(9, 0, 11, 0), iv(14, 0, 16, 0)]);
    }

    #[test]
    fn subtract_splits_around_inner_cut() {
        let mut set = IntervalSet::new();
        set.insert(iv(9, 0, 17, 0));
        set.subtract(iv(12, 0, 14, 0));
        assert_eq!(set.as_slice(), &[iv(9, 0, 12, 0), iv(14, 0, 17, 0)]);
    }

    #[test]
    fn subtract_trims_edges_and_removes_swallowed_members() {
        let mut set = IntervalSet::new();
        set.insert(iv(9, 0, 11, 0));
        set.insert(iv(12, 0, 13, 0));
        set.insert(iv(14, 0, 17, 0));
        set.subtract(iv(10, 0, 15, 0));
        assert_eq!(set.as_slice(), &[iv(9, 0, 10, 0), iv(15, 0, 17, 0)]);
    }

    #[test]
    fn subtract_outside_is_noop() {
        let mut set = IntervalSet::new();
        set.insert(iv(9, 0, 11, 0));
        set.subtract(iv(11, 0, 12, 0));
        assert_eq!(set.as_slice(), &[iv(9, 0, 11, 0)]);
    }

    #[test]
    fn covers_requires_full_containment() {
        let mut set = IntervalSet::new();
        set.insert(iv(9, 0, 12, 0));
        set.insert(iv(13, 0, 17, 0));
        assert!(set.covers(&iv(9, 0, 12, 0)));
        assert!(set.covers(&iv(10, 0, 11, 30)));
        assert!(!set.covers(&iv(11, 0, 14, 0)));
        assert!(!set.covers(&iv(12, 0, 13, 0)));
    }

    #[test]
    fn covers_merged_adjacent_rules_as_one_window() {
        let mut set = IntervalSet::new();
        set.insert(iv(9, 0, 12, 0));
        set.insert(iv(12, 0, 15, 0));
        assert!(set.covers(&iv(11, 0, 13, 0)));
    }
}
