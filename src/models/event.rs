//! Timeline event model.
//!
//! An event is the unit placed on the timeline: a labelled interval
//! between two millisecond timestamps.
//!
//! # Time Model
//! All times are milliseconds since the Unix epoch. The lane engine only
//! compares them; the layout converts them to whole days and UTC dates.
//!
//! # Interval Semantics
//! An event covers `[start_ms, end_ms)`. Two events whose endpoints touch
//! (`a.end_ms == b.start_ms`) do not overlap and may share a lane.
//! Zero-duration events (`start_ms == end_ms`) are legal.

use serde::{Deserialize, Serialize};

/// Milliseconds in one day.
pub const MS_PER_DAY: i64 = 86_400_000;

/// A timeline event.
///
/// Events are immutable inputs to lane assignment. The engine clones them
/// into its output and never modifies the caller's collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    /// Unique event identifier.
    pub id: String,
    /// Display label. Not used by lane assignment.
    pub name: String,
    /// Start time (ms, inclusive).
    pub start_ms: i64,
    /// End time (ms, exclusive).
    pub end_ms: i64,
}

impl Event {
    /// Creates a new event with an empty name.
    pub fn new(id: impl Into<String>, start_ms: i64, end_ms: i64) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            start_ms,
            end_ms,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Creates an event spanning whole days from `start_day` (days since epoch).
    ///
    /// Day counts beyond the `i64` millisecond range saturate.
    pub fn from_days(id: impl Into<String>, start_day: i64, end_day: i64) -> Self {
        Self::new(
            id,
            start_day.saturating_mul(MS_PER_DAY),
            end_day.saturating_mul(MS_PER_DAY),
        )
    }

    /// Duration (end - start) in ms, saturating at `i64::MAX`.
    #[inline]
    pub fn duration_ms(&self) -> i64 {
        self.end_ms.saturating_sub(self.start_ms)
    }

    /// Exact duration in ms; never overflows.
    #[inline]
    pub fn duration_ms_wide(&self) -> i128 {
        i128::from(self.end_ms) - i128::from(self.start_ms)
    }

    /// Whole days covered, truncating partial days.
    #[inline]
    pub fn duration_days(&self) -> i64 {
        // |i64 range| / MS_PER_DAY fits in i64
        (self.duration_ms_wide() / i128::from(MS_PER_DAY)) as i64
    }

    /// Whether start <= end.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.start_ms <= self.end_ms
    }

    /// Whether this event has zero duration.
    #[inline]
    pub fn is_instant(&self) -> bool {
        self.start_ms == self.end_ms
    }

    /// Whether `self` may directly precede `next` in the same lane.
    ///
    /// Touching endpoints are allowed.
    #[inline]
    pub fn precedes(&self, next: &Self) -> bool {
        self.end_ms <= next.start_ms
    }

    /// Whether the two events cannot share a lane in either order.
    pub fn conflicts_with(&self, other: &Self) -> bool {
        !self.precedes(other) && !other.precedes(self)
    }

    /// Deterministic ordering key used by lane assignment.
    pub(crate) fn sort_key(&self) -> (i64, i64, &str, &str) {
        (self.start_ms, self.end_ms, &self.id, &self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_builder() {
        let e = Event::new("E1", 100, 500).with_name("Kickoff");
        assert_eq!(e.id, "E1");
        assert_eq!(e.name, "Kickoff");
        assert_eq!(e.duration_ms(), 400);
        assert!(e.is_well_formed());
        assert!(!e.is_instant());
    }

    #[test]
    fn test_from_days() {
        let e = Event::from_days("E1", 2, 5);
        assert_eq!(e.start_ms, 2 * MS_PER_DAY);
        assert_eq!(e.duration_days(), 3);
    }

    #[test]
    fn test_duration_days_truncates() {
        let e = Event::new("E1", 0, MS_PER_DAY + MS_PER_DAY / 2);
        assert_eq!(e.duration_days(), 1);
    }

    #[test]
    fn test_extreme_timestamps_do_not_overflow() {
        let e = Event::new("W", i64::MIN, i64::MAX);
        assert_eq!(e.duration_ms(), i64::MAX);
        assert_eq!(e.duration_ms_wide(), i128::from(u64::MAX));
        assert_eq!(e.duration_days(), (u64::MAX / MS_PER_DAY as u64) as i64);

        let far = Event::from_days("F", i64::MIN, i64::MAX);
        assert_eq!(far.start_ms, i64::MIN);
        assert_eq!(far.end_ms, i64::MAX);
    }

    #[test]
    fn test_malformed() {
        let e = Event::new("bad", 10, 5);
        assert!(!e.is_well_formed());
    }

    #[test]
    fn test_touching_events_do_not_conflict() {
        let a = Event::new("A", 0, 100);
        let b = Event::new("B", 100, 200);
        assert!(a.precedes(&b));
        assert!(!a.conflicts_with(&b));
        assert!(!b.conflicts_with(&a));
    }

    #[test]
    fn test_overlapping_events_conflict() {
        let a = Event::new("A", 0, 100);
        let b = Event::new("B", 50, 150);
        assert!(a.conflicts_with(&b));
        assert!(b.conflicts_with(&a));
    }

    #[test]
    fn test_instant_inside_interval_conflicts() {
        let a = Event::new("A", 0, 100);
        let p = Event::new("P", 50, 50);
        assert!(p.is_instant());
        assert!(a.conflicts_with(&p));

        // At the boundary the instant can sit before or after.
        let q = Event::new("Q", 100, 100);
        assert!(!a.conflicts_with(&q));
    }

    #[test]
    fn test_serde_roundtrip() {
        let e = Event::new("E1", 0, 1000).with_name("Launch");
        let json = serde_json::to_string(&e).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }
}
