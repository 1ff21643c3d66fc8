//! Lane and lane assignment models.
//!
//! A lane is a row of the timeline holding events that never overlap.
//! A lane assignment is the ordered set of lanes produced for one input
//! collection.

use serde::{Deserialize, Serialize};

use super::Event;

/// A row of non-overlapping events, ordered by start time.
///
/// For consecutive events `e1`, `e2`: `e1.end_ms <= e2.start_ms`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lane {
    events: Vec<Event>,
}

impl Lane {
    pub(crate) fn with_event(event: Event) -> Self {
        Self {
            events: vec![event],
        }
    }

    pub(crate) fn push(&mut self, event: Event) {
        debug_assert!(self.events.last().map_or(true, |last| last.precedes(&event)));
        self.events.push(event);
    }

    /// Events in this lane, in start order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the lane holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Start of the first event (ms).
    pub fn first_start_ms(&self) -> Option<i64> {
        self.events.first().map(|e| e.start_ms)
    }

    /// End of the last event (ms).
    pub fn last_end_ms(&self) -> Option<i64> {
        self.events.last().map(|e| e.end_ms)
    }

    /// Sum of event durations (ms), saturating at `i64::MAX`.
    pub fn busy_ms(&self) -> i64 {
        i64::try_from(self.busy_ms_wide()).unwrap_or(i64::MAX)
    }

    /// Exact sum of event durations (ms); never overflows.
    pub fn busy_ms_wide(&self) -> i128 {
        self.events.iter().map(Event::duration_ms_wide).sum()
    }

    /// Whether an event with the given ID is in this lane.
    pub fn contains(&self, event_id: &str) -> bool {
        self.events.iter().any(|e| e.id == event_id)
    }

    /// Consumes the lane, returning its events.
    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}

impl From<Vec<Event>> for Lane {
    fn from(events: Vec<Event>) -> Self {
        Self { events }
    }
}

/// The ordered lanes computed for a set of events.
///
/// Lanes are ordered by their first event's start time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneAssignment {
    lanes: Vec<Lane>,
}

impl LaneAssignment {
    /// Creates an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lanes in presentation order.
    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    /// Number of lanes.
    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }

    /// Total number of events across all lanes.
    pub fn event_count(&self) -> usize {
        self.lanes.iter().map(Lane::len).sum()
    }

    /// Whether there are no lanes.
    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    /// Index of the lane holding the given event ID.
    ///
    /// With duplicate IDs, the first lane containing one is returned.
    pub fn lane_index_of(&self, event_id: &str) -> Option<usize> {
        self.lanes.iter().position(|lane| lane.contains(event_id))
    }

    /// Iterates `(lane_index, event)` over all lanes in order.
    pub fn iter_events(&self) -> impl Iterator<Item = (usize, &Event)> {
        self.lanes
            .iter()
            .enumerate()
            .flat_map(|(idx, lane)| lane.events().iter().map(move |e| (idx, e)))
    }

    /// Earliest start and latest end across all events (ms).
    pub fn span(&self) -> Option<(i64, i64)> {
        let start = self.iter_events().map(|(_, e)| e.start_ms).min()?;
        let end = self.iter_events().map(|(_, e)| e.end_ms).max()?;
        Some((start, end))
    }

    /// Consumes the assignment, returning plain nested vectors.
    pub fn into_lanes(self) -> Vec<Vec<Event>> {
        self.lanes.into_iter().map(Lane::into_events).collect()
    }
}

impl From<Vec<Lane>> for LaneAssignment {
    fn from(lanes: Vec<Lane>) -> Self {
        Self { lanes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_assignment() -> LaneAssignment {
        LaneAssignment::from(vec![
            Lane::from(vec![Event::new("A", 0, 5000), Event::new("C", 6000, 7000)]),
            Lane::from(vec![Event::new("B", 1000, 2000)]),
        ])
    }

    #[test]
    fn test_lane_accessors() {
        let mut lane = Lane::with_event(Event::new("A", 0, 100));
        lane.push(Event::new("B", 100, 300));
        assert_eq!(lane.len(), 2);
        assert!(!lane.is_empty());
        assert_eq!(lane.first_start_ms(), Some(0));
        assert_eq!(lane.last_end_ms(), Some(300));
        assert_eq!(lane.busy_ms(), 300);
        assert!(lane.contains("B"));
        assert!(!lane.contains("Z"));
    }

    #[test]
    fn test_busy_time_saturates() {
        let lane = Lane::from(vec![Event::new("A", i64::MIN, 0), Event::new("B", 0, i64::MAX)]);
        assert_eq!(lane.busy_ms(), i64::MAX);
        assert_eq!(lane.busy_ms_wide(), i128::from(u64::MAX));
    }

    #[test]
    fn test_empty_lane() {
        let lane = Lane::default();
        assert!(lane.is_empty());
        assert_eq!(lane.first_start_ms(), None);
        assert_eq!(lane.last_end_ms(), None);
    }

    #[test]
    fn test_assignment_counts() {
        let a = sample_assignment();
        assert_eq!(a.lane_count(), 2);
        assert_eq!(a.event_count(), 3);
        assert!(!a.is_empty());
    }

    #[test]
    fn test_lane_index_of() {
        let a = sample_assignment();
        assert_eq!(a.lane_index_of("A"), Some(0));
        assert_eq!(a.lane_index_of("C"), Some(0));
        assert_eq!(a.lane_index_of("B"), Some(1));
        assert_eq!(a.lane_index_of("Z"), None);
    }

    #[test]
    fn test_iter_events() {
        let a = sample_assignment();
        let ids: Vec<(usize, &str)> = a.iter_events().map(|(i, e)| (i, e.id.as_str())).collect();
        assert_eq!(ids, vec![(0, "A"), (0, "C"), (1, "B")]);
    }

    #[test]
    fn test_span() {
        assert_eq!(sample_assignment().span(), Some((0, 7000)));
        assert_eq!(LaneAssignment::new().span(), None);
    }

    #[test]
    fn test_into_lanes() {
        let lanes = sample_assignment().into_lanes();
        assert_eq!(lanes.len(), 2);
        assert_eq!(lanes[0][1].id, "C");
        assert_eq!(lanes[1][0].id, "B");
    }
}
