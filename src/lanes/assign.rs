//! Minimum-lane interval partitioning.
//!
//! # Algorithm
//!
//! 1. Reject the input if any event ends before it starts.
//! 2. Sort events by `(start, end, id, name)`.
//! 3. Track busy lanes in a min-heap keyed by `(end, lane index)`.
//! 4. For each event, release every busy lane whose end is `<=` the
//!    event's start into a free set, then append the event to the
//!    lowest-index free lane, or open a new lane if none is free.
//! 5. Order lanes by earliest start.
//!
//! Opening a lane only happens when every existing lane's last event
//! covers the current start, so the lane count equals the maximum number
//! of events live at one instant, which is a lower bound for any valid
//! partition.
//!
//! # Complexity
//! O(n log n): the sort, plus at most one heap push/pop and one free-set
//! push/pop per event.
//!
//! # Reference
//! Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1 (Interval Partitioning)

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::models::{Event, Lane, LaneAssignment};
use crate::validation::{check_intervals, InvalidIntervalError};

/// Partitions events into the minimum number of non-overlapping lanes.
///
/// Events may arrive in any order. Each lane in the result is sorted by
/// start time, and lanes are ordered by their first event's start. Events
/// that merely touch (`a.end_ms == b.start_ms`) may share a lane.
///
/// The function is pure: it never logs, never mutates `events`, and the
/// result owns clones of the input events.
///
/// # Errors
/// Returns [`InvalidIntervalError`] for the first event (in input order)
/// whose `end_ms` precedes its `start_ms`. No lanes are built in that case.
///
/// # Example
///
/// ```
/// use u_timeline::lanes::assign_lanes;
/// use u_timeline::models::Event;
///
/// let events = vec![
///     Event::new("A", 0, 5),
///     Event::new("B", 1, 2),
///     Event::new("C", 6, 7),
/// ];
/// let assignment = assign_lanes(&events).unwrap();
/// assert_eq!(assignment.lane_count(), 2);
/// assert_eq!(assignment.lane_index_of("A"), assignment.lane_index_of("C"));
/// ```
pub fn assign_lanes(events: &[Event]) -> Result<LaneAssignment, InvalidIntervalError> {
    check_intervals(events)?;

    if events.is_empty() {
        return Ok(LaneAssignment::new());
    }

    let mut sorted: Vec<&Event> = events.iter().collect();
    sorted.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

    let mut lanes: Vec<Lane> = Vec::new();
    // (end_ms, lane index) of every lane whose last event may still be live
    let mut busy: BinaryHeap<Reverse<(i64, usize)>> = BinaryHeap::new();
    // Lane indices whose last event ended at or before the current start
    let mut free: BinaryHeap<Reverse<usize>> = BinaryHeap::new();

    for event in sorted {
        while let Some(&Reverse((end_ms, idx))) = busy.peek() {
            if end_ms > event.start_ms {
                break;
            }
            busy.pop();
            free.push(Reverse(idx));
        }

        let idx = match free.pop() {
            Some(Reverse(idx)) => {
                lanes[idx].push(event.clone());
                idx
            }
            None => {
                lanes.push(Lane::with_event(event.clone()));
                lanes.len() - 1
            }
        };
        busy.push(Reverse((event.end_ms, idx)));
    }

    // Stable: lanes with equal first starts keep their opening order
    lanes.sort_by_key(|lane| lane.first_start_ms());

    Ok(LaneAssignment::from(lanes))
}
