//! Lane assignment quality metrics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Lane count | Rows in the assignment |
//! | Max concurrency | Most events live at one instant (lower bound on lanes) |
//! | Span | Latest end - earliest start |
//! | Avg events/lane | Events / lanes |
//! | Occupancy | Busy time of a lane / span |
//!
//! # Reference
//! Golumbic (2004), "Algorithmic Graph Theory and Perfect Graphs", Ch. 8 (Interval Graphs)

use crate::models::{Event, LaneAssignment};

/// Maximum number of events that are live at one instant.
///
/// Uses the same overlap rule as lane assignment: an event ending at `t`
/// does not conflict with one starting at `t`, and a zero-duration event
/// at `t` only conflicts with events strictly covering `t`. This is the
/// minimum number of lanes any valid assignment needs.
///
/// Malformed events (`end_ms < start_ms`) are ignored.
///
/// # Algorithm
/// Sweep line over endpoints. At equal instants, ends are processed before
/// zero-duration events, which are processed before starts.
pub fn max_concurrency(events: &[Event]) -> usize {
    const END: u8 = 0;
    const INSTANT: u8 = 1;
    const START: u8 = 2;

    let mut points: Vec<(i64, u8)> = Vec::with_capacity(events.len() * 2);
    for e in events.iter().filter(|e| e.is_well_formed()) {
        if e.is_instant() {
            points.push((e.start_ms, INSTANT));
        } else {
            points.push((e.start_ms, START));
            points.push((e.end_ms, END));
        }
    }
    points.sort_unstable();

    let mut live: usize = 0;
    let mut best: usize = 0;
    for (_, kind) in points {
        match kind {
            END => live -= 1,
            INSTANT => best = best.max(live + 1),
            _ => {
                live += 1;
                best = best.max(live);
            }
        }
    }
    best
}

/// Lane assignment statistics.
///
/// All time values are in milliseconds.
#[derive(Debug, Clone)]
pub struct LaneKpi {
    /// Number of lanes.
    pub lane_count: usize,
    /// Number of events across all lanes.
    pub event_count: usize,
    /// Latest end - earliest start (ms), saturating at `i64::MAX`.
    pub span_ms: i64,
    /// Mean events per lane.
    pub avg_events_per_lane: f64,
    /// Per-lane busy time / span, in lane order.
    pub occupancy_by_lane: Vec<f64>,
    /// Mean occupancy across lanes (0.0..1.0).
    pub avg_occupancy: f64,
}

impl LaneKpi {
    /// Computes statistics for an assignment.
    pub fn calculate(assignment: &LaneAssignment) -> Self {
        let lane_count = assignment.lane_count();
        let event_count = assignment.event_count();
        let span_wide = assignment
            .span()
            .map_or(0, |(start, end)| i128::from(end) - i128::from(start));
        let span_ms = i64::try_from(span_wide).unwrap_or(i64::MAX);

        let occupancy_by_lane: Vec<f64> = if span_wide > 0 {
            assignment
                .lanes()
                .iter()
                .map(|lane| lane.busy_ms_wide() as f64 / span_wide as f64)
                .collect()
        } else {
            vec![0.0; lane_count]
        };

        let avg_occupancy = if occupancy_by_lane.is_empty() {
            0.0
        } else {
            occupancy_by_lane.iter().sum::<f64>() / occupancy_by_lane.len() as f64
        };

        let avg_events_per_lane = if lane_count == 0 {
            0.0
        } else {
            event_count as f64 / lane_count as f64
        };

        Self {
            lane_count,
            event_count,
            span_ms,
            avg_events_per_lane,
            occupancy_by_lane,
            avg_occupancy,
        }
    }

    /// Whether the assignment uses no more lanes than `events` require.
    pub fn is_minimal(&self, events: &[Event]) -> bool {
        self.lane_count == max_concurrency(events)
    }
}
