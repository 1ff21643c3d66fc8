//! Timeline assembly.
//!
//! Pulls events from an [`EventSource`], assigns lanes, and computes
//! layout geometry. Observability for lane assignment lives here: the
//! engine itself is silent, and this wrapper reports each run through
//! `tracing`.

use tracing::{debug, debug_span, warn};

use crate::lanes::assign_lanes;
use crate::layout::{compute_layout, LayoutConfig, TimelineLayout};
use crate::models::{Event, LaneAssignment};
use crate::source::EventSource;
use crate::validation::InvalidIntervalError;

/// Lanes and geometry for one snapshot of an event source.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineSnapshot {
    /// Computed lanes.
    pub assignment: LaneAssignment,
    /// Geometry; `None` when there are no events.
    pub layout: Option<TimelineLayout>,
}

impl TimelineSnapshot {
    /// Whether there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.assignment.is_empty()
    }
}

/// Builds timeline snapshots from an event source.
///
/// # Example
///
/// ```
/// use u_timeline::source::StaticEventSource;
/// use u_timeline::timeline::Timeline;
///
/// let source = StaticEventSource::new()
///     .with_event("E1", "Kickoff", 0, 86_400_000)
///     .with_event("E2", "Review", 0, 2 * 86_400_000);
/// let snapshot = Timeline::new(source).snapshot().unwrap();
/// assert_eq!(snapshot.assignment.lane_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Timeline<S> {
    source: S,
    config: LayoutConfig,
}

impl<S: EventSource> Timeline<S> {
    /// Creates a timeline with the default layout.
    pub fn new(source: S) -> Self {
        Self {
            source,
            config: LayoutConfig::default(),
        }
    }

    /// Sets the layout configuration.
    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    /// Layout configuration in use.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Replaces the layout configuration (e.g. after a zoom change).
    pub fn set_config(&mut self, config: LayoutConfig) {
        self.config = config;
    }

    /// The underlying event source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Assigns lanes for the source's current events.
    pub fn lanes(&self) -> Result<LaneAssignment, InvalidIntervalError> {
        assign_lanes_traced(&self.source.timeline_events())
    }

    /// Assigns lanes and computes geometry for the source's current events.
    pub fn snapshot(&self) -> Result<TimelineSnapshot, InvalidIntervalError> {
        let assignment = self.lanes()?;
        let layout = compute_layout(&assignment, &self.config);
        Ok(TimelineSnapshot { assignment, layout })
    }
}

/// Runs [`assign_lanes`] inside a `tracing` span and reports the outcome.
///
/// Output is identical to calling `assign_lanes` directly.
pub fn assign_lanes_traced(events: &[Event]) -> Result<LaneAssignment, InvalidIntervalError> {
    let span = debug_span!("assign_lanes", events = events.len());
    let _enter = span.enter();

    match assign_lanes(events) {
        Ok(assignment) => {
            debug!(
                lanes = assignment.lane_count(),
                events = assignment.event_count(),
                "lanes assigned"
            );
            Ok(assignment)
        }
        Err(err) => {
            warn!(
                event_id = %err.event_id,
                start_ms = err.start_ms,
                end_ms = err.end_ms,
                "rejected event with invalid interval"
            );
            Err(err)
        }
    }
}
