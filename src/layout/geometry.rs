//! Lane assignment to timeline geometry.
//!
//! # Mapping
//! - Origin: earliest start across all events.
//! - `x = whole_days(start - origin) * width_per_day`
//! - `width = max(whole_days(end - start), min_duration_days) * width_per_day`
//! - Axis: one tick every `label_step_days` from the origin, covering
//!   `whole_days(latest_end - origin)`, widened as needed to stay within
//!   `MAX_AXIS_TICKS`.
//!
//! Whole days truncate, so sub-day offsets collapse onto the day they
//! start in. Dates are rendered in UTC.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::LayoutConfig;
use crate::models::{Event, LaneAssignment, MS_PER_DAY};

/// Upper bound on date-axis ticks. Longer spans widen the label step.
pub const MAX_AXIS_TICKS: i64 = 10_000;

/// Position and size of one event on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventBox {
    /// Event ID.
    pub event_id: String,
    /// Lane (row) index.
    pub lane_index: usize,
    /// Whole days from the origin to the event start.
    pub offset_days: i64,
    /// Rendered duration in days, after the width floor.
    pub duration_days: i64,
    /// Left edge (px).
    pub x: f32,
    /// Width (px).
    pub width: f32,
    /// `"<start> - <end>"` in the configured date format.
    pub date_label: Option<String>,
}

impl EventBox {
    /// Right edge (px).
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// A date-axis label position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    /// Tick time (ms).
    pub time_ms: i64,
    /// Left edge (px).
    pub x: f32,
    /// Formatted date; `None` if the time or pattern cannot be rendered.
    pub label: Option<String>,
}

/// Geometry for a whole timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineLayout {
    /// Earliest start (ms). All offsets are relative to this.
    pub origin_ms: i64,
    /// Latest end (ms).
    pub end_ms: i64,
    /// Whole days between origin and latest end.
    pub total_days: i64,
    /// Number of lanes.
    pub lane_count: usize,
    /// One box per event, in lane order then start order.
    pub boxes: Vec<EventBox>,
    /// Date-axis ticks, left to right.
    pub ticks: Vec<AxisTick>,
    /// Width of one tick slot (px).
    pub tick_width: f32,
}

impl TimelineLayout {
    /// Boxes belonging to one lane.
    pub fn boxes_in_lane(&self, lane_index: usize) -> impl Iterator<Item = &EventBox> {
        self.boxes.iter().filter(move |b| b.lane_index == lane_index)
    }

    /// Box for the given event ID.
    pub fn box_for(&self, event_id: &str) -> Option<&EventBox> {
        self.boxes.iter().find(|b| b.event_id == event_id)
    }

    /// Horizontal extent needed to show every box and tick (px).
    pub fn content_width(&self) -> f32 {
        let boxes = self.boxes.iter().map(EventBox::right);
        let ticks = self.ticks.iter().map(|t| t.x + self.tick_width);
        boxes.chain(ticks).fold(0.0, f32::max)
    }
}

/// Computes timeline geometry for a lane assignment.
///
/// Returns `None` for an empty assignment (there is no origin to measure
/// from) and when the span from earliest start to latest end does not fit
/// in an `i64` millisecond count.
///
/// # Example
///
/// ```
/// use u_timeline::lanes::assign_lanes;
/// use u_timeline::layout::{compute_layout, LayoutConfig};
/// use u_timeline::models::Event;
///
/// let events = vec![Event::from_days("A", 0, 3), Event::from_days("B", 2, 4)];
/// let assignment = assign_lanes(&events).unwrap();
/// let layout = compute_layout(&assignment, &LayoutConfig::default()).unwrap();
///
/// let b = layout.box_for("B").unwrap();
/// assert_eq!(b.lane_index, 1);
/// assert_eq!(b.x, 20.0);
/// assert_eq!(b.width, 20.0);
/// ```
pub fn compute_layout(assignment: &LaneAssignment, config: &LayoutConfig) -> Option<TimelineLayout> {
    let (origin_ms, end_ms) = assignment.span()?;

    let width_per_day = config.effective_width_per_day();
    let min_days = config.effective_min_duration_days();
    // Every offset below is bounded by the span
    let span_ms = end_ms.checked_sub(origin_ms)?;
    let total_days = span_ms / MS_PER_DAY;
    let step_days = config
        .effective_label_step_days()
        .max(total_days / (MAX_AXIS_TICKS - 1) + 1);

    let boxes = assignment
        .iter_events()
        .map(|(lane_index, event)| {
            let offset_days = (event.start_ms - origin_ms) / MS_PER_DAY;
            let duration_days = event.duration_days().max(min_days);
            EventBox {
                event_id: event.id.clone(),
                lane_index,
                offset_days,
                duration_days,
                x: offset_days as f32 * width_per_day,
                width: duration_days as f32 * width_per_day,
                date_label: date_range_label(event, &config.label_format),
            }
        })
        .collect();

    let tick_count = total_days / step_days + 1;
    let ticks = (0..tick_count)
        .map(|i| {
            let time_ms = origin_ms + i * step_days * MS_PER_DAY;
            AxisTick {
                time_ms,
                x: (i * step_days) as f32 * width_per_day,
                label: format_date(time_ms, &config.label_format),
            }
        })
        .collect();

    Some(TimelineLayout {
        origin_ms,
        end_ms,
        total_days,
        lane_count: assignment.lane_count(),
        boxes,
        ticks,
        tick_width: step_days as f32 * width_per_day,
    })
}

/// Formats a UTC timestamp with a strftime pattern.
///
/// Returns `None` if the timestamp is out of range or the pattern is invalid.
pub fn format_date(time_ms: i64, pattern: &str) -> Option<String> {
    let date: DateTime<Utc> = DateTime::from_timestamp_millis(time_ms)?;
    let mut out = String::new();
    write!(out, "{}", date.format(pattern)).ok()?;
    Some(out)
}

fn date_range_label(event: &Event, pattern: &str) -> Option<String> {
    let start = format_date(event.start_ms, pattern)?;
    let end = format_date(event.end_ms, pattern)?;
    Some(format!("{start} - {end}"))
}
