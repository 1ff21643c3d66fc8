//! Timeline geometry.
//!
//! Maps a `LaneAssignment` onto horizontal pixel positions: each event
//! becomes a box offset from the earliest start and sized by its duration
//! in whole days, and a date axis is laid out at a fixed day interval.
//!
//! This is a pure transform for renderers. Scrolling, zoom handling, and
//! colors stay with the caller; zoom is expressed only as `width_per_day`.
//!
//! # Usage
//!
//! ```
//! use u_timeline::layout::{compute_layout, LayoutConfig};
//! use u_timeline::models::LaneAssignment;
//!
//! let config = LayoutConfig::new().with_width_per_day(24.0);
//! assert!(compute_layout(&LaneAssignment::new(), &config).is_none());
//! ```

mod config;
mod geometry;

pub use config::{LayoutConfig, MAX_WIDTH_PER_DAY, MIN_WIDTH_PER_DAY};
pub use geometry::{
    compute_layout, format_date, AxisTick, EventBox, TimelineLayout, MAX_AXIS_TICKS,
};
