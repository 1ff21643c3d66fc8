//! Lane assignment engine and lane metrics.
//!
//! Partitions timeline events into rows so that overlapping events never
//! share a row, using as few rows as the input allows.
//!
//! # Algorithm
//!
//! `assign_lanes` sorts events by start and reuses the first lane whose
//! last event has ended, tracked with a min-heap of lane end times. It is
//! optimal: the lane count equals `max_concurrency`.
//!
//! # Metrics
//!
//! `LaneKpi` reports lane count, span, and per-lane occupancy.
//!
//! # References
//!
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1
//! - Golumbic (2004), "Algorithmic Graph Theory and Perfect Graphs", Ch. 8

mod assign;
mod metrics;

pub use assign::assign_lanes;
pub use metrics::{max_concurrency, LaneKpi};
