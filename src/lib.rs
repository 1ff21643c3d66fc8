//! Timeline lane assignment.
//!
//! Arranges time-interval events on a horizontal timeline, grouped into
//! rows ("lanes") so that overlapping events never share a row, using the
//! fewest rows the input allows.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Event`, `Lane`, `LaneAssignment`
//! - **`lanes`**: The lane assignment engine (`assign_lanes`) and metrics
//! - **`validation`**: Interval checks and lane assignment verification
//! - **`layout`**: Dates to pixel offsets, widths, and axis ticks
//! - **`source`**: The `EventSource` trait for upstream event providers
//! - **`timeline`**: Source → lanes → layout, with tracing
//!
//! # Architecture
//!
//! `assign_lanes` is a pure function with no logging and no shared state,
//! safe to call concurrently on independent inputs. Everything with a
//! side effect (tracing) sits in `timeline`, outside the engine.
//!
//! # References
//!
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1
//! - Golumbic (2004), "Algorithmic Graph Theory and Perfect Graphs"

pub mod lanes;
pub mod layout;
pub mod models;
pub mod source;
pub mod timeline;
pub mod validation;
