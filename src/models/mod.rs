//! Timeline domain models.
//!
//! Provides the data types consumed and produced by lane assignment.
//!
//! | Type | Role |
//! |------|------|
//! | Event | Input interval with an id and a label |
//! | Lane | Row of non-overlapping events |
//! | LaneAssignment | Ordered rows for one input collection |

mod event;
mod lane;

pub use event::{Event, MS_PER_DAY};
pub use lane::{Lane, LaneAssignment};
