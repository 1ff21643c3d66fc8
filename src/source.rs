//! Event sources.
//!
//! An event source is the upstream collaborator that supplies the events
//! to place on a timeline. Sources hand out owned snapshots in any order;
//! nothing downstream relies on them being sorted.

use serde::{Deserialize, Serialize};

use crate::models::Event;

/// Supplies timeline events.
pub trait EventSource {
    /// Returns a snapshot of the current events, in any order.
    fn timeline_events(&self) -> Vec<Event>;
}

impl EventSource for [Event] {
    fn timeline_events(&self) -> Vec<Event> {
        self.to_vec()
    }
}

impl EventSource for Vec<Event> {
    fn timeline_events(&self) -> Vec<Event> {
        self.clone()
    }
}

impl<S: EventSource + ?Sized> EventSource for &S {
    fn timeline_events(&self) -> Vec<Event> {
        (**self).timeline_events()
    }
}

/// A fixed, in-memory event collection.
///
/// # Example
/// ```
/// use u_timeline::source::{EventSource, StaticEventSource};
///
/// let source = StaticEventSource::new()
///     .with_event("E1", "Kickoff", 0, 1_000)
///     .with_event("E2", "Review", 500, 2_000);
/// assert_eq!(source.timeline_events().len(), 2);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticEventSource {
    events: Vec<Event>,
}

impl StaticEventSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an event.
    pub fn with_event(
        mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        start_ms: i64,
        end_ms: i64,
    ) -> Self {
        self.events
            .push(Event::new(id, start_ms, end_ms).with_name(name));
        self
    }

    /// Adds a pre-built event.
    pub fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Number of events held.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the source holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl From<Vec<Event>> for StaticEventSource {
    fn from(events: Vec<Event>) -> Self {
        Self { events }
    }
}

impl EventSource for StaticEventSource {
    fn timeline_events(&self) -> Vec<Event> {
        self.events.clone()
    }
}
