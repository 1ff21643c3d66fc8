//! Input and output validation for lane assignment.
//!
//! Input checks run before any assignment work:
//! - Invalid intervals (`end_ms < start_ms`)
//!
//! Output checks verify a `LaneAssignment` against its input:
//! - Every input event appears exactly once (multiset comparison)
//! - Consecutive events in a lane do not overlap
//! - Lanes are ordered by earliest start
//! - No lane is empty

use std::collections::HashMap;

use thiserror::Error;

use crate::models::{Event, LaneAssignment};

/// An event whose end precedes its start.
///
/// Returned by lane assignment before any lane is built. The values are
/// reported as given; they are never swapped or clamped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("event '{event_id}' has an invalid interval: end {end_ms} precedes start {start_ms}")]
pub struct InvalidIntervalError {
    /// ID of the offending event.
    pub event_id: String,
    /// Start time as supplied (ms).
    pub start_ms: i64,
    /// End time as supplied (ms).
    pub end_ms: i64,
}

impl InvalidIntervalError {
    fn for_event(event: &Event) -> Self {
        Self {
            event_id: event.id.clone(),
            start_ms: event.start_ms,
            end_ms: event.end_ms,
        }
    }
}

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// An event ends before it starts.
    InvalidInterval,
    /// An input event is absent from the output.
    MissingEvent,
    /// An event appears in the output more often than in the input.
    DuplicatedEvent,
    /// Two consecutive events in a lane overlap.
    LaneOverlap,
    /// A lane's events are not sorted by start time.
    LaneOutOfOrder,
    /// Lanes are not sorted by earliest start.
    LaneOrder,
    /// A lane holds no events.
    EmptyLane,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Checks that every event has `start_ms <= end_ms`.
///
/// # Returns
/// The error for the first malformed event in input order.
pub fn check_intervals(events: &[Event]) -> Result<(), InvalidIntervalError> {
    match events.iter().find(|e| !e.is_well_formed()) {
        Some(bad) => Err(InvalidIntervalError::for_event(bad)),
        None => Ok(()),
    }
}

/// Validates a lane assignment against the events it was built from.
///
/// Checks:
/// 1. All input intervals are well-formed
/// 2. Output holds exactly the input events (no loss, no duplication)
/// 3. No lane is empty
/// 4. Events within each lane are in start order
/// 5. Consecutive events within each lane do not overlap
/// 6. Lanes are ordered by earliest start
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_assignment(events: &[Event], assignment: &LaneAssignment) -> ValidationResult {
    let mut errors = Vec::new();

    for event in events.iter().filter(|e| !e.is_well_formed()) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidInterval,
            format!(
                "Event '{}' ends at {} before it starts at {}",
                event.id, event.end_ms, event.start_ms
            ),
        ));
    }

    // Multiset comparison: duplicates in the input are distinct items
    let mut expected: HashMap<&Event, i64> = HashMap::new();
    for event in events {
        *expected.entry(event).or_insert(0) += 1;
    }
    for (_, event) in assignment.iter_events() {
        *expected.entry(event).or_insert(0) -= 1;
    }
    let mut balance: Vec<(&Event, i64)> = expected.into_iter().filter(|(_, n)| *n != 0).collect();
    balance.sort_by(|a, b| a.0.sort_key().cmp(&b.0.sort_key()));
    for (event, n) in balance {
        if n > 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingEvent,
                format!("Event '{}' is missing from the output ({n} time(s))", event.id),
            ));
        } else {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatedEvent,
                format!("Event '{}' appears {} extra time(s)", event.id, -n),
            ));
        }
    }

    for (idx, lane) in assignment.lanes().iter().enumerate() {
        if lane.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyLane,
                format!("Lane {idx} is empty"),
            ));
            continue;
        }

        for pair in lane.events().windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.start_ms < prev.start_ms {
                errors.push(ValidationError::new(
                    ValidationErrorKind::LaneOutOfOrder,
                    format!(
                        "Lane {idx}: '{}' starts before preceding '{}'",
                        next.id, prev.id
                    ),
                ));
            } else if !prev.precedes(next) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::LaneOverlap,
                    format!("Lane {idx}: '{}' overlaps '{}'", prev.id, next.id),
                ));
            }
        }
    }

    for (idx, pair) in assignment.lanes().windows(2).enumerate() {
        if let (Some(a), Some(b)) = (pair[0].first_start_ms(), pair[1].first_start_ms()) {
            if b < a {
                errors.push(ValidationError::new(
                    ValidationErrorKind::LaneOrder,
                    format!("Lane {} starts before lane {idx}", idx + 1),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Lane;

    fn sample_events() -> Vec<Event> {
        vec![
            Event::new("A", 0, 5000),
            Event::new("B", 1000, 2000),
            Event::new("C", 6000, 7000),
        ]
    }

    fn sample_assignment() -> LaneAssignment {
        LaneAssignment::from(vec![
            Lane::from(vec![Event::new("A", 0, 5000), Event::new("C", 6000, 7000)]),
            Lane::from(vec![Event::new("B", 1000, 2000)]),
        ])
    }

    fn kinds(result: ValidationResult) -> Vec<ValidationErrorKind> {
        result.unwrap_err().into_iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_check_intervals_ok() {
        assert!(check_intervals(&sample_events()).is_ok());
        assert!(check_intervals(&[]).is_ok());
        assert!(check_intervals(&[Event::new("P", 5, 5)]).is_ok());
    }

    #[test]
    fn test_check_intervals_reports_first_offender() {
        let events = vec![
            Event::new("ok", 0, 1),
            Event::new("bad1", 10, 5),
            Event::new("bad2", 20, 3),
        ];
        let err = check_intervals(&events).unwrap_err();
        assert_eq!(err.event_id, "bad1");
        assert_eq!(err.start_ms, 10);
        assert_eq!(err.end_ms, 5);
        assert!(err.to_string().contains("bad1"));
    }

    #[test]
    fn test_valid_assignment() {
        assert!(validate_assignment(&sample_events(), &sample_assignment()).is_ok());
    }

    #[test]
    fn test_empty_is_valid() {
        assert!(validate_assignment(&[], &LaneAssignment::new()).is_ok());
    }

    #[test]
    fn test_missing_event() {
        let mut events = sample_events();
        events.push(Event::new("D", 8000, 9000));
        let k = kinds(validate_assignment(&events, &sample_assignment()));
        assert_eq!(k, vec![ValidationErrorKind::MissingEvent]);
    }

    #[test]
    fn test_duplicated_event() {
        let events = vec![Event::new("A", 0, 5000)];
        let assignment = LaneAssignment::from(vec![
            Lane::from(vec![Event::new("A", 0, 5000)]),
            Lane::from(vec![Event::new("A", 0, 5000)]),
        ]);
        let k = kinds(validate_assignment(&events, &assignment));
        assert_eq!(k, vec![ValidationErrorKind::DuplicatedEvent]);
    }

    #[test]
    fn test_duplicate_inputs_are_distinct_items() {
        let events = vec![Event::new("A", 0, 10), Event::new("A", 0, 10)];
        let assignment = LaneAssignment::from(vec![
            Lane::from(vec![Event::new("A", 0, 10)]),
            Lane::from(vec![Event::new("A", 0, 10)]),
        ]);
        assert!(validate_assignment(&events, &assignment).is_ok());
    }

    #[test]
    fn test_lane_overlap() {
        let events = vec![Event::new("A", 0, 10), Event::new("B", 5, 15)];
        let assignment = LaneAssignment::from(vec![Lane::from(events.clone())]);
        let k = kinds(validate_assignment(&events, &assignment));
        assert_eq!(k, vec![ValidationErrorKind::LaneOverlap]);
    }

    #[test]
    fn test_lane_out_of_order() {
        let events = vec![Event::new("A", 0, 10), Event::new("B", 20, 30)];
        let assignment = LaneAssignment::from(vec![Lane::from(vec![
            Event::new("B", 20, 30),
            Event::new("A", 0, 10),
        ])]);
        let k = kinds(validate_assignment(&events, &assignment));
        assert_eq!(k, vec![ValidationErrorKind::LaneOutOfOrder]);
    }

    #[test]
    fn test_lane_order() {
        let events = vec![Event::new("A", 0, 10), Event::new("B", 5, 15)];
        let assignment = LaneAssignment::from(vec![
            Lane::from(vec![Event::new("B", 5, 15)]),
            Lane::from(vec![Event::new("A", 0, 10)]),
        ]);
        let k = kinds(validate_assignment(&events, &assignment));
        assert_eq!(k, vec![ValidationErrorKind::LaneOrder]);
    }

    #[test]
    fn test_empty_lane() {
        let events = vec![Event::new("A", 0, 10)];
        let assignment = LaneAssignment::from(vec![
            Lane::from(vec![Event::new("A", 0, 10)]),
            Lane::default(),
        ]);
        let k = kinds(validate_assignment(&events, &assignment));
        assert_eq!(k, vec![ValidationErrorKind::EmptyLane]);
    }

    #[test]
    fn test_multiple_errors() {
        // Invalid interval + missing event
        let events = vec![Event::new("bad", 10, 5), Event::new("A", 0, 1)];
        let errors = validate_assignment(&events, &LaneAssignment::new()).unwrap_err();
        assert!(errors.len() >= 2);
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidInterval));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MissingEvent));
    }
}
