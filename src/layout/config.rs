//! Layout configuration.

use serde::{Deserialize, Serialize};

/// Smallest horizontal scale (px per day).
pub const MIN_WIDTH_PER_DAY: f32 = 5.0;
/// Largest horizontal scale (px per day).
pub const MAX_WIDTH_PER_DAY: f32 = 120.0;

/// Geometry settings for turning lanes into boxes.
///
/// Deserialized values are not clamped; layout reads them through the
/// accessor methods, which are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal scale (px per day), within `[MIN_WIDTH_PER_DAY, MAX_WIDTH_PER_DAY]`.
    pub width_per_day: f32,
    /// Width floor for short events (days).
    pub min_duration_days: i64,
    /// Spacing between date-axis labels (days).
    pub label_step_days: i64,
    /// `chrono` strftime pattern for date labels.
    pub label_format: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width_per_day: 10.0,
            min_duration_days: 1,
            label_step_days: 5,
            label_format: "%b %d".to_string(),
        }
    }
}

impl LayoutConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the horizontal scale, clamped to the supported range.
    pub fn with_width_per_day(mut self, width_per_day: f32) -> Self {
        self.width_per_day = clamp_width(width_per_day);
        self
    }

    /// Sets the width floor (days).
    pub fn with_min_duration_days(mut self, days: i64) -> Self {
        self.min_duration_days = days;
        self
    }

    /// Sets the axis label spacing (days).
    pub fn with_label_step_days(mut self, days: i64) -> Self {
        self.label_step_days = days;
        self
    }

    /// Sets the date label pattern.
    pub fn with_label_format(mut self, format: impl Into<String>) -> Self {
        self.label_format = format.into();
        self
    }

    /// Horizontal scale in effect.
    pub fn effective_width_per_day(&self) -> f32 {
        clamp_width(self.width_per_day)
    }

    /// Width floor in effect (never negative).
    pub fn effective_min_duration_days(&self) -> i64 {
        self.min_duration_days.max(0)
    }

    /// Label spacing in effect (at least one day).
    pub fn effective_label_step_days(&self) -> i64 {
        self.label_step_days.max(1)
    }
}

fn clamp_width(width_per_day: f32) -> f32 {
    if width_per_day.is_nan() {
        LayoutConfig::default().width_per_day
    } else {
        width_per_day.clamp(MIN_WIDTH_PER_DAY, MAX_WIDTH_PER_DAY)
    }
}
