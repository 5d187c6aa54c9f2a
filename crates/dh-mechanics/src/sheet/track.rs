//! Resource tracks (HP, Stress, Hope).
//!
//! A track is a clamped numeric value with a min and max. Maximums on a
//! Daggerheart sheet are derived from traits and level, so a track can have
//! its max moved after creation; the current value follows it down.

use serde::{Deserialize, Serialize};

/// A named numeric resource that is clamped between min and max.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Display name of the track.
    pub name: String,
    /// Current value.
    pub current: i32,
    /// Maximum value.
    pub max: i32,
    /// Minimum value (usually 0).
    pub min: i32,
}

impl Track {
    /// Create a new track starting at its maximum value.
    pub fn new(name: impl Into<String>, max: i32) -> Self {
        Self::with_range(name, max, 0, max)
    }

    /// Create a new track with a custom minimum and starting value.
    ///
    /// A max below the min is raised to the min.
    pub fn with_range(name: impl Into<String>, current: i32, min: i32, max: i32) -> Self {
        let max = max.max(min);
        Self {
            name: name.into(),
            current: current.clamp(min, max),
            max,
            min,
        }
    }

    /// Adjust the track by a delta, clamping to bounds. Returns the new value.
    pub fn adjust(&mut self, delta: i32) -> i32 {
        self.current = self.current.saturating_add(delta).clamp(self.min, self.max);
        self.current
    }

    /// Move the maximum, pulling the current value down if it now exceeds it.
    pub fn set_max(&mut self, max: i32) {
        self.max = max.max(self.min);
        self.current = self.current.min(self.max);
    }

    /// Returns true if the track is at its minimum value.
    pub fn is_empty(&self) -> bool {
        self.current <= self.min
    }

    /// Returns true if the track is at its maximum value.
    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}/{}", self.name, self.current, self.max)
    }
}
