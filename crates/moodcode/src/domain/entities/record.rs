//! MoodRecord - One generated, timestamped result

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Rgb;

/// A single generated mood code.
///
/// Created once per generation call, never mutated afterwards, and
/// appended verbatim to the persisted history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoodRecord {
    /// Resolved mood name, display-cased (e.g. "Happy")
    pub mood: String,
    /// Base code plus wall-clock suffix, e.g. "JOY-1423"
    pub code: String,
    /// The chosen hex color string, unmodified
    pub color: String,
    /// The chosen display glyph
    pub symbol: String,
    /// Moment of generation, local wall clock
    pub timestamp: DateTime<Local>,
    /// `color` decomposed into 8-bit channels
    pub rgb: Rgb,
}
