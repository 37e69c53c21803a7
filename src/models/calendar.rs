//! Time grid models: days and periods.
//!
//! The week is a grid of days × periods. Periods carry a zero-based index
//! within the day; adjacency of indices is what makes a run of periods
//! "consecutive". Interval periods (breaks, lunch) may never host an
//! activity.

use serde::{Deserialize, Serialize};

/// A teaching day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Day {
    /// Day identifier (e.g., "MON").
    pub id: String,
    /// Ordering key within the week (0-based). Used by spread scoring.
    pub index: usize,
}

impl Day {
    /// Creates a day with its week position.
    pub fn new(id: impl Into<String>, index: usize) -> Self {
        Self { id: id.into(), index }
    }
}

/// A period (time slot) within a day.
///
/// The same period grid applies to every day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Period {
    /// Period identifier (e.g., "P3").
    pub id: String,
    /// Zero-based sequence index within the day. Two periods are adjacent
    /// iff their indices differ by exactly 1.
    pub index: usize,
    /// Whether this is a break/interval slot that may never host an activity.
    pub is_interval: bool,
}

impl Period {
    /// Creates a teaching period.
    pub fn new(id: impl Into<String>, index: usize) -> Self {
        Self {
            id: id.into(),
            index,
            is_interval: false,
        }
    }

    /// Creates a break/interval period.
    pub fn interval(id: impl Into<String>, index: usize) -> Self {
        Self {
            id: id.into(),
            index,
            is_interval: true,
        }
    }

    /// Whether `other` immediately follows this period.
    #[inline]
    pub fn precedes(&self, other: &Period) -> bool {
        other.index == self.index + 1
    }
}
