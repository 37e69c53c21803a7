//! Schedulable resources: rooms and teachers.
//!
//! Rooms constrain placement by seat capacity; teachers by weekly workload
//! bounds. Both are double-booking-free within one candidate solution by
//! construction, and clashes across a malformed solution are counted by the
//! fitness evaluator.

use serde::{Deserialize, Serialize};

/// A physical room with a seat capacity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique room code (e.g., "B-204").
    pub code: String,
    /// Number of seats. Only rooms with `capacity >= enrolled` qualify
    /// for an activity.
    pub capacity: usize,
}

impl Room {
    /// Creates a room.
    pub fn new(code: impl Into<String>, capacity: usize) -> Self {
        Self {
            code: code.into(),
            capacity,
        }
    }

    /// Whether this room can seat `students`.
    #[inline]
    pub fn fits(&self, students: usize) -> bool {
        self.capacity >= students
    }
}

/// A teacher with weekly workload bounds.
///
/// Workload is counted in duration units (periods taught per week).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: String,
    /// Minimum weekly teaching load.
    pub min_hours: usize,
    /// Preferred weekly teaching load.
    pub target_hours: usize,
    /// Maximum weekly teaching load. `None` means unlimited.
    pub max_hours: Option<usize>,
}

impl Teacher {
    /// Creates a teacher with no workload bounds.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            min_hours: 0,
            target_hours: 0,
            max_hours: None,
        }
    }

    /// Sets the weekly workload bounds.
    pub fn with_workload(mut self, min: usize, target: usize, max: Option<usize>) -> Self {
        self.min_hours = min;
        self.target_hours = target;
        self.max_hours = max;
        self
    }

    /// Workload deviation for a given weekly load: shortfall below the
    /// minimum or excess above the maximum, zero when within bounds.
    pub fn workload_deviation(&self, hours: usize) -> usize {
        if hours < self.min_hours {
            self.min_hours - hours
        } else if let Some(max) = self.max_hours {
            hours.saturating_sub(max)
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_fits() {
        let r = Room::new("B-204", 30);
        assert!(r.fits(30));
        assert!(r.fits(0));
        assert!(!r.fits(31));
    }

    #[test]
    fn test_workload_deviation() {
        let t = Teacher::new("T1").with_workload(8, 12, Some(16));
        assert_eq!(t.workload_deviation(5), 3); // 3 below minimum
        assert_eq!(t.workload_deviation(8), 0);
        assert_eq!(t.workload_deviation(12), 0);
        assert_eq!(t.workload_deviation(16), 0);
        assert_eq!(t.workload_deviation(20), 4); // 4 above maximum
    }

    #[test]
    fn test_workload_unbounded_max() {
        let t = Teacher::new("T1").with_workload(0, 10, None);
        assert_eq!(t.workload_deviation(1000), 0);
    }
}
