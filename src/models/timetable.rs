//! Timetable (solution) model.
//!
//! A timetable is an ordered list of placements. Each placement pins an
//! activity to a day, a contiguous run of periods, a room, and one teacher.
//! Timetables are built fresh by each ant, never mutated after construction,
//! and discarded except for the best-scoring one.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Catalog, Period};

/// One placed activity: the unit produced by the constructor and consumed
/// by the fitness evaluator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Placed activity code.
    pub activity_code: String,
    /// Subject (denormalized for query convenience).
    pub subject: String,
    /// Day the activity runs on.
    pub day_id: String,
    /// The occupied periods, in index order. Length equals the activity's
    /// duration; indices are strictly sequential.
    pub periods: Vec<Period>,
    /// Assigned room.
    pub room_code: String,
    /// Chosen teacher.
    pub teacher_id: String,
    /// Attending subgroups (empty = whole cohort).
    pub subgroup_ids: Vec<String>,
}

impl ScheduleEntry {
    /// Number of periods occupied.
    #[inline]
    pub fn duration(&self) -> usize {
        self.periods.len()
    }

    /// Whether the occupied periods form a strictly sequential run.
    pub fn periods_contiguous(&self) -> bool {
        self.periods.windows(2).all(|w| w[0].precedes(&w[1]))
    }

    /// Whether any occupied period is a break/interval slot.
    pub fn occupies_interval(&self) -> bool {
        self.periods.iter().any(|p| p.is_interval)
    }
}

/// A complete candidate solution.
///
/// May be partial: activities that could not be placed within the retry
/// budget are silently absent. Use [`Timetable::unplaced_activities`] to
/// detect omissions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timetable {
    /// The placements, in construction order.
    pub entries: Vec<ScheduleEntry>,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a placement.
    pub fn push(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
    }

    /// Number of placements.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether no activity was placed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finds the placement for a given activity, if it was placed.
    pub fn entry_for_activity(&self, activity_code: &str) -> Option<&ScheduleEntry> {
        self.entries
            .iter()
            .find(|e| e.activity_code == activity_code)
    }

    /// All placements taught by a given teacher.
    pub fn entries_for_teacher(&self, teacher_id: &str) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| e.teacher_id == teacher_id)
            .collect()
    }

    /// All placements in a given room.
    pub fn entries_for_room(&self, room_code: &str) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| e.room_code == room_code)
            .collect()
    }

    /// Weekly duration units taught per teacher.
    pub fn teacher_hours(&self) -> HashMap<&str, usize> {
        let mut hours: HashMap<&str, usize> = HashMap::new();
        for entry in &self.entries {
            *hours.entry(entry.teacher_id.as_str()).or_insert(0) += entry.duration();
        }
        hours
    }

    /// Catalog activities with no placement in this timetable.
    ///
    /// Omission is expected, not an error: the constructor drops an activity
    /// it cannot place, and the fitness score does not see the gap. Callers
    /// that require full coverage must check this explicitly.
    pub fn unplaced_activities(&self, catalog: &Catalog) -> Vec<String> {
        catalog
            .list_activities()
            .iter()
            .filter(|a| self.entry_for_activity(&a.code).is_none())
            .map(|a| a.code.clone())
            .collect()
    }
}
