//! Activity model.
//!
//! An activity is the smallest schedulable unit of teaching: one lecture,
//! lab session, or tutorial occurrence. It belongs to a subject, runs for a
//! fixed number of consecutive periods, and may be taught by any one of its
//! candidate teachers.

use serde::{Deserialize, Serialize};

/// A teaching activity to be placed on the timetable.
///
/// Immutable for the duration of a search run. The constructor places each
/// activity at most once; an activity that cannot be placed is omitted from
/// that candidate solution entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Unique activity code (e.g., "CS101-L01").
    pub code: String,
    /// Subject (module) this activity belongs to.
    pub subject: String,
    /// Number of consecutive periods required (> 0).
    pub duration: usize,
    /// Candidate teacher IDs; any one of them may be assigned.
    pub teacher_ids: Vec<String>,
    /// Student subgroup IDs attending. Empty means the whole cohort
    /// enrolled in `subject`.
    pub subgroup_ids: Vec<String>,
}

impl Activity {
    /// Creates an activity with a single-period duration.
    pub fn new(code: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            subject: subject.into(),
            duration: 1,
            teacher_ids: Vec::new(),
            subgroup_ids: Vec::new(),
        }
    }

    /// Sets the duration (consecutive periods required).
    pub fn with_duration(mut self, duration: usize) -> Self {
        self.duration = duration;
        self
    }

    /// Adds a candidate teacher.
    pub fn with_teacher(mut self, teacher_id: impl Into<String>) -> Self {
        self.teacher_ids.push(teacher_id.into());
        self
    }

    /// Sets the full candidate teacher list.
    pub fn with_teachers(mut self, teacher_ids: Vec<String>) -> Self {
        self.teacher_ids = teacher_ids;
        self
    }

    /// Adds an attending subgroup.
    pub fn with_subgroup(mut self, subgroup_id: impl Into<String>) -> Self {
        self.subgroup_ids.push(subgroup_id.into());
        self
    }

    /// Whether the whole subject cohort attends (no subgroup restriction).
    #[inline]
    pub fn is_whole_cohort(&self) -> bool {
        self.subgroup_ids.is_empty()
    }
}
