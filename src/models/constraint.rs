//! Timetabling constraints.
//!
//! Constraints do not block placement directly (except the time rules the
//! constructor pre-filters against); they contribute weighted penalties to
//! the fitness score. A hard constraint is scored with a ×10 multiplier
//! relative to a soft constraint of the same weight.

use serde::{Deserialize, Serialize};

/// A scheduling rule with severity and weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Constraint {
    /// What the rule checks.
    pub rule: ConstraintRule,
    /// Hard constraints are penalized ×10 relative to soft ones.
    pub hard: bool,
    /// Penalty weight applied to the raw rule violation count.
    pub weight: f64,
}

/// The kind-specific body of a constraint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ConstraintRule {
    /// Teacher must not teach during the listed periods
    /// (on `day_id`, or on every day when `None`).
    TeacherTime {
        teacher_id: String,
        day_id: Option<String>,
        period_ids: Vec<String>,
    },

    /// Room must not be occupied during the listed periods
    /// (on `day_id`, or on every day when `None`).
    RoomTime {
        room_code: String,
        day_id: Option<String>,
        period_ids: Vec<String>,
    },

    /// Activity must sit inside (`require_in = true`) or outside
    /// (`require_in = false`) the listed periods.
    ActivityTime {
        activity_code: String,
        day_id: Option<String>,
        period_ids: Vec<String>,
        require_in: bool,
    },

    /// Subject must (`require_teach = true`) or must not
    /// (`require_teach = false`) be taught by the named teacher.
    Assignment {
        subject: String,
        teacher_id: String,
        require_teach: bool,
    },

    /// Teacher's total assigned duration must fall in `[min_hours, max_hours]`.
    Workload {
        teacher_id: String,
        min_hours: usize,
        max_hours: Option<usize>,
    },

    /// The listed activities should be spread across the week with at
    /// least `min_days_between` days separating consecutive occurrences.
    Spread {
        activity_codes: Vec<String>,
        min_days_between: usize,
    },
}

impl Constraint {
    /// Creates a soft constraint with weight 1.0.
    pub fn soft(rule: ConstraintRule) -> Self {
        Self {
            rule,
            hard: false,
            weight: 1.0,
        }
    }

    /// Creates a hard constraint with weight 1.0.
    pub fn hard(rule: ConstraintRule) -> Self {
        Self {
            rule,
            hard: true,
            weight: 1.0,
        }
    }

    /// Sets the penalty weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Creates a teacher availability rule (soft unless upgraded).
    pub fn teacher_time(
        teacher_id: impl Into<String>,
        day_id: Option<String>,
        period_ids: Vec<String>,
    ) -> Self {
        Self::soft(ConstraintRule::TeacherTime {
            teacher_id: teacher_id.into(),
            day_id,
            period_ids,
        })
    }

    /// Creates a room availability rule.
    pub fn room_time(
        room_code: impl Into<String>,
        day_id: Option<String>,
        period_ids: Vec<String>,
    ) -> Self {
        Self::soft(ConstraintRule::RoomTime {
            room_code: room_code.into(),
            day_id,
            period_ids,
        })
    }

    /// Creates an activity timing rule.
    pub fn activity_time(
        activity_code: impl Into<String>,
        day_id: Option<String>,
        period_ids: Vec<String>,
        require_in: bool,
    ) -> Self {
        Self::soft(ConstraintRule::ActivityTime {
            activity_code: activity_code.into(),
            day_id,
            period_ids,
            require_in,
        })
    }

    /// Creates a teacher-subject assignment rule.
    pub fn assignment(
        subject: impl Into<String>,
        teacher_id: impl Into<String>,
        require_teach: bool,
    ) -> Self {
        Self::soft(ConstraintRule::Assignment {
            subject: subject.into(),
            teacher_id: teacher_id.into(),
            require_teach,
        })
    }

    /// Creates a workload bounds rule.
    pub fn workload(
        teacher_id: impl Into<String>,
        min_hours: usize,
        max_hours: Option<usize>,
    ) -> Self {
        Self::soft(ConstraintRule::Workload {
            teacher_id: teacher_id.into(),
            min_hours,
            max_hours,
        })
    }

    /// Creates a spread rule over a set of related activities.
    pub fn spread(activity_codes: Vec<String>, min_days_between: usize) -> Self {
        Self::soft(ConstraintRule::Spread {
            activity_codes,
            min_days_between,
        })
    }

    /// Severity multiplier: 10 for hard constraints, 1 for soft.
    #[inline]
    pub fn severity_multiplier(&self) -> f64 {
        if self.hard {
            10.0
        } else {
            1.0
        }
    }
}
