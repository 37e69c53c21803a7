//! Fitness evaluation.
//!
//! Scores a candidate timetable. Pure and deterministic: the timetable is
//! never mutated and repeated evaluation yields identical results. Lower is
//! strictly better.
//!
//! # Score components
//!
//! | Component | Weight | Meaning |
//! |-----------|--------|---------|
//! | Teacher conflicts | 10 | Same teacher in two places at once |
//! | Room conflicts | 10 | Same room hosting two entries at once |
//! | Group conflicts | 8 | Same subgroup (or student) double-booked |
//! | Interval conflicts | 5 | Entry occupying a break slot |
//! | Period conflicts | 3 | Aggregate slot crowding cross-check |
//! | Workload overload | 2 | Teacher hours outside their bounds |
//! | Constraint penalty | 1 | Weighted sum over registered constraints |
//!
//! Omitted activities are invisible here; a caller that needs full coverage
//! checks `Timetable::unplaced_activities` separately.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::penalty::constraint_penalty;
use crate::models::{Catalog, ScheduleEntry, Timetable};

/// Per-component score of a candidate timetable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Slots where a teacher is booked more than once (excess count).
    pub teacher_conflicts: usize,
    /// Slots where a room is booked more than once (excess count).
    pub room_conflicts: usize,
    /// Slots where a subgroup or individual student is double-booked.
    pub group_conflicts: usize,
    /// Entries occupying a break/interval period.
    pub interval_conflicts: usize,
    /// Aggregate `max(0, entries_in_slot - 1)` over all slots.
    pub period_conflicts: usize,
    /// Total teacher hours outside `[min_hours, max_hours]`.
    pub workload_overload: usize,
    /// Weighted penalty over registered constraints.
    pub constraint_penalty: f64,
    /// Combined score; lower is strictly better.
    pub total: f64,
}

impl ScoreBreakdown {
    /// Whether no resource clashes of any kind were found. Constraint
    /// penalties may still be non-zero.
    pub fn is_conflict_free(&self) -> bool {
        self.teacher_conflicts == 0
            && self.room_conflicts == 0
            && self.group_conflicts == 0
            && self.interval_conflicts == 0
            && self.period_conflicts == 0
    }
}

/// Clash-counting key: subgroup-scoped or per-student for whole-cohort
/// entries.
#[derive(PartialEq, Eq, Hash)]
enum GroupKey<'a> {
    Subgroup(&'a str),
    Student(&'a str),
}

/// Scores a candidate timetable against the catalog.
///
/// An empty timetable scores zero on every conflict counter but still
/// incurs constraint penalties (e.g., unmet workload minimums).
pub fn evaluate(timetable: &Timetable, catalog: &Catalog) -> ScoreBreakdown {
    let mut interval_conflicts = 0usize;
    let mut slots: HashMap<(&str, &str), Vec<&ScheduleEntry>> = HashMap::new();

    for entry in &timetable.entries {
        for p in &entry.periods {
            slots
                .entry((entry.day_id.as_str(), p.id.as_str()))
                .or_default()
                .push(entry);
            if p.is_interval {
                interval_conflicts += 1;
            }
        }
    }

    let mut teacher_conflicts = 0usize;
    let mut room_conflicts = 0usize;
    let mut group_conflicts = 0usize;
    let mut period_conflicts = 0usize;

    for entries in slots.values() {
        let mut teachers_used: HashMap<&str, usize> = HashMap::new();
        let mut rooms_used: HashMap<&str, usize> = HashMap::new();
        let mut groups_used: HashMap<GroupKey, usize> = HashMap::new();

        for entry in entries {
            *teachers_used.entry(entry.teacher_id.as_str()).or_insert(0) += 1;
            *rooms_used.entry(entry.room_code.as_str()).or_insert(0) += 1;

            if entry.subgroup_ids.is_empty() {
                // Whole cohort: every enrolled student occupies the slot.
                for student in catalog.students_in_subject(&entry.subject) {
                    *groups_used.entry(GroupKey::Student(&student.id)).or_insert(0) += 1;
                }
            } else {
                for sg in &entry.subgroup_ids {
                    *groups_used.entry(GroupKey::Subgroup(sg)).or_insert(0) += 1;
                }
            }
        }

        teacher_conflicts += excess(&teachers_used);
        room_conflicts += excess(&rooms_used);
        group_conflicts += excess(&groups_used);
        period_conflicts += entries.len().saturating_sub(1);
    }

    let mut workload_overload = 0usize;
    for (teacher_id, hours) in timetable.teacher_hours() {
        workload_overload += catalog
            .teacher(teacher_id)
            .map_or(0, |t| t.workload_deviation(hours));
    }

    let constraint_penalty = constraint_penalty(timetable, catalog);

    let total = 10.0 * teacher_conflicts as f64
        + 10.0 * room_conflicts as f64
        + 8.0 * group_conflicts as f64
        + 5.0 * interval_conflicts as f64
        + 3.0 * period_conflicts as f64
        + 2.0 * workload_overload as f64
        + constraint_penalty;

    ScoreBreakdown {
        teacher_conflicts,
        room_conflicts,
        group_conflicts,
        interval_conflicts,
        period_conflicts,
        workload_overload,
        constraint_penalty,
        total,
    }
}

/// Sum of `count - 1` over keys used more than once.
fn excess<K>(used: &HashMap<K, usize>) -> usize {
    used.values().filter(|&&n| n > 1).map(|&n| n - 1).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Constraint, Day, Period, Room, Student, Teacher};

    fn entry(
        code: &str,
        subject: &str,
        teacher: &str,
        room: &str,
        day: &str,
        indices: &[usize],
        subgroups: &[&str],
    ) -> ScheduleEntry {
        ScheduleEntry {
            activity_code: code.into(),
            subject: subject.into(),
            day_id: day.into(),
            periods: indices
                .iter()
                .map(|&i| Period::new(format!("P{i}"), i))
                .collect(),
            room_code: room.into(),
            teacher_id: teacher.into(),
            subgroup_ids: subgroups.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn base_catalog() -> Catalog {
        Catalog::new()
            .with_days(vec![Day::new("MON", 0), Day::new("TUE", 1)])
            .with_periods(vec![
                Period::new("P0", 0),
                Period::new("P1", 1),
                Period::new("P2", 2),
            ])
            .with_rooms(vec![Room::new("R1", 30), Room::new("R2", 30)])
            .with_teachers(vec![Teacher::new("T1"), Teacher::new("T2")])
    }

    #[test]
    fn test_clean_timetable_scores_zero() {
        let mut tt = Timetable::new();
        tt.push(entry("A1", "CS", "T1", "R1", "MON", &[0], &[]));
        tt.push(entry("A2", "MATH", "T2", "R2", "MON", &[1], &[]));

        let score = evaluate(&tt, &base_catalog());
        assert!(score.is_conflict_free());
        assert_eq!(score.workload_overload, 0);
        assert_eq!(score.constraint_penalty, 0.0);
        assert_eq!(score.total, 0.0);
    }

    #[test]
    fn test_teacher_double_booking() {
        let mut tt = Timetable::new();
        tt.push(entry("A1", "CS", "T1", "R1", "MON", &[0], &["G1"]));
        tt.push(entry("A2", "MATH", "T1", "R2", "MON", &[0], &["G2"]));

        let score = evaluate(&tt, &base_catalog());
        assert_eq!(score.teacher_conflicts, 1);
        assert_eq!(score.room_conflicts, 0);
        assert_eq!(score.period_conflicts, 1);
        // 10·1 + 3·1
        assert_eq!(score.total, 13.0);
    }

    #[test]
    fn test_room_double_booking_multi_period() {
        let mut tt = Timetable::new();
        tt.push(entry("A1", "CS", "T1", "R1", "MON", &[0, 1], &["G1"]));
        tt.push(entry("A2", "MATH", "T2", "R1", "MON", &[0, 1], &["G2"]));

        let score = evaluate(&tt, &base_catalog());
        // One excess per shared slot.
        assert_eq!(score.room_conflicts, 2);
        assert_eq!(score.period_conflicts, 2);
    }

    #[test]
    fn test_subgroup_clash() {
        let mut tt = Timetable::new();
        tt.push(entry("A1", "CS", "T1", "R1", "MON", &[0], &["G1"]));
        tt.push(entry("A2", "MATH", "T2", "R2", "MON", &[0], &["G1"]));

        let score = evaluate(&tt, &base_catalog());
        assert_eq!(score.group_conflicts, 1);
        assert_eq!(score.teacher_conflicts, 0);
        assert_eq!(score.room_conflicts, 0);
    }

    #[test]
    fn test_whole_cohort_clash_counts_students() {
        // Both CS entries carry the full cohort: every shared student is a
        // clash in the overlapping slot.
        let catalog = base_catalog().with_students(vec![
            Student::new("S1").with_subject("CS"),
            Student::new("S2").with_subject("CS"),
        ]);
        let mut tt = Timetable::new();
        tt.push(entry("A1", "CS", "T1", "R1", "MON", &[0], &[]));
        tt.push(entry("A2", "CS", "T2", "R2", "MON", &[0], &[]));

        let score = evaluate(&tt, &catalog);
        assert_eq!(score.group_conflicts, 2);
    }

    #[test]
    fn test_interval_occupancy() {
        let mut tt = Timetable::new();
        let mut e = entry("A1", "CS", "T1", "R1", "MON", &[0], &[]);
        e.periods[0].is_interval = true;
        tt.push(e);

        let score = evaluate(&tt, &base_catalog());
        assert_eq!(score.interval_conflicts, 1);
        assert_eq!(score.total, 5.0);
    }

    #[test]
    fn test_workload_overload_from_teacher_bounds() {
        let catalog = base_catalog().with_teachers(vec![
            Teacher::new("T1").with_workload(0, 1, Some(1)),
        ]);
        let mut tt = Timetable::new();
        tt.push(entry("A1", "CS", "T1", "R1", "MON", &[0, 1], &[]));
        tt.push(entry("A2", "CS", "T1", "R1", "TUE", &[0], &[]));

        let score = evaluate(&tt, &catalog);
        // 3 hours against a max of 1.
        assert_eq!(score.workload_overload, 2);
        assert_eq!(score.total, 4.0);
    }

    #[test]
    fn test_empty_timetable_keeps_constraint_penalty() {
        let catalog = base_catalog()
            .with_constraints(vec![Constraint::workload("T1", 10, None)]);
        let score = evaluate(&Timetable::new(), &catalog);

        assert!(score.is_conflict_free());
        assert_eq!(score.constraint_penalty, 10.0);
        assert_eq!(score.total, 10.0);
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let mut tt = Timetable::new();
        tt.push(entry("A1", "CS", "T1", "R1", "MON", &[0, 1], &["G1"]));
        tt.push(entry("A2", "CS", "T1", "R1", "MON", &[1], &["G1"]));
        let catalog = base_catalog();

        let first = evaluate(&tt, &catalog);
        let second = evaluate(&tt, &catalog);
        assert_eq!(first, second);
    }

    #[test]
    fn test_score_breakdown_serializes() {
        let score = evaluate(&Timetable::new(), &base_catalog());
        let json = serde_json::to_string(&score).unwrap();
        let back: ScoreBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(back, score);
    }
}
