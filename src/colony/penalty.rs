//! Constraint penalty scoring.
//!
//! Pure functions: given a constraint and a finished timetable, produce a
//! non-negative penalty. The raw violation count of each rule is scaled by
//! the constraint's weight, and by ×10 when the constraint is hard. The
//! timetable is never mutated.

use std::collections::HashMap;

use crate::models::{Catalog, Constraint, ConstraintRule, ScheduleEntry, Timetable};

/// Total penalty over every constraint registered in the catalog.
pub fn constraint_penalty(timetable: &Timetable, catalog: &Catalog) -> f64 {
    catalog
        .list_constraints()
        .iter()
        .map(|c| penalty(c, timetable, catalog))
        .sum()
}

/// Weighted penalty of a single constraint against a timetable.
pub fn penalty(constraint: &Constraint, timetable: &Timetable, catalog: &Catalog) -> f64 {
    raw_penalty(&constraint.rule, timetable, catalog)
        * constraint.weight
        * constraint.severity_multiplier()
}

/// Unweighted violation count of a rule.
fn raw_penalty(rule: &ConstraintRule, timetable: &Timetable, catalog: &Catalog) -> f64 {
    match rule {
        ConstraintRule::TeacherTime {
            teacher_id,
            day_id,
            period_ids,
        } => forbidden_period_hits(
            timetable,
            |e| e.teacher_id == *teacher_id,
            day_id.as_deref(),
            period_ids,
        ),

        ConstraintRule::RoomTime {
            room_code,
            day_id,
            period_ids,
        } => forbidden_period_hits(
            timetable,
            |e| e.room_code == *room_code,
            day_id.as_deref(),
            period_ids,
        ),

        ConstraintRule::ActivityTime {
            activity_code,
            day_id,
            period_ids,
            require_in,
        } => activity_time_penalty(
            timetable,
            activity_code,
            day_id.as_deref(),
            period_ids,
            *require_in,
        ),

        ConstraintRule::Assignment {
            subject,
            teacher_id,
            require_teach,
        } => {
            let mut violations = 0u32;
            for entry in &timetable.entries {
                if entry.subject != *subject {
                    continue;
                }
                let taught_by = entry.teacher_id == *teacher_id;
                if (*require_teach && !taught_by) || (!*require_teach && taught_by) {
                    violations += 1;
                }
            }
            f64::from(violations)
        }

        ConstraintRule::Workload {
            teacher_id,
            min_hours,
            max_hours,
        } => {
            let hours: usize = timetable
                .entries_for_teacher(teacher_id)
                .iter()
                .map(|e| e.duration())
                .sum();
            if hours < *min_hours {
                (*min_hours - hours) as f64
            } else if let Some(max) = max_hours {
                hours.saturating_sub(*max) as f64
            } else {
                0.0
            }
        }

        ConstraintRule::Spread {
            activity_codes,
            min_days_between,
        } => spread_penalty(timetable, catalog, activity_codes, *min_days_between),
    }
}

/// Counts scheduled periods that fall inside a forbidden period set, for
/// entries matching `selects` on the constrained day (all days when `None`).
fn forbidden_period_hits<F>(
    timetable: &Timetable,
    selects: F,
    day_id: Option<&str>,
    period_ids: &[String],
) -> f64
where
    F: Fn(&ScheduleEntry) -> bool,
{
    let mut hits = 0u32;
    for entry in &timetable.entries {
        if !selects(entry) {
            continue;
        }
        if let Some(day) = day_id {
            if entry.day_id != day {
                continue;
            }
        }
        for p in &entry.periods {
            if period_ids.contains(&p.id) {
                hits += 1;
            }
        }
    }
    f64::from(hits)
}

fn activity_time_penalty(
    timetable: &Timetable,
    activity_code: &str,
    day_id: Option<&str>,
    period_ids: &[String],
    require_in: bool,
) -> f64 {
    let mut violations = 0u32;
    for entry in &timetable.entries {
        if entry.activity_code != activity_code {
            continue;
        }

        if require_in {
            // Must sit on the named day (if any) and touch the period set.
            if day_id.is_some_and(|d| entry.day_id != d) {
                violations += 1;
            } else if !entry.periods.iter().any(|p| period_ids.contains(&p.id)) {
                violations += 1;
            }
        } else {
            // Must stay out of the period set on the named day (every day
            // when none is named).
            let day_applies = day_id.map_or(true, |d| entry.day_id == d);
            if day_applies && entry.periods.iter().any(|p| period_ids.contains(&p.id)) {
                violations += 1;
            }
        }
    }
    f64::from(violations)
}

/// Two-part spread penalty: distinct-day shortfall plus consecutive-day
/// gaps narrower than the minimum separation, in catalog day order.
fn spread_penalty(
    timetable: &Timetable,
    catalog: &Catalog,
    activity_codes: &[String],
    min_days_between: usize,
) -> f64 {
    if activity_codes.is_empty() {
        return 0.0;
    }

    let mut by_day: HashMap<&str, usize> = HashMap::new();
    let mut instances = 0usize;
    for entry in &timetable.entries {
        if activity_codes.contains(&entry.activity_code) {
            instances += 1;
            *by_day.entry(entry.day_id.as_str()).or_insert(0) += 1;
        }
    }
    if instances == 0 {
        return 0.0;
    }

    let mut penalty = 0.0;
    let distinct_days = by_day.len();
    if (distinct_days as f64) < instances as f64 / (min_days_between as f64 + 1.0) {
        penalty += (instances - distinct_days) as f64;
    }

    let mut day_indices: Vec<usize> = by_day
        .keys()
        .filter_map(|d| catalog.day_index(d))
        .collect();
    day_indices.sort_unstable();

    for pair in day_indices.windows(2) {
        let gap = pair[1] - pair[0];
        if gap < min_days_between {
            penalty += (min_days_between - gap) as f64;
        }
    }

    penalty
}
