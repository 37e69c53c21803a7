//! Catalog validation.
//!
//! Checks structural integrity of the domain catalog before any search
//! runs. Detects:
//! - Duplicate IDs (activities, rooms, teachers, days, periods)
//! - Activities with no candidate teacher
//! - Activities with zero duration, or a duration no day can host
//! - Dangling teacher references
//! - An empty time grid with activities to place
//!
//! Malformed catalogs abort the run; placement failure during search is a
//! different, non-error condition (silent omission).

use crate::models::Catalog;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// An activity has no candidate teacher.
    NoCandidateTeacher,
    /// An activity's duration is zero or exceeds what a day can host.
    InvalidDuration,
    /// An activity references a teacher that doesn't exist.
    InvalidTeacherReference,
    /// There are activities but no days or no non-interval periods.
    EmptyTimeGrid,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a catalog before search.
///
/// Checks:
/// 1. No duplicate activity codes, room codes, teacher IDs, day IDs, or
///    period IDs
/// 2. Every activity has at least one candidate teacher
/// 3. Every activity's duration is positive and fits within the day's
///    non-interval period count
/// 4. Every candidate teacher reference points to a catalog teacher
/// 5. If any activity exists, the time grid is non-empty
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(catalog: &Catalog) -> ValidationResult {
    let mut errors = Vec::new();

    let mut teacher_ids = HashSet::new();
    for t in catalog.list_teachers() {
        if !teacher_ids.insert(t.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate teacher ID: {}", t.id),
            ));
        }
    }

    let mut room_codes = HashSet::new();
    for r in catalog.list_rooms() {
        if !room_codes.insert(r.code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room code: {}", r.code),
            ));
        }
    }

    let mut day_ids = HashSet::new();
    for d in catalog.list_days() {
        if !day_ids.insert(d.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate day ID: {}", d.id),
            ));
        }
    }

    let mut period_ids = HashSet::new();
    for p in catalog.list_periods() {
        if !period_ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate period ID: {}", p.id),
            ));
        }
    }

    let teachable_periods = catalog.non_interval_periods().len();

    let mut activity_codes = HashSet::new();
    for act in catalog.list_activities() {
        if !activity_codes.insert(act.code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate activity code: {}", act.code),
            ));
        }

        if act.teacher_ids.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoCandidateTeacher,
                format!("Activity '{}' has no candidate teacher", act.code),
            ));
        }

        if act.duration == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDuration,
                format!("Activity '{}' has zero duration", act.code),
            ));
        } else if act.duration > teachable_periods {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDuration,
                format!(
                    "Activity '{}' needs {} consecutive periods but a day has only {} teachable ones",
                    act.code, act.duration, teachable_periods
                ),
            ));
        }

        for tid in &act.teacher_ids {
            if !teacher_ids.contains(tid.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidTeacherReference,
                    format!("Activity '{}' references unknown teacher '{}'", act.code, tid),
                ));
            }
        }
    }

    if !catalog.list_activities().is_empty()
        && (catalog.list_days().is_empty() || teachable_periods == 0)
    {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyTimeGrid,
            "Catalog has activities but no days or no non-interval periods",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
