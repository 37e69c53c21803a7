//! Domain catalog: the read-only problem snapshot.
//!
//! Loaded once per run from an external data source, validated, and then
//! shared immutably with every ant. The catalog also answers the enrollment
//! queries the heuristic table and room-capacity filter are built from.

use serde::{Deserialize, Serialize};

use super::{Activity, Constraint, Day, Period, Room, Teacher};

/// A student enrollment record.
///
/// Students matter to the engine in two places: enrollment counts (room
/// capacity filtering, heuristic values) and per-student clash counting when
/// a whole-cohort activity overlaps another.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    /// Unique student identifier.
    pub id: String,
    /// Subjects this student is enrolled in.
    pub subjects: Vec<String>,
    /// Subgroup memberships (lab groups, tutorial groups).
    pub subgroups: Vec<String>,
}

impl Student {
    /// Creates a student with no enrollments.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            subjects: Vec::new(),
            subgroups: Vec::new(),
        }
    }

    /// Adds a subject enrollment.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subjects.push(subject.into());
        self
    }

    /// Adds a subgroup membership.
    pub fn with_subgroup(mut self, subgroup: impl Into<String>) -> Self {
        self.subgroups.push(subgroup.into());
        self
    }
}

/// Read-only snapshot of the timetabling problem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    days: Vec<Day>,
    periods: Vec<Period>,
    rooms: Vec<Room>,
    teachers: Vec<Teacher>,
    students: Vec<Student>,
    activities: Vec<Activity>,
    constraints: Vec<Constraint>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the teaching days.
    pub fn with_days(mut self, days: Vec<Day>) -> Self {
        self.days = days;
        self
    }

    /// Sets the daily period grid.
    pub fn with_periods(mut self, periods: Vec<Period>) -> Self {
        self.periods = periods;
        self
    }

    /// Sets the rooms.
    pub fn with_rooms(mut self, rooms: Vec<Room>) -> Self {
        self.rooms = rooms;
        self
    }

    /// Sets the teachers.
    pub fn with_teachers(mut self, teachers: Vec<Teacher>) -> Self {
        self.teachers = teachers;
        self
    }

    /// Sets the student enrollment records.
    pub fn with_students(mut self, students: Vec<Student>) -> Self {
        self.students = students;
        self
    }

    /// Sets the activities to place.
    pub fn with_activities(mut self, activities: Vec<Activity>) -> Self {
        self.activities = activities;
        self
    }

    /// Sets the constraints.
    pub fn with_constraints(mut self, constraints: Vec<Constraint>) -> Self {
        self.constraints = constraints;
        self
    }

    /// The teaching days, in week order.
    pub fn list_days(&self) -> &[Day] {
        &self.days
    }

    /// The daily period grid, including interval slots.
    pub fn list_periods(&self) -> &[Period] {
        &self.periods
    }

    /// The rooms.
    pub fn list_rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// The teachers.
    pub fn list_teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    /// The student enrollment records.
    pub fn list_students(&self) -> &[Student] {
        &self.students
    }

    /// The activities to place.
    pub fn list_activities(&self) -> &[Activity] {
        &self.activities
    }

    /// The constraints.
    pub fn list_constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Looks up a teacher by ID.
    pub fn teacher(&self, teacher_id: &str) -> Option<&Teacher> {
        self.teachers.iter().find(|t| t.id == teacher_id)
    }

    /// Looks up an activity by code.
    pub fn activity(&self, code: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.code == code)
    }

    /// Week position of a day, if the day exists.
    pub fn day_index(&self, day_id: &str) -> Option<usize> {
        self.days.iter().find(|d| d.id == day_id).map(|d| d.index)
    }

    /// Periods that may host activities (interval slots excluded).
    pub fn non_interval_periods(&self) -> Vec<&Period> {
        self.periods.iter().filter(|p| !p.is_interval).collect()
    }

    /// Number of students attending an activity.
    ///
    /// With subgroups: students enrolled in the subject who belong to any of
    /// the activity's subgroups. Without: every student enrolled in the
    /// subject (whole cohort).
    pub fn enrolled_count(&self, activity: &Activity) -> usize {
        let in_subject = self
            .students
            .iter()
            .filter(|s| s.subjects.iter().any(|sub| *sub == activity.subject));

        if activity.is_whole_cohort() {
            in_subject.count()
        } else {
            in_subject
                .filter(|s| {
                    activity
                        .subgroup_ids
                        .iter()
                        .any(|sg| s.subgroups.contains(sg))
                })
                .count()
        }
    }

    /// Students enrolled in a subject (whole-cohort clash counting).
    pub fn students_in_subject(&self, subject: &str) -> Vec<&Student> {
        self.students
            .iter()
            .filter(|s| s.subjects.iter().any(|sub| sub == subject))
            .collect()
    }
}
