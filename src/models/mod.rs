//! Timetabling domain models.
//!
//! Core data types for representing a timetabling problem and its
//! solutions. All types are plain data with `serde` derives; the search
//! engine treats them as a read-only snapshot for the duration of a run.
//!
//! # Entities
//!
//! | Type | Role |
//! |------|------|
//! | `Activity` | Teaching unit to be placed (lecture, lab, tutorial) |
//! | `Room` | Physical space with a seat capacity |
//! | `Day` / `Period` | The time grid; periods carry an interval (break) flag |
//! | `Teacher` | Staff member with weekly workload bounds |
//! | `Student` | Enrollment record (subjects + subgroup memberships) |
//! | `Constraint` | Soft/hard scheduling rule with a weight |
//! | `ScheduleEntry` / `Timetable` | A placement and a full candidate solution |
//! | `Catalog` | Read-only snapshot of all of the above |

mod activity;
mod calendar;
mod catalog;
mod constraint;
mod resource;
mod timetable;

pub use activity::Activity;
pub use calendar::{Day, Period};
pub use catalog::{Catalog, Student};
pub use constraint::{Constraint, ConstraintRule};
pub use resource::{Room, Teacher};
pub use timetable::{ScheduleEntry, Timetable};
