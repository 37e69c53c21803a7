//! Resource-constrained timetable construction via ant colony optimization.
//!
//! Assigns teaching activities to (day, consecutive-period block, room,
//! teacher) tuples, avoiding teacher/room/group double-booking and improving
//! a multi-part quality score through pheromone-guided iterative search.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Activity`, `Room`, `Teacher`, `Day`,
//!   `Period`, `Student`, `Constraint`, `ScheduleEntry`, `Timetable`, `Catalog`
//! - **`validation`**: Catalog integrity checks (duplicate IDs, unteachable
//!   activities, oversized durations)
//! - **`colony`**: The search engine — heuristic/pheromone tables, consecutive
//!   block finder, constraint penalties, solution constructor, fitness
//!   evaluator, colony runner
//!
//! # Usage
//!
//! Build a [`models::Catalog`], pick [`colony::ColonyParams`] (the defaults
//! mirror the reference configuration), and call [`colony::run_colony`]. The
//! result is the best [`models::Timetable`] found plus its
//! [`colony::ScoreBreakdown`]. Activities that could not be placed are
//! silently omitted; use [`models::Timetable::unplaced_activities`] if full
//! coverage matters.
//!
//! # References
//!
//! - Dorigo & Stützle (2004), "Ant Colony Optimization"
//! - Socha, Knowles & Sampels (2002), "A MAX-MIN Ant System for the
//!   University Course Timetabling Problem"

pub mod colony;
pub mod models;
pub mod validation;

pub use colony::{run_colony, ColonyParams, ColonyResult, ScoreBreakdown};
pub use models::{Catalog, Timetable};
