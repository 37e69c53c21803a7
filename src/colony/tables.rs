//! Heuristic and pheromone tables.
//!
//! Both map activity codes to a desirability scalar. The heuristic table is
//! static, computed once from enrollment counts; the pheromone table is the
//! learned signal, mutated only between iterations (evaporation + deposit)
//! while every ant of the running iteration reads a stable snapshot.

use std::collections::HashMap;

use crate::models::Catalog;

/// Static per-activity desirability derived from problem structure.
///
/// `heuristic = 1 / (1 + enrolled_students)`: larger cohorts score lower,
/// so the priority ordering favors small activities. Deliberate; reordering
/// changes the solution quality characteristics downstream consumers are
/// tuned against.
#[derive(Debug, Clone)]
pub struct HeuristicTable {
    values: HashMap<String, f64>,
}

impl HeuristicTable {
    /// Computes the table from catalog enrollments. Done once per run.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let values = catalog
            .list_activities()
            .iter()
            .map(|a| {
                let enrolled = catalog.enrolled_count(a);
                (a.code.clone(), 1.0 / (1.0 + enrolled as f64))
            })
            .collect();
        Self { values }
    }

    /// Heuristic value for an activity; unknown codes score 0.
    pub fn get(&self, activity_code: &str) -> f64 {
        self.values.get(activity_code).copied().unwrap_or(0.0)
    }
}

/// Learned per-activity desirability.
///
/// Entries start at a uniform initial value. Codes never touched by a
/// deposit read as the initial value until the first evaporation sweep
/// materializes them.
#[derive(Debug, Clone)]
pub struct PheromoneTable {
    values: HashMap<String, f64>,
    initial: f64,
}

impl PheromoneTable {
    /// Creates a table with every activity at the uniform initial 1.0.
    pub fn new(catalog: &Catalog) -> Self {
        let initial = 1.0;
        let values = catalog
            .list_activities()
            .iter()
            .map(|a| (a.code.clone(), initial))
            .collect();
        Self { values, initial }
    }

    /// Pheromone level for an activity; unseen codes read the initial value.
    pub fn get(&self, activity_code: &str) -> f64 {
        self.values.get(activity_code).copied().unwrap_or(self.initial)
    }

    /// Multiplies every entry by `(1 - rate)`.
    pub fn evaporate(&mut self, rate: f64) {
        for value in self.values.values_mut() {
            *value *= 1.0 - rate;
        }
    }

    /// Adds `amount` to an activity's entry.
    pub fn deposit(&mut self, activity_code: &str, amount: f64) {
        *self
            .values
            .entry(activity_code.to_string())
            .or_insert(self.initial) += amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Activity, Student};

    fn catalog_with_enrollment() -> Catalog {
        Catalog::new()
            .with_students(vec![
                Student::new("S1").with_subject("CS101"),
                Student::new("S2").with_subject("CS101"),
                Student::new("S3").with_subject("CS101"),
            ])
            .with_activities(vec![
                Activity::new("BIG", "CS101").with_teacher("T1"),
                Activity::new("EMPTY", "MATH").with_teacher("T1"),
            ])
    }

    #[test]
    fn test_heuristic_inverse_to_cohort_size() {
        let h = HeuristicTable::from_catalog(&catalog_with_enrollment());
        assert_eq!(h.get("BIG"), 1.0 / 4.0); // 3 students
        assert_eq!(h.get("EMPTY"), 1.0); // 0 students
        assert!(h.get("BIG") < h.get("EMPTY"));
    }

    #[test]
    fn test_heuristic_missing_activity_is_zero() {
        let h = HeuristicTable::from_catalog(&Catalog::new());
        assert_eq!(h.get("GHOST"), 0.0);
    }

    #[test]
    fn test_pheromone_initial_uniform() {
        let p = PheromoneTable::new(&catalog_with_enrollment());
        assert_eq!(p.get("BIG"), 1.0);
        assert_eq!(p.get("UNSEEN"), 1.0);
    }

    #[test]
    fn test_evaporate_then_deposit() {
        let mut p = PheromoneTable::new(&catalog_with_enrollment());
        p.evaporate(0.5);
        assert_eq!(p.get("BIG"), 0.5);
        p.deposit("BIG", 2.0);
        assert_eq!(p.get("BIG"), 2.5);
    }

    #[test]
    fn test_bounds_remain_non_negative() {
        let mut p = PheromoneTable::new(&catalog_with_enrollment());
        for _ in 0..50 {
            p.evaporate(0.9);
            p.deposit("EMPTY", 0.0);
        }
        assert!(p.get("BIG") >= 0.0);
        assert!(p.get("EMPTY") >= 0.0);
        // Nothing but zero deposits: converges toward 0.
        assert!(p.get("BIG") < 1e-12);
    }

    #[test]
    fn test_deposit_on_unseen_code_starts_from_initial() {
        let mut p = PheromoneTable::new(&Catalog::new());
        p.deposit("NEW", 0.5);
        assert_eq!(p.get("NEW"), 1.5);
    }
}
