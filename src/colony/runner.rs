//! Colony orchestration.
//!
//! Fork-join search loop: every iteration spawns one short-lived worker per
//! ant, each building and scoring a candidate timetable against a stable
//! snapshot of the pheromone table. Ants share nothing but the best-solution
//! tracker, touched once per ant under a mutex. The pheromone update runs
//! strictly after all ants of the iteration have joined, so no reader ever
//! observes the table mid-update.
//!
//! There is no notion of infeasibility: the loop always terminates with the
//! best timetable found, possibly with some activities unplaced. A panic in
//! one ant is logged and its result dropped; sibling ants are unaffected.

use std::thread;

use log::{info, warn};
use parking_lot::Mutex;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::constructor::SolutionConstructor;
use super::evaluate::{evaluate, ScoreBreakdown};
use super::params::ColonyParams;
use super::tables::{HeuristicTable, PheromoneTable};
use crate::models::{Catalog, Timetable};
use crate::validation::{validate_catalog, ValidationError};

/// Outcome of a colony run.
#[derive(Debug, Clone)]
pub struct ColonyResult {
    /// Best timetable found across all iterations.
    pub timetable: Timetable,
    /// Its score breakdown.
    pub score: ScoreBreakdown,
    /// Iterations actually executed (smaller than the budget on early stop).
    pub iterations_run: usize,
}

/// Runs the ant colony search over a catalog.
///
/// Validates the catalog first and aborts with the collected errors if it is
/// malformed. With `params.seed` set, the pool of candidate solutions per
/// iteration is reproducible; on exact score ties the retained best may still
/// depend on ant completion order.
pub fn run_colony(
    catalog: &Catalog,
    params: &ColonyParams,
) -> Result<ColonyResult, Vec<ValidationError>> {
    validate_catalog(catalog)?;

    let heuristic = HeuristicTable::from_catalog(catalog);
    let mut pheromone = PheromoneTable::new(catalog);
    let master_seed = params.seed.unwrap_or_else(rand::random);

    let mut best: Option<(Timetable, ScoreBreakdown)> = None;
    let mut iterations_run = 0;

    for iteration in 0..params.num_iterations {
        iterations_run = iteration + 1;

        // Construction reads a stable pheromone snapshot; the borrow ends
        // with this block, before the update below.
        let totals = {
            let constructor = SolutionConstructor::new(catalog, &heuristic, &pheromone, params);
            let tracker = Mutex::new(best.take());
            let totals = Mutex::new(Vec::with_capacity(params.num_ants));

            thread::scope(|scope| {
                let handles: Vec<_> = (0..params.num_ants)
                    .map(|ant| {
                        let constructor = &constructor;
                        let tracker = &tracker;
                        let totals = &totals;
                        let seed = ant_seed(master_seed, iteration, ant);
                        scope.spawn(move || {
                            let mut rng = ChaCha8Rng::seed_from_u64(seed);
                            let timetable = constructor.construct(&mut rng);
                            let score = evaluate(&timetable, catalog);
                            totals.lock().push(score.total);

                            let mut guard = tracker.lock();
                            let improved = guard
                                .as_ref()
                                .map_or(true, |(_, incumbent)| score.total < incumbent.total);
                            if improved {
                                *guard = Some((timetable, score));
                            }
                        })
                    })
                    .collect();

                for (ant, handle) in handles.into_iter().enumerate() {
                    if handle.join().is_err() {
                        warn!("ant {ant} of iteration {iteration} panicked; result dropped");
                    }
                }
            });

            best = tracker.into_inner();
            totals.into_inner()
        };

        // All ants have joined: the table is briefly single-writer.
        pheromone.evaporate(params.evaporation_rate);
        if let Some((timetable, score)) = &best {
            let deposit = params.q / (1.0 + score.total);
            for entry in &timetable.entries {
                pheromone.deposit(&entry.activity_code, deposit);
            }
        }

        if let Some((_, score)) = &best {
            let min = totals.iter().cloned().fold(f64::INFINITY, f64::min);
            let avg = if totals.is_empty() {
                f64::NAN
            } else {
                totals.iter().sum::<f64>() / totals.len() as f64
            };
            info!(
                "iteration {}/{}: best {:.2} (iteration min {:.2}, avg {:.2})",
                iteration + 1,
                params.num_iterations,
                score.total,
                min,
                avg
            );

            if params.early_stop_score.is_some_and(|t| score.total < t) {
                info!("early stop at iteration {}: score {:.2}", iteration + 1, score.total);
                break;
            }
        }
    }

    let (timetable, score) = match best {
        Some(found) => found,
        None => {
            // Zero iterations or zero ants: fall back to the empty timetable.
            let timetable = Timetable::new();
            let score = evaluate(&timetable, catalog);
            (timetable, score)
        }
    };

    Ok(ColonyResult {
        timetable,
        score,
        iterations_run,
    })
}

/// Per-ant RNG seed: deterministic in (run seed, iteration, ant index).
fn ant_seed(master: u64, iteration: usize, ant: usize) -> u64 {
    master
        .wrapping_add((iteration as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
        .wrapping_add((ant as u64).wrapping_mul(0xBF58_476D_1CE4_E5B9))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Activity, Day, Period, Room, Student, Teacher};
    use crate::validation::ValidationErrorKind;

    fn small_params() -> ColonyParams {
        ColonyParams::default()
            .with_ants(6)
            .with_iterations(5)
            .with_seed(42)
    }

    fn scenario_a_catalog() -> Catalog {
        Catalog::new()
            .with_days(vec![Day::new("MON", 0)])
            .with_periods(vec![Period::new("P1", 0), Period::new("P2", 1)])
            .with_rooms(vec![Room::new("R1", 30)])
            .with_teachers(vec![Teacher::new("T1")])
            .with_students(vec![Student::new("S1").with_subject("CS101")])
            .with_activities(vec![Activity::new("A1", "CS101").with_teacher("T1")])
    }

    #[test]
    fn test_scenario_a_perfect_placement() {
        let result = run_colony(&scenario_a_catalog(), &small_params()).unwrap();

        assert_eq!(result.timetable.entry_count(), 1);
        assert!(result.score.is_conflict_free());
        assert_eq!(result.score.total, 0.0);
        assert!(result.timetable.unplaced_activities(&scenario_a_catalog()).is_empty());
    }

    #[test]
    fn test_scenario_b_contention_omits_one() {
        // Two activities, one teacher, one usable period: each ant can place
        // only one; the best solution has no teacher conflict and one
        // omission.
        let catalog = Catalog::new()
            .with_days(vec![Day::new("MON", 0)])
            .with_periods(vec![Period::new("P1", 0)])
            .with_rooms(vec![Room::new("R1", 30), Room::new("R2", 30)])
            .with_teachers(vec![Teacher::new("T1")])
            .with_activities(vec![
                Activity::new("A1", "CS101").with_teacher("T1"),
                Activity::new("A2", "MATH").with_teacher("T1"),
            ]);

        let result = run_colony(&catalog, &small_params()).unwrap();
        assert_eq!(result.score.teacher_conflicts, 0);
        assert_eq!(result.timetable.entry_count(), 1);
        assert_eq!(result.timetable.unplaced_activities(&catalog).len(), 1);
    }

    #[test]
    fn test_malformed_catalog_aborts() {
        let catalog = scenario_a_catalog()
            .with_activities(vec![Activity::new("A1", "CS101")]); // no teacher
        let errors = run_colony(&catalog, &small_params()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NoCandidateTeacher));
    }

    #[test]
    fn test_early_stop_reports_iterations() {
        // Scenario A reaches score 0 in the first iteration; the default
        // early-stop threshold of 10 must fire immediately.
        let result = run_colony(&scenario_a_catalog(), &small_params()).unwrap();
        assert_eq!(result.iterations_run, 1);
    }

    #[test]
    fn test_iteration_budget_without_early_stop() {
        let mut params = small_params();
        params.early_stop_score = None;
        let result = run_colony(&scenario_a_catalog(), &params).unwrap();
        assert_eq!(result.iterations_run, 5);
        assert_eq!(result.score.total, 0.0);
    }

    #[test]
    fn test_seeded_runs_reproduce_score() {
        let catalog = Catalog::new()
            .with_days(vec![Day::new("MON", 0), Day::new("TUE", 1)])
            .with_periods(vec![
                Period::new("P1", 0),
                Period::interval("BREAK", 1),
                Period::new("P2", 2),
                Period::new("P3", 3),
            ])
            .with_rooms(vec![Room::new("R1", 30)])
            .with_teachers(vec![Teacher::new("T1"), Teacher::new("T2")])
            .with_activities(vec![
                Activity::new("A1", "CS101").with_duration(2).with_teacher("T1"),
                Activity::new("A2", "MATH").with_teacher("T2"),
                Activity::new("A3", "PHYS").with_teacher("T1"),
            ]);

        let a = run_colony(&catalog, &small_params()).unwrap();
        let b = run_colony(&catalog, &small_params()).unwrap();
        assert_eq!(a.score.total, b.score.total);
        assert_eq!(a.timetable.entry_count(), b.timetable.entry_count());
    }

    #[test]
    fn test_zero_iterations_yields_empty_best() {
        let params = small_params().with_iterations(0);
        let result = run_colony(&scenario_a_catalog(), &params).unwrap();
        assert!(result.timetable.is_empty());
        assert_eq!(result.iterations_run, 0);
    }

    #[test]
    fn test_all_entries_satisfy_invariants() {
        // Block adjacency and interval avoidance hold for every entry of the
        // returned best, on a grid with a lunch break in the middle.
        let catalog = Catalog::new()
            .with_days(vec![Day::new("MON", 0), Day::new("TUE", 1)])
            .with_periods(vec![
                Period::new("P1", 0),
                Period::new("P2", 1),
                Period::interval("LUNCH", 2),
                Period::new("P3", 3),
                Period::new("P4", 4),
            ])
            .with_rooms(vec![Room::new("R1", 30)])
            .with_teachers(vec![Teacher::new("T1")])
            .with_activities(vec![
                Activity::new("A1", "CS101").with_duration(2).with_teacher("T1"),
                Activity::new("A2", "MATH").with_duration(2).with_teacher("T1"),
                Activity::new("A3", "PHYS").with_teacher("T1"),
            ]);

        let result = run_colony(&catalog, &small_params()).unwrap();
        for entry in &result.timetable.entries {
            let expected = catalog.activity(&entry.activity_code).unwrap().duration;
            assert_eq!(entry.duration(), expected);
            assert!(entry.periods_contiguous());
            assert!(!entry.occupies_interval());
        }
        // An activity appears at most once.
        let mut codes: Vec<&str> = result
            .timetable
            .entries
            .iter()
            .map(|e| e.activity_code.as_str())
            .collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), result.timetable.entry_count());
    }
}
