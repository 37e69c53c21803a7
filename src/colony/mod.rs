//! Ant colony search engine.
//!
//! Each iteration, `num_ants` independent constructors ("ants") each build a
//! full candidate timetable by placing activities in pheromone-and-heuristic
//! priority order, consulting only private reservation state. The fitness
//! evaluator scores every candidate; the best-ever solution is kept under a
//! mutex, and between iterations the pheromone table evaporates and receives
//! a deposit on every activity of the global best. Lower scores are better.
//!
//! # Reference
//! Dorigo & Stützle (2004), "Ant Colony Optimization", Ch. 3 (Ant System)

mod blocks;
mod constructor;
mod evaluate;
mod params;
mod penalty;
mod runner;
mod tables;

pub use blocks::consecutive_blocks;
pub use constructor::SolutionConstructor;
pub use evaluate::{evaluate, ScoreBreakdown};
pub use params::ColonyParams;
pub use penalty::{constraint_penalty, penalty};
pub use runner::{run_colony, ColonyResult};
pub use tables::{HeuristicTable, PheromoneTable};
