//! Colony configuration parameters.

use serde::{Deserialize, Serialize};

/// ACO search parameters.
///
/// The defaults are a reasonable starting point for school-sized problems
/// (tens of activities, a five-day week).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColonyParams {
    /// Concurrent constructions per iteration.
    pub num_ants: usize,
    /// Iteration budget.
    pub num_iterations: usize,
    /// Pheromone evaporation rate, in `[0, 1)`.
    pub evaporation_rate: f64,
    /// Pheromone importance in the priority score.
    pub alpha: f64,
    /// Heuristic importance in the priority score.
    pub beta: f64,
    /// Pheromone deposit scale: the global best receives `q / (1 + score)`.
    pub q: f64,
    /// Placement retry rounds per activity before it is dropped from the
    /// candidate solution.
    pub max_attempts: usize,
    /// Stop early once the global best total drops below this score.
    pub early_stop_score: Option<f64>,
    /// Seed for the random source. `None` draws a fresh seed per run;
    /// setting it makes the candidate pool reproducible.
    pub seed: Option<u64>,
}

impl Default for ColonyParams {
    fn default() -> Self {
        Self {
            num_ants: 30,
            num_iterations: 40,
            evaporation_rate: 0.5,
            alpha: 1.0,
            beta: 2.0,
            q: 100.0,
            max_attempts: 5,
            early_stop_score: Some(10.0),
            seed: None,
        }
    }
}

impl ColonyParams {
    /// Sets the seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the colony size.
    pub fn with_ants(mut self, num_ants: usize) -> Self {
        self.num_ants = num_ants;
        self
    }

    /// Sets the iteration budget.
    pub fn with_iterations(mut self, num_iterations: usize) -> Self {
        self.num_iterations = num_iterations;
        self
    }
}
