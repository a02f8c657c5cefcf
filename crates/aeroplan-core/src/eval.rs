//! Evaluation harness: drives the planner over synthetic scenarios.
//!
//! Not part of the production path, but its report shape is what the
//! regression tests and the `evaluate` CLI consume.

use crate::coverage::coverage_rate;
use crate::grid::GridMap;
use crate::models::Cell;
use crate::planner::{Algorithm, Planner, PlannerConfig};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One synthetic benchmark scenario. The seed fixes both obstacle placement
/// and the stochastic planners, so a scenario is fully reproducible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalScenario {
    pub algorithm: Algorithm,
    pub map_size: usize,
    pub n_obstacles: usize,
    pub max_obstacle_size: i32,
    pub seed: u64,
}

impl Default for EvalScenario {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::AStar,
            map_size: 100,
            n_obstacles: 20,
            max_obstacle_size: 5,
            seed: 42,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalReport {
    pub algorithm: Algorithm,
    pub success: bool,
    pub path_points: usize,
    pub distance: f64,
    pub planning_time_ms: f64,
    /// Fraction of free cells visited; only reported for coverage scans.
    pub coverage_rate: Option<f64>,
    pub generated_at: DateTime<Utc>,
}

/// Run one scenario: build the seeded map, plan corner to corner, report.
pub fn evaluate(scenario: &EvalScenario) -> EvalReport {
    let size = scenario.map_size;
    let mut map = GridMap::new(size, size);
    map.random_obstacles(
        scenario.n_obstacles,
        scenario.max_obstacle_size,
        Some(scenario.seed),
    );

    let start = Cell::new(5, 5);
    let goal = Cell::new(size as i32 - 5, size as i32 - 5);

    let config = PlannerConfig {
        seed: Some(scenario.seed),
        ..PlannerConfig::default()
    };
    let planner = Planner::with_config(scenario.algorithm, config);
    let result = planner.plan(&map, start, goal);

    let coverage = (scenario.algorithm == Algorithm::Coverage).then(|| {
        let cells: Vec<Cell> = result
            .path
            .iter()
            .map(|p| Cell::new(p.x.round() as i32, p.y.round() as i32))
            .collect();
        coverage_rate(&map, &cells)
    });

    tracing::info!(
        algorithm = %scenario.algorithm,
        success = result.success,
        points = result.path.len(),
        distance = result.distance,
        "scenario evaluated"
    );

    EvalReport {
        algorithm: result.algorithm,
        success: result.success,
        path_points: result.path.len(),
        distance: result.distance,
        planning_time_ms: result.planning_time_ms,
        coverage_rate: coverage,
        generated_at: Utc::now(),
    }
}
