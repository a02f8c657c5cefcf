//! Planner dispatch: one entry point over the five search strategies.

use crate::ant_colony::{ant_colony_search, AntColonyParams};
use crate::astar::a_star_search;
use crate::coverage::{coverage_plan, ScanDirection};
use crate::d_star_lite::d_star_lite_search;
use crate::grid::GridMap;
use crate::models::{path_distance, Cell, Point};
use crate::rrt_star::{rrt_star_search, RrtStarParams};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

/// The closed set of supported planning strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    AStar,
    RrtStar,
    AntColony,
    DStarLite,
    Coverage,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::AStar,
        Algorithm::RrtStar,
        Algorithm::AntColony,
        Algorithm::DStarLite,
        Algorithm::Coverage,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::AStar => "a_star",
            Algorithm::RrtStar => "rrt_star",
            Algorithm::AntColony => "ant_colony",
            Algorithm::DStarLite => "d_star_lite",
            Algorithm::Coverage => "coverage",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = PlanError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "a_star" => Ok(Algorithm::AStar),
            "rrt_star" => Ok(Algorithm::RrtStar),
            "ant_colony" => Ok(Algorithm::AntColony),
            "d_star_lite" => Ok(Algorithm::DStarLite),
            "coverage" => Ok(Algorithm::Coverage),
            other => Err(PlanError::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error(
        "unsupported algorithm: {0} (choose from a_star, rrt_star, ant_colony, d_star_lite, coverage)"
    )]
    UnsupportedAlgorithm(String),
}

/// Optional per-algorithm tuning. The defaults reproduce the stock behavior
/// of each strategy; callers only override what they need.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    pub rrt: RrtStarParams,
    pub ant_colony: AntColonyParams,
    /// Mandatory intermediate stops for the ant-colony strategy.
    pub waypoints: Vec<Cell>,
    pub scan_direction: ScanDirection,
    /// Fixed random seed for the stochastic strategies. Leave unset for an
    /// entropy-seeded run; set it to make planning reproducible.
    pub seed: Option<u64>,
}

/// Result of one planning call. Immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResult {
    pub algorithm: Algorithm,
    /// Ordered path, possibly empty. Empty means "no path", not an error.
    pub path: Vec<Point>,
    /// Total Euclidean path length in grid units.
    pub distance: f64,
    pub planning_time_ms: f64,
    pub success: bool,
}

/// Dispatches planning requests to the selected strategy and wraps the raw
/// path with aggregate metrics.
///
/// Each call is a pure function of (grid, start, goal, config): no state is
/// kept between invocations, so one planner may serve many maps.
#[derive(Debug, Clone)]
pub struct Planner {
    algorithm: Algorithm,
    config: PlannerConfig,
}

impl Planner {
    pub fn new(algorithm: Algorithm) -> Self {
        Self::with_config(algorithm, PlannerConfig::default())
    }

    pub fn with_config(algorithm: Algorithm, config: PlannerConfig) -> Self {
        Self { algorithm, config }
    }

    /// Construct from an algorithm name, failing up front on unknown names.
    pub fn from_name(name: &str) -> Result<Self, PlanError> {
        Ok(Self::new(name.parse()?))
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan a route on `grid` from `start` to `goal`.
    pub fn plan(&self, grid: &GridMap, start: Cell, goal: Cell) -> PlanResult {
        let t0 = Instant::now();
        let path: Vec<Point> = match self.algorithm {
            Algorithm::AStar => to_points(a_star_search(grid, start, goal)),
            Algorithm::RrtStar => {
                rrt_star_search(grid, start, goal, &self.config.rrt, self.config.seed)
            }
            Algorithm::AntColony => to_points(ant_colony_search(
                grid,
                start,
                goal,
                &self.config.waypoints,
                &self.config.ant_colony,
                self.config.seed,
            )),
            Algorithm::DStarLite => to_points(d_star_lite_search(grid, start, goal)),
            Algorithm::Coverage => {
                to_points(coverage_plan(grid, start, self.config.scan_direction))
            }
        };
        let planning_time_ms = t0.elapsed().as_secs_f64() * 1000.0;
        let distance = path_distance(&path);
        let success = !path.is_empty();

        tracing::debug!(
            algorithm = %self.algorithm,
            points = path.len(),
            distance,
            planning_time_ms,
            success,
            "planning call finished"
        );

        PlanResult {
            algorithm: self.algorithm,
            path,
            distance,
            planning_time_ms,
            success,
        }
    }
}

fn to_points(cells: Vec<Cell>) -> Vec<Point> {
    cells.into_iter().map(Point::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_algorithm_fails_at_construction() {
        let err = Planner::from_name("dijkstra").unwrap_err();
        assert!(err.to_string().contains("unsupported algorithm: dijkstra"));
        assert!(Planner::from_name("a_star").is_ok());
    }

    #[test]
    fn algorithm_names_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>().unwrap(), algorithm);
        }
        assert_eq!(
            serde_json::to_string(&Algorithm::DStarLite).unwrap(),
            "\"d_star_lite\""
        );
    }

    #[test]
    fn plan_reports_distance_and_success() {
        let grid = GridMap::new(10, 10);
        let planner = Planner::new(Algorithm::AStar);
        let result = planner.plan(&grid, Cell::new(0, 0), Cell::new(9, 9));
        assert!(result.success);
        assert_eq!(result.path.len(), 10);
        assert!((result.distance - 9.0 * std::f64::consts::SQRT_2).abs() < 1e-9);
        assert!(result.planning_time_ms >= 0.0);
    }

    #[test]
    fn no_path_sets_success_false_with_zero_distance() {
        let mut grid = GridMap::new(10, 10);
        grid.set_obstacle_rect(0, 4, 10, 7);
        let planner = Planner::new(Algorithm::AStar);
        let result = planner.plan(&grid, Cell::new(0, 0), Cell::new(9, 9));
        assert!(!result.success);
        assert!(result.path.is_empty());
        assert_eq!(result.distance, 0.0);
    }

    #[test]
    fn seeded_plans_are_idempotent() {
        let mut grid = GridMap::new(25, 25);
        grid.random_obstacles(5, 3, Some(12));
        let config = PlannerConfig {
            seed: Some(77),
            ..PlannerConfig::default()
        };
        let planner = Planner::with_config(Algorithm::RrtStar, config);
        let a = planner.plan(&grid, Cell::new(1, 1), Cell::new(23, 23));
        let b = planner.plan(&grid, Cell::new(1, 1), Cell::new(23, 23));
        assert_eq!(a.path, b.path);
    }

    #[test]
    fn coverage_dispatch_honors_scan_direction() {
        let grid = GridMap::new(4, 4);
        let config = PlannerConfig {
            scan_direction: ScanDirection::Vertical,
            ..PlannerConfig::default()
        };
        let planner = Planner::with_config(Algorithm::Coverage, config);
        let result = planner.plan(&grid, Cell::new(0, 0), Cell::new(3, 3));
        assert_eq!(result.path.len(), 16);
        assert_eq!(result.path[1], Point::new(0.0, 1.0));
    }

    #[test]
    fn ant_colony_dispatch_uses_configured_waypoints() {
        let grid = GridMap::new(20, 20);
        let config = PlannerConfig {
            waypoints: vec![Cell::new(5, 15), Cell::new(15, 5)],
            seed: Some(3),
            ..PlannerConfig::default()
        };
        let planner = Planner::with_config(Algorithm::AntColony, config);
        let result = planner.plan(&grid, Cell::new(0, 0), Cell::new(19, 19));
        assert_eq!(result.path.len(), 4);
        assert_eq!(result.path[0], Point::new(0.0, 0.0));
        assert_eq!(*result.path.last().unwrap(), Point::new(19.0, 19.0));
    }
}
