pub mod ant_colony;
pub mod astar;
pub mod constraints;
pub mod coverage;
pub mod d_star_lite;
pub mod eval;
pub mod geo;
pub mod grid;
pub mod models;
pub mod planner;
pub mod rrt_star;

pub use ant_colony::{ant_colony_search, AntColonyParams};
pub use astar::a_star_search;
pub use constraints::{FlightConstraints, NoFlyZone};
pub use coverage::{coverage_plan, coverage_rate, ScanDirection};
pub use d_star_lite::d_star_lite_search;
pub use eval::{evaluate, EvalReport, EvalScenario};
pub use geo::{
    haversine_distance, validate_path, GeoPoint, GeoRoute, PathLimits, PathValidation,
};
pub use grid::GridMap;
pub use models::{path_distance, Cell, Point};
pub use planner::{Algorithm, PlanError, PlanResult, Planner, PlannerConfig};
pub use rrt_star::{rrt_star_search, segment_collision_free, RrtStarParams};
