//! End-to-end planner scenarios across all strategies.

use aeroplan_core::{
    coverage_rate, segment_collision_free, validate_path, Algorithm, Cell, GeoPoint, GeoRoute,
    GridMap, PathLimits, Planner, PlannerConfig,
};

/// A 40x40 map with two rectangular buildings away from the corners, so
/// every strategy has a feasible route between (2,2) and (37,37).
fn survey_map() -> GridMap {
    let mut map = GridMap::new(40, 40);
    map.set_obstacle_rect(10, 10, 16, 30);
    map.set_obstacle_rect(24, 5, 30, 20);
    map
}

#[test]
fn every_algorithm_plans_on_the_survey_map() {
    let map = survey_map();
    let start = Cell::new(2, 2);
    let goal = Cell::new(37, 37);

    for algorithm in Algorithm::ALL {
        let config = PlannerConfig {
            waypoints: vec![Cell::new(5, 35), Cell::new(35, 2)],
            seed: Some(42),
            ..PlannerConfig::default()
        };
        let planner = Planner::with_config(algorithm, config);
        let result = planner.plan(&map, start, goal);
        assert!(result.success, "{algorithm} found no path");
        assert!(result.distance > 0.0);
        assert_eq!(result.algorithm, algorithm);
    }
}

#[test]
fn grid_paths_never_enter_obstacles() {
    let map = survey_map();
    for algorithm in [Algorithm::AStar, Algorithm::DStarLite] {
        let planner = Planner::new(algorithm);
        let result = planner.plan(&map, Cell::new(2, 2), Cell::new(37, 37));
        assert!(result.success);
        for point in &result.path {
            assert!(
                map.is_free(point.x as i32, point.y as i32),
                "{algorithm} path enters a blocked cell at {point:?}"
            );
        }
    }
}

#[test]
fn sampling_path_survives_segment_revalidation() {
    let map = survey_map();
    let config = PlannerConfig {
        seed: Some(1),
        ..PlannerConfig::default()
    };
    let planner = Planner::with_config(Algorithm::RrtStar, config);
    let result = planner.plan(&map, Cell::new(2, 2), Cell::new(37, 37));
    assert!(result.success);
    for w in result.path.windows(2) {
        assert!(segment_collision_free(&map, w[0].x, w[0].y, w[1].x, w[1].y));
    }
}

#[test]
fn stochastic_planners_are_idempotent_with_a_seed() {
    let map = survey_map();
    for algorithm in [Algorithm::RrtStar, Algorithm::AntColony] {
        let config = PlannerConfig {
            waypoints: vec![Cell::new(5, 35), Cell::new(35, 2), Cell::new(20, 36)],
            seed: Some(1234),
            ..PlannerConfig::default()
        };
        let planner = Planner::with_config(algorithm, config);
        let a = planner.plan(&map, Cell::new(2, 2), Cell::new(37, 37));
        let b = planner.plan(&map, Cell::new(2, 2), Cell::new(37, 37));
        assert_eq!(a.path, b.path, "{algorithm} not reproducible");
    }
}

#[test]
fn inflated_map_keeps_paths_clear_of_margins() {
    let mut map = survey_map();
    map.inflate(1);
    let planner = Planner::new(Algorithm::AStar);
    let result = planner.plan(&map, Cell::new(2, 2), Cell::new(37, 37));
    assert!(result.success);
    // The inflated footprint includes the one-cell ring around each building.
    for point in &result.path {
        let (x, y) = (point.x as i32, point.y as i32);
        assert!(map.is_free(x, y));
        assert!(!(9..17).contains(&x) || !(9..31).contains(&y));
    }
}

#[test]
fn full_coverage_scan_visits_every_free_cell() {
    let map = survey_map();
    let planner = Planner::new(Algorithm::Coverage);
    let result = planner.plan(&map, Cell::new(2, 2), Cell::new(37, 37));
    assert!(result.success);
    assert_eq!(result.path.len(), map.free_cell_count());
    let cells: Vec<Cell> = result
        .path
        .iter()
        .map(|p| Cell::new(p.x as i32, p.y as i32))
        .collect();
    assert_eq!(coverage_rate(&map, &cells), 1.0);
}

#[test]
fn geographic_route_flow_from_planning_to_validation() {
    let waypoints = [
        GeoPoint { lat: 30.5728, lon: 104.0668 },
        GeoPoint { lat: 30.5780, lon: 104.0720 },
        GeoPoint { lat: 30.5820, lon: 104.0690 },
    ];
    let route = GeoRoute::build(&waypoints, 100.0, 8.0, 25.0);
    assert!(route.path.len() > waypoints.len());
    assert!(route.total_distance_m > 0.0);
    assert!(route.estimated_time_s > 0.0);

    let validation = validate_path(
        &route.path,
        &PathLimits {
            max_distance_m: 10_000.0,
            min_altitude_m: 30.0,
            max_altitude_m: 120.0,
            altitude_m: route.altitude_m,
        },
    );
    assert!(validation.valid, "{:?}", validation.errors);
    assert_eq!(validation.waypoints_count, route.path.len());
}
