//! Ant-colony optimization of the waypoint visiting order.
//!
//! This does not route cell-by-cell: it solves the restricted TSP over
//! {start, waypoints.., goal} with the first and last stops fixed. Pheromone
//! and distance matrices are local to one call and discarded on return.

use crate::astar::a_star_search;
use crate::grid::{seeded_rng, GridMap};
use crate::models::Cell;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Tuning knobs for the colony.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AntColonyParams {
    pub n_ants: usize,
    pub n_iterations: usize,
    /// Pheromone weight.
    pub alpha: f64,
    /// Heuristic (inverse distance) weight.
    pub beta: f64,
    /// Per-round uniform pheromone decay fraction.
    pub evaporation: f64,
    /// Reinforcement constant: best tour edges gain q / best_distance.
    pub q: f64,
}

impl Default for AntColonyParams {
    fn default() -> Self {
        Self {
            n_ants: 30,
            n_iterations: 100,
            alpha: 1.0,
            beta: 2.0,
            evaporation: 0.5,
            q: 100.0,
        }
    }
}

/// Optimize the visiting order over mandatory waypoints.
///
/// With no waypoints this degrades to plain grid A* between start and goal;
/// that fallback is deliberate, not an error. If no tour is ever recorded
/// the fixed endpoints `[start, goal]` are returned.
pub fn ant_colony_search(
    grid: &GridMap,
    start: Cell,
    goal: Cell,
    waypoints: &[Cell],
    params: &AntColonyParams,
    seed: Option<u64>,
) -> Vec<Cell> {
    if waypoints.is_empty() {
        return a_star_search(grid, start, goal);
    }

    let mut all_points = Vec::with_capacity(waypoints.len() + 2);
    all_points.push(start);
    all_points.extend_from_slice(waypoints);
    all_points.push(goal);
    let n = all_points.len();

    // Straight-line distance matrix, flat row-major.
    let mut dist = vec![0.0f64; n * n];
    for i in 0..n {
        for j in 0..n {
            if i != j {
                dist[i * n + j] = all_points[i].distance_to(all_points[j]);
            }
        }
    }

    let mut pheromone = vec![1.0f64; n * n];
    let mut rng = seeded_rng(seed);

    let mut best_order: Option<Vec<usize>> = None;
    let mut best_distance = f64::INFINITY;

    for _ in 0..params.n_iterations {
        for _ in 0..params.n_ants {
            let order = construct_tour(n, &dist, &pheromone, params, &mut rng);
            let total: f64 = order
                .windows(2)
                .map(|w| dist[w[0] * n + w[1]])
                .sum();
            if total < best_distance {
                best_distance = total;
                best_order = Some(order);
            }
        }

        // Uniform evaporation, then reinforce the best tour's edges.
        for value in pheromone.iter_mut() {
            *value *= 1.0 - params.evaporation;
        }
        if let Some(order) = &best_order {
            for w in order.windows(2) {
                pheromone[w[0] * n + w[1]] += params.q / best_distance;
            }
        }
    }

    match best_order {
        Some(order) => order.into_iter().map(|i| all_points[i]).collect(),
        None => vec![start, goal],
    }
}

/// Build one tour: start at index 0, pick unvisited middle points by
/// roulette-wheel sampling, finish at index n-1.
fn construct_tour(
    n: usize,
    dist: &[f64],
    pheromone: &[f64],
    params: &AntColonyParams,
    rng: &mut impl Rng,
) -> Vec<usize> {
    let mut visited = vec![false; n];
    visited[0] = true;
    let mut current = 0usize;
    let mut order = Vec::with_capacity(n);
    order.push(0);

    let mut weights = Vec::with_capacity(n);
    while order.len() < n - 1 {
        let unvisited: Vec<usize> = (1..n - 1).filter(|&j| !visited[j]).collect();

        weights.clear();
        let mut total = 0.0;
        for &j in &unvisited {
            let tau = pheromone[current * n + j].powf(params.alpha);
            let eta = (1.0 / (dist[current * n + j] + 1e-6)).powf(params.beta);
            let weight = tau * eta;
            weights.push(weight);
            total += weight;
        }

        let mut r = rng.random::<f64>() * total;
        let mut next = *unvisited.last().expect("middle points remain");
        for (&weight, &j) in weights.iter().zip(&unvisited) {
            if r <= weight {
                next = j;
                break;
            }
            r -= weight;
        }

        order.push(next);
        visited[next] = true;
        current = next;
    }

    order.push(n - 1);
    order
}
