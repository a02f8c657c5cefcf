//! Sampling-based anytime search (RRT*).
//!
//! Grows a tree of floating-point nodes rooted at the start, with
//! goal-biased uniform sampling and choose-parent rewiring. Near-optimal
//! only asymptotically; the caller fixes the iteration budget.

use crate::grid::{seeded_rng, GridMap};
use crate::models::{Cell, Point};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Fraction of iterations that sample the goal directly.
const GOAL_BIAS: f64 = 0.1;
/// Sub-step resolution of the straight-line collision check, in cells.
const COLLISION_STEP: f64 = 0.5;

/// Tuning knobs for the sampling search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RrtStarParams {
    pub max_iter: usize,
    pub step_size: f64,
    pub goal_threshold: f64,
    pub search_radius: f64,
}

impl Default for RrtStarParams {
    fn default() -> Self {
        Self {
            max_iter: 5000,
            step_size: 5.0,
            goal_threshold: 5.0,
            search_radius: 15.0,
        }
    }
}

/// Tree node. Parents are arena indices into the node vector, which keeps
/// the back-pointer chain free of reference cycles.
#[derive(Debug, Clone, Copy)]
struct TreeNode {
    x: f64,
    y: f64,
    parent: Option<usize>,
    cost: f64,
}

/// Check the straight segment between two continuous points against the
/// grid, sampling every `COLLISION_STEP` units and rounding to the nearest
/// cell. Leaving the map counts as a collision.
pub fn segment_collision_free(grid: &GridMap, x1: f64, y1: f64, x2: f64, y2: f64) -> bool {
    let dist = ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt();
    let steps = ((dist / COLLISION_STEP) as usize).max(1);
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let x = x1 + t * (x2 - x1);
        let y = y1 + t * (y2 - y1);
        if !grid.is_free(x.round() as i32, y.round() as i32) {
            return false;
        }
    }
    true
}

/// RRT* search from `start` to `goal`.
///
/// Runs exactly `params.max_iter` iterations and returns the chain of the
/// cheapest node found within `goal_threshold` of the goal, start-first.
/// Coordinates are floating point and not snapped to the grid. Returns an
/// empty path when no node reaches the goal region.
pub fn rrt_star_search(
    grid: &GridMap,
    start: Cell,
    goal: Cell,
    params: &RrtStarParams,
    seed: Option<u64>,
) -> Vec<Point> {
    // A grid with no extent has nothing to sample from.
    if grid.width() == 0 || grid.height() == 0 {
        return Vec::new();
    }

    let cols = grid.width() as f64;
    let rows = grid.height() as f64;
    let mut rng = seeded_rng(seed);

    let mut nodes = vec![TreeNode {
        x: start.x as f64,
        y: start.y as f64,
        parent: None,
        cost: 0.0,
    }];

    // (index, cost) of the cheapest node inside the goal region so far.
    let mut best_goal: Option<(usize, f64)> = None;

    for _ in 0..params.max_iter {
        let (rand_x, rand_y) = if rng.random::<f64>() < GOAL_BIAS {
            (goal.x as f64, goal.y as f64)
        } else {
            (rng.random_range(0.0..cols), rng.random_range(0.0..rows))
        };

        // Nearest node by squared distance; no square root needed to compare.
        let mut nearest_idx = 0usize;
        let mut nearest_d2 = f64::INFINITY;
        for (idx, node) in nodes.iter().enumerate() {
            let d2 = (node.x - rand_x).powi(2) + (node.y - rand_y).powi(2);
            if d2 < nearest_d2 {
                nearest_d2 = d2;
                nearest_idx = idx;
            }
        }
        let nearest = nodes[nearest_idx];

        // Steer toward the sample, clipping to step_size.
        let dx = rand_x - nearest.x;
        let dy = rand_y - nearest.y;
        let dist = (dx * dx + dy * dy).sqrt();
        if dist < 1e-6 {
            continue;
        }
        let reach = params.step_size.min(dist);
        let new_x = nearest.x + dx / dist * reach;
        let new_y = nearest.y + dy / dist * reach;

        if !(0.0..cols).contains(&new_x) || !(0.0..rows).contains(&new_y) {
            continue;
        }
        if !segment_collision_free(grid, nearest.x, nearest.y, new_x, new_y) {
            continue;
        }

        let mut new_node = TreeNode {
            x: new_x,
            y: new_y,
            parent: Some(nearest_idx),
            cost: nearest.cost + reach,
        };

        // Choose-parent rewiring: adopt any strictly cheaper collision-free
        // connection within the search radius.
        for (idx, node) in nodes.iter().enumerate() {
            let d = ((node.x - new_x).powi(2) + (node.y - new_y).powi(2)).sqrt();
            if d < params.search_radius
                && segment_collision_free(grid, node.x, node.y, new_x, new_y)
            {
                let candidate_cost = node.cost + d;
                if candidate_cost < new_node.cost {
                    new_node.parent = Some(idx);
                    new_node.cost = candidate_cost;
                }
            }
        }

        let new_idx = nodes.len();
        nodes.push(new_node);

        let goal_dist =
            ((new_x - goal.x as f64).powi(2) + (new_y - goal.y as f64).powi(2)).sqrt();
        if goal_dist < params.goal_threshold {
            let improves = match best_goal {
                Some((_, cost)) => new_node.cost < cost,
                None => true,
            };
            if improves {
                best_goal = Some((new_idx, new_node.cost));
            }
        }
    }

    let Some((best_idx, _)) = best_goal else {
        return Vec::new();
    };

    let mut path = Vec::new();
    let mut current = Some(best_idx);
    while let Some(idx) = current {
        let node = nodes[idx];
        path.push(Point::new(node.x, node.y));
        current = node.parent;
    }
    path.reverse();
    path
}
