//! Optimal grid search over the 8-connected occupancy grid.

use crate::grid::GridMap;
use crate::models::Cell;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};

/// 8-connected neighborhood with per-move edge cost: 1.0 for axis moves,
/// sqrt(2) for diagonals. The Euclidean heuristic is admissible and
/// consistent under this cost model, so the first pop of the goal is optimal.
pub(crate) const NEIGHBORS_8: [(i32, i32, f64); 8] = [
    (0, 1, 1.0),
    (1, 0, 1.0),
    (0, -1, 1.0),
    (-1, 0, 1.0),
    (1, 1, std::f64::consts::SQRT_2),
    (1, -1, std::f64::consts::SQRT_2),
    (-1, 1, std::f64::consts::SQRT_2),
    (-1, -1, std::f64::consts::SQRT_2),
];

/// Total-order wrapper so f64 scores can live in a BinaryHeap.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FloatOrd(pub f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Open-set entry. Ordered by f-score, then by insertion sequence so ties
/// resolve first-found and runs are deterministic for identical input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OpenCell {
    pub cell: Cell,
    pub g_score: FloatOrd,
    pub f_score: FloatOrd,
    pub seq: u64,
}

impl PartialOrd for OpenCell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenCell {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f_score
            .cmp(&other.f_score)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Walk predecessor links back from `current` and return the chain in
/// forward order.
pub(crate) fn reconstruct_path(came_from: &HashMap<Cell, Cell>, mut current: Cell) -> Vec<Cell> {
    let mut path = vec![current];
    while let Some(&prev) = came_from.get(&current) {
        current = prev;
        path.push(current);
    }
    path.reverse();
    path
}

fn heuristic(a: Cell, b: Cell) -> f64 {
    a.distance_to(b)
}

/// A* search from `start` to `goal`.
///
/// Returns the cell sequence start..=goal, or an empty vector when the goal
/// is unreachable. An empty path is a valid "no path" outcome, not an error.
pub fn a_star_search(grid: &GridMap, start: Cell, goal: Cell) -> Vec<Cell> {
    let mut open_set: BinaryHeap<Reverse<OpenCell>> = BinaryHeap::new();
    let mut came_from: HashMap<Cell, Cell> = HashMap::new();
    let mut g_score: HashMap<Cell, f64> = HashMap::new();
    let mut seq = 0u64;

    g_score.insert(start, 0.0);
    open_set.push(Reverse(OpenCell {
        cell: start,
        g_score: FloatOrd(0.0),
        f_score: FloatOrd(heuristic(start, goal)),
        seq,
    }));

    while let Some(Reverse(current)) = open_set.pop() {
        let best_g = g_score
            .get(&current.cell)
            .copied()
            .unwrap_or(f64::INFINITY);
        if current.g_score.0 > best_g + 1e-9 {
            continue; // stale entry
        }

        if current.cell == goal {
            return reconstruct_path(&came_from, current.cell);
        }

        for (dx, dy, cost) in NEIGHBORS_8 {
            let next = Cell::new(current.cell.x + dx, current.cell.y + dy);
            if !grid.is_free(next.x, next.y) {
                continue;
            }
            let tentative_g = best_g + cost;
            if tentative_g < g_score.get(&next).copied().unwrap_or(f64::INFINITY) {
                g_score.insert(next, tentative_g);
                came_from.insert(next, current.cell);
                seq += 1;
                open_set.push(Reverse(OpenCell {
                    cell: next,
                    g_score: FloatOrd(tentative_g),
                    f_score: FloatOrd(tentative_g + heuristic(next, goal)),
                    seq,
                }));
            }
        }
    }

    Vec::new()
}
