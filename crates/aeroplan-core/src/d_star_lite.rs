//! Simplified D* Lite: a single reverse A* pass from goal to start.
//!
//! Supports re-planning scenarios where the target moves more often than the
//! source. True incremental repair (rhs/g consistency maintenance and a
//! key-updatable priority queue) is not implemented; every call searches
//! from scratch.

use crate::astar::{FloatOrd, OpenCell, NEIGHBORS_8};
use crate::grid::GridMap;
use crate::models::Cell;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

/// Reverse-direction search from `goal` back to `start`.
///
/// The predecessor walk from the start already runs start -> goal, so the
/// result needs no reversal. Returns an empty path when unreachable.
pub fn d_star_lite_search(grid: &GridMap, start: Cell, goal: Cell) -> Vec<Cell> {
    let mut open_set: BinaryHeap<Reverse<OpenCell>> = BinaryHeap::new();
    let mut came_from: HashMap<Cell, Cell> = HashMap::new();
    let mut g_score: HashMap<Cell, f64> = HashMap::new();
    let mut seq = 0u64;

    g_score.insert(goal, 0.0);
    open_set.push(Reverse(OpenCell {
        cell: goal,
        g_score: FloatOrd(0.0),
        f_score: FloatOrd(goal.distance_to(start)),
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

        if current.cell == start {
            // came_from chains toward the goal here, so the walk is already
            // in forward order.
            let mut path = vec![current.cell];
            let mut cell = current.cell;
            while let Some(&next) = came_from.get(&cell) {
                cell = next;
                path.push(cell);
            }
            return path;
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
                    f_score: FloatOrd(tentative_g + next.distance_to(start)),
                    seq,
                }));
            }
        }
    }

    Vec::new()
}
