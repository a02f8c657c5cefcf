//! Boustrophedon full-coverage scanning.

use crate::grid::GridMap;
use crate::models::Cell;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Primary sweep axis of the serpentine scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanDirection {
    #[default]
    Horizontal,
    Vertical,
}

/// Serpentine ("lawnmower") scan emitting every free cell in traversal
/// order: even rows left-to-right, odd rows right-to-left (columns swap
/// roles for vertical scans), minimizing turns.
///
/// `start` is accepted for interface parity with the other planners but
/// does not move the scan origin; scanning always begins at the grid corner.
pub fn coverage_plan(grid: &GridMap, _start: Cell, direction: ScanDirection) -> Vec<Cell> {
    let cols = grid.width() as i32;
    let rows = grid.height() as i32;
    let mut path = Vec::new();

    match direction {
        ScanDirection::Horizontal => {
            for y in 0..rows {
                if y % 2 == 0 {
                    for x in 0..cols {
                        if grid.is_free(x, y) {
                            path.push(Cell::new(x, y));
                        }
                    }
                } else {
                    for x in (0..cols).rev() {
                        if grid.is_free(x, y) {
                            path.push(Cell::new(x, y));
                        }
                    }
                }
            }
        }
        ScanDirection::Vertical => {
            for x in 0..cols {
                if x % 2 == 0 {
                    for y in 0..rows {
                        if grid.is_free(x, y) {
                            path.push(Cell::new(x, y));
                        }
                    }
                } else {
                    for y in (0..rows).rev() {
                        if grid.is_free(x, y) {
                            path.push(Cell::new(x, y));
                        }
                    }
                }
            }
        }
    }

    path
}

/// Fraction of free cells visited by `path`, in [0, 1]. A map with no free
/// cells counts as vacuously covered (1.0).
pub fn coverage_rate(grid: &GridMap, path: &[Cell]) -> f64 {
    let mut free_cells = HashSet::new();
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            if grid.is_free(x, y) {
                free_cells.insert(Cell::new(x, y));
            }
        }
    }
    if free_cells.is_empty() {
        return 1.0;
    }

    let visited = path
        .iter()
        .filter(|cell| free_cells.contains(cell))
        .collect::<HashSet<_>>();
    visited.len() as f64 / free_cells.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_scan_serpentines_rows() {
        let grid = GridMap::new(4, 4);
        let path = coverage_plan(&grid, Cell::new(0, 0), ScanDirection::Horizontal);
        assert_eq!(path.len(), 16);
        assert_eq!(
            &path[0..4],
            &[
                Cell::new(0, 0),
                Cell::new(1, 0),
                Cell::new(2, 0),
                Cell::new(3, 0)
            ]
        );
        assert_eq!(
            &path[4..8],
            &[
                Cell::new(3, 1),
                Cell::new(2, 1),
                Cell::new(1, 1),
                Cell::new(0, 1)
            ]
        );
    }

    #[test]
    fn vertical_scan_serpentines_columns() {
        let grid = GridMap::new(3, 3);
        let path = coverage_plan(&grid, Cell::new(0, 0), ScanDirection::Vertical);
        assert_eq!(
            path,
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(0, 2),
                Cell::new(1, 2),
                Cell::new(1, 1),
                Cell::new(1, 0),
                Cell::new(2, 0),
                Cell::new(2, 1),
                Cell::new(2, 2),
            ]
        );
    }

    #[test]
    fn skips_occupied_cells_and_still_covers_all_free() {
        let mut grid = GridMap::new(6, 6);
        grid.set_obstacle_rect(1, 1, 4, 3);
        let path = coverage_plan(&grid, Cell::new(0, 0), ScanDirection::Horizontal);
        assert_eq!(path.len(), grid.free_cell_count());
        for cell in &path {
            assert!(grid.is_free(cell.x, cell.y));
        }
        assert_eq!(coverage_rate(&grid, &path), 1.0);
    }

    #[test]
    fn full_scan_rate_is_one() {
        let mut grid = GridMap::new(8, 8);
        grid.random_obstacles(4, 3, Some(2));
        let path = coverage_plan(&grid, Cell::new(0, 0), ScanDirection::Vertical);
        assert_eq!(coverage_rate(&grid, &path), 1.0);
    }

    #[test]
    fn partial_path_rate_is_proportional() {
        let grid = GridMap::new(4, 4);
        let path = vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(0, 0)];
        assert!((coverage_rate(&grid, &path) - 2.0 / 16.0).abs() < 1e-12);
    }

    #[test]
    fn no_free_cells_is_vacuously_covered() {
        let mut grid = GridMap::new(3, 3);
        grid.set_obstacle_rect(0, 0, 3, 3);
        assert_eq!(coverage_rate(&grid, &[]), 1.0);
        assert!(coverage_plan(&grid, Cell::new(0, 0), ScanDirection::Horizontal).is_empty());
    }
}
