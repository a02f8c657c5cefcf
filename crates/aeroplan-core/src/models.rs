//! Core data models shared by the planning algorithms.

use serde::{Deserialize, Serialize};

/// Integer cell coordinate on the occupancy grid.
///
/// The grid-based algorithms work on cells; out-of-range coordinates are
/// representable (they are treated as blocked by the map, not as errors).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another cell.
    pub fn distance_to(&self, other: Cell) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Continuous planar coordinate in the grid's local frame.
///
/// Planner output uses floating point throughout so the sampling-based
/// planner can report sub-cell precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<Cell> for Point {
    fn from(cell: Cell) -> Self {
        Point::new(cell.x as f64, cell.y as f64)
    }
}

/// Sum of consecutive-point Euclidean distances; 0 for degenerate paths.
pub fn path_distance(path: &[Point]) -> f64 {
    if path.len() < 2 {
        return 0.0;
    }
    path.windows(2).map(|w| w[0].distance_to(w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_distance_is_euclidean() {
        let a = Cell::new(0, 0);
        let b = Cell::new(3, 4);
        assert!((a.distance_to(b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn path_distance_degenerate_inputs() {
        assert_eq!(path_distance(&[]), 0.0);
        assert_eq!(path_distance(&[Point::new(1.0, 1.0)]), 0.0);
    }

    #[test]
    fn path_distance_sums_segments() {
        let path = vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(3.0, 10.0),
        ];
        assert!((path_distance(&path) - 11.0).abs() < 1e-12);
    }
}
