//! Occupancy grid map with obstacle authoring operations.
//!
//! Cells are FREE or OCCUPIED. Out-of-range queries report "not free" so the
//! search loops never have to special-case the border.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

pub const FREE: u8 = 0;
pub const OCCUPIED: u8 = 1;

/// Build a random generator from an optional fixed seed.
///
/// Every stochastic algorithm in this crate goes through this so tests can
/// pin a seed and replay identical runs.
pub(crate) fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

/// 2-D occupancy grid, row-major.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridMap {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl GridMap {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![FREE; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.width + x as usize
    }

    /// True when the cell exists and is not occupied.
    pub fn is_free(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.cells[self.index(x, y)] == FREE
    }

    /// Mark a single cell occupied. Out-of-bounds coordinates are ignored.
    pub fn set_obstacle(&mut self, x: i32, y: i32) {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            self.cells[idx] = OCCUPIED;
        }
    }

    /// Mark a rectangle occupied. Corners may be given in either order; the
    /// upper bound is exclusive and the whole region is clamped to the map.
    pub fn set_obstacle_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        let x_lo = x1.min(x2).max(0);
        let x_hi = x1.max(x2).min(self.width as i32);
        let y_lo = y1.min(y2).max(0);
        let y_hi = y1.max(y2).min(self.height as i32);
        for y in y_lo..y_hi {
            for x in x_lo..x_hi {
                let idx = self.index(x, y);
                self.cells[idx] = OCCUPIED;
            }
        }
    }

    /// Mark every cell whose center lies within `radius` of (cx, cy).
    pub fn set_obstacle_circle(&mut self, cx: i32, cy: i32, radius: i32) {
        let y_lo = (cy - radius).max(0);
        let y_hi = (cy + radius + 1).min(self.height as i32);
        let x_lo = (cx - radius).max(0);
        let x_hi = (cx + radius + 1).min(self.width as i32);
        for y in y_lo..y_hi {
            for x in x_lo..x_hi {
                // Squared test in i64: radius^2 can overflow i32.
                let dx = (x - cx) as i64;
                let dy = (y - cy) as i64;
                if dx * dx + dy * dy <= radius as i64 * radius as i64 {
                    let idx = self.index(x, y);
                    self.cells[idx] = OCCUPIED;
                }
            }
        }
    }

    /// Morphological dilation by a square structuring element of side
    /// `2 * margin + 1`, baking a safety buffer into the map before search.
    /// Occupied cells only ever grow.
    pub fn inflate(&mut self, margin: i32) {
        if margin <= 0 {
            return;
        }
        let source = self.cells.clone();
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                if source[self.index(x, y)] != OCCUPIED {
                    continue;
                }
                let y_lo = (y - margin).max(0);
                let y_hi = (y + margin + 1).min(self.height as i32);
                let x_lo = (x - margin).max(0);
                let x_hi = (x + margin + 1).min(self.width as i32);
                for ny in y_lo..y_hi {
                    for nx in x_lo..x_hi {
                        let idx = self.index(nx, ny);
                        self.cells[idx] = OCCUPIED;
                    }
                }
            }
        }
    }

    /// Scatter `count` random rectangular obstacles of side 1..=max_size.
    /// Identical seed, count, and dimensions produce identical placement.
    pub fn random_obstacles(&mut self, count: usize, max_size: i32, seed: Option<u64>) {
        if self.width == 0 || self.height == 0 || max_size < 1 {
            return;
        }
        let mut rng = seeded_rng(seed);
        for _ in 0..count {
            let x = rng.random_range(0..self.width as i32);
            let y = rng.random_range(0..self.height as i32);
            let w = rng.random_range(1..=max_size);
            let h = rng.random_range(1..=max_size);
            self.set_obstacle_rect(x, y, x + w, y + h);
        }
    }

    /// Defensive copy of the raw cells, row-major. Callers cannot corrupt
    /// the map through the returned buffer.
    pub fn cells(&self) -> Vec<u8> {
        self.cells.clone()
    }

    /// Number of free cells on the map.
    pub fn free_cell_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == FREE).count()
    }
}
