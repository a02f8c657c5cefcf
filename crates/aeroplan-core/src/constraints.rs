//! Flight constraint predicates.
//!
//! Pure configuration plus advisory checks consumed by request validation.
//! The search algorithms never consult these, which keeps domain policy out
//! of the search loops.

use serde::{Deserialize, Serialize};

/// Rough return-to-home consumption estimate, percent of battery per minute.
const BATTERY_PCT_PER_MIN: f64 = 2.0;

/// Circular exclusion region a planned position must not enter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NoFlyZone {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

/// Operational limits for one vehicle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightConstraints {
    pub max_altitude_m: f64,
    pub min_altitude_m: f64,
    pub max_speed_mps: f64,
    pub max_distance_m: f64,
    /// Battery capacity as a percentage (full charge = 100).
    pub battery_capacity_pct: f64,
    /// Minimum reserve that must remain after returning home.
    pub min_battery_pct: f64,
    pub no_fly_zones: Vec<NoFlyZone>,
    /// Required clearance to obstacles, in meters.
    pub safety_distance_m: f64,
}

impl Default for FlightConstraints {
    fn default() -> Self {
        Self {
            max_altitude_m: 120.0,
            min_altitude_m: 30.0,
            max_speed_mps: 15.0,
            max_distance_m: 5000.0,
            battery_capacity_pct: 100.0,
            min_battery_pct: 20.0,
            no_fly_zones: Vec::new(),
            safety_distance_m: 5.0,
        }
    }
}

impl FlightConstraints {
    /// Altitude within the configured band.
    pub fn check_altitude(&self, altitude_m: f64) -> bool {
        self.min_altitude_m <= altitude_m && altitude_m <= self.max_altitude_m
    }

    /// Whether remaining battery suffices to fly home and keep the reserve.
    ///
    /// Uses a fixed consumption-rate heuristic, not a physical energy model.
    pub fn check_battery(&self, remaining_pct: f64, distance_to_home_m: f64, speed_mps: f64) -> bool {
        let time_to_home_s = distance_to_home_m / speed_mps.max(0.1);
        let battery_needed = time_to_home_s / 60.0 * BATTERY_PCT_PER_MIN;
        remaining_pct - battery_needed >= self.min_battery_pct
    }

    /// True iff the point lies outside every configured no-fly zone.
    pub fn check_no_fly_zone(&self, x: f64, y: f64) -> bool {
        for zone in &self.no_fly_zones {
            let dx = x - zone.cx;
            let dy = y - zone.cy;
            if dx * dx + dy * dy <= zone.radius * zone.radius {
                return false;
            }
        }
        true
    }

    /// Conjunction of the altitude and no-fly-zone checks.
    pub fn is_valid_position(&self, x: f64, y: f64, altitude_m: f64) -> bool {
        self.check_altitude(altitude_m) && self.check_no_fly_zone(x, y)
    }
}
