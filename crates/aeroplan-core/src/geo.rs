//! Geographic helpers for the web-facing route surface.
//!
//! The planner itself works in the grid's local frame; this module covers
//! the lat/lon side: great-circle distances, leg interpolation, and the
//! accumulated-error path validation contract.

use serde::{Deserialize, Serialize};

pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance in meters between two points given in decimal
/// degrees (Haversine formula).
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();
    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * a.sqrt().atan2((1.0 - a).sqrt())
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// A geographic route ready for the flight layer: interpolated path,
/// total great-circle distance, and estimated flight time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoRoute {
    pub path: Vec<GeoPoint>,
    pub total_distance_m: f64,
    pub estimated_time_s: f64,
    pub altitude_m: f64,
}

impl GeoRoute {
    /// Interpolate each leg at roughly `spacing_m` meter intervals and
    /// aggregate distance/time. Fewer than 2 waypoints produce a degenerate
    /// route with zero distance.
    pub fn build(waypoints: &[GeoPoint], altitude_m: f64, speed_mps: f64, spacing_m: f64) -> Self {
        if waypoints.len() < 2 {
            return Self {
                path: waypoints.to_vec(),
                total_distance_m: 0.0,
                estimated_time_s: 0.0,
                altitude_m,
            };
        }

        let spacing = spacing_m.max(1.0);
        let mut path = vec![waypoints[0]];
        let mut total_distance_m = 0.0;

        for leg in waypoints.windows(2) {
            let (from, to) = (leg[0], leg[1]);
            let leg_m = haversine_distance(from.lat, from.lon, to.lat, to.lon);
            total_distance_m += leg_m;

            let steps = ((leg_m / spacing).ceil() as usize).max(1);
            for i in 1..=steps {
                let t = i as f64 / steps as f64;
                path.push(GeoPoint {
                    lat: from.lat + t * (to.lat - from.lat),
                    lon: from.lon + t * (to.lon - from.lon),
                });
            }
        }

        let speed = speed_mps.max(0.1);
        Self {
            path,
            total_distance_m,
            estimated_time_s: total_distance_m / speed,
            altitude_m,
        }
    }
}

/// Limits a candidate path is validated against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathLimits {
    pub max_distance_m: f64,
    pub min_altitude_m: f64,
    pub max_altitude_m: f64,
    /// Planned cruise altitude of the candidate path.
    pub altitude_m: f64,
}

/// Validation outcome. Errors are accumulated, never fail-fast, so one
/// response reports every violation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathValidation {
    pub valid: bool,
    pub errors: Vec<String>,
    pub total_distance_m: f64,
    pub waypoints_count: usize,
}

/// Validate a candidate path against distance and altitude limits.
pub fn validate_path(points: &[GeoPoint], limits: &PathLimits) -> PathValidation {
    let mut errors = Vec::new();

    if points.len() < 2 {
        errors.push("path needs at least 2 waypoints".to_string());
    }

    let mut total_distance_m = 0.0;
    for leg in points.windows(2) {
        total_distance_m += haversine_distance(leg[0].lat, leg[0].lon, leg[1].lat, leg[1].lon);
    }

    if total_distance_m > limits.max_distance_m {
        errors.push(format!(
            "total distance {:.0}m exceeds maximum {:.0}m",
            total_distance_m, limits.max_distance_m
        ));
    }
    if limits.altitude_m > limits.max_altitude_m {
        errors.push(format!(
            "altitude {:.1}m exceeds max altitude {:.1}m",
            limits.altitude_m, limits.max_altitude_m
        ));
    }
    if limits.altitude_m < limits.min_altitude_m {
        errors.push(format!(
            "altitude {:.1}m is below min altitude {:.1}m",
            limits.altitude_m, limits.min_altitude_m
        ));
    }

    PathValidation {
        valid: errors.is_empty(),
        errors,
        total_distance_m,
        waypoints_count: points.len(),
    }
}
