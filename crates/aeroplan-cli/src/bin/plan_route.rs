//! One-shot geographic route generation and validation.

use aeroplan_core::{validate_path, FlightConstraints, GeoPoint, GeoRoute, PathLimits};
use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about = "Build and validate a geographic route", long_about = None)]
struct Args {
    /// Waypoints as lat,lon pairs; repeat at least twice
    #[arg(long = "waypoint", required = true)]
    waypoints: Vec<String>,

    /// Cruise altitude in meters
    #[arg(long, default_value_t = 100.0)]
    altitude: f64,

    /// Cruise speed in m/s
    #[arg(long, default_value_t = 8.0)]
    speed: f64,

    /// Interpolation spacing in meters
    #[arg(long, default_value_t = 50.0)]
    spacing: f64,
}

fn parse_waypoint(raw: &str) -> Result<GeoPoint> {
    let (lat, lon) = raw
        .split_once(',')
        .with_context(|| format!("waypoint '{raw}' is not lat,lon"))?;
    Ok(GeoPoint {
        lat: lat.trim().parse().context("invalid latitude")?,
        lon: lon.trim().parse().context("invalid longitude")?,
    })
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let waypoints: Vec<GeoPoint> = args
        .waypoints
        .iter()
        .map(|raw| parse_waypoint(raw))
        .collect::<Result<_>>()?;
    if waypoints.len() < 2 {
        bail!("need at least 2 waypoints");
    }

    let constraints = FlightConstraints::default();
    let route = GeoRoute::build(&waypoints, args.altitude, args.speed, args.spacing);
    let validation = validate_path(
        &waypoints,
        &PathLimits {
            max_distance_m: constraints.max_distance_m,
            min_altitude_m: constraints.min_altitude_m,
            max_altitude_m: constraints.max_altitude_m,
            altitude_m: args.altitude,
        },
    );

    let output = serde_json::json!({
        "route": route,
        "validation": validation,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
