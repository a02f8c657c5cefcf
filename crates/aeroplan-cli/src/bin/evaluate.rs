//! Evaluate planning algorithms over synthetic obstacle maps.

use aeroplan_core::{evaluate, Algorithm, EvalScenario};
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about = "Benchmark path planning algorithms", long_about = None)]
struct Args {
    /// Algorithm to evaluate (a_star, rrt_star, ant_colony, d_star_lite,
    /// coverage). Evaluates all of them when omitted.
    #[arg(long)]
    algorithm: Option<String>,

    /// Square map side length in cells
    #[arg(long, default_value_t = 100)]
    map_size: usize,

    /// Number of random rectangular obstacles
    #[arg(long, default_value_t = 20)]
    obstacles: usize,

    /// Maximum obstacle side length
    #[arg(long, default_value_t = 5)]
    max_obstacle_size: i32,

    /// Seed for obstacle placement and the stochastic planners
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Emit one JSON report per line instead of the text table
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let algorithms: Vec<Algorithm> = match &args.algorithm {
        Some(name) => vec![name.parse::<Algorithm>()?],
        None => Algorithm::ALL.to_vec(),
    };

    for algorithm in algorithms {
        let scenario = EvalScenario {
            algorithm,
            map_size: args.map_size,
            n_obstacles: args.obstacles,
            max_obstacle_size: args.max_obstacle_size,
            seed: args.seed,
        };
        let report = evaluate(&scenario);

        if args.json {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            println!("{}", "=".repeat(40));
            println!("Algorithm     : {}", report.algorithm);
            println!("Success       : {}", report.success);
            println!("Path length   : {} points", report.path_points);
            println!("Distance      : {:.2}", report.distance);
            println!("Planning time : {:.2} ms", report.planning_time_ms);
            if let Some(rate) = report.coverage_rate {
                println!("Coverage rate : {:.2}%", rate * 100.0);
            }
        }
    }

    Ok(())
}
