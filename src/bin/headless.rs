use glam::DVec2;
use std::env;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use atcsim::{AirportRegistry, Navaid, NavaidKind, Runway, SimError, Simulation, SimulationConfig};

const DEFAULT_DURATION: f64 = 600.0;

/// Usage: `atcsim_headless [config.yaml] [airport.yaml] [seconds]`
///
/// Runs the simulation without any display, logging traffic as it comes
/// and goes, then prints the final score and traffic as JSON.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();

    let config = match args.first() {
        Some(path) => SimulationConfig::load(path).map_err(|e| {
            error!("Failed to load config {}: {}", path, e);
            e
        })?,
        None => SimulationConfig::default(),
    };
    let registry = match args.get(1) {
        Some(path) => load_registry(path).map_err(|e| {
            error!("Failed to load airport {}: {}", path, e);
            e
        })?,
        None => demo_airport()?,
    };
    let duration = match args.get(2) {
        Some(seconds) => seconds.parse::<f64>()?,
        None => DEFAULT_DURATION,
    };

    let mut sim = Simulation::new(config, registry)?;
    info!("Running {:.0} s with seed {}", duration, sim.seed());

    let dt = sim.config().time.time_step;
    while sim.elapsed_seconds() < duration && !sim.is_halted() {
        let report = sim.step(dt);
        for callsign in &report.exited {
            info!("{} lost", callsign);
        }
        for conflict in &report.conflicts {
            debug!(
                "Conflict {} / {}: {:.1} nm {:.0} ft",
                conflict.first,
                conflict.second,
                conflict.horizontal_nm,
                conflict.vertical_ft
            );
        }
    }

    let score = sim.score();
    info!(
        "Finished after {:.0} s: {} landed, {} exits, {:.0} s in conflict",
        sim.elapsed_seconds(),
        score.landed,
        score.improper_exits,
        score.violation_seconds
    );

    let summary = serde_json::json!({
        "elapsed": sim.elapsed_seconds(),
        "score": score,
        "aircraft": sim.snapshots(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn load_registry(path: &str) -> Result<AirportRegistry, SimError> {
    if path.ends_with(".json") {
        AirportRegistry::load_json(path)
    } else {
        AirportRegistry::load(path)
    }
}

/// Twin parallel runways in the middle of the default area with a VOR in
/// each corner.
fn demo_airport() -> Result<AirportRegistry, SimError> {
    let registry = AirportRegistry::new("DEMO", 80.0)
        .with_runway(Runway::from_threshold("27R", DVec2::new(32.0, 30.5), 2.0)?)?
        .with_runway(Runway::from_threshold("09L", DVec2::new(30.0, 30.5), 2.0)?)?
        .with_runway(Runway::from_threshold("27L", DVec2::new(32.0, 29.5), 2.0)?)?
        .with_runway(Runway::from_threshold("09R", DVec2::new(30.0, 29.5), 2.0)?)?
        .with_navaid(Navaid::new("NORTH", NavaidKind::Vor, DVec2::new(15.0, 45.0)))?
        .with_navaid(Navaid::new("EAST", NavaidKind::Vor, DVec2::new(45.0, 45.0)))?
        .with_navaid(Navaid::new("SOUTH", NavaidKind::Vor, DVec2::new(45.0, 15.0)))?
        .with_navaid(Navaid::new("WEST", NavaidKind::Vor, DVec2::new(15.0, 15.0)))?;
    Ok(registry)
}
