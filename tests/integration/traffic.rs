use atcsim::{utils::heading_delta, Aircraft, SimError, SimulationConfig, SpawnDirection};
use glam::DVec2;

use crate::common::{assert_aircraft_valid, run_until, TestSimBuilder};

fn head_on(west_altitude: f64, east_altitude: f64) -> (Aircraft, Aircraft) {
    (
        Aircraft::new("BA1", DVec2::new(20.0, 30.0), 90.0, west_altitude, 250.0),
        Aircraft::new("LH2", DVec2::new(26.0, 30.0), 270.0, east_altitude, 250.0),
    )
}

/// Edge an aircraft came from, judged by its initial heading.
fn spawn_edge(aircraft: &Aircraft) -> SpawnDirection {
    SpawnDirection::ALL
        .into_iter()
        .min_by(|a, b| {
            let da = heading_delta(aircraft.heading(), a.inbound_heading());
            let db = heading_delta(aircraft.heading(), b.inbound_heading());
            da.total_cmp(&db)
        })
        .unwrap()
}

#[test]
fn test_head_on_at_same_level_crashes_and_halts() {
    let (west, east) = head_on(5000.0, 5000.0);
    let mut test = TestSimBuilder::new()
        .with_aircraft(west)
        .with_aircraft(east)
        .build();

    let (report, crashed) = run_until(&mut test.sim, 1.0, 60, |_, r| !r.crashes.is_empty());
    assert!(crashed);
    assert_eq!(report.crashes.len(), 1);
    assert!(test.sim.is_halted());
    assert!(test.sim.score().violation_seconds > 0.0);

    let message = test.sim.score().crash.clone().unwrap();
    assert!(message.contains("BA1") && message.contains("LH2"));
    assert_eq!(test.get("BA1").crash(), Some("collided with LH2"));
    assert_eq!(test.get("LH2").crash(), Some("collided with BA1"));

    // Crashed aircraft ignore clearances
    assert!(test.sim.issue("BA1", "C 180").is_err());
}

#[test]
fn test_head_on_with_1001_feet_passes_cleanly() {
    let (west, east) = head_on(5000.0, 6001.0);
    let mut test = TestSimBuilder::new()
        .with_aircraft(west)
        .with_aircraft(east)
        .build();

    let report = test.run_steps(80);
    assert!(report.crashes.is_empty());
    assert_eq!(test.sim.score().violation_seconds, 0.0);
    assert_eq!(test.sim.score().crash, None);
    // They really did pass each other
    assert!(test.get("BA1").position().x > test.get("LH2").position().x);
}

#[test]
fn test_head_on_with_999_feet_is_a_violation() {
    let (west, east) = head_on(5000.0, 5999.0);
    let mut test = TestSimBuilder::new()
        .with_aircraft(west)
        .with_aircraft(east)
        .build();

    let report = test.run_steps(80);
    assert!(report.crashes.is_empty());
    assert!(test.sim.score().violation_seconds > 0.0);
    assert!(!test.sim.is_halted());
}

#[test]
fn test_spawned_traffic_is_spread_out() {
    let mut config = SimulationConfig::default();
    config.seed = Some(3);
    config.spawn.interval = 20.0;
    let mut test = TestSimBuilder::new().with_config(config).build();

    let report = test.run_steps(90);
    assert_eq!(report.spawned.len(), 5);
    assert!(report.crashes.is_empty());

    let spawned: Vec<&Aircraft> = report.spawned.iter().map(|c| test.get(c)).collect();
    for aircraft in &spawned {
        assert_aircraft_valid(aircraft);
        assert_eq!(aircraft.airspeed(), 250.0);
    }
    for pair in spawned.windows(2) {
        assert!((pair[0].altitude() - pair[1].altitude()).abs() >= 1000.0);
        assert_ne!(spawn_edge(pair[0]), spawn_edge(pair[1]));
    }
}

#[test]
fn test_same_seed_same_traffic() {
    let run = || {
        let mut config = SimulationConfig::default();
        config.seed = Some(11);
        config.spawn.interval = 15.0;
        let mut test = TestSimBuilder::new().with_config(config).build();
        test.run_steps(50);
        test.sim.snapshots()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_single_edge_spawning() {
    let mut config = SimulationConfig::default();
    config.seed = Some(9);
    config.spawn.interval = 10.0;
    let mut test = TestSimBuilder::new().with_config(config).build();

    for direction in [SpawnDirection::North, SpawnDirection::South, SpawnDirection::East] {
        test.sim.disable_spawn_direction(direction).unwrap();
    }
    assert!(matches!(
        test.sim.disable_spawn_direction(SpawnDirection::West),
        Err(SimError::InvalidConfig(_))
    ));

    let report = test.run_steps(30);
    assert_eq!(report.spawned.len(), 3);
    for callsign in &report.spawned {
        let aircraft = test.get(callsign);
        assert_eq!(spawn_edge(aircraft), SpawnDirection::West);
        assert!(aircraft.position().x < 20.0);
    }
}

#[test]
fn test_departing_traffic_counts_as_exit() {
    let mut test = TestSimBuilder::new()
        .with_aircraft(Aircraft::new("BA1", DVec2::new(30.0, 58.0), 0.0, 6000.0, 250.0))
        .build();
    let report = test.run_until_gone("BA1", 100);
    assert_eq!(report.exited, vec!["BA1"]);
    assert_eq!(test.sim.score().improper_exits, 1);
    assert_eq!(test.sim.score().landed, 0);
}
