use atcsim::{AirportRegistry, Navaid, NavaidKind, Runway, SimulationConfig};
use glam::DVec2;

/// Threshold of runway 27R in the test airport
pub const THRESHOLD_27R: DVec2 = DVec2::new(30.0, 30.0);

pub const FIELD_ELEVATION: f64 = 80.0;

/// A single-airport registry in the middle of the default 60x60 area.
///
/// 27R/09L are parallel to 27L/09R, one unit to the south.
pub fn create_test_registry() -> AirportRegistry {
    AirportRegistry::new("TEST", FIELD_ELEVATION)
        .with_runway(Runway::from_threshold("27R", THRESHOLD_27R, 2.0).unwrap())
        .unwrap()
        .with_runway(Runway::from_threshold("09L", DVec2::new(28.0, 30.0), 2.0).unwrap())
        .unwrap()
        .with_runway(Runway::from_threshold("27L", DVec2::new(30.0, 29.0), 2.0).unwrap())
        .unwrap()
        .with_navaid(Navaid::new("LAM", NavaidKind::Vor, DVec2::new(45.0, 45.0)))
        .unwrap()
        .with_navaid(Navaid::new("BNN", NavaidKind::Vor, DVec2::new(15.0, 45.0)))
        .unwrap()
        .with_navaid(Navaid::new("EPM", NavaidKind::Fix, DVec2::new(20.0, 15.0)))
        .unwrap()
}

/// Default config with a fixed seed and no spawning.
pub fn create_quiet_config() -> SimulationConfig {
    let mut config = SimulationConfig::default();
    config.seed = Some(42);
    config.spawn.enabled = false;
    config
}
