pub mod holding;
pub mod ils;
pub mod kinematics;
pub mod navigation;

use tracing::info;

use crate::{
    components::aircraft::Aircraft, environment::AirportRegistry, resources::SimulationConfig,
};

pub use holding::update_hold;
pub use ils::{crosses_centerline, update_final_approach, update_ils, within_capture_gate};
pub use kinematics::{
    decelerate_on_ground, integrate_position, short_way, update_airspeed, update_altitude,
    update_heading,
};
pub use navigation::update_direct_to;

/// Advances one aircraft by `dt` seconds.
///
/// The navigation state machines run first and only rewrite targets. The
/// rate-limited convergence then moves heading, altitude and airspeed toward
/// those targets, and the position is integrated last.
///
/// # Arguments
/// * `aircraft` - The aircraft to advance.
/// * `registry` - Runways and waypoints the aircraft may reference by name.
/// * `config` - Performance, approach and area parameters.
/// * `dt` - The time step in seconds.
pub fn update_aircraft(
    aircraft: &mut Aircraft,
    registry: &AirportRegistry,
    config: &SimulationConfig,
    dt: f64,
) {
    if aircraft.landed || aircraft.crash.is_some() {
        return;
    }
    let performance = &config.performance;

    if aircraft.on_ground.is_some() {
        if decelerate_on_ground(aircraft, performance, dt) {
            aircraft.landed = true;
            info!(
                "{} landed runway {}",
                aircraft.callsign,
                aircraft.on_ground.as_deref().unwrap_or_default()
            );
            return;
        }
        integrate_position(aircraft, &config.area, performance, dt);
        return;
    }

    update_final_approach(aircraft, registry, &config.area, &config.approach);

    if aircraft.on_ground.is_none() {
        update_direct_to(aircraft, registry, &config.area, &config.approach);
        update_hold(aircraft, &config.approach, dt);
        update_ils(aircraft, registry, &config.area, &config.approach);

        update_heading(aircraft, performance, dt);
        update_altitude(aircraft, performance, dt);
        update_airspeed(aircraft, performance, dt);
    }

    integrate_position(aircraft, &config.area, performance, dt);

    debug_assert!((0.0..360.0).contains(&aircraft.heading));
    debug_assert!(aircraft.altitude >= 0.0 && aircraft.airspeed >= 0.0);
}

impl Aircraft {
    /// See [`update_aircraft`].
    pub fn update(&mut self, registry: &AirportRegistry, config: &SimulationConfig, dt: f64) {
        update_aircraft(self, registry, config, dt);
    }
}
