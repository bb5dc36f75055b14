use crate::{
    components::aircraft::{Aircraft, TurnDirection},
    resources::{AreaConfig, PerformanceConfig},
    utils::{approach, normalize_heading, project, SECONDS_PER_HOUR},
};

/// Turn direction that reaches `target` from `heading` the short way.
/// Exactly opposite headings turn right.
pub fn short_way(heading: f64, target: f64) -> TurnDirection {
    if (target - heading).rem_euclid(360.0) <= 180.0 {
        TurnDirection::Right
    } else {
        TurnDirection::Left
    }
}

/// Rate-limited heading convergence.
///
/// A forced turn direction is honoured until the target heading is reached,
/// otherwise the short way is recomputed every tick. The heading never
/// overshoots: once the remaining arc fits into one tick it snaps to target.
pub fn update_heading(aircraft: &mut Aircraft, config: &PerformanceConfig, dt: f64) {
    if aircraft.heading == aircraft.target_heading {
        aircraft.turn_direction = None;
        return;
    }

    let direction = aircraft
        .turn_direction
        .unwrap_or_else(|| short_way(aircraft.heading, aircraft.target_heading));

    let remaining = match direction {
        TurnDirection::Right => (aircraft.target_heading - aircraft.heading).rem_euclid(360.0),
        TurnDirection::Left => (aircraft.heading - aircraft.target_heading).rem_euclid(360.0),
    };
    let max_turn = config.turn_rate * dt;

    if remaining <= max_turn {
        aircraft.heading = aircraft.target_heading;
        aircraft.turn_direction = None;
        return;
    }

    let signed_turn = match direction {
        TurnDirection::Right => max_turn,
        TurnDirection::Left => -max_turn,
    };
    aircraft.heading = normalize_heading(aircraft.heading + signed_turn);
}

/// Rate-limited climb or descent, doubled while expediting.
pub fn update_altitude(aircraft: &mut Aircraft, config: &PerformanceConfig, dt: f64) {
    if aircraft.altitude == aircraft.target_altitude {
        aircraft.expedite_altitude = false;
        return;
    }

    let mut rate = if aircraft.target_altitude > aircraft.altitude {
        config.climb_rate
    } else {
        config.descent_rate
    };
    if aircraft.expedite_altitude {
        rate *= config.expedite_factor;
    }

    aircraft.altitude = approach(aircraft.altitude, aircraft.target_altitude, rate * dt).max(0.0);

    if aircraft.altitude == aircraft.target_altitude {
        aircraft.expedite_altitude = false;
    }
}

/// Rate-limited acceleration or deceleration.
///
/// Expedite doubles the rate, but slowing down while also descending only
/// gets a fraction of the expedited rate.
pub fn update_airspeed(aircraft: &mut Aircraft, config: &PerformanceConfig, dt: f64) {
    if aircraft.airspeed == aircraft.target_airspeed {
        aircraft.expedite_speed = false;
        return;
    }

    let mut rate = config.speed_change_rate;
    if aircraft.expedite_speed {
        rate *= config.expedite_factor;
        let descending = aircraft.target_altitude < aircraft.altitude;
        let slowing = aircraft.target_airspeed < aircraft.airspeed;
        if descending && slowing {
            rate *= config.descend_and_slow_factor;
        }
    }

    aircraft.airspeed = approach(aircraft.airspeed, aircraft.target_airspeed, rate * dt).max(0.0);

    if aircraft.airspeed == aircraft.target_airspeed {
        aircraft.expedite_speed = false;
    }
}

/// Roll-out on the runway. Returns true once the aircraft has stopped.
pub fn decelerate_on_ground(aircraft: &mut Aircraft, config: &PerformanceConfig, dt: f64) -> bool {
    aircraft.airspeed = (aircraft.airspeed - config.ground_deceleration * dt).max(0.0);
    aircraft.target_airspeed = 0.0;
    aircraft.airspeed == 0.0
}

/// Move the aircraft along its heading at ground speed and sample the trail.
pub fn integrate_position(
    aircraft: &mut Aircraft,
    area: &AreaConfig,
    config: &PerformanceConfig,
    dt: f64,
) {
    let distance_nm = aircraft.ground_speed() / SECONDS_PER_HOUR * dt;
    aircraft.position = project(aircraft.position, aircraft.heading, area.to_units(distance_nm));
    aircraft
        .trail
        .record(aircraft.position, dt, config.trail_interval);
}
