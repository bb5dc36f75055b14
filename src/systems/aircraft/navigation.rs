use tracing::{debug, warn};

use crate::{
    components::aircraft::{Aircraft, HoldLeg},
    environment::AirportRegistry,
    resources::{ApproachConfig, AreaConfig},
    utils::{bearing, distance, reciprocal},
};

/// Continuous homing on the direct-to waypoint.
///
/// The bearing is recomputed every tick. Inside the capture radius the
/// waypoint is dropped and the aircraft holds its present heading, or turns
/// outbound when a hold at that fix is pending.
pub fn update_direct_to(
    aircraft: &mut Aircraft,
    registry: &AirportRegistry,
    area: &AreaConfig,
    config: &ApproachConfig,
) {
    let Some(name) = aircraft.target_waypoint.as_deref() else {
        return;
    };
    let Some(waypoint) = registry.waypoint_position(name) else {
        warn!(
            "{} lost waypoint {}, holding present heading",
            aircraft.callsign, name
        );
        aircraft.target_waypoint = None;
        aircraft.target_heading = aircraft.heading;
        return;
    };

    // Directly overhead there is no bearing; keep the last one
    if let Some(bearing) = bearing(aircraft.position, waypoint) {
        aircraft.target_heading = bearing;
    }

    let distance_nm = area.to_nm(distance(aircraft.position, waypoint));
    if distance_nm > config.waypoint_capture_nm {
        return;
    }

    debug!("{} passed {}", aircraft.callsign, name);
    aircraft.target_waypoint = None;
    aircraft.target_heading = aircraft.heading;
    enter_hold(aircraft);
}

/// Start the racetrack from the present heading, which becomes the inbound
/// course. Does nothing unless a hold is pending entry.
pub(crate) fn enter_hold(aircraft: &mut Aircraft) {
    let heading = aircraft.heading;
    let Some(hold) = aircraft.hold.as_mut() else {
        return;
    };
    if hold.leg != HoldLeg::Entry {
        return;
    }
    hold.inbound_heading = Some(heading);
    hold.leg = HoldLeg::TurningOutbound;
    hold.leg_elapsed = 0.0;
    aircraft.target_heading = reciprocal(heading);
    debug!(
        "{} entering hold at {}, inbound {:03.0}",
        aircraft.callsign, hold.waypoint, heading
    );
}
