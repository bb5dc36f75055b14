use tracing::debug;

use crate::{
    components::aircraft::{Aircraft, HoldLeg},
    resources::ApproachConfig,
    utils::reciprocal,
};

use super::navigation::enter_hold;

/// Advance the holding racetrack by one tick.
///
/// Runs only while a hold is active and the aircraft is not still flying to
/// the fix. The hold direction is forced on every tick. Turning legs end when
/// the heading reaches the leg heading; straight legs last
/// `hold_leg_seconds`.
pub fn update_hold(aircraft: &mut Aircraft, config: &ApproachConfig, dt: f64) {
    if aircraft.target_waypoint.is_some() || aircraft.hold.is_none() {
        return;
    }
    // Fix no longer resolvable; start the pattern where we are
    enter_hold(aircraft);

    let heading = aircraft.heading;
    let Some(hold) = aircraft.hold.as_mut() else {
        return;
    };
    let Some(inbound) = hold.inbound_heading else {
        return;
    };
    let outbound = reciprocal(inbound);

    aircraft.turn_direction = Some(hold.direction);

    let next = match hold.leg {
        HoldLeg::Entry => None,
        HoldLeg::TurningOutbound => (heading == outbound).then_some(HoldLeg::Outbound),
        HoldLeg::Outbound => {
            hold.leg_elapsed += dt;
            (hold.leg_elapsed >= config.hold_leg_seconds).then_some(HoldLeg::TurningInbound)
        }
        HoldLeg::TurningInbound => (heading == inbound).then_some(HoldLeg::Inbound),
        HoldLeg::Inbound => {
            hold.leg_elapsed += dt;
            (hold.leg_elapsed >= config.hold_leg_seconds).then_some(HoldLeg::TurningOutbound)
        }
    };

    if let Some(leg) = next {
        debug!("{} hold leg {:?} -> {:?}", aircraft.callsign, hold.leg, leg);
        hold.leg = leg;
        hold.leg_elapsed = 0.0;
    }

    aircraft.target_heading = match hold.leg {
        HoldLeg::TurningOutbound | HoldLeg::Outbound => outbound,
        HoldLeg::Entry | HoldLeg::TurningInbound | HoldLeg::Inbound => inbound,
    };
}
