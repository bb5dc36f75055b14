use crate::{
    components::aircraft::{Aircraft, ApproachState, HoldPattern},
    environment::AirportRegistry,
    resources::SimulationConfig,
    utils::CommandError,
};

use super::parser::Instruction;

/// Apply a validated instruction list to one aircraft, all or nothing.
///
/// Instructions are applied in order to a working copy; the aircraft is only
/// replaced once every instruction has been accepted.
pub fn apply(
    aircraft: &mut Aircraft,
    instructions: &[Instruction],
    registry: &AirportRegistry,
    config: &SimulationConfig,
) -> Result<(), CommandError> {
    let callsign = aircraft.callsign.clone();
    if aircraft.crash.is_some() {
        return Err(CommandError::Crashed { callsign });
    }
    if aircraft.on_ground.is_some() || aircraft.landed {
        return Err(CommandError::OnGround { callsign });
    }

    let mut working = aircraft.clone();
    for instruction in instructions {
        apply_instruction(&mut working, instruction, registry, config)?;
    }
    *aircraft = working;
    Ok(())
}

fn apply_instruction(
    aircraft: &mut Aircraft,
    instruction: &Instruction,
    registry: &AirportRegistry,
    config: &SimulationConfig,
) -> Result<(), CommandError> {
    let callsign = aircraft.callsign.clone();

    match instruction {
        Instruction::Heading { heading, turn } => {
            if aircraft.approach.localizer_intercepted {
                return Err(CommandError::LocalizerEstablished { callsign });
            }
            aircraft.target_heading = *heading;
            aircraft.turn_direction = *turn;
            aircraft.target_waypoint = None;
            aircraft.hold = None;
        }
        Instruction::Altitude { altitude, expedite } => {
            if aircraft.approach.glideslope_intercepted {
                return Err(CommandError::GlideslopeEstablished { callsign });
            }
            aircraft.target_altitude = *altitude;
            aircraft.expedite_altitude = *expedite;
        }
        Instruction::DirectTo { waypoint, turn } => {
            if aircraft.approach.localizer_intercepted {
                return Err(CommandError::LocalizerEstablished { callsign });
            }
            let navaid = registry
                .navaid(waypoint)
                .ok_or_else(|| CommandError::UnknownWaypoint(waypoint.clone()))?;
            aircraft.target_waypoint = Some(navaid.name.clone());
            aircraft.turn_direction = *turn;
            aircraft.hold = None;
        }
        Instruction::Speed { airspeed, expedite } => {
            if aircraft.approach.short_final {
                return Err(CommandError::ShortFinal { callsign });
            }
            let limits = &config.performance;
            if *airspeed < limits.min_airspeed || *airspeed > limits.max_airspeed {
                return Err(CommandError::OutOfRange(format!(
                    "speed {} (allowed {}-{})",
                    airspeed, limits.min_airspeed, limits.max_airspeed
                )));
            }
            aircraft.target_airspeed = *airspeed;
            aircraft.expedite_speed = *expedite;
        }
        Instruction::Hold {
            waypoint,
            direction,
        } => {
            if aircraft.approach.is_active() {
                return Err(CommandError::HoldWhileOnApproach { callsign });
            }
            let navaid = registry
                .navaid(waypoint)
                .ok_or_else(|| CommandError::UnknownWaypoint(waypoint.clone()))?;
            aircraft.hold = Some(HoldPattern::new(&navaid.name, *direction));
            aircraft.target_waypoint = Some(navaid.name.clone());
            aircraft.turn_direction = None;
        }
        Instruction::Land { runway } => {
            let runway = registry
                .runway(runway)
                .ok_or_else(|| CommandError::UnknownRunway(runway.clone()))?;
            if let Some(assigned) = aircraft.approach.runway.as_deref() {
                return Err(CommandError::RunwayAlreadyAssigned {
                    callsign,
                    runway: assigned.to_string(),
                });
            }
            aircraft.approach = ApproachState::cleared(runway.name());
            aircraft.hold = None;
        }
        Instruction::Abort => {
            if !aircraft.approach.is_active() {
                return Err(CommandError::NoApproachToAbort { callsign });
            }
            let approach = &config.approach;
            aircraft.reset_approach();
            aircraft.target_altitude = aircraft.altitude.max(approach.abort_min_altitude);
            aircraft.target_airspeed = aircraft.airspeed.max(approach.abort_min_airspeed);
            aircraft.target_heading = aircraft.heading;
            aircraft.target_waypoint = None;
            aircraft.turn_direction = None;
        }
    }
    Ok(())
}
