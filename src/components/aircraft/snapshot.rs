use glam::DVec2;
use serde::Serialize;

use super::state::Aircraft;

/// Read-only view of one aircraft for a presentation layer.
///
/// Built fresh from the aircraft every tick and owns all of its data, so
/// nothing written to it can reach back into the simulation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AircraftSnapshot {
    pub callsign: String,
    pub position: DVec2,
    /// Trail points, oldest first.
    pub trajectory: Vec<DVec2>,
    pub heading: f64,
    pub altitude: f64,
    pub airspeed: f64,
    pub ground_speed: f64,
    pub assigned_runway: Option<String>,
    pub localizer_intercepted: bool,
    pub glideslope_intercepted: bool,
    pub short_final: bool,
    pub holding: bool,
    pub target_heading: f64,
    pub target_altitude: f64,
    pub target_airspeed: f64,
    pub target_waypoint: Option<String>,
    pub on_ground: Option<String>,
    pub landed: bool,
    pub in_conflict: bool,
    pub crash: Option<String>,
}

impl From<&Aircraft> for AircraftSnapshot {
    fn from(aircraft: &Aircraft) -> Self {
        Self {
            callsign: aircraft.callsign().to_string(),
            position: aircraft.position(),
            trajectory: aircraft.trail().points().copied().collect(),
            heading: aircraft.heading(),
            altitude: aircraft.altitude(),
            airspeed: aircraft.airspeed(),
            ground_speed: aircraft.ground_speed(),
            assigned_runway: aircraft.assigned_runway().map(str::to_string),
            localizer_intercepted: aircraft.localizer_intercepted(),
            glideslope_intercepted: aircraft.glideslope_intercepted(),
            short_final: aircraft.short_final(),
            holding: aircraft.holding(),
            target_heading: aircraft.target_heading(),
            target_altitude: aircraft.target_altitude(),
            target_airspeed: aircraft.target_airspeed(),
            target_waypoint: aircraft.target_waypoint().map(str::to_string),
            on_ground: aircraft.on_ground().map(str::to_string),
            landed: aircraft.landed(),
            in_conflict: aircraft.in_conflict(),
            crash: aircraft.crash().map(str::to_string),
        }
    }
}

impl Aircraft {
    pub fn snapshot(&self) -> AircraftSnapshot {
        AircraftSnapshot::from(self)
    }
}
