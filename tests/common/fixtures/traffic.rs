use atcsim::Aircraft;
use glam::DVec2;

use super::THRESHOLD_27R;

/// East of the field, right of the 27R centerline, set up for a 30 degree
/// intercept at 3000 ft.
pub fn create_intercepting_aircraft(callsign: &str) -> Aircraft {
    Aircraft::new(
        callsign,
        THRESHOLD_27R + DVec2::new(12.0, 1.0),
        240.0,
        3000.0,
        180.0,
    )
}

/// Level at 6000 ft well away from the airport, flying north.
pub fn create_cruise_aircraft(callsign: &str, position: DVec2) -> Aircraft {
    Aircraft::new(callsign, position, 0.0, 6000.0, 250.0)
}
