use approx::assert_relative_eq;
use atcsim::{utils::heading_delta, Aircraft};
use glam::DVec2;

/// Assert that an aircraft's state is physically sensible
#[track_caller]
pub fn assert_aircraft_valid(aircraft: &Aircraft) {
    let position = aircraft.position();
    assert!(position.x.is_finite(), "Position x is not finite");
    assert!(position.y.is_finite(), "Position y is not finite");

    assert!(
        (0.0..360.0).contains(&aircraft.heading()),
        "Heading {} outside [0, 360)",
        aircraft.heading()
    );
    assert!(
        (0.0..360.0).contains(&aircraft.target_heading()),
        "Target heading {} outside [0, 360)",
        aircraft.target_heading()
    );
    assert!(aircraft.altitude() >= 0.0, "Altitude is negative");
    assert!(aircraft.airspeed() >= 0.0, "Airspeed is negative");

    if aircraft.glideslope_intercepted() {
        assert!(
            aircraft.localizer_intercepted(),
            "Glideslope held without the localizer"
        );
    }
    if aircraft.short_final() {
        assert!(
            aircraft.glideslope_intercepted(),
            "Short final without the glideslope"
        );
    }
    if aircraft.holding() {
        assert!(
            !aircraft.approach().is_active(),
            "Holding while cleared for an approach"
        );
    }
}

/// Assert two headings agree, treating 359 and 1 as two degrees apart
#[track_caller]
pub fn assert_heading_eq(actual: f64, expected: f64, epsilon: f64) {
    let delta = heading_delta(actual, expected);
    assert!(
        delta <= epsilon,
        "Heading {} differs from {} by {}",
        actual,
        expected,
        delta
    );
}

/// Assert that two positions are approximately equal
#[track_caller]
pub fn assert_position_eq(actual: DVec2, expected: DVec2, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
}
