use approx::assert_relative_eq;
use atcsim::{utils::distance, Aircraft, CommandError};

use crate::common::{
    assert_aircraft_valid, assert_heading_eq, create_intercepting_aircraft, TestSimBuilder,
    FIELD_ELEVATION, THRESHOLD_27R,
};

/// Fly a cleared approach to a full stop and check every intermediate state.
fn fly_approach(time_step: f64, max_steps: usize) {
    let mut test = TestSimBuilder::new()
        .with_aircraft(create_intercepting_aircraft("BA1"))
        .with_time_step(time_step)
        .build();
    test.issue("BA1", "L 27R");

    let mut saw_localizer = false;
    let mut saw_glideslope = false;
    let mut saw_short_final = false;
    let mut saw_ground = false;
    let mut landed = Vec::new();

    for _ in 0..max_steps {
        let report = test.step();
        landed.extend(report.landed);
        let Some(aircraft) = test.sim.get("BA1") else {
            break;
        };
        assert_aircraft_valid(aircraft);
        saw_localizer |= aircraft.localizer_intercepted();
        saw_glideslope |= aircraft.glideslope_intercepted();
        saw_short_final |= aircraft.short_final();
        if aircraft.on_ground().is_some() {
            saw_ground = true;
            assert_eq!(aircraft.on_ground(), Some("27R"));
            assert_eq!(aircraft.altitude(), FIELD_ELEVATION);
            assert_eq!(aircraft.heading(), 270.0);
        }
    }

    assert!(saw_localizer, "localizer never captured");
    assert!(saw_glideslope, "glideslope never captured");
    assert!(saw_short_final, "short final never reached");
    assert!(saw_ground, "never touched down");
    assert_eq!(landed, vec!["BA1"]);
    assert!(test.sim.aircraft().is_empty());
    assert_eq!(test.sim.score().landed, 1);
    assert_eq!(test.sim.score().improper_exits, 0);
}

#[test]
fn test_ils_landing_one_second_steps() {
    fly_approach(1.0, 600);
}

#[test]
fn test_ils_landing_fine_steps() {
    fly_approach(0.1, 6000);
}

#[test]
fn test_glideslope_pins_target_altitude() {
    let mut test = TestSimBuilder::new()
        .with_aircraft(create_intercepting_aircraft("BA1"))
        .build();
    test.issue("BA1", "L 27R");

    let mut checked = 0;
    for _ in 0..400 {
        test.step();
        let Some(aircraft) = test.sim.get("BA1") else {
            break;
        };
        if !aircraft.glideslope_intercepted() || aircraft.on_ground().is_some() {
            continue;
        }
        // The target was set before this step's movement, so allow for one
        // step of travel down the glidepath.
        let distance_nm = distance(aircraft.position(), THRESHOLD_27R);
        let glidepath = distance_nm * 300.0 + FIELD_ELEVATION;
        assert_relative_eq!(aircraft.target_altitude(), glidepath, epsilon = 25.0);
        checked += 1;
    }
    assert!(checked > 10);
}

#[test]
fn test_established_aircraft_refuses_vectors_until_abort() {
    let mut test = TestSimBuilder::new()
        .with_aircraft(create_intercepting_aircraft("BA1"))
        .build();
    test.issue("BA1", "L 27R");

    let mut established = false;
    for _ in 0..300 {
        test.step();
        if test.get("BA1").localizer_intercepted() {
            established = true;
            break;
        }
    }
    assert!(established);

    let before = test.get("BA1").clone();
    assert_eq!(
        test.sim.issue("BA1", "C 090"),
        Err(CommandError::LocalizerEstablished {
            callsign: "BA1".to_string()
        })
    );
    assert_eq!(test.get("BA1"), &before);

    test.issue("BA1", "A");
    let aircraft = test.get("BA1");
    assert_eq!(aircraft.assigned_runway(), None);
    assert!(!aircraft.localizer_intercepted());
    assert!(aircraft.target_altitude() >= 3000.0);
    assert!(aircraft.target_airspeed() >= 180.0);
    assert_heading_eq(aircraft.target_heading(), aircraft.heading(), 1e-9);

    // Free to vector again
    test.issue("BA1", "C 090");
    assert_eq!(test.get("BA1").target_heading(), 90.0);
}

#[test]
fn test_unknown_runway_is_rejected() {
    let mut test = TestSimBuilder::new()
        .with_aircraft(create_intercepting_aircraft("BA1"))
        .build();
    assert_eq!(
        test.sim.issue("BA1", "L 18"),
        Err(CommandError::UnknownRunway("18".to_string()))
    );
    assert_eq!(test.get("BA1").assigned_runway(), None);
}

#[test]
fn test_wrong_direction_never_captures() {
    // Same start, but pointing away from the field
    let start = create_intercepting_aircraft("BA1");
    let aircraft = Aircraft::new("BA1", start.position(), 60.0, 3000.0, 180.0);
    let mut test = TestSimBuilder::new().with_aircraft(aircraft).build();
    test.issue("BA1", "L 27R");
    for _ in 0..60 {
        test.step();
        assert!(!test.get("BA1").localizer_intercepted());
    }
}

#[test]
fn test_abort_holds_present_heading_despite_direct_to() {
    let mut test = TestSimBuilder::new()
        .with_aircraft(create_intercepting_aircraft("BA1"))
        .build();
    test.issue("BA1", "C LAM L 27R");
    test.run_steps(3);
    assert_eq!(test.get("BA1").target_waypoint(), Some("LAM"));

    test.issue("BA1", "A");
    let heading = test.get("BA1").heading();
    test.step();

    let aircraft = test.get("BA1");
    assert_eq!(aircraft.target_waypoint(), None);
    assert_eq!(aircraft.target_heading(), heading);
    assert_eq!(aircraft.heading(), heading);
}
