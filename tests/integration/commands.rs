use atcsim::{components::HoldLeg, CommandError, Instruction, TurnDirection};
use glam::DVec2;
use pretty_assertions::assert_eq;

use crate::common::{
    assert_aircraft_valid, assert_heading_eq, create_cruise_aircraft,
    create_intercepting_aircraft, TestSimBuilder,
};

#[test]
fn test_rejected_sequence_changes_nothing() {
    let mut test = TestSimBuilder::new()
        .with_aircraft(create_intercepting_aircraft("BA1"))
        .build();
    let before = test.get("BA1").clone();

    assert_eq!(
        test.sim.issue("BA1", "L 27R C 090"),
        Err(CommandError::VerbAfterLanding("C".to_string()))
    );
    assert_eq!(test.get("BA1"), &before);

    // A valid prefix does not rescue an invalid tail
    assert_eq!(
        test.sim.issue("BA1", "C 090 S 500"),
        Err(CommandError::OutOfRange("speed 500 (allowed 100-400)".to_string()))
    );
    assert_eq!(test.get("BA1"), &before);
}

#[test]
fn test_combined_clearance_applies_in_order() {
    let mut test = TestSimBuilder::new()
        .with_aircraft(create_cruise_aircraft("BA1", DVec2::new(20.0, 20.0)))
        .build();

    let instructions = test.sim.issue_line("ba1 c 090;l c 4;x s 210").unwrap();
    assert_eq!(
        instructions,
        vec![
            Instruction::Heading {
                heading: 90.0,
                turn: Some(TurnDirection::Left),
            },
            Instruction::Altitude {
                altitude: 4000.0,
                expedite: true,
            },
            Instruction::Speed {
                airspeed: 210.0,
                expedite: false,
            },
        ]
    );

    let aircraft = test.get("BA1");
    assert_eq!(aircraft.target_heading(), 90.0);
    assert_eq!(aircraft.turn_direction(), Some(TurnDirection::Left));
    assert_eq!(aircraft.target_altitude(), 4000.0);
    assert!(aircraft.expedite_altitude());
    assert_eq!(aircraft.target_airspeed(), 210.0);

    // Left the long way round from north to east
    test.step();
    assert_heading_eq(test.get("BA1").heading(), 357.0, 1e-9);
}

#[test]
fn test_turn_completes_then_holds_heading() {
    let mut test = TestSimBuilder::new()
        .with_aircraft(create_cruise_aircraft("BA1", DVec2::new(20.0, 20.0)))
        .build();
    test.issue("BA1", "C 090");
    test.run_steps(40);

    let aircraft = test.get("BA1");
    assert_aircraft_valid(aircraft);
    assert_eq!(aircraft.heading(), 90.0);
    assert_eq!(aircraft.turn_direction(), None);
}

#[test]
fn test_direct_to_reaches_fix_and_keeps_heading() {
    let mut test = TestSimBuilder::new()
        .with_aircraft(create_cruise_aircraft("BA1", DVec2::new(45.0, 35.0)))
        .build();
    test.issue("BA1", "C LAM");
    assert_eq!(test.get("BA1").target_waypoint(), Some("LAM"));

    let mut passed = false;
    for _ in 0..200 {
        test.step();
        let aircraft = test.get("BA1");
        if aircraft.target_waypoint().is_none() {
            passed = true;
            assert!(aircraft.position().distance(DVec2::new(45.0, 45.0)) <= 0.5);
            assert!(!aircraft.holding());
            break;
        }
    }
    assert!(passed, "never reached LAM");
}

#[test]
fn test_hold_at_fix_flies_racetrack() {
    let mut test = TestSimBuilder::new()
        .with_aircraft(create_cruise_aircraft("BA1", DVec2::new(45.0, 40.0)))
        .build();
    test.issue("BA1", "H LAM");
    assert!(test.get("BA1").holding());
    assert_eq!(test.get("BA1").hold().unwrap().leg, HoldLeg::Entry);

    let mut legs = Vec::new();
    for _ in 0..400 {
        test.step();
        let aircraft = test.get("BA1");
        assert_aircraft_valid(aircraft);
        let leg = aircraft.hold().unwrap().leg;
        if legs.last() != Some(&leg) {
            legs.push(leg);
        }
    }
    assert_eq!(
        &legs[..5],
        &[
            HoldLeg::Entry,
            HoldLeg::TurningOutbound,
            HoldLeg::Outbound,
            HoldLeg::TurningInbound,
            HoldLeg::Inbound,
        ]
    );
    // Stays near the fix
    assert!(test.get("BA1").position().distance(DVec2::new(45.0, 45.0)) < 15.0);
}

#[test]
fn test_heading_clearance_cancels_hold() {
    let mut test = TestSimBuilder::new()
        .with_aircraft(create_cruise_aircraft("BA1", DVec2::new(45.0, 40.0)))
        .build();
    test.issue("BA1", "H LAM");
    test.issue("BA1", "C 180");
    let aircraft = test.get("BA1");
    assert!(!aircraft.holding());
    assert_eq!(aircraft.target_waypoint(), None);
    assert_eq!(aircraft.target_heading(), 180.0);
}

#[test]
fn test_unknown_waypoint_and_callsign() {
    let mut test = TestSimBuilder::new()
        .with_aircraft(create_cruise_aircraft("BA1", DVec2::new(20.0, 20.0)))
        .build();
    assert_eq!(
        test.sim.issue("BA1", "C XYZ"),
        Err(CommandError::UnknownWaypoint("XYZ".to_string()))
    );
    assert_eq!(
        test.sim.issue("LH9", "C 090"),
        Err(CommandError::UnknownCallsign("LH9".to_string()))
    );
    assert_eq!(test.get("BA1").target_waypoint(), None);
}

#[test]
fn test_parse_errors_surface_unchanged() {
    let mut test = TestSimBuilder::new()
        .with_aircraft(create_cruise_aircraft("BA1", DVec2::new(20.0, 20.0)))
        .build();
    assert_eq!(test.sim.issue("BA1", "C"), Err(CommandError::OddTokenCount));
    assert_eq!(
        test.sim.issue("BA1", "Z 090"),
        Err(CommandError::UnknownVerb("Z".to_string()))
    );
    assert_eq!(
        test.sim.issue("BA1", "H LAM C 090"),
        Err(CommandError::HoldWithCourseOrLanding)
    );
    assert_eq!(
        test.sim.issue("BA1", "C 090 A"),
        Err(CommandError::VerbBeforeAbort("C".to_string()))
    );
}
