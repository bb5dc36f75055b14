use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

use crate::utils::{normalize_heading, FEET_PER_THOUSAND, TAS_GAIN_PER_THOUSAND_FT};

/// Direction of a turn, as forced by a clearance suffix or a hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnDirection {
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "R")]
    Right,
}

impl fmt::Display for TurnDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnDirection::Left => write!(f, "L"),
            TurnDirection::Right => write!(f, "R"),
        }
    }
}

/// Phase of the holding racetrack.
///
/// `Entry` covers the flight to the hold fix. The remaining four legs cycle
/// for as long as the hold lasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoldLeg {
    Entry,
    TurningOutbound,
    Outbound,
    TurningInbound,
    Inbound,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldPattern {
    /// Fix the pattern is anchored on.
    pub waypoint: String,
    pub direction: TurnDirection,
    pub leg: HoldLeg,
    /// Heading the aircraft had when it first crossed the fix.
    pub inbound_heading: Option<f64>,
    /// Time spent on the current straight leg [s].
    pub leg_elapsed: f64,
}

impl HoldPattern {
    pub fn new(waypoint: &str, direction: TurnDirection) -> Self {
        Self {
            waypoint: waypoint.to_string(),
            direction,
            leg: HoldLeg::Entry,
            inbound_heading: None,
            leg_elapsed: 0.0,
        }
    }
}

/// ILS clearance and capture progress. The flags only ever go from false
/// to true within one approach and are reset together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApproachState {
    pub runway: Option<String>,
    pub localizer_intercepted: bool,
    pub glideslope_intercepted: bool,
    pub short_final: bool,
}

impl ApproachState {
    pub fn cleared(runway: &str) -> Self {
        Self {
            runway: Some(runway.to_string()),
            ..Default::default()
        }
    }

    pub fn is_active(&self) -> bool {
        self.runway.is_some()
    }
}

/// Recent positions kept for display, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trail {
    points: VecDeque<DVec2>,
    capacity: usize,
    since_sample: f64,
}

impl Trail {
    pub fn new(start: DVec2, capacity: usize) -> Self {
        let mut points = VecDeque::with_capacity(capacity.max(1));
        if capacity > 0 {
            points.push_back(start);
        }
        Self {
            points,
            capacity,
            since_sample: 0.0,
        }
    }

    /// Sample `position` once at least `interval` seconds have passed since
    /// the previous sample, evicting the oldest point past capacity.
    pub fn record(&mut self, position: DVec2, dt: f64, interval: f64) {
        if self.capacity == 0 {
            return;
        }
        self.since_sample += dt;
        if self.since_sample < interval {
            return;
        }
        self.since_sample = 0.0;
        self.points.push_back(position);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn points(&self) -> impl Iterator<Item = &DVec2> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// One aircraft under control.
///
/// Kinematic state converges toward the target state at rate-limited speed.
/// Navigation, holding and ILS state machines rewrite the targets each tick
/// before the kinematics run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aircraft {
    pub(crate) callsign: String,

    /// Position in local plane units.
    pub(crate) position: DVec2,
    /// Heading [deg], 0 = north, always in [0, 360).
    pub(crate) heading: f64,
    /// Altitude [ft].
    pub(crate) altitude: f64,
    /// Indicated airspeed [kt].
    pub(crate) airspeed: f64,

    pub(crate) target_heading: f64,
    pub(crate) target_altitude: f64,
    pub(crate) target_airspeed: f64,
    /// Navaid name flown direct to, resolved through the registry each tick.
    pub(crate) target_waypoint: Option<String>,

    /// Forced turn direction. Cleared once the target heading is reached.
    pub(crate) turn_direction: Option<TurnDirection>,
    pub(crate) expedite_altitude: bool,
    pub(crate) expedite_speed: bool,

    pub(crate) approach: ApproachState,
    pub(crate) hold: Option<HoldPattern>,

    /// Runway the aircraft touched down on. Never unset.
    pub(crate) on_ground: Option<String>,
    /// Stopped on the runway; no further state changes.
    pub(crate) landed: bool,

    pub(crate) trail: Trail,

    /// Set by conflict detection.
    pub(crate) crash: Option<String>,
    pub(crate) in_conflict: bool,
}

/// Trail capacity for aircraft built outside a configured simulation.
const DEFAULT_TRAIL_CAPACITY: usize = 10;

impl Aircraft {
    /// Create an aircraft flying straight and level at the given state.
    pub fn new(callsign: &str, position: DVec2, heading: f64, altitude: f64, airspeed: f64) -> Self {
        let heading = normalize_heading(heading);
        let altitude = altitude.max(0.0);
        let airspeed = airspeed.max(0.0);
        Self {
            callsign: callsign.to_uppercase(),
            position,
            heading,
            altitude,
            airspeed,
            target_heading: heading,
            target_altitude: altitude,
            target_airspeed: airspeed,
            target_waypoint: None,
            turn_direction: None,
            expedite_altitude: false,
            expedite_speed: false,
            approach: ApproachState::default(),
            hold: None,
            on_ground: None,
            landed: false,
            trail: Trail::new(position, DEFAULT_TRAIL_CAPACITY),
            crash: None,
            in_conflict: false,
        }
    }

    /// Replace the display trail with one of a different capacity.
    pub fn with_trail_capacity(mut self, capacity: usize) -> Self {
        self.trail = Trail::new(self.position, capacity);
        self
    }

    pub fn callsign(&self) -> &str {
        &self.callsign
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    pub fn airspeed(&self) -> f64 {
        self.airspeed
    }

    /// Ground speed [kt]: true airspeed gains 2% per thousand feet.
    pub fn ground_speed(&self) -> f64 {
        self.airspeed * (1.0 + TAS_GAIN_PER_THOUSAND_FT * self.altitude / FEET_PER_THOUSAND)
    }

    pub fn target_heading(&self) -> f64 {
        self.target_heading
    }

    pub fn target_altitude(&self) -> f64 {
        self.target_altitude
    }

    pub fn target_airspeed(&self) -> f64 {
        self.target_airspeed
    }

    pub fn target_waypoint(&self) -> Option<&str> {
        self.target_waypoint.as_deref()
    }

    pub fn turn_direction(&self) -> Option<TurnDirection> {
        self.turn_direction
    }

    pub fn expedite_altitude(&self) -> bool {
        self.expedite_altitude
    }

    pub fn expedite_speed(&self) -> bool {
        self.expedite_speed
    }

    pub fn approach(&self) -> &ApproachState {
        &self.approach
    }

    pub fn assigned_runway(&self) -> Option<&str> {
        self.approach.runway.as_deref()
    }

    pub fn localizer_intercepted(&self) -> bool {
        self.approach.localizer_intercepted
    }

    pub fn glideslope_intercepted(&self) -> bool {
        self.approach.glideslope_intercepted
    }

    pub fn short_final(&self) -> bool {
        self.approach.short_final
    }

    pub fn hold(&self) -> Option<&HoldPattern> {
        self.hold.as_ref()
    }

    pub fn holding(&self) -> bool {
        self.hold.is_some()
    }

    pub fn on_ground(&self) -> Option<&str> {
        self.on_ground.as_deref()
    }

    pub fn landed(&self) -> bool {
        self.landed
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn crash(&self) -> Option<&str> {
        self.crash.as_deref()
    }

    pub fn is_crashed(&self) -> bool {
        self.crash.is_some()
    }

    pub fn in_conflict(&self) -> bool {
        self.in_conflict
    }

    /// Drop every approach flag and the runway assignment together.
    pub(crate) fn reset_approach(&mut self) {
        self.approach = ApproachState::default();
    }
}
