use serde::{Deserialize, Serialize};

/// Kinematic limits shared by every aircraft.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    pub turn_rate: f64,         // [deg/s]
    pub climb_rate: f64,        // [ft/s]
    pub descent_rate: f64,      // [ft/s]
    pub speed_change_rate: f64, // [kt/s]
    pub expedite_factor: f64,
    /// Applied to the expedited speed change while descending and slowing together.
    pub descend_and_slow_factor: f64,
    pub ground_deceleration: f64, // [kt/s]
    pub min_airspeed: f64,        // [kt]
    pub max_airspeed: f64,        // [kt]
    pub trail_capacity: usize,
    pub trail_interval: f64, // [s]
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            turn_rate: 3.0,
            climb_rate: 25.0,
            descent_rate: 25.0,
            speed_change_rate: 2.0,
            expedite_factor: 2.0,
            descend_and_slow_factor: 0.8,
            ground_deceleration: 5.0,
            min_airspeed: 100.0,
            max_airspeed: 400.0,
            trail_capacity: 10,
            trail_interval: 2.0,
        }
    }
}
