use serde::{Deserialize, Serialize};

/// ILS, direct-to and holding parameters. Distances are in nautical miles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApproachConfig {
    pub max_capture_airspeed: f64, // [kt], capture requires strictly less
    pub max_capture_altitude: f64, // [ft], capture requires strictly less
    pub inner_cone_nm: f64,
    pub inner_cone_angle: f64, // [deg]
    pub outer_cone_nm: f64,
    pub outer_cone_angle: f64, // [deg]
    pub localizer_lookahead_nm: f64,
    pub glideslope_ft_per_nm: f64,
    pub glideslope_capture_window: f64, // [ft]
    pub short_final_nm: f64,
    pub short_final_airspeed: f64, // [kt]
    pub touchdown_radius_nm: f64,
    /// Height above field elevation at which touchdown is accepted [ft].
    pub touchdown_height: f64,
    pub abort_min_altitude: f64, // [ft]
    pub abort_min_airspeed: f64, // [kt]
    pub waypoint_capture_nm: f64,
    /// Straight leg length of the holding racetrack [s].
    pub hold_leg_seconds: f64,
}

impl Default for ApproachConfig {
    fn default() -> Self {
        Self {
            max_capture_airspeed: 240.0,
            max_capture_altitude: 5000.0,
            inner_cone_nm: 5.0,
            inner_cone_angle: 20.0,
            outer_cone_nm: 15.0,
            outer_cone_angle: 30.0,
            localizer_lookahead_nm: 0.3,
            glideslope_ft_per_nm: 300.0,
            glideslope_capture_window: 50.0,
            short_final_nm: 5.0,
            short_final_airspeed: 140.0,
            touchdown_radius_nm: 0.1,
            touchdown_height: 20.0,
            abort_min_altitude: 3000.0,
            abort_min_airspeed: 180.0,
            waypoint_capture_nm: 0.5,
            hold_leg_seconds: 60.0,
        }
    }
}

impl ApproachConfig {
    /// Largest heading offset from the runway allowed for capture at this
    /// distance from the threshold, or `None` when capture is impossible.
    pub fn capture_cone(&self, distance_nm: f64) -> Option<f64> {
        if distance_nm <= self.inner_cone_nm {
            Some(self.inner_cone_angle)
        } else if distance_nm <= self.outer_cone_nm {
            Some(self.outer_cone_angle)
        } else {
            None
        }
    }

    /// Glidepath altitude at a distance from the threshold.
    #[inline]
    pub fn glidepath_altitude(&self, distance_nm: f64, elevation: f64) -> f64 {
        distance_nm * self.glideslope_ft_per_nm + elevation
    }
}
