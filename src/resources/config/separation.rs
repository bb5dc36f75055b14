use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeparationConfig {
    pub horizontal_nm: f64,
    pub vertical_ft: f64,
    pub crash_horizontal_nm: f64,
    pub crash_vertical_ft: f64,
}

impl Default for SeparationConfig {
    fn default() -> Self {
        Self {
            horizontal_nm: 3.0,
            vertical_ft: 1000.0,
            crash_horizontal_nm: 0.05,
            crash_vertical_ft: 40.0,
        }
    }
}
