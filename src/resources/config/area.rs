use serde::{Deserialize, Serialize};

/// The operating area in local plane units. x grows east, y grows north.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaConfig {
    pub width: f64,
    pub height: f64,
    /// Nautical miles covered by one local unit.
    pub nm_per_unit: f64,
    /// How far past the area edge an aircraft may fly before it is removed.
    pub exit_margin_nm: f64,
}

impl Default for AreaConfig {
    fn default() -> Self {
        Self {
            width: 60.0,
            height: 60.0,
            nm_per_unit: 1.0,
            exit_margin_nm: 1.0,
        }
    }
}

impl AreaConfig {
    #[inline]
    pub fn to_nm(&self, units: f64) -> f64 {
        units * self.nm_per_unit
    }

    #[inline]
    pub fn to_units(&self, nm: f64) -> f64 {
        nm / self.nm_per_unit
    }

    /// True when a point lies inside the area grown by the exit margin.
    pub fn contains_with_margin(&self, x: f64, y: f64) -> bool {
        let margin = self.to_units(self.exit_margin_nm);
        x >= -margin && x <= self.width + margin && y >= -margin && y <= self.height + margin
    }
}
