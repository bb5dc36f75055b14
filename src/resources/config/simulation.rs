use super::{
    approach::ApproachConfig, area::AreaConfig, performance::PerformanceConfig,
    separation::SeparationConfig, spawn::SpawnConfig,
};
use crate::utils::SimError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Fixed-step scheduling parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeConfig {
    /// Simulation step [s].
    pub time_step: f64,
    /// Upper bound on steps taken per rendered frame.
    pub max_substeps: u32,
    /// Multiplier applied to frame time.
    pub fast_forward: f64,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            time_step: 1.0 / 30.0,
            max_substeps: 300,
            fast_forward: 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub area: AreaConfig,
    pub time: TimeConfig,
    pub performance: PerformanceConfig,
    pub approach: ApproachConfig,
    pub separation: SeparationConfig,
    pub spawn: SpawnConfig,
    pub seed: Option<u64>,
    /// Stop advancing the whole simulation once any aircraft crashes.
    pub halt_on_crash: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            area: AreaConfig::default(),
            time: TimeConfig::default(),
            performance: PerformanceConfig::default(),
            approach: ApproachConfig::default(),
            separation: SeparationConfig::default(),
            spawn: SpawnConfig::default(),
            seed: None,
            halt_on_crash: true,
        }
    }
}

impl SimulationConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SimError> {
        let file = std::fs::File::open(path.as_ref())?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        info!("Loaded simulation config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SimError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), SimError> {
        let positive = [
            ("area.width", self.area.width),
            ("area.height", self.area.height),
            ("area.nm_per_unit", self.area.nm_per_unit),
            ("time.time_step", self.time.time_step),
            ("time.fast_forward", self.time.fast_forward),
            ("performance.turn_rate", self.performance.turn_rate),
            ("performance.climb_rate", self.performance.climb_rate),
            ("performance.descent_rate", self.performance.descent_rate),
            ("performance.speed_change_rate", self.performance.speed_change_rate),
            ("separation.horizontal_nm", self.separation.horizontal_nm),
            ("spawn.interval", self.spawn.interval),
            ("approach.localizer_lookahead_nm", self.approach.localizer_lookahead_nm),
        ];
        for (name, value) in positive {
            if !(value > 0.0) || !value.is_finite() {
                return Err(SimError::InvalidConfig(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        if self.spawn.directions.is_empty() {
            return Err(SimError::InvalidConfig(
                "spawn.directions must not be empty".to_string(),
            ));
        }
        if self.spawn.callsign_prefixes.is_empty() || self.spawn.altitudes.is_empty() {
            return Err(SimError::InvalidConfig(
                "spawn needs at least one callsign prefix and one altitude".to_string(),
            ));
        }
        let (from, to) = self.spawn.edge_band;
        if !(0.0..=1.0).contains(&from) || !(0.0..=1.0).contains(&to) || from > to {
            return Err(SimError::InvalidConfig(format!(
                "spawn.edge_band must be an ordered range within 0-1, got ({}, {})",
                from, to
            )));
        }
        Ok(())
    }
}
