pub mod config;
mod time;

pub use config::{
    ApproachConfig, AreaConfig, PerformanceConfig, SeparationConfig, SimulationConfig,
    SpawnConfig, SpawnDirection, TimeConfig,
};
pub use time::TimeManager;
