pub mod approach;
pub mod area;
pub mod performance;
pub mod separation;
pub mod simulation;
pub mod spawn;

pub use approach::ApproachConfig;
pub use area::AreaConfig;
pub use performance::PerformanceConfig;
pub use separation::SeparationConfig;
pub use simulation::{SimulationConfig, TimeConfig};
pub use spawn::{SpawnConfig, SpawnDirection};
