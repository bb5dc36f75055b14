pub mod aircraft;
pub mod collisions;
pub mod command;
mod spawner;

pub use aircraft::update_aircraft;
pub use collisions::{Conflict, ConflictDetector, ConflictReport, Crash, SpatialGrid};
pub use command::{apply, execute, parse, Instruction};
pub use spawner::Spawner;
