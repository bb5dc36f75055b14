mod detection;
mod grid;

pub use detection::{Conflict, ConflictDetector, ConflictReport, Crash};
pub use grid::{CellKey, SpatialGrid};
