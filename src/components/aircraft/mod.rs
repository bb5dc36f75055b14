pub mod snapshot;
pub mod state;

pub use snapshot::AircraftSnapshot;
pub use state::{Aircraft, ApproachState, HoldLeg, HoldPattern, Trail, TurnDirection};
