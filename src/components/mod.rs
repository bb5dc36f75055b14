pub mod aircraft;

pub use aircraft::{
    Aircraft, AircraftSnapshot, ApproachState, HoldLeg, HoldPattern, Trail, TurnDirection,
};
