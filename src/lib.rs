//! Multi-aircraft air traffic control simulation.
//!
//! Aircraft converge on commanded targets under kinematic limits, can be
//! vectored onto an ILS approach or into a hold, and are checked against each
//! other for separation every tick. [`Simulation`] drives everything.

pub mod components;
pub mod environment;
pub mod resources;
pub mod systems;
pub mod utils;
pub mod world;

pub use components::{Aircraft, AircraftSnapshot, TurnDirection};
pub use environment::{AirportRegistry, Navaid, NavaidKind, Runway};
pub use resources::{SimulationConfig, SpawnDirection};
pub use systems::{ConflictReport, Instruction};
pub use utils::{CommandError, SimError};
pub use world::{Score, Simulation, TickReport};
