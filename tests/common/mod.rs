#![allow(dead_code)]

mod assertions;
mod fixtures;
mod helpers;
mod test_sim;

// Re-export
pub use assertions::{assert_aircraft_valid, assert_heading_eq, assert_position_eq};

pub use helpers::*;

pub use fixtures::*;
pub use test_sim::{TestSim, TestSimBuilder};
