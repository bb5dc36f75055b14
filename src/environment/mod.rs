mod navaid;
mod registry;
mod runway;

pub use navaid::{Navaid, NavaidKind};
pub use registry::{AirportRegistry, RegistryRecord};
pub use runway::{Runway, RunwayRecord};
