mod apply;
mod parser;

pub use apply::apply;
pub use parser::{parse, Instruction};

use tracing::{info, warn};

use crate::{
    components::aircraft::Aircraft, environment::AirportRegistry, resources::SimulationConfig,
    utils::CommandError,
};

/// Parse a clearance and apply it to one aircraft.
///
/// Returns the applied instructions. On any error the aircraft is left
/// exactly as it was.
pub fn execute(
    aircraft: &mut Aircraft,
    text: &str,
    registry: &AirportRegistry,
    config: &SimulationConfig,
) -> Result<Vec<Instruction>, CommandError> {
    let outcome = parse(text).and_then(|instructions| {
        apply(aircraft, &instructions, registry, config).map(|_| instructions)
    });

    match &outcome {
        Ok(_) => info!("{} accepted '{}'", aircraft.callsign(), text.trim()),
        Err(e) => warn!("{} rejected '{}': {}", aircraft.callsign(), text.trim(), e),
    }
    outcome
}
