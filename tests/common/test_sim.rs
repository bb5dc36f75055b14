use atcsim::{Aircraft, AirportRegistry, Simulation, SimulationConfig, TickReport};

use super::{create_quiet_config, create_test_registry, run_steps};

// Builder for creating a test simulation with customizable configuration
pub struct TestSimBuilder {
    aircraft: Vec<Aircraft>,
    config: SimulationConfig,
    registry: Option<AirportRegistry>,
    time_step: f64,
}

impl Default for TestSimBuilder {
    fn default() -> Self {
        Self {
            aircraft: Vec::new(),
            config: create_quiet_config(),
            registry: None,
            time_step: 1.0,
        }
    }
}

impl TestSimBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_aircraft(mut self, aircraft: Aircraft) -> Self {
        self.aircraft.push(aircraft);
        self
    }

    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_registry(mut self, registry: AirportRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }

    pub fn build(self) -> TestSim {
        let registry = self.registry.unwrap_or_else(create_test_registry);
        let mut sim = Simulation::new(self.config, registry).expect("valid test config");
        for aircraft in self.aircraft {
            sim.insert(aircraft).expect("unique test callsign");
        }
        TestSim {
            sim,
            time_step: self.time_step,
        }
    }
}

pub struct TestSim {
    pub sim: Simulation,
    time_step: f64,
}

impl TestSim {
    pub fn step(&mut self) -> TickReport {
        self.sim.step(self.time_step)
    }

    pub fn run_steps(&mut self, steps: usize) -> TickReport {
        run_steps(&mut self.sim, self.time_step, steps)
    }

    /// Run until `callsign` leaves the active set or `max_steps` run out.
    pub fn run_until_gone(&mut self, callsign: &str, max_steps: usize) -> TickReport {
        let mut total = TickReport::default();
        for _ in 0..max_steps {
            total.merge(self.step());
            if self.sim.get(callsign).is_none() {
                break;
            }
        }
        total
    }

    pub fn get(&self, callsign: &str) -> &Aircraft {
        self.sim
            .get(callsign)
            .unwrap_or_else(|| panic!("{} not found", callsign))
    }

    pub fn issue(&mut self, callsign: &str, text: &str) {
        if let Err(err) = self.sim.issue(callsign, text) {
            panic!("{} {} rejected: {}", callsign, text, err);
        }
    }
}
