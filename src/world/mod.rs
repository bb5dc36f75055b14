mod report;
mod score;

pub use report::TickReport;
pub use score::Score;

use tracing::{info, warn};

use crate::{
    components::aircraft::{Aircraft, AircraftSnapshot},
    environment::AirportRegistry,
    resources::{SimulationConfig, SpawnDirection, TimeManager},
    systems::{execute, update_aircraft, ConflictDetector, Instruction, Spawner},
    utils::{CommandError, RngManager, SimError},
};

/// The top-level driver owning every active aircraft.
///
/// Each step updates all aircraft, lets the spawner add one, runs conflict
/// detection on the settled positions and finally removes aircraft that
/// landed, left the area or crashed.
#[derive(Debug)]
pub struct Simulation {
    config: SimulationConfig,
    registry: AirportRegistry,
    aircraft: Vec<Aircraft>,
    spawner: Spawner,
    detector: ConflictDetector,
    time: TimeManager,
    rng: RngManager,
    score: Score,
    elapsed: f64,
    halted: bool,
}

impl Simulation {
    pub fn new(config: SimulationConfig, registry: AirportRegistry) -> Result<Self, SimError> {
        config.validate()?;
        let rng = RngManager::from_config(config.seed);
        let spawner = Spawner::new(&config.spawn, rng.get_rng("spawner"));
        let detector = ConflictDetector::new(&config.separation, &config.area);
        let time = TimeManager::new(&config.time);

        info!(
            "Simulation at {} ready: {} runways, {} navaids, {}x{} units",
            registry.name(),
            registry.runways().count(),
            registry.navaids().count(),
            config.area.width,
            config.area.height
        );

        Ok(Self {
            config,
            registry,
            aircraft: Vec::new(),
            spawner,
            detector,
            time,
            rng,
            score: Score::default(),
            elapsed: 0.0,
            halted: false,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn registry(&self) -> &AirportRegistry {
        &self.registry
    }

    pub fn aircraft(&self) -> &[Aircraft] {
        &self.aircraft
    }

    pub fn get(&self, callsign: &str) -> Option<&Aircraft> {
        let callsign = callsign.to_uppercase();
        self.aircraft.iter().find(|a| a.callsign() == callsign)
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    pub fn seed(&self) -> u64 {
        self.rng.master_seed()
    }

    /// Simulated seconds run so far.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed
    }

    /// True once a crash stopped the session.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Fresh read-only views of every active aircraft.
    pub fn snapshots(&self) -> Vec<AircraftSnapshot> {
        self.aircraft.iter().map(Aircraft::snapshot).collect()
    }

    /// Add scripted traffic. Callsigns must be unique among active aircraft.
    pub fn insert(&mut self, aircraft: Aircraft) -> Result<(), SimError> {
        if self.get(aircraft.callsign()).is_some() {
            return Err(SimError::DuplicateName(aircraft.callsign().to_string()));
        }
        info!("Inserted {}", aircraft.callsign());
        let aircraft = aircraft.with_trail_capacity(self.config.performance.trail_capacity);
        self.aircraft.push(aircraft);
        Ok(())
    }

    /// Send a clearance to one aircraft.
    pub fn issue(&mut self, callsign: &str, text: &str) -> Result<Vec<Instruction>, CommandError> {
        let wanted = callsign.to_uppercase();
        let aircraft = self
            .aircraft
            .iter_mut()
            .find(|a| a.callsign() == wanted)
            .ok_or(CommandError::UnknownCallsign(wanted))?;
        execute(aircraft, text, &self.registry, &self.config)
    }

    /// Send a full line such as `"BA123 C 090 S 210"`.
    pub fn issue_line(&mut self, line: &str) -> Result<Vec<Instruction>, CommandError> {
        let line = line.trim();
        let (callsign, text) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        if callsign.is_empty() {
            return Err(CommandError::Empty);
        }
        self.issue(callsign, text)
    }

    pub fn spawner(&self) -> &Spawner {
        &self.spawner
    }

    pub fn enable_spawn_direction(&mut self, direction: SpawnDirection) {
        self.spawner.enable_direction(direction);
    }

    pub fn disable_spawn_direction(&mut self, direction: SpawnDirection) -> Result<(), SimError> {
        self.spawner.disable_direction(direction)
    }

    pub fn set_spawn_interval(&mut self, interval: f64) -> Result<(), SimError> {
        self.spawner.set_interval(interval)
    }

    pub fn set_fast_forward(&mut self, scale: f64) {
        self.time.set_time_scale(scale);
        info!("Fast forward x{}", self.time.time_scale());
    }

    /// Feed one frame of wall-clock time and run the fixed steps it buys.
    pub fn advance(&mut self, frame_seconds: f64) -> TickReport {
        let steps = self.time.advance(frame_seconds);
        let dt = self.time.time_step();
        let mut report = TickReport::default();
        for _ in 0..steps {
            if self.halted {
                break;
            }
            report.merge(self.step(dt));
        }
        report
    }

    /// Run exactly one simulation step of `dt` seconds.
    pub fn step(&mut self, dt: f64) -> TickReport {
        let mut report = TickReport::default();
        if self.halted {
            return report;
        }

        for aircraft in self.aircraft.iter_mut() {
            update_aircraft(aircraft, &self.registry, &self.config, dt);
        }

        if self.config.spawn.enabled {
            if let Some(aircraft) = self.spawner.tick(dt, &self.aircraft, &self.config) {
                report.spawned.push(aircraft.callsign().to_string());
                self.aircraft.push(aircraft);
            }
        }

        let detection = self.detector.detect(
            &mut self.aircraft,
            &self.config.separation,
            &self.config.area,
        );
        if detection.has_conflicts() {
            self.score.record_violation(dt);
        }
        for crash in &detection.crashes {
            self.score
                .record_crash(format!("{} collided with {}", crash.first, crash.second));
        }

        self.remove_finished(&mut report);

        if detection.has_crashes() && self.config.halt_on_crash {
            self.halted = true;
            warn!(
                "Simulation halted after {:.0} s: {}",
                self.elapsed,
                self.score.crash.as_deref().unwrap_or("crash")
            );
        }

        report.conflicts = detection.conflicts;
        report.crashes = detection.crashes;
        report.steps = 1;
        self.elapsed += dt;
        report
    }

    fn remove_finished(&mut self, report: &mut TickReport) {
        let area = &self.config.area;
        let keep_crashed = self.config.halt_on_crash;
        let mut landed = Vec::new();
        let mut exited = Vec::new();

        self.aircraft.retain(|aircraft| {
            if aircraft.landed() {
                landed.push(aircraft.callsign().to_string());
                return false;
            }
            let p = aircraft.position();
            if aircraft.on_ground().is_none() && !area.contains_with_margin(p.x, p.y) {
                exited.push(aircraft.callsign().to_string());
                return false;
            }
            aircraft.crash().is_none() || keep_crashed
        });

        for callsign in &exited {
            warn!("{} left the area without landing", callsign);
            self.score.record_exit();
        }
        for _ in &landed {
            self.score.record_landing();
        }
        report.landed = landed;
        report.exited = exited;
    }
}
