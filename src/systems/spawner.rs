use glam::DVec2;
use rand::{seq::SliceRandom, Rng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use tracing::{info, warn};

use crate::{
    components::aircraft::Aircraft,
    resources::{SimulationConfig, SpawnConfig, SpawnDirection},
    utils::{normalize_heading, SimError},
};

/// Callsign draws before a spawn is skipped for lack of a free number.
const MAX_CALLSIGN_ATTEMPTS: usize = 100;
const MAX_FLIGHT_NUMBER: u32 = 999;

/// Creates inbound traffic on the edges of the area at a fixed cadence.
#[derive(Debug, Clone)]
pub struct Spawner {
    /// Seconds since the last spawn. Starts full so the first tick spawns.
    timer: f64,
    interval: f64,
    directions: Vec<SpawnDirection>,
    last_direction: Option<SpawnDirection>,
    last_altitude: Option<f64>,
    rng: ChaCha8Rng,
}

impl Spawner {
    pub fn new(config: &SpawnConfig, rng: ChaCha8Rng) -> Self {
        let mut directions = Vec::new();
        for direction in &config.directions {
            if !directions.contains(direction) {
                directions.push(*direction);
            }
        }
        Self {
            timer: config.interval,
            interval: config.interval,
            directions,
            last_direction: None,
            last_altitude: None,
            rng,
        }
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }

    pub fn set_interval(&mut self, interval: f64) -> Result<(), SimError> {
        if !(interval > 0.0) || !interval.is_finite() {
            return Err(SimError::InvalidConfig(format!(
                "spawn interval must be positive, got {}",
                interval
            )));
        }
        info!("Spawn interval set to {} s", interval);
        self.interval = interval;
        Ok(())
    }

    pub fn directions(&self) -> &[SpawnDirection] {
        &self.directions
    }

    pub fn enable_direction(&mut self, direction: SpawnDirection) {
        if !self.directions.contains(&direction) {
            self.directions.push(direction);
            info!("Spawning enabled from {}", direction);
        }
    }

    /// Stop spawning from one edge. The last enabled edge cannot be disabled.
    pub fn disable_direction(&mut self, direction: SpawnDirection) -> Result<(), SimError> {
        if !self.directions.contains(&direction) {
            return Ok(());
        }
        if self.directions.len() == 1 {
            return Err(SimError::InvalidConfig(format!(
                "cannot disable {}, at least one spawn direction must remain",
                direction
            )));
        }
        self.directions.retain(|d| *d != direction);
        info!("Spawning disabled from {}", direction);
        Ok(())
    }

    /// Advance the spawn timer. Fires at most one spawn per call.
    pub fn tick(
        &mut self,
        dt: f64,
        active: &[Aircraft],
        config: &SimulationConfig,
    ) -> Option<Aircraft> {
        self.timer += dt;
        if self.timer < self.interval {
            return None;
        }
        self.timer = 0.0;
        self.spawn(active, config)
    }

    /// Create one aircraft now, or `None` when no free callsign was found.
    pub fn spawn(&mut self, active: &[Aircraft], config: &SimulationConfig) -> Option<Aircraft> {
        let spawn = &config.spawn;
        let Some(callsign) = self.pick_callsign(active, spawn) else {
            warn!("No free callsign after {} attempts, skipping spawn", MAX_CALLSIGN_ATTEMPTS);
            return None;
        };
        let direction = self.pick_direction()?;
        let altitude = self.pick_altitude(spawn)?;

        let along: f64 = self.rng.gen_range(spawn.edge_band.0..=spawn.edge_band.1);
        let (width, height) = (config.area.width, config.area.height);
        let position = match direction {
            SpawnDirection::North => DVec2::new(width * along, height),
            SpawnDirection::South => DVec2::new(width * along, 0.0),
            SpawnDirection::East => DVec2::new(width, height * along),
            SpawnDirection::West => DVec2::new(0.0, height * along),
        };
        let jitter = if spawn.heading_jitter > 0.0 {
            self.rng.gen_range(-spawn.heading_jitter..=spawn.heading_jitter)
        } else {
            0.0
        };
        let heading = normalize_heading(direction.inbound_heading() + jitter);

        self.last_direction = Some(direction);
        self.last_altitude = Some(altitude);

        info!(
            "Spawned {} from {} at ({:.1}, {:.1}) heading {:03.0} at {:.0} ft",
            callsign, direction, position.x, position.y, heading, altitude
        );
        Some(
            Aircraft::new(&callsign, position, heading, altitude, spawn.airspeed)
                .with_trail_capacity(config.performance.trail_capacity),
        )
    }

    fn pick_callsign(&mut self, active: &[Aircraft], spawn: &SpawnConfig) -> Option<String> {
        let taken: HashSet<&str> = active.iter().map(Aircraft::callsign).collect();
        for _ in 0..MAX_CALLSIGN_ATTEMPTS {
            let prefix = spawn.callsign_prefixes.choose(&mut self.rng)?;
            let number = self.rng.gen_range(1..=MAX_FLIGHT_NUMBER);
            let callsign = format!("{}{}", prefix.to_uppercase(), number);
            if !taken.contains(callsign.as_str()) {
                return Some(callsign);
            }
        }
        None
    }

    /// Random enabled edge, avoiding a repeat of the previous one when
    /// another edge is available.
    fn pick_direction(&mut self) -> Option<SpawnDirection> {
        let candidates: Vec<SpawnDirection> = match self.last_direction {
            Some(last) if self.directions.len() > 1 => self
                .directions
                .iter()
                .copied()
                .filter(|d| *d != last)
                .collect(),
            _ => self.directions.clone(),
        };
        candidates.choose(&mut self.rng).copied()
    }

    /// Random altitude separated from the previous spawn, or any altitude
    /// when none is far enough away.
    fn pick_altitude(&mut self, spawn: &SpawnConfig) -> Option<f64> {
        let separated: Vec<f64> = match self.last_altitude {
            Some(last) => spawn
                .altitudes
                .iter()
                .copied()
                .filter(|alt| (alt - last).abs() >= spawn.min_altitude_separation)
                .collect(),
            None => spawn.altitudes.clone(),
        };
        let pool = if separated.is_empty() {
            &spawn.altitudes
        } else {
            &separated
        };
        pool.choose(&mut self.rng).copied()
    }
}
