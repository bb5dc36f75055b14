use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

use super::{Navaid, Runway};
use crate::utils::{heading_delta, SimError};

/// Surveyed and designator headings further apart than this get a warning.
const HEADING_MISMATCH_WARN: f64 = 10.0;

/// Static airport and navigation data, already projected onto the local plane.
///
/// Built once at startup and shared read-only. Aircraft keep only names and
/// resolve them through the registry every tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RegistryRecord", into = "RegistryRecord")]
pub struct AirportRegistry {
    name: String,
    elevation: f64,
    runways: HashMap<String, Runway>,
    navaids: HashMap<String, Navaid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryRecord {
    pub name: String,
    #[serde(default)]
    pub elevation: f64,
    #[serde(default)]
    pub runways: Vec<Runway>,
    #[serde(default)]
    pub navaids: Vec<Navaid>,
}

impl AirportRegistry {
    pub fn new(name: &str, elevation: f64) -> Self {
        Self {
            name: name.to_string(),
            elevation,
            runways: HashMap::new(),
            navaids: HashMap::new(),
        }
    }

    pub fn with_runway(mut self, runway: Runway) -> Result<Self, SimError> {
        self.add_runway(runway)?;
        Ok(self)
    }

    pub fn with_navaid(mut self, navaid: Navaid) -> Result<Self, SimError> {
        self.add_navaid(navaid)?;
        Ok(self)
    }

    pub fn add_runway(&mut self, runway: Runway) -> Result<(), SimError> {
        if self.runways.contains_key(runway.name()) {
            return Err(SimError::DuplicateName(runway.name().to_string()));
        }
        if let Some(surveyed) = runway.surveyed_heading() {
            if heading_delta(surveyed, runway.heading()) > HEADING_MISMATCH_WARN {
                warn!(
                    "Runway {} surveyed heading {:.0} disagrees with designator heading {:.0}",
                    runway.name(),
                    surveyed,
                    runway.heading()
                );
            }
        }
        self.runways.insert(runway.name().to_string(), runway);
        Ok(())
    }

    /// Names are stored uppercased, however the navaid was built.
    pub fn add_navaid(&mut self, mut navaid: Navaid) -> Result<(), SimError> {
        navaid.name = navaid.name.trim().to_uppercase();
        if self.navaids.contains_key(&navaid.name) {
            return Err(SimError::DuplicateName(navaid.name));
        }
        self.navaids.insert(navaid.name.clone(), navaid);
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SimError> {
        let file = std::fs::File::open(path.as_ref())?;
        let registry: Self = serde_yaml::from_reader(file)?;
        registry.log_loaded(path.as_ref());
        Ok(registry)
    }

    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self, SimError> {
        let file = std::fs::File::open(path.as_ref())?;
        let registry: Self = serde_json::from_reader(std::io::BufReader::new(file))?;
        registry.log_loaded(path.as_ref());
        Ok(registry)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SimError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    fn log_loaded(&self, path: &Path) {
        info!(
            "Loaded {} from {}: {} runways, {} navaids",
            self.name,
            path.display(),
            self.runways.len(),
            self.navaids.len()
        );
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field elevation [ft].
    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    pub fn runway(&self, name: &str) -> Option<&Runway> {
        self.runways.get(&name.to_uppercase())
    }

    pub fn navaid(&self, name: &str) -> Option<&Navaid> {
        self.navaids.get(&name.to_uppercase())
    }

    pub fn waypoint_position(&self, name: &str) -> Option<DVec2> {
        self.navaid(name).map(|n| n.position)
    }

    pub fn runways(&self) -> impl Iterator<Item = &Runway> {
        self.runways.values()
    }

    pub fn navaids(&self) -> impl Iterator<Item = &Navaid> {
        self.navaids.values()
    }
}

impl TryFrom<RegistryRecord> for AirportRegistry {
    type Error = SimError;

    fn try_from(record: RegistryRecord) -> Result<Self, Self::Error> {
        let mut registry = AirportRegistry::new(&record.name, record.elevation);
        for runway in record.runways {
            registry.add_runway(runway)?;
        }
        for navaid in record.navaids {
            registry.add_navaid(navaid)?;
        }
        Ok(registry)
    }
}

impl From<AirportRegistry> for RegistryRecord {
    fn from(registry: AirportRegistry) -> Self {
        let mut runways: Vec<Runway> = registry.runways.into_values().collect();
        runways.sort_by(|a, b| a.name().cmp(b.name()));
        let mut navaids: Vec<Navaid> = registry.navaids.into_values().collect();
        navaids.sort_by(|a, b| a.name.cmp(&b.name));
        RegistryRecord {
            name: registry.name,
            elevation: registry.elevation,
            runways,
            navaids,
        }
    }
}
