use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::utils::{bearing, SimError};

/// A runway end: its threshold, the opposite end, and the magnetic heading
/// taken from the numeric part of its designator ("27R" flies 270).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RunwayRecord", into = "RunwayRecord")]
pub struct Runway {
    name: String,
    threshold: DVec2,
    far_end: DVec2,
    heading: f64,
}

/// On-disk form of a runway. The heading is never stored, always derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunwayRecord {
    pub name: String,
    pub threshold: DVec2,
    pub far_end: DVec2,
}

impl Runway {
    pub fn new(name: &str, threshold: DVec2, far_end: DVec2) -> Result<Self, SimError> {
        let name = name.trim().to_uppercase();
        let heading = Self::heading_from_designator(&name)?;
        Ok(Self {
            name,
            threshold,
            far_end,
            heading,
        })
    }

    /// A runway whose far end is placed `length` units along its heading.
    pub fn from_threshold(name: &str, threshold: DVec2, length: f64) -> Result<Self, SimError> {
        let mut runway = Self::new(name, threshold, threshold)?;
        runway.far_end = crate::utils::project(threshold, runway.heading, length);
        Ok(runway)
    }

    fn heading_from_designator(name: &str) -> Result<f64, SimError> {
        let digits: String = name.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() || digits.len() > 2 {
            return Err(SimError::InvalidRunway(format!(
                "'{}' needs a one or two digit designator",
                name
            )));
        }
        let number: u32 = digits
            .parse()
            .map_err(|_| SimError::InvalidRunway(name.to_string()))?;
        if !(1..=36).contains(&number) {
            return Err(SimError::InvalidRunway(format!(
                "'{}' designator must be between 01 and 36",
                name
            )));
        }
        Ok((number * 10 % 360) as f64)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn threshold(&self) -> DVec2 {
        self.threshold
    }

    pub fn far_end(&self) -> DVec2 {
        self.far_end
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// Geometric bearing from threshold to far end, when the two differ.
    pub fn surveyed_heading(&self) -> Option<f64> {
        bearing(self.threshold, self.far_end)
    }
}

impl TryFrom<RunwayRecord> for Runway {
    type Error = SimError;

    fn try_from(record: RunwayRecord) -> Result<Self, Self::Error> {
        Runway::new(&record.name, record.threshold, record.far_end)
    }
}

impl From<Runway> for RunwayRecord {
    fn from(runway: Runway) -> Self {
        RunwayRecord {
            name: runway.name,
            threshold: runway.threshold,
            far_end: runway.far_end,
        }
    }
}
