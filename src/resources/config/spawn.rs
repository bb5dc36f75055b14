use serde::{Deserialize, Serialize};
use std::fmt;

/// Edge of the operating area traffic enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpawnDirection {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "W")]
    West,
}

impl SpawnDirection {
    pub const ALL: [SpawnDirection; 4] = [
        SpawnDirection::North,
        SpawnDirection::South,
        SpawnDirection::East,
        SpawnDirection::West,
    ];

    /// Heading that points from this edge into the area.
    pub fn inbound_heading(&self) -> f64 {
        match self {
            SpawnDirection::North => 180.0,
            SpawnDirection::South => 0.0,
            SpawnDirection::East => 270.0,
            SpawnDirection::West => 90.0,
        }
    }
}

impl fmt::Display for SpawnDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            SpawnDirection::North => "N",
            SpawnDirection::South => "S",
            SpawnDirection::East => "E",
            SpawnDirection::West => "W",
        };
        write!(f, "{}", letter)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Scripted scenarios turn automatic traffic off.
    pub enabled: bool,
    /// Seconds between spawns.
    pub interval: f64,
    pub directions: Vec<SpawnDirection>,
    pub callsign_prefixes: Vec<String>,
    pub altitudes: Vec<f64>, // [ft]
    pub airspeed: f64,       // [kt]
    pub heading_jitter: f64, // [deg], applied as +/-
    /// Fraction of the edge (from, to) entry points are drawn from.
    pub edge_band: (f64, f64),
    pub min_altitude_separation: f64, // [ft]
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval: 60.0,
            directions: SpawnDirection::ALL.to_vec(),
            callsign_prefixes: [
                "BA", "LH", "AF", "KL", "UA", "AA", "DL", "VS", "EK", "QR", "EY", "SQ", "CX",
                "JL", "NH", "TK", "IB", "AY", "SK", "AC",
            ]
            .iter()
            .map(|p| p.to_string())
            .collect(),
            altitudes: (6..=12).map(|k| k as f64 * 1000.0).collect(),
            airspeed: 250.0,
            heading_jitter: 15.0,
            edge_band: (0.25, 0.75),
            min_altitude_separation: 1000.0,
        }
    }
}
