use serde::Serialize;
use std::f64::consts::SQRT_2;
use tracing::warn;

use crate::{
    components::aircraft::Aircraft,
    resources::{AreaConfig, SeparationConfig},
    utils::distance,
};

use super::grid::SpatialGrid;

/// Two aircraft inside the separation minima.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conflict {
    pub first: String,
    pub second: String,
    /// Horizontal distance [nm]
    pub horizontal_nm: f64,
    /// Vertical distance [ft]
    pub vertical_ft: f64,
}

/// Two aircraft that met.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Crash {
    pub first: String,
    pub second: String,
    pub horizontal_nm: f64,
    pub vertical_ft: f64,
}

/// Result of one detection pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConflictReport {
    pub conflicts: Vec<Conflict>,
    pub crashes: Vec<Crash>,
}

impl ConflictReport {
    pub fn is_empty(&self) -> bool {
        self.conflicts.is_empty() && self.crashes.is_empty()
    }

    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }

    pub fn has_crashes(&self) -> bool {
        !self.crashes.is_empty()
    }
}

/// Separation and crash checks over all active aircraft.
///
/// Holds no state between ticks other than the reusable grid buckets.
#[derive(Debug, Clone)]
pub struct ConflictDetector {
    grid: SpatialGrid,
}

impl ConflictDetector {
    /// Cells are the separation minimum divided by sqrt(2) wide, so any two
    /// aircraft sharing a cell are already inside the minimum.
    pub fn new(separation: &SeparationConfig, area: &AreaConfig) -> Self {
        let search_nm = separation.horizontal_nm.max(separation.crash_horizontal_nm);
        let cell_size = area.to_units(separation.horizontal_nm) / SQRT_2;
        Self {
            grid: SpatialGrid::new(cell_size, area.to_units(search_nm)),
        }
    }

    /// Flag conflicts and crashes among `aircraft`.
    ///
    /// Every `in_conflict` flag is recomputed. Aircraft that crash get their
    /// crash reason set; they are otherwise left for the caller to handle.
    pub fn detect(
        &mut self,
        aircraft: &mut [Aircraft],
        separation: &SeparationConfig,
        area: &AreaConfig,
    ) -> ConflictReport {
        let mut report = ConflictReport::default();

        self.grid.clear();
        for (index, ac) in aircraft.iter_mut().enumerate() {
            ac.in_conflict = false;
            if !ac.landed {
                self.grid.insert(index, ac.position);
            }
        }

        let search_nm = separation.horizontal_nm.max(separation.crash_horizontal_nm);

        for (a, b) in self.grid.candidate_pairs() {
            let (first, second) = (&aircraft[a], &aircraft[b]);
            let horizontal_nm = area.to_nm(distance(first.position, second.position));
            if horizontal_nm >= search_nm {
                continue;
            }
            let vertical_ft = (first.altitude - second.altitude).abs();

            if horizontal_nm < separation.horizontal_nm
                && in_conflict(first, second, vertical_ft, separation)
            {
                report.conflicts.push(Conflict {
                    first: first.callsign.clone(),
                    second: second.callsign.clone(),
                    horizontal_nm,
                    vertical_ft,
                });
                aircraft[a].in_conflict = true;
                aircraft[b].in_conflict = true;
            }

            if vertical_ft <= separation.crash_vertical_ft
                && horizontal_nm <= separation.crash_horizontal_nm
            {
                let first = aircraft[a].callsign.clone();
                let second = aircraft[b].callsign.clone();
                warn!("{} and {} collided", first, second);
                mark_crashed(&mut aircraft[a], &second);
                mark_crashed(&mut aircraft[b], &first);
                report.crashes.push(Crash {
                    first,
                    second,
                    horizontal_nm,
                    vertical_ft,
                });
            }
        }
        report
    }
}

/// Vertical loss of separation between airborne aircraft not on an approach,
/// or two aircraft on the ground on the same runway.
fn in_conflict(
    first: &Aircraft,
    second: &Aircraft,
    vertical_ft: f64,
    separation: &SeparationConfig,
) -> bool {
    let off_approach = !first.approach.is_active() && !second.approach.is_active();
    let airborne = first.on_ground.is_none() && second.on_ground.is_none();
    if vertical_ft < separation.vertical_ft && off_approach && airborne {
        return true;
    }
    matches!(
        (first.on_ground.as_deref(), second.on_ground.as_deref()),
        (Some(a), Some(b)) if a == b
    )
}

fn mark_crashed(aircraft: &mut Aircraft, other: &str) {
    if aircraft.crash.is_none() {
        aircraft.crash = Some(format!("collided with {}", other));
    }
}
