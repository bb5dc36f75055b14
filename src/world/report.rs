use serde::Serialize;

use crate::systems::{Conflict, Crash};

/// What happened during one or more simulation steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TickReport {
    pub spawned: Vec<String>,
    pub landed: Vec<String>,
    /// Aircraft removed for leaving the area.
    pub exited: Vec<String>,
    /// Conflicts active at the end of the last step.
    pub conflicts: Vec<Conflict>,
    pub crashes: Vec<Crash>,
    /// Number of steps that actually ran.
    pub steps: u32,
}

impl TickReport {
    /// Fold a later step into this report.
    pub fn merge(&mut self, later: TickReport) {
        self.spawned.extend(later.spawned);
        self.landed.extend(later.landed);
        self.exited.extend(later.exited);
        self.crashes.extend(later.crashes);
        self.conflicts = later.conflicts;
        self.steps += later.steps;
    }
}
