use serde::{Deserialize, Serialize};

/// Running tally of how the session is going.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub landed: u32,
    /// Aircraft that left the area instead of landing.
    pub improper_exits: u32,
    /// Simulated seconds during which at least one conflict was active.
    pub violation_seconds: f64,
    /// First crash of the session, if any.
    pub crash: Option<String>,
}

impl Score {
    pub(crate) fn record_landing(&mut self) {
        self.landed += 1;
    }

    pub(crate) fn record_exit(&mut self) {
        self.improper_exits += 1;
    }

    pub(crate) fn record_violation(&mut self, dt: f64) {
        self.violation_seconds += dt;
    }

    pub(crate) fn record_crash(&mut self, message: String) {
        if self.crash.is_none() {
            self.crash = Some(message);
        }
    }
}
