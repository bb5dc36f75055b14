use glam::DVec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavaidKind {
    Vor,
    Ndb,
    Fix,
}

/// A named point aircraft can be sent direct to or held at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Navaid {
    pub name: String,
    #[serde(default = "default_kind")]
    pub kind: NavaidKind,
    pub position: DVec2,
}

fn default_kind() -> NavaidKind {
    NavaidKind::Fix
}

impl Navaid {
    pub fn new(name: &str, kind: NavaidKind, position: DVec2) -> Self {
        Self {
            name: name.trim().to_uppercase(),
            kind,
            position,
        }
    }
}
