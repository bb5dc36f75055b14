use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    InvalidConfig(String),

    #[error("Invalid runway: {0}")]
    InvalidRunway(String),

    #[error("Duplicate registry name: {0}")]
    DuplicateName(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Reasons a clearance is refused. A refused clearance never mutates the
/// aircraft it was addressed to.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("commands must come in verb/parameter pairs")]
    OddTokenCount,

    #[error("unknown instruction '{0}'")]
    UnknownVerb(String),

    #[error("invalid parameter '{0}'")]
    InvalidParameter(String),

    #[error("invalid modifier '{0}'")]
    InvalidSuffix(String),

    #[error("{0} is out of range")]
    OutOfRange(String),

    #[error("hold cannot be combined with course or landing instructions")]
    HoldWithCourseOrLanding,

    #[error("'{0}' cannot follow a landing clearance")]
    VerbAfterLanding(String),

    #[error("'{0}' cannot precede an abort")]
    VerbBeforeAbort(String),

    #[error("{callsign} is established on the localizer")]
    LocalizerEstablished { callsign: String },

    #[error("{callsign} is established on the glideslope")]
    GlideslopeEstablished { callsign: String },

    #[error("{callsign} is on short final")]
    ShortFinal { callsign: String },

    #[error("{callsign} is already cleared for runway {runway}")]
    RunwayAlreadyAssigned { callsign: String, runway: String },

    #[error("{callsign} cannot hold while cleared for an approach")]
    HoldWhileOnApproach { callsign: String },

    #[error("{callsign} has no approach to abort")]
    NoApproachToAbort { callsign: String },

    #[error("{callsign} is on the ground")]
    OnGround { callsign: String },

    #[error("{callsign} has crashed")]
    Crashed { callsign: String },

    #[error("unknown waypoint '{0}'")]
    UnknownWaypoint(String),

    #[error("unknown runway '{0}'")]
    UnknownRunway(String),

    #[error("no aircraft with callsign '{0}'")]
    UnknownCallsign(String),
}
