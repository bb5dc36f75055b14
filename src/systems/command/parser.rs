use crate::{
    components::aircraft::TurnDirection,
    utils::{CommandError, FEET_PER_THOUSAND, HEADING_DIGITS, MAX_ALTITUDE_DIGITS},
};

/// One validated clearance, ready to be applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    /// Fly a heading, optionally forcing the turn direction.
    Heading {
        heading: f64,
        turn: Option<TurnDirection>,
    },
    /// Climb or descend to an altitude [ft].
    Altitude { altitude: f64, expedite: bool },
    /// Fly direct to a named waypoint.
    DirectTo {
        waypoint: String,
        turn: Option<TurnDirection>,
    },
    /// Change indicated airspeed [kt]. Range is checked when applied.
    Speed { airspeed: f64, expedite: bool },
    Hold {
        waypoint: String,
        direction: TurnDirection,
    },
    /// Cleared for the ILS approach to a runway.
    Land { runway: String },
    Abort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verb {
    Abort,
    Course,
    Speed,
    Hold,
    Land,
}

impl Verb {
    fn parse(token: &str) -> Result<Self, CommandError> {
        match token {
            "A" => Ok(Verb::Abort),
            "C" => Ok(Verb::Course),
            "S" => Ok(Verb::Speed),
            "H" => Ok(Verb::Hold),
            "L" => Ok(Verb::Land),
            other => Err(CommandError::UnknownVerb(other.to_string())),
        }
    }

    fn token(&self) -> &'static str {
        match self {
            Verb::Abort => "A",
            Verb::Course => "C",
            Verb::Speed => "S",
            Verb::Hold => "H",
            Verb::Land => "L",
        }
    }

    /// Verbs that steer the aircraft and so may not mix with an abort or a
    /// landing clearance in the wrong order.
    fn is_course_type(&self) -> bool {
        matches!(self, Verb::Course | Verb::Speed | Verb::Hold)
    }
}

/// Parse a callsign-free clearance such as `"C 090;L C 5;X S 210"`.
///
/// Tokens come in verb/parameter pairs; the abort verb `A` takes no
/// parameter. The whole sequence is validated before anything is returned,
/// so a caller either gets every instruction or an error.
pub fn parse(text: &str) -> Result<Vec<Instruction>, CommandError> {
    let pairs = pair_tokens(text)?;
    let verbs: Vec<Verb> = pairs.iter().map(|(verb, _)| *verb).collect();
    check_order(&verbs)?;

    pairs
        .iter()
        .map(|(verb, param)| parse_instruction(*verb, param.as_deref()))
        .collect()
}

/// Split into (verb, parameter) pairs, giving each abort an empty parameter.
fn pair_tokens(text: &str) -> Result<Vec<(Verb, Option<String>)>, CommandError> {
    let mut tokens = text.split_whitespace().map(str::to_uppercase);
    let mut pairs = Vec::new();

    while let Some(token) = tokens.next() {
        let verb = Verb::parse(&token)?;
        if verb == Verb::Abort {
            pairs.push((verb, None));
            continue;
        }
        let param = tokens.next().ok_or(CommandError::OddTokenCount)?;
        pairs.push((verb, Some(param)));
    }

    if pairs.is_empty() {
        return Err(CommandError::Empty);
    }
    Ok(pairs)
}

fn check_order(verbs: &[Verb]) -> Result<(), CommandError> {
    let has = |wanted: Verb| verbs.contains(&wanted);
    if has(Verb::Hold) && (has(Verb::Course) || has(Verb::Land)) {
        return Err(CommandError::HoldWithCourseOrLanding);
    }

    let first_abort = verbs.iter().position(|v| *v == Verb::Abort);
    let first_land = verbs.iter().position(|v| *v == Verb::Land);

    for (index, verb) in verbs.iter().enumerate() {
        if !verb.is_course_type() {
            continue;
        }
        if first_land.map_or(false, |land| index >= land) {
            return Err(CommandError::VerbAfterLanding(verb.token().to_string()));
        }
        if first_abort.map_or(false, |abort| index < abort) {
            return Err(CommandError::VerbBeforeAbort(verb.token().to_string()));
        }
    }
    Ok(())
}

fn parse_instruction(verb: Verb, param: Option<&str>) -> Result<Instruction, CommandError> {
    let Some(param) = param else {
        return Ok(Instruction::Abort);
    };
    let (value, suffix) = split_suffix(param)?;

    match verb {
        Verb::Abort => Ok(Instruction::Abort),
        Verb::Course if is_numeric(value) => parse_course_number(value, suffix),
        Verb::Course => Ok(Instruction::DirectTo {
            waypoint: value.to_string(),
            turn: turn_suffix(suffix)?,
        }),
        Verb::Speed => {
            if !is_numeric(value) {
                return Err(CommandError::InvalidParameter(value.to_string()));
            }
            Ok(Instruction::Speed {
                airspeed: parse_number(value)?,
                expedite: expedite_suffix(suffix)?,
            })
        }
        Verb::Hold => {
            if is_numeric(value) {
                return Err(CommandError::InvalidParameter(value.to_string()));
            }
            Ok(Instruction::Hold {
                waypoint: value.to_string(),
                direction: turn_suffix(suffix)?.unwrap_or(TurnDirection::Right),
            })
        }
        Verb::Land => {
            if let Some(suffix) = suffix {
                return Err(CommandError::InvalidSuffix(suffix.to_string()));
            }
            Ok(Instruction::Land {
                runway: value.to_string(),
            })
        }
    }
}

/// Three digits is a heading, one or two digits thousands of feet.
fn parse_course_number(value: &str, suffix: Option<&str>) -> Result<Instruction, CommandError> {
    match value.len() {
        HEADING_DIGITS => {
            let heading = parse_number(value)?;
            if heading > 360.0 {
                return Err(CommandError::OutOfRange(format!("heading {}", value)));
            }
            Ok(Instruction::Heading {
                heading: heading % 360.0,
                turn: turn_suffix(suffix)?,
            })
        }
        len if len <= MAX_ALTITUDE_DIGITS => {
            let thousands = parse_number(value)?;
            if thousands == 0.0 {
                return Err(CommandError::OutOfRange(format!("altitude {}", value)));
            }
            Ok(Instruction::Altitude {
                altitude: thousands * FEET_PER_THOUSAND,
                expedite: expedite_suffix(suffix)?,
            })
        }
        _ => Err(CommandError::InvalidParameter(value.to_string())),
    }
}

fn split_suffix(param: &str) -> Result<(&str, Option<&str>), CommandError> {
    let mut parts = param.split(';');
    let value = parts.next().unwrap_or_default();
    let suffix = parts.next();
    if value.is_empty() {
        return Err(CommandError::InvalidParameter(param.to_string()));
    }
    if let Some(extra) = parts.next() {
        return Err(CommandError::InvalidSuffix(extra.to_string()));
    }
    Ok((value, suffix))
}

fn turn_suffix(suffix: Option<&str>) -> Result<Option<TurnDirection>, CommandError> {
    match suffix {
        None => Ok(None),
        Some("L") => Ok(Some(TurnDirection::Left)),
        Some("R") => Ok(Some(TurnDirection::Right)),
        Some(other) => Err(CommandError::InvalidSuffix(other.to_string())),
    }
}

fn expedite_suffix(suffix: Option<&str>) -> Result<bool, CommandError> {
    match suffix {
        None => Ok(false),
        Some("X") => Ok(true),
        Some(other) => Err(CommandError::InvalidSuffix(other.to_string())),
    }
}

fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

fn parse_number(value: &str) -> Result<f64, CommandError> {
    value
        .parse::<u32>()
        .map(f64::from)
        .map_err(|_| CommandError::InvalidParameter(value.to_string()))
}
