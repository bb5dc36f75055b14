pub const SECONDS_PER_HOUR: f64 = 3600.0;

// True airspeed gains 2% per 1000 ft of altitude
pub const TAS_GAIN_PER_THOUSAND_FT: f64 = 0.02;

pub const FEET_PER_THOUSAND: f64 = 1000.0;

// Altitude clearances are given in thousands of feet, 1-2 digits
pub const MAX_ALTITUDE_DIGITS: usize = 2;
pub const HEADING_DIGITS: usize = 3;
