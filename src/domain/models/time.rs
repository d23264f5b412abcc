//! Time-of-day value object.
//!
//! `TimeOfDay` is the validated input to the lamp-state conversion. Every
//! construction path range-checks its fields, so downstream code never sees
//! an hour above 23 or a minute/second above 59.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::Serialize;

use crate::domain::error::ClockError;

const HOUR_MAX: u8 = 23;
const MINUTE_MAX: u8 = 59;
const SECOND_MAX: u8 = 59;

/// A validated wall-clock time: hour, minute, and second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeOfDay {
    /// Create a time of day, rejecting out-of-range fields.
    ///
    /// The first field out of range is reported; nothing is built until all
    /// three fields have passed their bound checks.
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, ClockError> {
        if hour > HOUR_MAX {
            return Err(ClockError::Range {
                field: "hour",
                value: hour,
                max: HOUR_MAX,
            });
        }
        if minute > MINUTE_MAX {
            return Err(ClockError::Range {
                field: "minute",
                value: minute,
                max: MINUTE_MAX,
            });
        }
        if second > SECOND_MAX {
            return Err(ClockError::Range {
                field: "second",
                value: second,
                max: SECOND_MAX,
            });
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Hour in 24-hour form (0-23).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute of the hour (0-59).
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Second of the minute (0-59).
    pub fn second(&self) -> u8 {
        self.second
    }
}

impl FromStr for TimeOfDay {
    type Err = ClockError;

    /// Parse the fixed `HH:MM:SS` shape: exactly two digits, a colon, two
    /// digits, a colon, two digits. Shape violations (including unpadded
    /// fields like `"9:5:3"`) are [`ClockError::Format`]; well-shaped input
    /// with a field past its bound is [`ClockError::Range`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 8 || bytes[2] != b':' || bytes[5] != b':' {
            return Err(ClockError::Format(s.to_string()));
        }
        let field = |idx: usize| -> Result<u8, ClockError> {
            let (tens, ones) = (bytes[idx], bytes[idx + 1]);
            if tens.is_ascii_digit() && ones.is_ascii_digit() {
                Ok((tens - b'0') * 10 + (ones - b'0'))
            } else {
                Err(ClockError::Format(s.to_string()))
            }
        };
        Self::new(field(0)?, field(3)?, field(6)?)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

// NaiveTime reports leap seconds through its nanosecond field, so
// hour/minute/second are always within our bounds and the casts cannot
// truncate.
#[allow(clippy::cast_possible_truncation)]
impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
            second: time.second() as u8,
        }
    }
}
