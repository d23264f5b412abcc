//! Berlin clock lamp-state model.
//!
//! A Mengenlehreuhr face has 24 lamps: one blinking seconds lamp on top,
//! two rows of four lamps counting five hours and one hour apiece, then a
//! row of eleven and a row of four counting five minutes and one minute
//! apiece. A time maps onto the face by lighting a contiguous prefix of
//! each row.

use std::str::FromStr;

use serde::Serialize;

use crate::domain::error::ClockError;
use crate::domain::models::time::TimeOfDay;

/// Lamps in the five-hour row.
pub const HOURS_TOP_LAMPS: usize = 4;
/// Lamps in the one-hour row.
pub const HOURS_BOTTOM_LAMPS: usize = 4;
/// Lamps in the five-minute row.
pub const MINUTES_TOP_LAMPS: usize = 11;
/// Lamps in the one-minute row.
pub const MINUTES_BOTTOM_LAMPS: usize = 4;

/// Lamp states for one Berlin clock face.
///
/// A fresh, fully-determined snapshot of a single time; every row is a
/// contiguous lit prefix (`true` lamps first, `false` lamps after).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ClockState {
    /// Lit on even seconds, dark on odd seconds.
    pub seconds_lamp_on: bool,
    /// Four lamps, five hours each.
    pub hours_top: [bool; HOURS_TOP_LAMPS],
    /// Four lamps, one hour each.
    pub hours_bottom: [bool; HOURS_BOTTOM_LAMPS],
    /// Eleven lamps, five minutes each. On a physical face the third,
    /// sixth, and ninth lamp mark the quarter hours; the encoding is the
    /// same as the other rows.
    pub minutes_top: [bool; MINUTES_TOP_LAMPS],
    /// Four lamps, one minute each.
    pub minutes_bottom: [bool; MINUTES_BOTTOM_LAMPS],
}

impl ClockState {
    /// Compute the lamp states for a time of day.
    ///
    /// Pure and infallible: range validation lives in [`TimeOfDay`], and a
    /// valid time always produces row counts within each row's length
    /// (`23 / 5 == 4`, `59 / 5 == 11`).
    pub fn for_time(time: TimeOfDay) -> Self {
        Self {
            seconds_lamp_on: time.second() % 2 == 0,
            hours_top: lit_prefix(usize::from(time.hour() / 5)),
            hours_bottom: lit_prefix(usize::from(time.hour() % 5)),
            minutes_top: lit_prefix(usize::from(time.minute() / 5)),
            minutes_bottom: lit_prefix(usize::from(time.minute() % 5)),
        }
    }
}

impl From<TimeOfDay> for ClockState {
    fn from(time: TimeOfDay) -> Self {
        Self::for_time(time)
    }
}

impl FromStr for ClockState {
    type Err = ClockError;

    /// Parse an `HH:MM:SS` string and convert it in one step.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<TimeOfDay>().map(Self::for_time)
    }
}

/// Light a contiguous prefix of a lamp row.
///
/// Indices `[0, on_count)` are lit, the rest stay dark. Every row of the
/// face is produced by this one rule.
fn lit_prefix<const N: usize>(on_count: usize) -> [bool; N] {
    debug_assert!(on_count <= N);
    std::array::from_fn(|idx| idx < on_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(input: &str) -> ClockState {
        input.parse().unwrap()
    }

    #[test]
    fn test_midnight_all_rows_dark_seconds_lit() {
        let state = state("00:00:00");
        assert!(state.seconds_lamp_on);
        assert_eq!(state.hours_top, [false; 4]);
        assert_eq!(state.hours_bottom, [false; 4]);
        assert_eq!(state.minutes_top, [false; 11]);
        assert_eq!(state.minutes_bottom, [false; 4]);
    }

    #[test]
    fn test_afternoon_time() {
        // 13 hours -> 2 five-hour lamps + 3 one-hour lamps; 25 minutes ->
        // 5 five-minute lamps + 0 one-minute lamps; 45 seconds is odd.
        let state = state("13:25:45");
        assert!(!state.seconds_lamp_on);
        assert_eq!(state.hours_top, [true, true, false, false]);
        assert_eq!(state.hours_bottom, [true, true, true, false]);
        assert_eq!(
            state.minutes_top,
            [true, true, true, true, true, false, false, false, false, false, false]
        );
        assert_eq!(state.minutes_bottom, [false; 4]);
    }

    #[test]
    fn test_last_second_of_day() {
        let state = state("23:59:59");
        assert!(!state.seconds_lamp_on);
        assert_eq!(state.hours_top, [true; 4]);
        assert_eq!(state.hours_bottom, [true, true, true, false]);
        assert_eq!(state.minutes_top, [true; 11]);
        assert_eq!(state.minutes_bottom, [true; 4]);
    }

    #[test]
    fn test_seconds_lamp_parity() {
        assert!(state("10:20:30").seconds_lamp_on);
        assert!(!state("10:20:31").seconds_lamp_on);
    }

    #[test]
    fn test_lit_prefix_bounds() {
        assert_eq!(lit_prefix::<4>(0), [false; 4]);
        assert_eq!(lit_prefix::<4>(4), [true; 4]);
        assert_eq!(
            lit_prefix::<11>(7),
            [true, true, true, true, true, true, true, false, false, false, false]
        );
    }

    #[test]
    fn test_from_time_matches_for_time() {
        let time = TimeOfDay::new(16, 50, 6).unwrap();
        assert_eq!(ClockState::from(time), ClockState::for_time(time));
    }
}
