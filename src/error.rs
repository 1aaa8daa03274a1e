//! Errors reported by the fallible constructors.
//!
//! The conversion itself never fails; only building inputs from calendar or
//! clock fields can be rejected.

/// Error type for input validation in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Returned when a Gregorian month number is outside `1..=12`.
    #[error("month must be in 1..=12, got {month}")]
    InvalidMonth {
        /// The invalid month number.
        month: i32,
    },

    /// Returned when a day does not exist in the given Gregorian month.
    #[error("day {day} does not exist in {year:04}-{month:02}")]
    InvalidDayOfMonth {
        /// Gregorian year.
        year: i32,
        /// Gregorian month, `1..=12`.
        month: i32,
        /// The invalid day.
        day: i32,
    },

    /// Returned when a clock reading is not a valid 24-hour time.
    #[error("invalid time of day {hour:02}:{minute:02}:{second:02}.{millisecond:03}")]
    InvalidTimeOfDay {
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    },
}
