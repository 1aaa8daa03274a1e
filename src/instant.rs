//! The exact instant at which the Tranquility calendar begins.
//!
//! The epoch is 20:18:01.2 UTC on Moon Landing Day, when Neil Armstrong said
//! "Houston, Tranquility Base here. The Eagle has landed."

use crate::error::Error;
use crate::gregorian::OrdinalDate;
use crate::tranquility;

/// A 24-hour clock reading with millisecond precision.
///
/// Ordering is chronological within a day.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct TimeOfDay {
    pub(crate) hour: u32,
    pub(crate) minute: u32,
    pub(crate) second: u32,
    pub(crate) millisecond: u32,
}

impl TimeOfDay {
    /// Midnight, `00:00:00.000`.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay {
        hour: 0,
        minute: 0,
        second: 0,
        millisecond: 0,
    };

    /// Creates a `TimeOfDay`.
    ///
    /// Returns an error unless `hour < 24`, `minute < 60`, `second < 60` and
    /// `millisecond < 1000`.
    pub fn new(hour: u32, minute: u32, second: u32, millisecond: u32) -> Result<Self, Error> {
        if hour >= 24 || minute >= 60 || second >= 60 || millisecond >= 1000 {
            return Err(Error::InvalidTimeOfDay {
                hour,
                minute,
                second,
                millisecond,
            });
        }
        Ok(Self {
            hour,
            minute,
            second,
            millisecond,
        })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }
    pub fn minute(&self) -> u32 {
        self.minute
    }
    pub fn second(&self) -> u32 {
        self.second
    }
    pub fn millisecond(&self) -> u32 {
        self.millisecond
    }
}

/// Time of day on Moon Landing Day at which the calendar begins.
pub const TRANQUILITY: TimeOfDay = TimeOfDay {
    hour: 20,
    minute: 18,
    second: 1,
    millisecond: 200,
};

/// Returns `true` if and only if the given instant is before [`TRANQUILITY`]
/// on Moon Landing Day.
///
/// The date is normalized first. The time of day only matters on Moon
/// Landing Day itself, and is compared field by field, so out-of-range
/// readings are accepted as given.
///
/// # Example
///
/// ```
/// use tqtime::is_before_tranquility;
///
/// assert!(is_before_tranquility(1969, 201, 20, 18, 1, 199));
/// assert!(!is_before_tranquility(1969, 201, 20, 18, 1, 200));
/// assert!(is_before_tranquility(1969, 200, 23, 59, 59, 999));
/// ```
pub fn is_before_tranquility(
    year: i32,
    day_of_year: i32,
    hour: u32,
    minute: u32,
    second: u32,
    millisecond: u32,
) -> bool {
    let time = TimeOfDay {
        hour,
        minute,
        second,
        millisecond,
    };
    is_before(OrdinalDate::new(year, day_of_year), time)
}

/// Like [`is_before_tranquility`], with the date and time as values.
pub fn is_before(date: OrdinalDate, time: TimeOfDay) -> bool {
    use std::cmp::Ordering::*;
    match tranquility::year(date.year, date.day).cmp(&0) {
        Less => true,
        Greater => false,
        Equal => time < TRANQUILITY,
    }
}
