//! Gregorian ordinal dates and their normalization.

use crate::error::Error;

/// Days in a common Gregorian year.
pub const COMMON_YEAR_LEN: i32 = 365;

/// Day of a common Gregorian year on which July 20 falls.
pub(crate) const COMMON_YEAR_ARMSTRONG_DAY: i32 = 201;

/// Days in a full 400-year Gregorian cycle.
const CYCLE_DAYS: i64 = 146_097;
const CYCLE_YEARS: i64 = 400;

/// A Gregorian date given as a year and a 1-based day of that year.
///
/// `year` is an astronomical year number, i.e. 1 BC is `0`, 2 BC is `-1`,
/// etc. The day is not required to lie within the year; see
/// [`OrdinalDate::normalize`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct OrdinalDate {
    pub year: i32,
    pub day: i32,
}

impl OrdinalDate {
    /// Creates an `OrdinalDate` as given, without normalizing it.
    pub fn new(year: i32, day: i32) -> Self {
        Self { year, day }
    }

    /// Creates an `OrdinalDate` from a Gregorian calendar date.
    ///
    /// # Example
    ///
    /// ```
    /// use tqtime::OrdinalDate;
    ///
    /// let date = OrdinalDate::from_calendar_date(1969, 7, 20).unwrap();
    /// assert_eq!(OrdinalDate::new(1969, 201), date);
    /// assert!(OrdinalDate::from_calendar_date(1900, 2, 29).is_err());
    /// ```
    pub fn from_calendar_date(year: i32, month: i32, day: i32) -> Result<Self, Error> {
        let y_type = YearType::from_gregorian(year);
        let len = month_len(month, y_type).ok_or(Error::InvalidMonth { month })?;
        if !(1..=len).contains(&day) {
            return Err(Error::InvalidDayOfMonth { year, month, day });
        }
        Ok(Self::new(year, ordinal_day_number(month, day, y_type)))
    }

    /// Returns `true` if the day lies within `1..=` the length of the year.
    pub fn is_normalized(&self) -> bool {
        (1..=YearType::from_gregorian(self.year).days()).contains(&self.day)
    }

    /// Carries an out-of-range day into the neighbouring years, so that the
    /// result names the same day with `day` inside its own year.
    ///
    /// Dates past the range of `i32` years clamp to the first day of
    /// `i32::MIN` or the last day of `i32::MAX`.
    ///
    /// # Example
    ///
    /// ```
    /// use tqtime::OrdinalDate;
    ///
    /// assert_eq!(OrdinalDate::new(1999, 365), OrdinalDate::new(2000, 0).normalize());
    /// assert_eq!(OrdinalDate::new(2001, 1), OrdinalDate::new(2000, 367).normalize());
    /// ```
    pub fn normalize(self) -> Self {
        if self.is_normalized() {
            return self;
        }

        // Every 400 consecutive Gregorian years hold the same number of days,
        // so whole cycles can be skipped before walking year by year.
        let mut day = i64::from(self.day);
        let cycles = (day - 1).div_euclid(CYCLE_DAYS);
        day -= cycles * CYCLE_DAYS;
        let mut year = i64::from(self.year) + cycles * CYCLE_YEARS;

        loop {
            let len = year_len(year);
            if day <= len {
                break;
            }
            day -= len;
            year += 1;
        }

        let (year, day) = match i32::try_from(year) {
            Ok(year) => (year, day as i32),
            Err(_) if year < 0 => (i32::MIN, 1),
            Err(_) => (i32::MAX, YearType::from_gregorian(i32::MAX).days()),
        };
        let normalized = Self::new(year, day);
        tracing::trace!(from = ?self, to = ?normalized, "normalized ordinal date");
        normalized
    }
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in Gregorian calendar.
    pub fn from_gregorian(year: i32) -> Self {
        if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
    /// Number of days in a year of this type.
    pub fn days(&self) -> i32 {
        COMMON_YEAR_LEN + self.is_leap() as i32
    }
    /// Day of the year on which July 20 (Armstrong Day) falls.
    pub fn armstrong_day(&self) -> i32 {
        COMMON_YEAR_ARMSTRONG_DAY + self.is_leap() as i32
    }
}

/// Normalizes a Gregorian `(year, day_of_year)` pair.
///
/// # Example
///
/// ```
/// assert_eq!((1968, 366), tqtime::normalize(1969, 0));
/// ```
pub fn normalize(year: i32, day_of_year: i32) -> (i32, i32) {
    let date = OrdinalDate::new(year, day_of_year).normalize();
    (date.year, date.day)
}

/// Like [`YearType::days`], for years outside the range of `i32`.
fn year_len(year: i64) -> i64 {
    if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
        366
    } else {
        365
    }
}

fn month_len(month: i32, year_type: YearType) -> Option<i32> {
    match month {
        2 => Some(28 + year_type.is_leap() as i32),
        4 | 6 | 9 | 11 => Some(30),
        1..=12 => Some(31),
        _ => None,
    }
}

fn ordinal_day_number(month: i32, day: i32, year_type: YearType) -> i32 {
    day + match month {
        1 => 0,
        2 => 31,
        _ => 59 + (153 * (month - 3) + 2) / 5 + year_type.is_leap() as i32,
    }
}
