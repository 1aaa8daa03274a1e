//! Tranquility calendar
//!
//! A perennial calendar of 13 months with 28 days each, proposed by Jeff
//! Siggins and counted from the first crewed Moon landing. Every month starts
//! on a Friday. The days that would break this pattern stand outside any
//! month and week:
//!
//! - Armstrong Day ends every Tranquility year (Gregorian July 20), except
//!   the very first one.
//! - Aldrin Day is the leap day (Gregorian February 29), inserted before the
//!   last day of Hippocrates.
//! - Moon Landing Day is July 20, 1969 itself. It belongs to no year, and is
//!   treated as year 0.
//!
//! Years after Moon Landing Day are "After Tranquility" (positive), years
//! before it are "Before Tranquility" (negative). Apart from Moon Landing Day
//! there is no year 0.
//!
//! # Examples
//!
//! ```
//! use tqtime::TqDate;
//! use tqtime::tranquility::{Day, Month, Weekday};
//!
//! let date = TqDate::from_gregorian(1969, 202); // July 21, 1969
//!
//! assert_eq!(1, date.year());
//! assert_eq!(Some(Month::Archimedes), date.month());
//! assert_eq!(Day::Ordinary(1), date.day());
//! assert_eq!(Some(Weekday::Friday), date.weekday());
//! assert_eq!("01A 1", date.short());
//! ```

use std::fmt::{self as std_fmt, Display};

use crate::gregorian::{COMMON_YEAR_ARMSTRONG_DAY, COMMON_YEAR_LEN, OrdinalDate, YearType};

pub mod fmt;

pub use fmt::{
    day_code, day_name, long_date, month_letter, month_name, short_date, weekday_name,
};

/// Integer marker of Armstrong Day, see [`Day::value`].
pub const ARMSTRONG_DAY: i32 = -1;
/// Integer marker of Aldrin Day, see [`Day::value`].
pub const ALDRIN_DAY: i32 = -2;
/// Integer marker of Moon Landing Day, see [`Day::value`].
pub const MOON_LANDING_DAY: i32 = -3;

/// Days in every Tranquility month.
pub const MONTH_LEN: i32 = 28;
const WEEK_LEN: i32 = 7;

/// Gregorian year of the Moon landing.
pub(crate) const MOON_LANDING_YEAR: i32 = 1969;

/// Moon Landing Day as a Gregorian ordinal date.
pub const MOON_LANDING: OrdinalDate = OrdinalDate {
    year: MOON_LANDING_YEAR,
    day: COMMON_YEAR_ARMSTRONG_DAY,
};

/// Day of the Tranquility year (in a leap year) that Aldrin Day occupies,
/// i.e. right after the 28th day of Hippocrates.
const ALDRIN_YEAR_DAY: i32 = MONTH_LEN * Month::Hippocrates as i32;

/// A day of the Tranquility week. Weeks begin on Friday.
///
/// Special days have no weekday, see [`TqDate::weekday`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Weekday {
    Friday = 1,
    Saturday,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
}

impl Weekday {
    const LEN: usize = WEEK_LEN as usize;
    const ALL: [Weekday; Self::LEN] = [
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
    ];

    /// Returns the weekday numbered `num` in `1..=7` (Friday through
    /// Thursday), or `None` if out of range.
    pub fn from_number(num: i32) -> Option<Self> {
        match usize::try_from(num) {
            Ok(n @ 1..=Self::LEN) => Some(Self::ALL[n - 1]),
            _ => None,
        }
    }
    /// Returns the number of the weekday, `1..=7` for Friday through Thursday.
    pub fn number(&self) -> i32 {
        *self as i32
    }
    /// English name of the weekday.
    pub fn name(&self) -> &'static str {
        fmt::weekday_name(Some(*self))
    }
}

/// A Tranquility month. Months are named after scientists, in alphabetical
/// order.
///
/// Special days belong to no month, see [`TqDate::month`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Month {
    Archimedes = 1,
    Brahe,
    Copernicus,
    Darwin,
    Einstein,
    Faraday,
    Galileo,
    Hippocrates,
    Imhotep,
    Jung,
    Kepler,
    Lavoisier,
    Mendel,
}

impl Month {
    const LEN: usize = 13;
    const ALL: [Month; Self::LEN] = [
        Month::Archimedes,
        Month::Brahe,
        Month::Copernicus,
        Month::Darwin,
        Month::Einstein,
        Month::Faraday,
        Month::Galileo,
        Month::Hippocrates,
        Month::Imhotep,
        Month::Jung,
        Month::Kepler,
        Month::Lavoisier,
        Month::Mendel,
    ];

    /// Returns the month numbered `num` in `1..=13`, or `None` if out of
    /// range.
    ///
    /// ```
    /// use tqtime::tranquility::Month;
    ///
    /// assert_eq!(Some(Month::Hippocrates), Month::from_number(8));
    /// assert_eq!(None, Month::from_number(0));
    /// ```
    pub fn from_number(num: i32) -> Option<Self> {
        match usize::try_from(num) {
            Ok(n @ 1..=Self::LEN) => Some(Self::ALL[n - 1]),
            _ => None,
        }
    }
    /// Returns the month number, `1..=13`.
    pub fn number(&self) -> i32 {
        *self as i32
    }
    /// English name of the month.
    pub fn name(&self) -> &'static str {
        fmt::month_name(Some(*self))
    }
    /// First letter of the month name.
    pub fn letter(&self) -> &'static str {
        fmt::month_letter(Some(*self))
    }
}

/// A day of a Tranquility month, or one of the special days outside any
/// month.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Day {
    /// An ordinary day of a month, `1..=28`.
    Ordinary(u8),
    Armstrong,
    Aldrin,
    MoonLanding,
}

impl Day {
    /// Returns `true` for Armstrong Day, Aldrin Day and Moon Landing Day.
    pub fn is_special(&self) -> bool {
        !matches!(self, Day::Ordinary(_))
    }
    /// Integer form of the day: the day of the month for ordinary days, or
    /// one of [`ARMSTRONG_DAY`], [`ALDRIN_DAY`] and [`MOON_LANDING_DAY`].
    pub fn value(&self) -> i32 {
        match self {
            Day::Ordinary(d) => i32::from(*d),
            Day::Armstrong => ARMSTRONG_DAY,
            Day::Aldrin => ALDRIN_DAY,
            Day::MoonLanding => MOON_LANDING_DAY,
        }
    }
    /// Inverse of [`Day::value`]. Returns `None` for values that are neither
    /// a day of the month nor a special day marker.
    ///
    /// ```
    /// use tqtime::tranquility::{ALDRIN_DAY, Day};
    ///
    /// assert_eq!(Some(Day::Aldrin), Day::from_value(ALDRIN_DAY));
    /// assert_eq!(Some(Day::Ordinary(28)), Day::from_value(28));
    /// assert_eq!(None, Day::from_value(29));
    /// ```
    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            ARMSTRONG_DAY => Some(Day::Armstrong),
            ALDRIN_DAY => Some(Day::Aldrin),
            MOON_LANDING_DAY => Some(Day::MoonLanding),
            1..=MONTH_LEN => Some(Day::Ordinary(value as u8)),
            _ => None,
        }
    }
    /// Name of the day, e.g. `"Aldrin Day"` or `"17"`.
    pub fn name(&self) -> String {
        fmt::day_name(self.value())
    }
    /// Short code of the day, e.g. `"ALD"` or `"17"`.
    pub fn code(&self) -> String {
        fmt::day_code(self.value())
    }
}

/// A resolved Tranquility date.
///
/// # Example
///
/// ```
/// use tqtime::TqDate;
/// use tqtime::tranquility::Day;
///
/// let date = TqDate::from_gregorian(2000, 60); // February 29, 2000
///
/// assert_eq!(Day::Aldrin, date.day());
/// assert_eq!(None, date.month());
/// assert_eq!("Aldrin Day, 31 After Tranquility", date.to_string());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TqDate {
    year: i32,
    year_day: i32,
    month: Option<Month>,
    day: Day,
}

impl TqDate {
    /// Converts a Gregorian year and day of year. The day of year may lie
    /// outside the year; it is normalized first.
    pub fn from_gregorian(year: i32, day_of_year: i32) -> Self {
        Self::from_ordinal(OrdinalDate::new(year, day_of_year))
    }

    /// Converts a Gregorian ordinal date, normalizing it first.
    pub fn from_ordinal(date: OrdinalDate) -> Self {
        let date = date.normalize();
        let year_day = tq_year_day(date);
        let (month, day) = match leap_adjusted_year_day(year_day, date.year) {
            YearDay::Special(day) => (None, day),
            YearDay::Ordinary(yd) => (
                Month::from_number((yd - 1) / MONTH_LEN + 1),
                Day::Ordinary(clock_modulo(yd, MONTH_LEN) as u8),
            ),
        };
        Self {
            year: tq_year(date),
            year_day,
            month,
            day,
        }
    }

    /// Tranquility year: negative Before Tranquility, positive After
    /// Tranquility, `0` only on Moon Landing Day.
    pub fn year(&self) -> i32 {
        self.year
    }
    /// Day of the Tranquility year, `1..=366`, counting Aldrin Day in leap
    /// years. See [`year_day`].
    ///
    /// ```
    /// use tqtime::TqDate;
    ///
    /// assert_eq!(224, TqDate::from_gregorian(2000, 60).year_day()); // Aldrin Day
    /// assert_eq!(225, TqDate::from_gregorian(2000, 61).year_day());
    /// ```
    pub fn year_day(&self) -> i32 {
        self.year_day
    }
    /// Month of the date, `None` on special days.
    pub fn month(&self) -> Option<Month> {
        self.month
    }
    /// Day of the month, or the special day.
    pub fn day(&self) -> Day {
        self.day
    }
    /// Day of the week, `None` on special days.
    pub fn weekday(&self) -> Option<Weekday> {
        match self.day {
            Day::Ordinary(d) => Weekday::from_number(clock_modulo(i32::from(d), WEEK_LEN)),
            _ => None,
        }
    }
    /// Returns `true` for Armstrong Day, Aldrin Day and Moon Landing Day.
    pub fn is_special(&self) -> bool {
        self.day.is_special()
    }
    /// Day of a common Tranquility year, `1..=364`, counting past any Aldrin
    /// Day. `None` on special days.
    pub fn common_year_day(&self) -> Option<i32> {
        match (self.month, self.day) {
            (Some(m), Day::Ordinary(d)) => Some((m.number() - 1) * MONTH_LEN + i32::from(d)),
            _ => None,
        }
    }

    /// Compact form, e.g. `"28M -1"` or `"ARM -2"`. See [`fmt::short`].
    pub fn short(&self) -> String {
        fmt::short(self)
    }
}

/// Formats the long form, e.g. `"Friday, 1 Archimedes, 1 After Tranquility"`.
/// See [`fmt::long`].
impl Display for TqDate {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        f.write_str(&fmt::long(self))
    }
}

/// Day of the Tranquility year for a Gregorian date, in `1..=366`.
///
/// The day is counted on the Gregorian year's own length, so in leap years
/// Aldrin Day takes up a day of its own.
///
/// ```
/// assert_eq!(1, tqtime::year_day(1969, 202));
/// assert_eq!(365, tqtime::year_day(1969, 201));
/// assert_eq!(366, tqtime::year_day(2000, 202));
/// ```
pub fn year_day(year: i32, day_of_year: i32) -> i32 {
    tq_year_day(OrdinalDate::new(year, day_of_year).normalize())
}

/// Tranquility year of a Gregorian date. See [`TqDate::year`].
pub fn year(year: i32, day_of_year: i32) -> i32 {
    tq_year(OrdinalDate::new(year, day_of_year).normalize())
}

/// Tranquility month of a Gregorian date. See [`TqDate::month`].
pub fn month(year: i32, day_of_year: i32) -> Option<Month> {
    TqDate::from_gregorian(year, day_of_year).month()
}

/// Day of the Tranquility month of a Gregorian date. See [`TqDate::day`].
pub fn day(year: i32, day_of_year: i32) -> Day {
    TqDate::from_gregorian(year, day_of_year).day()
}

/// Tranquility weekday of a Gregorian date. See [`TqDate::weekday`].
pub fn weekday(year: i32, day_of_year: i32) -> Option<Weekday> {
    TqDate::from_gregorian(year, day_of_year).weekday()
}

/// Modulo in `1..=b` instead of `0..b`: exact multiples give `b`, as
/// calendars count from 1.
pub(crate) fn clock_modulo(a: i32, b: i32) -> i32 {
    match a.rem_euclid(b) {
        0 => b,
        m => m,
    }
}

/// Rotates a normalized Gregorian day of year so that the day after
/// Armstrong Day becomes day 1.
fn tq_year_day(date: OrdinalDate) -> i32 {
    let shift = COMMON_YEAR_LEN - COMMON_YEAR_ARMSTRONG_DAY;
    clock_modulo(
        date.day + shift,
        YearType::from_gregorian(date.year).days(),
    )
}

enum YearDay {
    /// Day of a common Tranquility year, `1..=364`.
    Ordinary(i32),
    Special(Day),
}

fn leap_adjusted_year_day(mut tqyd: i32, gregorian_year: i32) -> YearDay {
    if YearType::from_gregorian(gregorian_year).is_leap() {
        if tqyd == ALDRIN_YEAR_DAY {
            return YearDay::Special(Day::Aldrin);
        } else if tqyd > ALDRIN_YEAR_DAY {
            tqyd -= 1;
        }
    }
    if tqyd == COMMON_YEAR_LEN {
        if gregorian_year == MOON_LANDING_YEAR {
            return YearDay::Special(Day::MoonLanding);
        }
        return YearDay::Special(Day::Armstrong);
    }
    YearDay::Ordinary(tqyd)
}

/// Expects a normalized date.
fn tq_year(date: OrdinalDate) -> i32 {
    if date == MOON_LANDING {
        return 0;
    }
    let mut diff = date.year.saturating_sub(MOON_LANDING_YEAR);
    if date.day > YearType::from_gregorian(date.year).armstrong_day() {
        diff = diff.saturating_add(1);
    }
    // No year 0 outside Moon Landing Day: 1 BT is followed by 1 AT.
    if diff < 1 {
        diff = diff.saturating_sub(1);
    }
    diff
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_modulo() {
        for ((a, b), expected) in [
            ((1, 28), 1),
            ((27, 28), 27),
            ((28, 28), 28),
            ((29, 28), 1),
            ((56, 28), 28),
            ((365, 365), 365),
            ((366, 365), 1),
            ((0, 7), 7),
            ((-1, 7), 6),
        ] {
            assert_eq!(expected, clock_modulo(a, b), "clock_modulo({a}, {b})");
        }
    }

    #[test]
    fn test_year_day() {
        for ((y, d), expected) in [
            ((1969, 201), 365),
            ((1969, 202), 1),
            ((1969, 1), 165),
            ((1969, 365), 164),
            ((2000, 60), 224),
            ((2000, 202), 366),
            ((2000, 203), 1),
            ((1968, 366), 164),
        ] {
            assert_eq!(expected, year_day(y, d), "({y}, {d})");
        }
    }

    #[test]
    fn test_year() {
        for ((y, d), expected) in [
            ((1969, 201), 0),
            ((1969, 202), 1),
            ((1969, 200), -1),
            ((1969, 1), -1),
            ((1968, 203), -1),
            ((1968, 202), -2),
            ((1970, 201), 1),
            ((1970, 202), 2),
            ((2000, 60), 31),
            ((2000, 202), 31),
            ((2000, 203), 32),
            ((1900, 60), -70),
        ] {
            assert_eq!(expected, year(y, d), "({y}, {d})");
        }
    }

    #[test]
    fn special_days() {
        assert_eq!(Day::MoonLanding, day(1969, 201));
        assert_eq!(Day::Armstrong, day(1968, 202));
        assert_eq!(Day::Armstrong, day(1970, 201));
        assert_eq!(Day::Aldrin, day(2000, 60));
        assert_eq!(Day::Armstrong, day(2000, 202));
        // 1900 is a common year: March 1 ends Hippocrates.
        assert_eq!(Day::Ordinary(28), day(1900, 60));
        assert_eq!(Some(Month::Hippocrates), month(1900, 60));
    }

    #[test]
    fn days_around_aldrin_day() {
        for (d, expected_month, expected_day) in [
            (59, Some(Month::Hippocrates), Day::Ordinary(27)),
            (60, None, Day::Aldrin),
            (61, Some(Month::Hippocrates), Day::Ordinary(28)),
            (62, Some(Month::Imhotep), Day::Ordinary(1)),
        ] {
            let date = TqDate::from_gregorian(2024, d);
            assert_eq!(expected_month, date.month(), "2024 day {d}");
            assert_eq!(expected_day, date.day(), "2024 day {d}");
        }
    }

    #[test]
    fn weekdays() {
        assert_eq!(Some(Weekday::Friday), weekday(1969, 202));
        assert_eq!(Some(Weekday::Thursday), weekday(1969, 200));
        assert_eq!(Some(Weekday::Thursday), weekday(2024, 61));
        assert_eq!(None, weekday(2024, 60));
        assert_eq!(None, weekday(1969, 201));
        for n in 1..=7 {
            assert_eq!(n, Weekday::from_number(n).unwrap().number());
        }
        assert_eq!(None, Weekday::from_number(0));
        assert_eq!(None, Weekday::from_number(8));
    }

    #[test]
    fn day_values() {
        for day in [Day::Armstrong, Day::Aldrin, Day::MoonLanding, Day::Ordinary(13)] {
            assert_eq!(Some(day), Day::from_value(day.value()));
        }
        assert_eq!(None, Day::from_value(0));
        assert_eq!(None, Day::from_value(-4));
    }

    #[test]
    fn date_carries_year_day() {
        for ((y, d), expected) in [
            ((1969, 201), 365),
            ((1969, 202), 1),
            ((2000, 60), 224),
            ((2000, 61), 225),
            ((2000, 202), 366),
            ((1900, 60), 224),
            ((1970, -163), 1),
        ] {
            assert_eq!(expected, TqDate::from_gregorian(y, d).year_day(), "({y}, {d})");
            assert_eq!(expected, year_day(y, d), "({y}, {d})");
        }
        // Past Aldrin Day the common-year day lags by one.
        let date = TqDate::from_gregorian(2000, 61);
        assert_eq!(Some(224), date.common_year_day());
    }

    #[test]
    fn normalizes_input() {
        assert_eq!(
            TqDate::from_gregorian(1969, 201),
            TqDate::from_gregorian(1970, 201 - 365)
        );
        assert_eq!(
            TqDate::from_gregorian(1969, 202),
            TqDate::from_gregorian(1968, 366 + 202)
        );
    }
}
