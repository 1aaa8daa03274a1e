//! Formatting Tranquility dates as English text.
//!
//! Lookups of absent months or weekdays give a blank string, which callers
//! should read as "unknown" rather than as a name.

use super::{
    ALDRIN_DAY, ARMSTRONG_DAY, Day, MONTH_LEN, MOON_LANDING_DAY, Month, TqDate, Weekday,
    clock_modulo,
};

/// English name of a month, blank for `None`.
///
/// # Example
///
/// ```
/// use tqtime::tranquility::{self, Month};
///
/// assert_eq!("Galileo", tranquility::month_name(Some(Month::Galileo)));
/// assert_eq!("", tranquility::month_name(Month::from_number(14)));
/// ```
pub fn month_name(month: Option<Month>) -> &'static str {
    const NAMES: &[&str] = &[
        "Archimedes",
        "Brahe",
        "Copernicus",
        "Darwin",
        "Einstein",
        "Faraday",
        "Galileo",
        "Hippocrates",
        "Imhotep",
        "Jung",
        "Kepler",
        "Lavoisier",
        "Mendel",
    ];
    month.map_or("", |m| NAMES[m.number() as usize - 1])
}

/// First letter of a month name, blank for `None`.
pub fn month_letter(month: Option<Month>) -> &'static str {
    let name = month_name(month);
    &name[..name.len().min(1)]
}

/// English name of a weekday, blank for `None`.
///
/// # Example
///
/// ```
/// use tqtime::tranquility::{self, Weekday};
///
/// assert_eq!("Friday", tranquility::weekday_name(Weekday::from_number(1)));
/// assert_eq!("", tranquility::weekday_name(None));
/// ```
pub fn weekday_name(weekday: Option<Weekday>) -> &'static str {
    const NAMES: &[&str] = &[
        "Friday",
        "Saturday",
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
    ];
    weekday.map_or("", |w| NAMES[w.number() as usize - 1])
}

/// Name of a day given in the integer form of [`Day::value`]: one of
/// `"Armstrong Day"`, `"Aldrin Day"` and `"Moon Landing Day"` for the special
/// day markers, otherwise the day of the month in decimal.
///
/// Other values wrap into `1..=28` with a Euclidean remainder, so negative
/// values that are not markers count back from 28: `-5` gives `"23"`.
///
/// # Example
///
/// ```
/// use tqtime::tranquility::{self, ARMSTRONG_DAY};
///
/// assert_eq!("Armstrong Day", tranquility::day_name(ARMSTRONG_DAY));
/// assert_eq!("9", tranquility::day_name(9));
/// ```
pub fn day_name(value: i32) -> String {
    match value {
        ARMSTRONG_DAY => "Armstrong Day".to_owned(),
        ALDRIN_DAY => "Aldrin Day".to_owned(),
        MOON_LANDING_DAY => "Moon Landing Day".to_owned(),
        _ => clock_modulo(value, MONTH_LEN).to_string(),
    }
}

/// Three-letter code of a special day (`"ARM"`, `"ALD"` or `"MNL"`), or the
/// day of the month in decimal. Other values wrap like in [`day_name`].
pub fn day_code(value: i32) -> String {
    match value {
        ARMSTRONG_DAY => "ARM".to_owned(),
        ALDRIN_DAY => "ALD".to_owned(),
        MOON_LANDING_DAY => "MNL".to_owned(),
        _ => clock_modulo(value, MONTH_LEN).to_string(),
    }
}

/// Compact form of a date.
///
/// Special days are written `"DDD y"`, where `DDD` is the code from
/// [`day_code`]. Other days are written `"DDM y"`, with `DD` the zero-padded
/// day of the month and `M` the first letter of the month. Years Before
/// Tranquility are negative.
pub fn short(date: &TqDate) -> String {
    match date.day() {
        Day::Ordinary(d) => format!("{:02}{} {}", d, month_letter(date.month()), date.year()),
        special => format!("{} {}", special.code(), date.year()),
    }
}

/// Descriptive form of a date, e.g.
/// `"Thursday, 28 Mendel, 1 Before Tranquility"`.
///
/// Moon Landing Day is written just `"Moon Landing Day"`.
pub fn long(date: &TqDate) -> String {
    let day = date.day();
    if day == Day::MoonLanding {
        return day.name();
    }

    let year = date.year();
    let suffix = if year < 0 {
        "Before Tranquility"
    } else {
        "After Tranquility"
    };
    let year = year.unsigned_abs();
    match day {
        Day::Ordinary(_) => format!(
            "{}, {} {}, {} {}",
            weekday_name(date.weekday()),
            day.name(),
            month_name(date.month()),
            year,
            suffix
        ),
        _ => format!("{}, {} {}", day.name(), year, suffix),
    }
}

/// Compact form of the Tranquility date for a Gregorian date. See [`short`].
///
/// # Example
///
/// ```
/// assert_eq!("MNL 0", tqtime::short_date(1969, 201));
/// assert_eq!("ARM -2", tqtime::short_date(1968, 202));
/// ```
pub fn short_date(year: i32, day_of_year: i32) -> String {
    short(&TqDate::from_gregorian(year, day_of_year))
}

/// Descriptive form of the Tranquility date for a Gregorian date. See
/// [`long`].
///
/// # Example
///
/// ```
/// assert_eq!("Moon Landing Day", tqtime::long_date(1969, 201));
/// assert_eq!(
///     "Friday, 1 Archimedes, 1 After Tranquility",
///     tqtime::long_date(1969, 202)
/// );
/// ```
pub fn long_date(year: i32, day_of_year: i32) -> String {
    long(&TqDate::from_gregorian(year, day_of_year))
}
