//! Bridges from [`chrono`] civil dates and times.
//!
//! Zoned values are converted to UTC before their Gregorian fields are
//! taken, since the calendar itself knows no time zones.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};

use crate::gregorian::OrdinalDate;
use crate::instant::{self, TimeOfDay};
use crate::tranquility::TqDate;

impl From<NaiveDate> for OrdinalDate {
    fn from(date: NaiveDate) -> Self {
        OrdinalDate::new(date.year(), date.ordinal() as i32)
    }
}

impl From<NaiveTime> for TimeOfDay {
    /// A leap second is read as the last millisecond of its minute.
    fn from(time: NaiveTime) -> Self {
        TimeOfDay {
            hour: time.hour(),
            minute: time.minute(),
            second: time.second(),
            millisecond: (time.nanosecond() / 1_000_000).min(999),
        }
    }
}

impl TqDate {
    /// Converts a Gregorian calendar date.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use tqtime::TqDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(1969, 7, 20).unwrap();
    /// assert_eq!("Moon Landing Day", TqDate::from_naive_date(date).to_string());
    /// ```
    pub fn from_naive_date(date: NaiveDate) -> Self {
        Self::from_ordinal(date.into())
    }

    /// Converts the UTC date of a date and time.
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self::from_naive_date(datetime.with_timezone(&Utc).date_naive())
    }
}

/// Returns `true` if `datetime` is before the calendar's epoch, see
/// [`instant::TRANQUILITY`].
///
/// # Example
///
/// ```
/// use chrono::{FixedOffset, TimeZone};
///
/// // 16:18:01.199 in New York, 20:18:01.199 UTC.
/// let edt = FixedOffset::west_opt(4 * 3600).unwrap();
/// let datetime = edt.with_ymd_and_hms(1969, 7, 20, 16, 18, 1).unwrap()
///     + chrono::Duration::milliseconds(199);
/// assert!(tqtime::civil::is_before_tranquility_at(&datetime));
/// ```
pub fn is_before_tranquility_at<Tz: TimeZone>(datetime: &DateTime<Tz>) -> bool {
    let utc = datetime.with_timezone(&Utc).naive_utc();
    instant::is_before(utc.date().into(), utc.time().into())
}

/// Converts the UTC date of a UNIX timestamp in seconds.
///
/// Returns `None` if the timestamp is outside the range [`chrono`] supports.
pub fn from_unix(secs: i64) -> Option<TqDate> {
    DateTime::from_timestamp(secs, 0).map(|dt| TqDate::from_datetime(&dt))
}

/// Today's date in UTC.
pub fn today() -> TqDate {
    TqDate::from_datetime(&Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tranquility::{Day, Month};

    /// 1969-07-20T20:18:01.200Z in milliseconds since the UNIX epoch.
    const TRANQUILITY_MILLIS: i64 = -14_182_918_800;

    #[test]
    fn naive_date() {
        let date = NaiveDate::from_ymd_opt(2000, 2, 29).unwrap();
        assert_eq!(OrdinalDate::new(2000, 60), OrdinalDate::from(date));
        assert_eq!(Day::Aldrin, TqDate::from_naive_date(date).day());

        let date = NaiveDate::from_ymd_opt(1969, 7, 19).unwrap();
        let tq = TqDate::from_naive_date(date);
        assert_eq!((-1, Some(Month::Mendel)), (tq.year(), tq.month()));
    }

    #[test]
    fn naive_time() {
        let time = NaiveTime::from_hms_milli_opt(20, 18, 1, 200).unwrap();
        assert_eq!(instant::TRANQUILITY, TimeOfDay::from(time));
        let leap = NaiveTime::from_hms_milli_opt(23, 59, 59, 1500).unwrap();
        assert_eq!(999, TimeOfDay::from(leap).millisecond());
    }

    #[test]
    fn zoned_datetime_uses_utc() {
        let edt = chrono::FixedOffset::west_opt(4 * 3600).unwrap();
        // Evening of July 20 in New York is already July 21 in UTC.
        let datetime = edt.with_ymd_and_hms(1969, 7, 20, 21, 0, 0).unwrap();
        assert_eq!("01A 1", TqDate::from_datetime(&datetime).short());
    }

    #[test]
    fn epoch_instant() {
        let before = DateTime::from_timestamp_millis(TRANQUILITY_MILLIS - 1).unwrap();
        let at = DateTime::from_timestamp_millis(TRANQUILITY_MILLIS).unwrap();
        assert!(is_before_tranquility_at(&before));
        assert!(!is_before_tranquility_at(&at));
    }

    #[test]
    fn unix_timestamps() {
        assert_eq!("MNL 0", from_unix(-14_182_919).unwrap().short());
        assert_eq!(365, from_unix(-14_182_919).unwrap().year_day());
        assert_eq!("01A 1", from_unix(-14_182_919 + 86_400).unwrap().short());
        // 1970-01-01 is in the first Tranquility year.
        assert_eq!(1, from_unix(0).unwrap().year());
        assert_eq!(None, from_unix(i64::MAX));
    }
}
