//! Conversion of Gregorian dates into the Tranquility calendar.
//!
//! The [Tranquility calendar](tranquility) is a perennial calendar of 13
//! months with 28 days each, counted from the first crewed Moon landing on
//! July 20, 1969. Input dates are Gregorian `(year, day of year)` pairs in
//! UTC. Days of year outside the year are carried into the neighbouring
//! years, so every conversion is total.
//!
//! # Examples
//!
//! Basic usage with [`TqDate`]:
//!
//! ```
//! use tqtime::TqDate;
//!
//! let date = TqDate::from_gregorian(1969, 200); // July 19, 1969
//!
//! assert_eq!(-1, date.year());
//! assert_eq!("28M -1", date.short());
//! assert_eq!("Thursday, 28 Mendel, 1 Before Tranquility", date.to_string());
//! ```
//!
//! Individual fields are also available as free functions:
//!
//! ```
//! use tqtime::tranquility::Day;
//!
//! assert_eq!(Day::Armstrong, tqtime::day(1968, 202));
//! assert_eq!(-2, tqtime::year(1968, 202));
//! assert_eq!("ARM -2", tqtime::short_date(1968, 202));
//! ```
//!
//! With [`chrono`] values, see [`civil`]:
//!
//! ```
//! use chrono::NaiveDate;
//! use tqtime::TqDate;
//!
//! let date = NaiveDate::from_ymd_opt(2000, 2, 29).unwrap();
//! assert_eq!("ALD 31", TqDate::from_naive_date(date).short());
//! ```

pub mod civil;
mod error;
pub mod gregorian;
pub mod instant;
pub mod tranquility;

pub use error::Error;
pub use gregorian::{OrdinalDate, YearType, normalize};
pub use instant::{TimeOfDay, is_before_tranquility};
pub use tranquility::{
    TqDate, day, day_code, day_name, long_date, month, month_letter, month_name, short_date,
    weekday, weekday_name, year, year_day,
};
