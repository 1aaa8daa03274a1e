use proptest::prelude::*;

use tqtime::tranquility::{Day, MONTH_LEN};
use tqtime::{OrdinalDate, TqDate, YearType};

const ALDRIN_YEAR_DAY: i32 = 224;

fn gregorian() -> impl Strategy<Value = (i32, i32)> {
    (-10_000..10_000i32, -2_000..2_000i32)
}

proptest! {
    #[test]
    fn normalize_is_idempotent((y, d) in gregorian()) {
        let once = tqtime::normalize(y, d);
        prop_assert_eq!(once, tqtime::normalize(once.0, once.1));
        prop_assert!(OrdinalDate::new(once.0, once.1).is_normalized());
    }

    #[test]
    fn year_day_in_range((y, d) in gregorian()) {
        let (year, _) = tqtime::normalize(y, d);
        let yd = tqtime::year_day(y, d);
        prop_assert!((1..=YearType::from_gregorian(year).days()).contains(&yd));
    }

    #[test]
    fn special_days_have_no_month_or_weekday((y, d) in gregorian()) {
        let date = TqDate::from_gregorian(y, d);
        prop_assert_eq!(date.is_special(), date.month().is_none());
        prop_assert_eq!(date.is_special(), date.weekday().is_none());
        prop_assert_eq!(date.day().is_special(), tqtime::weekday(y, d).is_none());
    }

    #[test]
    fn ordinary_days_rebuild_year_day((y, d) in gregorian()) {
        let date = TqDate::from_gregorian(y, d);
        if let (Some(month), Day::Ordinary(day)) = (date.month(), date.day()) {
            let (year, _) = tqtime::normalize(y, d);
            let mut yd = tqtime::year_day(y, d);
            prop_assert_eq!(yd, date.year_day());
            if YearType::from_gregorian(year).is_leap() && yd > ALDRIN_YEAR_DAY {
                yd -= 1;
            }
            prop_assert_eq!(yd, (month.number() - 1) * MONTH_LEN + i32::from(day));
            prop_assert_eq!(Some(yd), date.common_year_day());
        }
    }

    #[test]
    fn consecutive_days_advance((y, d) in gregorian()) {
        let today = TqDate::from_gregorian(y, d);
        let tomorrow = TqDate::from_gregorian(y, d + 1);
        match (today.common_year_day(), tomorrow.common_year_day()) {
            (Some(a), Some(b)) => prop_assert_eq!(a + 1, b),
            _ => prop_assert!(today.is_special() || tomorrow.is_special()),
        }
        if tomorrow.year() != today.year() {
            prop_assert!(matches!(today.day(), Day::Armstrong | Day::MoonLanding)
                || today.year() == -1);
        }
    }

    #[test]
    fn year_zero_only_on_moon_landing_day((y, d) in gregorian()) {
        let date = TqDate::from_gregorian(y, d);
        prop_assert_eq!(date.year() == 0, date.day() == Day::MoonLanding);
    }
}
