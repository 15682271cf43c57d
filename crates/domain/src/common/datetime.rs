//! Calendar arithmetic on birth dates.

use chrono::{Datelike, Local, NaiveDate};

/// Today's date in the local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Full years elapsed between `birth_day` and `today`.
///
/// One year is subtracted when today's month/day precedes the birth
/// month/day, so a birthday only counts once it has been reached.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use registrar_domain::common::age_on;
///
/// let born = NaiveDate::from_ymd_opt(2000, 6, 15).unwrap();
/// assert_eq!(age_on(born, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()), 24);
/// assert_eq!(age_on(born, NaiveDate::from_ymd_opt(2024, 6, 14).unwrap()), 23);
/// ```
pub fn age_on(birth_day: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_day.year();
    if (today.month(), today.day()) < (birth_day.month(), birth_day.day()) {
        age -= 1;
    }
    age
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn birthday_reached_counts_full_year() {
        assert_eq!(age_on(date(1990, 3, 10), date(2020, 3, 10)), 30);
        assert_eq!(age_on(date(1990, 3, 10), date(2020, 12, 31)), 30);
    }

    #[test]
    fn day_before_birthday_is_one_less() {
        assert_eq!(age_on(date(1990, 3, 10), date(2020, 3, 9)), 29);
    }

    #[test]
    fn earlier_month_is_one_less_even_with_later_day() {
        assert_eq!(age_on(date(1990, 3, 10), date(2020, 2, 28)), 29);
    }

    #[test]
    fn leap_day_birthday() {
        let born = date(2000, 2, 29);
        assert_eq!(age_on(born, date(2023, 2, 28)), 22);
        assert_eq!(age_on(born, date(2023, 3, 1)), 23);
        assert_eq!(age_on(born, date(2024, 2, 29)), 24);
    }

    #[test]
    fn today_is_the_local_calendar_date() {
        let before = Local::now().date_naive();
        let day = today();
        let after = Local::now().date_naive();
        assert!(day == before || day == after);
    }

    #[test]
    fn born_today_is_zero() {
        assert_eq!(age_on(date(2024, 5, 5), date(2024, 5, 5)), 0);
    }
}
