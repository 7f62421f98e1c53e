//! Calendar-month helpers shared by the report functions.

use time::{Date, Month};

/// Whether two dates fall in the same calendar month of the same year.
pub(super) fn same_month(a: Date, b: Date) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// The first day of the month `count` months before `date`'s month.
pub(super) fn months_back(date: Date, count: u32) -> Date {
    let mut year = date.year();
    let mut month = date.month();

    for _ in 0..count {
        month = month.previous();
        if month == Month::December {
            year -= 1;
        }
    }

    Date::from_calendar_date(year, month, 1).unwrap()
}

/// The number of days in `date`'s calendar month.
pub(super) fn days_in_month(date: Date) -> u8 {
    date.month().length(date.year())
}

/// Format a date's month as a label like "Jan 2025".
pub(super) fn month_label(date: Date) -> String {
    let month = match date.month() {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    };

    format!("{month} {}", date.year())
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::{days_in_month, month_label, months_back, same_month};

    #[test]
    fn same_month_ignores_the_day() {
        assert!(same_month(date!(2025 - 03 - 01), date!(2025 - 03 - 31)));
    }

    #[test]
    fn same_month_distinguishes_years() {
        assert!(!same_month(date!(2024 - 03 - 15), date!(2025 - 03 - 15)));
    }

    #[test]
    fn months_back_zero_returns_first_of_month() {
        assert_eq!(months_back(date!(2025 - 03 - 15), 0), date!(2025 - 03 - 01));
    }

    #[test]
    fn months_back_crosses_year_boundary() {
        assert_eq!(months_back(date!(2025 - 02 - 15), 5), date!(2024 - 09 - 01));
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(date!(2024 - 02 - 10)), 29);
        assert_eq!(days_in_month(date!(2025 - 02 - 10)), 28);
    }

    #[test]
    fn month_label_includes_the_year() {
        assert_eq!(month_label(date!(2025 - 01 - 15)), "Jan 2025");
        assert_eq!(month_label(date!(2024 - 12 - 01)), "Dec 2024");
    }
}
