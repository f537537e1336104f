//! Date and time display formatting.

use chrono::{NaiveDate, NaiveDateTime};

/// Format a date as "21 May 2013".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}

/// Format a datetime as "14 Sep 2025, 10:30".
pub fn format_datetime(dt: NaiveDateTime) -> String {
    dt.format("%-d %b %Y, %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_date() {
        let date = NaiveDate::from_ymd_opt(2013, 5, 21).unwrap();
        assert_eq!(format_date(date), "21 May 2013");
        let first = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
        assert_eq!(format_date(first), "1 Oct 2025");
    }

    #[test]
    fn formats_datetime() {
        let dt = NaiveDate::from_ymd_opt(2025, 9, 14)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        assert_eq!(format_datetime(dt), "14 Sep 2025, 10:30");
    }
}
