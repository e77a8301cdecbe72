/// Utilities for date formatting and date arithmetic
use chrono::{Datelike, NaiveDate};

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Parses `YYYY-MM-DD` (a trailing time part is ignored)
pub fn parse_iso_date(date_str: &str) -> Option<NaiveDate> {
    let date_part = date_str.trim().split('T').next()?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Full years between `birth` and `today`; one less if this year's birthday
/// has not happened yet.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2012-04-01"), Some(date(2012, 4, 1)));
        assert_eq!(parse_iso_date("2012-04-01T00:00:00Z"), Some(date(2012, 4, 1)));
        assert_eq!(parse_iso_date("01.04.2012"), None);
        assert_eq!(parse_iso_date(""), None);
    }

    #[test]
    fn test_age_on_birthday_boundary() {
        let today = date(2026, 10, 16);
        assert_eq!(age_on(date(2016, 10, 16), today), 10);
        assert_eq!(age_on(date(2016, 10, 17), today), 9);
        assert_eq!(age_on(date(2016, 11, 1), today), 9);
        assert_eq!(age_on(date(2016, 1, 1), today), 10);
    }
}
