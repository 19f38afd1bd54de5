//! Date helpers: display formatting and the browser's current date.

use chrono::NaiveDate;

const ISO_DATE: &str = "%Y-%m-%d";

/// ISO datetime to "DD/MM/YYYY HH:MM".
/// Example: "2024-03-15T14:02:26.000000Z" -> "15/03/2024 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        let date = format_date(date_part);
        if date != date_part {
            let hm: String = time_part.chars().take(5).collect();
            return format!("{} {}", date, hm);
        }
    }
    datetime_str.to_string()
}

/// ISO date (or datetime) to "DD/MM/YYYY". Unparseable input is returned as is.
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match parse_iso_date(date_part) {
        Some(d) => d.format("%d/%m/%Y").to_string(),
        None => date_str.to_string(),
    }
}

pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE).ok()
}

pub fn to_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE).to_string()
}

/// Local calendar date of the browser.
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1;
    let day = now.get_date();
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.000000Z"), "15/03/2024 14:02");
        assert_eq!(format_datetime("2024-12-31T23:59:59Z"), "31/12/2024 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26Z"), "15/03/2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("2024-13-40"), "2024-13-40");
    }

    #[test]
    fn test_iso_round_trip() {
        let date = parse_iso_date(" 2025-02-01 ").unwrap();
        assert_eq!(to_iso_date(date), "2025-02-01");
    }
}
