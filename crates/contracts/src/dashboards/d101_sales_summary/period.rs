//! Month picker of the sales summary.

use chrono::{Datelike, Months, NaiveDate};

use crate::dashboards::d100_sales_analytics::dto::ReportFilters;
use crate::dashboards::d100_sales_analytics::filters::TOP_PRODUCTS_LIMIT;

/// The current month and the eleven before it
pub const MONTH_OPTION_COUNT: u32 = 12;

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthOption {
    /// "March 2025"
    pub label: String,
    /// "2025-03"
    pub value: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl MonthOption {
    pub fn filters(&self) -> ReportFilters {
        ReportFilters {
            start_date: self.start_date.format("%Y-%m-%d").to_string(),
            end_date: self.end_date.format("%Y-%m-%d").to_string(),
            ..Default::default()
        }
    }

    pub fn top_products_filters(&self) -> ReportFilters {
        ReportFilters {
            limit: Some(TOP_PRODUCTS_LIMIT),
            ..self.filters()
        }
    }
}

/// Newest first. The current month ends at `today`, earlier months at their
/// last day.
pub fn month_options(today: NaiveDate) -> Vec<MonthOption> {
    let Some(current) = today.with_day(1) else {
        return Vec::new();
    };

    (0..MONTH_OPTION_COUNT)
        .filter_map(|back| {
            let start = current.checked_sub_months(Months::new(back))?;
            let end = if back == 0 {
                today
            } else {
                start.checked_add_months(Months::new(1))?.pred_opt()?
            };
            Some(MonthOption {
                label: format!("{} {}", MONTH_NAMES[start.month0() as usize], start.year()),
                value: start.format("%Y-%m").to_string(),
                start_date: start,
                end_date: end,
            })
        })
        .collect()
}

pub fn find_month<'a>(options: &'a [MonthOption], value: &str) -> Option<&'a MonthOption> {
    options.iter().find(|m| m.value == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_current_month_ends_today() {
        let options = month_options(date(2025, 3, 18));
        assert_eq!(options.len(), 12);
        assert_eq!(
            options[0],
            MonthOption {
                label: "March 2025".to_string(),
                value: "2025-03".to_string(),
                start_date: date(2025, 3, 1),
                end_date: date(2025, 3, 18),
            }
        );
    }

    #[test]
    fn test_past_months_end_on_last_day() {
        let options = month_options(date(2025, 3, 18));
        assert_eq!(options[1].value, "2025-02");
        assert_eq!(options[1].end_date, date(2025, 2, 28));
        // crosses into the previous year
        assert_eq!(options[3].label, "December 2024");
        assert_eq!(options[3].end_date, date(2024, 12, 31));
        assert_eq!(options[11].value, "2024-04");
        assert_eq!(options[11].start_date, date(2024, 4, 1));
        assert_eq!(options[11].end_date, date(2024, 4, 30));
    }

    #[test]
    fn test_leap_february() {
        let options = month_options(date(2024, 3, 5));
        assert_eq!(options[1].end_date, date(2024, 2, 29));
    }

    #[test]
    fn test_filters() {
        let options = month_options(date(2025, 3, 18));
        let feb = find_month(&options, "2025-02").unwrap();
        let filters = feb.filters();
        assert_eq!(filters.start_date, "2025-02-01");
        assert_eq!(filters.end_date, "2025-02-28");
        assert_eq!(filters.limit, None);
        assert_eq!(feb.top_products_filters().limit, Some(TOP_PRODUCTS_LIMIT));
        assert!(find_month(&options, "2023-01").is_none());
    }
}
