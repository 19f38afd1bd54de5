use chrono::Datelike;

use super::dto::DailySalesItem;

#[derive(Debug, Clone, PartialEq)]
pub struct DayPoint {
    /// Day of the month
    pub label: String,
    pub billed_usd: f64,
    pub transactions: u64,
}

/// Chronological, one point per reported day.
pub fn day_points(items: &[DailySalesItem]) -> Vec<DayPoint> {
    let mut sorted: Vec<&DailySalesItem> = items.iter().collect();
    sorted.sort_by_key(|i| i.date);
    sorted
        .into_iter()
        .map(|i| DayPoint {
            label: i.date.day().to_string(),
            billed_usd: i.total_billed_usd,
            transactions: i.total_transactions,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DailyTotals {
    pub transactions: u64,
    pub billed_usd: f64,
}

pub fn daily_totals(items: &[DailySalesItem]) -> DailyTotals {
    items.iter().fold(DailyTotals::default(), |acc, i| DailyTotals {
        transactions: acc.transactions + i.total_transactions,
        billed_usd: acc.billed_usd + i.total_billed_usd,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn item(day: u32, usd: f64, tx: u64) -> DailySalesItem {
        DailySalesItem {
            date: NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
            total_transactions: tx,
            total_billed_bs: usd * 36.0,
            total_billed_usd: usd,
            total_pending: 0.0,
        }
    }

    #[test]
    fn test_points_sorted_by_date() {
        let points = day_points(&[item(12, 50.0, 2), item(3, 20.0, 1)]);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].label, "3");
        assert_eq!(points[1].label, "12");
        assert_eq!(points[1].billed_usd, 50.0);
    }

    #[test]
    fn test_totals() {
        let totals = daily_totals(&[item(1, 10.25, 4), item(2, 5.0, 6)]);
        assert_eq!(totals, DailyTotals { transactions: 10, billed_usd: 15.25 });
        assert_eq!(daily_totals(&[]), DailyTotals::default());
    }
}
