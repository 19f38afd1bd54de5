//! Report rows reshaped into chart series.

use std::collections::BTreeMap;

use super::dto::{SalesByProductItem, SalesByRouteItem, SalesTrendItem, TopProductItem};

/// Products kept in the product-by-month chart
pub const PIVOT_TOP_PRODUCTS: usize = 8;

/// Route slices below this share of the total get no label on the donut
pub const ROUTE_LABEL_MIN_SHARE: f64 = 0.05;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// "Feb 2025"
pub fn month_label(year: i32, month: u32) -> String {
    match month {
        1..=12 => format!("{} {}", MONTHS[(month - 1) as usize], year),
        _ => format!("{:02}/{}", month, year),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub label: String,
    pub billed_usd: f64,
    pub pending: f64,
    pub transactions: u64,
}

/// Chronological, one point per month.
pub fn trend_points(items: &[SalesTrendItem]) -> Vec<TrendPoint> {
    let mut sorted: Vec<&SalesTrendItem> = items.iter().collect();
    sorted.sort_by_key(|i| (i.year, i.month));
    sorted
        .into_iter()
        .map(|i| TrendPoint {
            label: month_label(i.year, i.month),
            billed_usd: i.total_billed_usd,
            pending: i.total_pending,
            transactions: i.total_transactions,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrendTotals {
    pub transactions: u64,
    pub billed_usd: f64,
}

pub fn trend_totals(items: &[SalesTrendItem]) -> TrendTotals {
    items.iter().fold(TrendTotals::default(), |acc, i| TrendTotals {
        transactions: acc.transactions + i.total_transactions,
        billed_usd: acc.billed_usd + i.total_billed_usd,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductBar {
    pub name: String,
    pub quantity: f64,
    pub amount_usd: f64,
}

/// Highest quantity first.
pub fn top_product_bars(items: &[TopProductItem]) -> Vec<ProductBar> {
    let mut bars: Vec<ProductBar> = items
        .iter()
        .map(|i| ProductBar {
            name: i.product_name.clone(),
            quantity: i.total_quantity,
            amount_usd: i.total_amount_usd,
        })
        .collect();
    bars.sort_by(|a, b| b.quantity.total_cmp(&a.quantity));
    bars
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteSlice {
    pub route: String,
    pub billed_usd: f64,
    pub transactions: u64,
    /// Fraction of the total, 0.0..=1.0
    pub share: f64,
    pub show_label: bool,
}

/// Rows of the same route (from different clients) are summed; largest first.
pub fn route_slices(items: &[SalesByRouteItem]) -> Vec<RouteSlice> {
    let mut by_route: BTreeMap<&str, (f64, u64)> = BTreeMap::new();
    for item in items {
        let entry = by_route.entry(item.route.as_str()).or_insert((0.0, 0));
        entry.0 += item.total_billed_usd;
        entry.1 += item.total_transactions;
    }

    let total: f64 = by_route.values().map(|(usd, _)| usd).sum();
    let mut slices: Vec<RouteSlice> = by_route
        .into_iter()
        .map(|(route, (usd, transactions))| {
            let share = if total > 0.0 { usd / total } else { 0.0 };
            RouteSlice {
                route: route.to_string(),
                billed_usd: usd,
                transactions,
                share,
                show_label: share >= ROUTE_LABEL_MIN_SHARE,
            }
        })
        .collect();
    slices.sort_by(|a, b| b.billed_usd.total_cmp(&a.billed_usd));
    slices
}

/// Month × product quantities for the top products.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductMonthPivot {
    /// Month labels, chronological
    pub months: Vec<String>,
    /// Top products, highest total quantity first
    pub products: Vec<String>,
    /// `values[month][product]`, 0.0 where a product sold nothing that month
    pub values: Vec<Vec<f64>>,
}

impl ProductMonthPivot {
    pub fn is_empty(&self) -> bool {
        self.months.is_empty() || self.products.is_empty()
    }

    pub fn max_value(&self) -> f64 {
        self.values
            .iter()
            .flatten()
            .copied()
            .fold(0.0, f64::max)
    }
}

pub fn product_month_pivot(items: &[SalesByProductItem], top_n: usize) -> ProductMonthPivot {
    let mut product_totals: BTreeMap<&str, f64> = BTreeMap::new();
    for item in items {
        *product_totals.entry(item.product_name.as_str()).or_insert(0.0) += item.total_quantity;
    }
    let mut ranked: Vec<(&str, f64)> = product_totals.into_iter().collect();
    // ties keep alphabetical order from the BTreeMap
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    let products: Vec<String> = ranked
        .into_iter()
        .take(top_n)
        .map(|(name, _)| name.to_string())
        .collect();

    let mut by_month: BTreeMap<(i32, u32), Vec<f64>> = BTreeMap::new();
    for item in items {
        let row = by_month
            .entry((item.year, item.month))
            .or_insert_with(|| vec![0.0; products.len()]);
        if let Some(col) = products.iter().position(|p| *p == item.product_name) {
            row[col] += item.total_quantity;
        }
    }

    let months = by_month.keys().map(|(y, m)| month_label(*y, *m)).collect();
    let values = by_month.into_values().collect();

    ProductMonthPivot {
        months,
        products,
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trend(year: i32, month: u32, tx: u64, usd: f64) -> SalesTrendItem {
        SalesTrendItem {
            year,
            month,
            total_transactions: tx,
            total_billed_bs: usd * 40.0,
            total_billed_usd: usd,
            total_pending: 0.0,
        }
    }

    fn route(client: &str, route: &str, usd: f64) -> SalesByRouteItem {
        SalesByRouteItem {
            client_name: client.to_string(),
            route: route.to_string(),
            total_transactions: 1,
            total_billed_bs: 0.0,
            total_billed_usd: usd,
        }
    }

    fn sale(name: &str, year: i32, month: u32, qty: f64) -> SalesByProductItem {
        SalesByProductItem {
            product_id: 0,
            product_name: name.to_string(),
            year,
            month,
            total_quantity: qty,
            total_amount_usd: 0.0,
            total_amount_bs: 0.0,
        }
    }

    #[test]
    fn test_month_label() {
        assert_eq!(month_label(2025, 2), "Feb 2025");
        assert_eq!(month_label(2024, 12), "Dec 2024");
    }

    #[test]
    fn test_trend_sorted_and_totals() {
        let items = vec![trend(2025, 1, 10, 100.0), trend(2024, 12, 5, 50.5)];
        let points = trend_points(&items);
        assert_eq!(points[0].label, "Dec 2024");
        assert_eq!(points[1].label, "Jan 2025");

        let totals = trend_totals(&items);
        assert_eq!(totals.transactions, 15);
        assert_eq!(totals.billed_usd, 150.5);
    }

    #[test]
    fn test_top_product_bars_by_quantity() {
        let items = vec![
            TopProductItem {
                product_id: 1,
                product_name: "Harina".to_string(),
                total_quantity: 20.0,
                total_amount_usd: 500.0,
                total_amount_bs: 0.0,
            },
            TopProductItem {
                product_id: 2,
                product_name: "Aceite".to_string(),
                total_quantity: 45.0,
                total_amount_usd: 300.0,
                total_amount_bs: 0.0,
            },
        ];
        let bars = top_product_bars(&items);
        assert_eq!(bars[0].name, "Aceite");
        assert_eq!(bars[1].quantity, 20.0);
    }

    #[test]
    fn test_route_slices_merge_and_small_share_unlabeled() {
        let items = vec![
            route("Centro", "R1", 600.0),
            route("Oeste", "R1", 200.0),
            route("Centro", "R2", 170.0),
            route("Centro", "R3", 30.0),
        ];
        let slices = route_slices(&items);
        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0].route, "R1");
        assert_eq!(slices[0].billed_usd, 800.0);
        assert_eq!(slices[0].transactions, 2);
        assert!((slices[0].share - 0.8).abs() < 1e-9);
        assert!(slices[1].show_label);
        // 30 / 1000 = 3 %
        assert_eq!(slices[2].route, "R3");
        assert!(!slices[2].show_label);
    }

    #[test]
    fn test_route_slices_zero_total() {
        let slices = route_slices(&[route("Centro", "R1", 0.0)]);
        assert_eq!(slices[0].share, 0.0);
        assert!(!slices[0].show_label);
    }

    #[test]
    fn test_pivot_keeps_top_products_and_sorts_months() {
        let mut items = vec![
            sale("A", 2025, 2, 5.0),
            sale("B", 2025, 1, 50.0),
            sale("A", 2025, 1, 10.0),
            sale("C", 2024, 11, 1.0),
        ];
        items.push(sale("B", 2025, 2, 1.0));

        let pivot = product_month_pivot(&items, 2);
        assert_eq!(pivot.products, vec!["B".to_string(), "A".to_string()]);
        assert_eq!(pivot.months, vec!["Nov 2024", "Jan 2025", "Feb 2025"]);
        // C is not in the top two, so November is all zeros
        assert_eq!(pivot.values[0], vec![0.0, 0.0]);
        assert_eq!(pivot.values[1], vec![50.0, 10.0]);
        assert_eq!(pivot.values[2], vec![1.0, 5.0]);
        assert_eq!(pivot.max_value(), 50.0);
    }

    #[test]
    fn test_pivot_empty() {
        let pivot = product_month_pivot(&[], PIVOT_TOP_PRODUCTS);
        assert!(pivot.is_empty());
        assert_eq!(pivot.max_value(), 0.0);
    }
}
