//! Filter bar state of the analytics dashboard.

use chrono::{Datelike, NaiveDate};

use super::dto::{ClientOption, ReportFilters};

/// How many products the top-products report returns
pub const TOP_PRODUCTS_LIMIT: u32 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsFilterState {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub client_ids: Vec<i64>,
    pub region_ids: Vec<i64>,
    pub product_skus: Vec<String>,
    pub routes: Vec<String>,
}

impl AnalyticsFilterState {
    /// First day of the current month up to `today`.
    pub fn starting(today: NaiveDate) -> Self {
        Self {
            start_date: today.with_day(1),
            end_date: Some(today),
            client_ids: Vec::new(),
            region_ids: Vec::new(),
            product_skus: Vec::new(),
            routes: Vec::new(),
        }
    }

    /// Both ends set and in order.
    pub fn is_range_valid(&self) -> bool {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => start <= end,
            _ => false,
        }
    }

    /// Clients offered in the client select: everyone when no region is
    /// selected, otherwise only clients of the selected regions.
    pub fn client_options<'a>(&self, clients: &'a [ClientOption]) -> Vec<&'a ClientOption> {
        clients
            .iter()
            .filter(|c| {
                self.region_ids.is_empty()
                    || c.region_id.is_some_and(|r| self.region_ids.contains(&r))
            })
            .collect()
    }

    /// Drops selected clients that are no longer offered after a region change.
    pub fn prune_clients(&mut self, clients: &[ClientOption]) {
        let offered: Vec<i64> = self.client_options(clients).iter().map(|c| c.id).collect();
        self.client_ids.retain(|id| offered.contains(id));
    }

    pub fn toggle_region(&mut self, id: i64, clients: &[ClientOption]) {
        toggle(&mut self.region_ids, id);
        self.prune_clients(clients);
    }

    pub fn toggle_client(&mut self, id: i64) {
        toggle(&mut self.client_ids, id);
    }

    pub fn toggle_product(&mut self, sku: &str) {
        toggle(&mut self.product_skus, sku.to_string());
    }

    pub fn clear_selections(&mut self) {
        self.client_ids.clear();
        self.region_ids.clear();
        self.product_skus.clear();
        self.routes.clear();
    }

    /// Request body; a missing date is sent as an empty string.
    pub fn build(&self) -> ReportFilters {
        fn non_empty<T: Clone>(values: &[T]) -> Option<Vec<T>> {
            if values.is_empty() {
                None
            } else {
                Some(values.to_vec())
            }
        }

        let format_date = |d: Option<NaiveDate>| {
            d.map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        };

        ReportFilters {
            start_date: format_date(self.start_date),
            end_date: format_date(self.end_date),
            client_ids: non_empty(&self.client_ids),
            region_ids: non_empty(&self.region_ids),
            product_skus: non_empty(&self.product_skus),
            routes: non_empty(&self.routes),
            limit: None,
        }
    }

    pub fn build_top_products(&self) -> ReportFilters {
        ReportFilters {
            limit: Some(TOP_PRODUCTS_LIMIT),
            ..self.build()
        }
    }
}

fn toggle<T: PartialEq>(values: &mut Vec<T>, value: T) {
    if let Some(pos) = values.iter().position(|v| *v == value) {
        values.remove(pos);
    } else {
        values.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn clients() -> Vec<ClientOption> {
        vec![
            ClientOption { id: 1, name: "Centro".to_string(), region_id: Some(10) },
            ClientOption { id: 2, name: "Oeste".to_string(), region_id: Some(20) },
            ClientOption { id: 3, name: "Sin region".to_string(), region_id: None },
        ]
    }

    #[test]
    fn test_default_range_is_month_to_date() {
        let state = AnalyticsFilterState::starting(date(2025, 3, 18));
        let filters = state.build();
        assert_eq!(filters.start_date, "2025-03-01");
        assert_eq!(filters.end_date, "2025-03-18");
        assert_eq!(filters.client_ids, None);
        assert!(state.is_range_valid());
    }

    #[test]
    fn test_inverted_range_is_invalid() {
        let mut state = AnalyticsFilterState::starting(date(2025, 3, 18));
        state.start_date = Some(date(2025, 4, 1));
        assert!(!state.is_range_valid());
        state.start_date = None;
        assert!(!state.is_range_valid());
        assert_eq!(state.build().start_date, "");
    }

    #[test]
    fn test_clients_cascade_from_regions() {
        let all = clients();
        let mut state = AnalyticsFilterState::starting(date(2025, 3, 18));
        assert_eq!(state.client_options(&all).len(), 3);

        state.toggle_client(1);
        state.toggle_client(2);
        state.toggle_region(20, &all);

        let offered: Vec<i64> = state.client_options(&all).iter().map(|c| c.id).collect();
        assert_eq!(offered, vec![2]);
        assert_eq!(state.client_ids, vec![2]);

        let filters = state.build();
        assert_eq!(filters.region_ids, Some(vec![20]));
        assert_eq!(filters.client_ids, Some(vec![2]));
    }

    #[test]
    fn test_toggle_removes_second_time() {
        let mut state = AnalyticsFilterState::starting(date(2025, 3, 18));
        state.toggle_product("SKU-1");
        state.toggle_product("SKU-2");
        state.toggle_product("SKU-1");
        assert_eq!(state.product_skus, vec!["SKU-2".to_string()]);
    }

    #[test]
    fn test_top_products_carries_limit() {
        let state = AnalyticsFilterState::starting(date(2025, 3, 18));
        assert_eq!(state.build().limit, None);
        assert_eq!(state.build_top_products().limit, Some(10));
    }
}
