//! State machine behind every paginated table.
//!
//! Intents mutate the query and hand back what has to be executed: a
//! [`FetchTicket`] for an immediate request or a [`DebounceToken`] for a
//! search that should fire later. The caller runs the request and feeds the
//! outcome back through [`DataTableState::apply_success`] /
//! [`DataTableState::apply_failure`]. Nothing here knows about signals,
//! timers or HTTP, so the whole flow is testable natively.

use super::list::{FilterValue, Filters, ListParams, ListQuery, ListResult};

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [10, 25, 50];
pub const SEARCH_DEBOUNCE_MS: u32 = 400;

/// A request the caller must execute; `seq` comes back with the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub params: ListParams,
}

/// Handle for a scheduled search. Only the most recent token fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceToken(u64);

#[derive(Debug, Clone)]
pub struct DataTableState<T> {
    query: ListQuery,
    items: Vec<T>,
    total: u64,
    loading: bool,
    /// Highest sequence number handed out.
    latest_issued: u64,
    /// Highest sequence number whose outcome has been taken into account.
    latest_settled: u64,
    search_generation: u64,
    pending_search: Option<u64>,
}

impl<T> DataTableState<T> {
    /// Starts in the loading state: the first fetch is issued on mount.
    pub fn new(page_size: usize) -> Self {
        Self {
            query: ListQuery::new(page_size),
            items: Vec::new(),
            total: 0,
            loading: true,
            latest_issued: 0,
            latest_settled: 0,
            search_generation: 0,
            pending_search: None,
        }
    }

    pub fn with_filters(mut self, filters: Filters) -> Self {
        self.query.filters = filters;
        self
    }

    // ---- intents ----

    pub fn initial_fetch(&mut self) -> FetchTicket {
        self.issue()
    }

    /// Re-issues the current query unchanged.
    pub fn refresh(&mut self) -> FetchTicket {
        self.issue()
    }

    pub fn set_page(&mut self, page_index: usize) -> FetchTicket {
        self.query.page_index = page_index;
        self.issue()
    }

    pub fn set_page_size(&mut self, page_size: usize) -> FetchTicket {
        self.query.page_size = page_size.max(1);
        self.query.page_index = 0;
        self.issue()
    }

    /// Updates the visible search text right away and schedules the fetch.
    /// Any previously returned token becomes a no-op.
    pub fn set_search_text(&mut self, value: impl Into<String>) -> DebounceToken {
        self.query.search_text = value.into();
        self.search_generation += 1;
        self.pending_search = Some(self.search_generation);
        DebounceToken(self.search_generation)
    }

    /// Called when the debounce delay of `token` has elapsed.
    pub fn fire_search(&mut self, token: DebounceToken) -> Option<FetchTicket> {
        if self.pending_search != Some(token.0) {
            return None;
        }
        self.pending_search = None;
        self.query.page_index = 0;
        Some(self.issue())
    }

    pub fn is_search_pending(&self) -> bool {
        self.pending_search.is_some()
    }

    /// Shallow merge, keys in `partial` override existing ones.
    pub fn set_filters(&mut self, partial: Filters) -> FetchTicket {
        self.query.filters.extend(partial);
        self.query.page_index = 0;
        self.issue()
    }

    pub fn set_filter(&mut self, key: &str, value: impl Into<FilterValue>) -> FetchTicket {
        let mut partial = Filters::new();
        partial.insert(key.to_string(), value.into());
        self.set_filters(partial)
    }

    // ---- outcomes ----

    /// Returns `false` when the response was stale and got dropped.
    pub fn apply_success(&mut self, seq: u64, result: ListResult<T>) -> bool {
        let fresh = seq > self.latest_settled;
        if fresh {
            self.latest_settled = seq;
            self.items = result.items;
            self.total = result.total_count;
        }
        self.settle(seq);
        fresh
    }

    /// Keeps the previous rows and total.
    pub fn apply_failure(&mut self, seq: u64) {
        if seq > self.latest_settled {
            self.latest_settled = seq;
        }
        self.settle(seq);
    }

    fn settle(&mut self, seq: u64) {
        if seq == self.latest_issued {
            self.loading = false;
        }
    }

    fn issue(&mut self) -> FetchTicket {
        self.latest_issued += 1;
        self.loading = true;
        FetchTicket {
            seq: self.latest_issued,
            params: self.query.to_params(),
        }
    }

    // ---- accessors ----

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn page_index(&self) -> usize {
        self.query.page_index
    }

    pub fn page_size(&self) -> usize {
        self.query.page_size
    }

    pub fn search_text(&self) -> &str {
        &self.query.search_text
    }

    pub fn filters(&self) -> &Filters {
        &self.query.filters
    }

    /// Absolute position of the first row of the current page (0-based).
    pub fn row_offset(&self) -> usize {
        self.query.page_index * self.query.page_size
    }
}

impl<T> Default for DataTableState<T> {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(items: &[&str], total: u64) -> ListResult<String> {
        ListResult {
            items: items.iter().map(|s| s.to_string()).collect(),
            total_count: total,
        }
    }

    #[test]
    fn test_starts_loading_with_defaults() {
        let state: DataTableState<String> = DataTableState::default();
        assert!(state.loading());
        assert_eq!(state.page_size(), 10);
        assert_eq!(state.page_index(), 0);
        assert!(state.items().is_empty());
    }

    #[test]
    fn test_initial_fetch_and_success() {
        let mut state = DataTableState::new(10);
        let ticket = state.initial_fetch();
        assert_eq!(ticket.params.to_query_string(), "page=1&per_page=10");

        assert!(state.apply_success(ticket.seq, page(&["a", "b"], 2)));
        assert!(!state.loading());
        assert_eq!(state.items(), &["a".to_string(), "b".to_string()]);
        assert_eq!(state.total(), 2);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut state: DataTableState<String> = DataTableState::new(10);
        state.set_page(3);
        assert_eq!(state.page_index(), 3);

        let ticket = state.set_page_size(25);
        assert_eq!(state.page_index(), 0);
        assert_eq!(ticket.params.page, 1);
        assert_eq!(ticket.params.per_page, 25);
    }

    #[test]
    fn test_set_page_keeps_search_and_filters() {
        let mut state: DataTableState<String> = DataTableState::new(10);
        let token = state.set_search_text("caracas");
        state.fire_search(token);
        state.set_filter("region_id", 2);

        let ticket = state.set_page(4);
        assert_eq!(
            ticket.params.to_query_string(),
            "page=5&per_page=10&query=caracas&region_id=2"
        );
    }

    #[test]
    fn test_only_last_search_fires() {
        let mut state: DataTableState<String> = DataTableState::new(10);
        state.set_page(2);

        let t1 = state.set_search_text("c");
        let t2 = state.set_search_text("ca");
        let t3 = state.set_search_text("car");

        // the text is visible right away
        assert_eq!(state.search_text(), "car");
        assert!(state.is_search_pending());

        assert_eq!(state.fire_search(t1), None);
        assert_eq!(state.fire_search(t2), None);

        let ticket = state.fire_search(t3).unwrap();
        assert_eq!(ticket.params.query.as_deref(), Some("car"));
        assert_eq!(ticket.params.page, 1);
        assert!(!state.is_search_pending());

        // a token only fires once
        assert_eq!(state.fire_search(t3), None);
    }

    #[test]
    fn test_page_change_does_not_cancel_pending_search() {
        let mut state: DataTableState<String> = DataTableState::new(10);
        let token = state.set_search_text("val");
        let immediate = state.set_page(1);
        assert_eq!(immediate.params.page, 2);
        assert!(state.is_search_pending());

        let ticket = state.fire_search(token).unwrap();
        assert_eq!(ticket.params.page, 1);
    }

    #[test]
    fn test_filters_merge() {
        let mut state: DataTableState<String> = DataTableState::new(10);
        state.set_page(5);
        state.set_filter("a", 1);
        let ticket = state.set_filter("b", 2);

        assert_eq!(state.page_index(), 0);
        assert_eq!(ticket.params.to_query_string(), "page=1&per_page=10&a=1&b=2");

        let ticket = state.set_filter("a", 9);
        assert_eq!(ticket.params.to_query_string(), "page=1&per_page=10&a=9&b=2");
    }

    #[test]
    fn test_empty_filter_value_is_not_sent() {
        let mut state: DataTableState<String> = DataTableState::new(10);
        state.set_filter("region_id", "3");
        let ticket = state.set_filter("region_id", "");
        assert_eq!(ticket.params.to_query_string(), "page=1&per_page=10");
    }

    #[test]
    fn test_failure_keeps_previous_data() {
        let mut state = DataTableState::new(10);
        let first = state.initial_fetch();
        state.apply_success(first.seq, page(&["a"], 1));

        let second = state.set_page(1);
        assert!(state.loading());
        state.apply_failure(second.seq);

        assert!(!state.loading());
        assert_eq!(state.items(), &["a".to_string()]);
        assert_eq!(state.total(), 1);
        // the page index reflects the request even though it failed
        assert_eq!(state.page_index(), 1);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut state = DataTableState::new(10);
        let old = state.set_page(1);
        let new = state.set_page(2);

        assert!(state.apply_success(new.seq, page(&["new"], 30)));
        assert!(!state.loading());

        assert!(!state.apply_success(old.seq, page(&["old"], 30)));
        assert_eq!(state.items(), &["new".to_string()]);
        assert!(!state.loading());
    }

    #[test]
    fn test_loading_until_latest_settles() {
        let mut state = DataTableState::new(10);
        let old = state.set_page(1);
        let new = state.set_page(2);

        // older response lands first: shown, but a newer request is still out
        assert!(state.apply_success(old.seq, page(&["old"], 30)));
        assert!(state.loading());

        assert!(state.apply_success(new.seq, page(&["new"], 30)));
        assert!(!state.loading());
        assert_eq!(state.items(), &["new".to_string()]);
    }

    #[test]
    fn test_stale_success_after_newer_failure_is_dropped() {
        let mut state = DataTableState::new(10);
        let old = state.set_page(1);
        let new = state.set_page(2);

        state.apply_failure(new.seq);
        assert!(!state.apply_success(old.seq, page(&["old"], 30)));
        assert!(state.items().is_empty());
    }

    #[test]
    fn test_refresh_reissues_same_params() {
        let mut state: DataTableState<String> = DataTableState::new(25);
        let first = state.set_page(2);
        let again = state.refresh();
        assert_eq!(first.params, again.params);
        assert!(again.seq > first.seq);
    }

    #[test]
    fn test_row_offset() {
        let mut state: DataTableState<String> = DataTableState::new(25);
        state.set_page(2);
        assert_eq!(state.row_offset(), 50);
    }
}
