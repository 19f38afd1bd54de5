//! `use_data_table`: binds a [`DataTableState`] to a list endpoint.
//!
//! The hook owns the signals and the async plumbing; every decision about
//! what to fetch and which response to keep is made by the state machine.

use contracts::shared::data_table::{DataTableState, DebounceToken, FetchTicket};
use contracts::shared::error::ApiError;
use contracts::shared::list::{FilterValue, Filters, ListParams, ListResult};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

type ListFuture<T> = Pin<Box<dyn Future<Output = Result<ListResult<T>, ApiError>>>>;
type Fetcher<T> = Rc<dyn Fn(ListParams) -> ListFuture<T>>;

/// Handle returned by [`use_data_table`]; cheap to copy into closures.
pub struct DataTable<T: Send + Sync + 'static> {
    state: RwSignal<DataTableState<T>>,
    fetcher: StoredValue<Fetcher<T>, LocalStorage>,
    debounce_ms: u32,
}

impl<T: Send + Sync + 'static> Clone for DataTable<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for DataTable<T> {}

/// Creates the table state and issues the first fetch.
pub fn use_data_table<T, F, Fut>(fetcher: F, page_size: usize, debounce_ms: u32) -> DataTable<T>
where
    T: Clone + Send + Sync + 'static,
    F: Fn(ListParams) -> Fut + 'static,
    Fut: Future<Output = Result<ListResult<T>, ApiError>> + 'static,
{
    use_data_table_with_filters(fetcher, page_size, debounce_ms, Filters::new())
}

/// Same as [`use_data_table`] with filters active from the first request.
pub fn use_data_table_with_filters<T, F, Fut>(
    fetcher: F,
    page_size: usize,
    debounce_ms: u32,
    filters: Filters,
) -> DataTable<T>
where
    T: Clone + Send + Sync + 'static,
    F: Fn(ListParams) -> Fut + 'static,
    Fut: Future<Output = Result<ListResult<T>, ApiError>> + 'static,
{
    let fetcher: Fetcher<T> = Rc::new(move |params| Box::pin(fetcher(params)));
    let mut initial = DataTableState::new(page_size).with_filters(filters);
    let first = initial.initial_fetch();

    let table = DataTable {
        state: RwSignal::new(initial),
        fetcher: StoredValue::new_local(fetcher),
        debounce_ms,
    };
    table.execute(first);
    table
}

impl<T: Clone + Send + Sync + 'static> DataTable<T> {
    fn execute(&self, ticket: FetchTicket) {
        let FetchTicket { seq, params } = ticket;
        log::debug!("list fetch #{}: {}", seq, params.to_query_string());

        let Some(future) = self.fetcher.try_with_value(|fetch| fetch(params)) else {
            return;
        };
        let state = self.state;

        spawn_local(async move {
            match future.await {
                Ok(result) => {
                    let applied = state.try_update(|s| s.apply_success(seq, result));
                    if applied == Some(false) {
                        log::debug!("list fetch #{} dropped, a newer one was applied", seq);
                    }
                }
                Err(e) => {
                    log::error!("list fetch #{} failed: {}", seq, e);
                    state.try_update(|s| s.apply_failure(seq));
                }
            }
        });
    }

    fn run(&self, intent: impl FnOnce(&mut DataTableState<T>) -> FetchTicket) {
        if let Some(ticket) = self.state.try_update(intent) {
            self.execute(ticket);
        }
    }

    pub fn set_page(&self, page_index: usize) {
        self.run(|s| s.set_page(page_index));
    }

    pub fn set_page_size(&self, page_size: usize) {
        self.run(|s| s.set_page_size(page_size));
    }

    pub fn set_filters(&self, partial: Filters) {
        self.run(|s| s.set_filters(partial));
    }

    pub fn set_filter(&self, key: &str, value: impl Into<FilterValue>) {
        let value = value.into();
        self.run(|s| s.set_filter(key, value));
    }

    pub fn refresh(&self) {
        self.run(|s| s.refresh());
    }

    /// Shows `value` right away; the request goes out once typing pauses.
    pub fn set_search_text(&self, value: String) {
        let Some(token) = self.state.try_update(|s| s.set_search_text(value)) else {
            return;
        };
        let table = *self;
        spawn_local(async move {
            TimeoutFuture::new(table.debounce_ms).await;
            table.fire_search(token);
        });
    }

    fn fire_search(&self, token: DebounceToken) {
        // a newer keystroke has superseded this token
        let still_pending = self.state.try_with_untracked(|s| s.is_search_pending());
        if still_pending != Some(true) {
            return;
        }
        if let Some(Some(ticket)) = self.state.try_update(|s| s.fire_search(token)) {
            self.execute(ticket);
        }
    }

    // ---- reactive reads ----

    pub fn items(&self) -> Vec<T> {
        self.state.with(|s| s.items().to_vec())
    }

    pub fn loading(&self) -> bool {
        self.state.with(|s| s.loading())
    }

    pub fn total(&self) -> u64 {
        self.state.with(|s| s.total())
    }

    pub fn page_index(&self) -> usize {
        self.state.with(|s| s.page_index())
    }

    pub fn page_size(&self) -> usize {
        self.state.with(|s| s.page_size())
    }

    pub fn search_text(&self) -> String {
        self.state.with(|s| s.search_text().to_string())
    }

    /// Absolute index of the first row on the current page.
    pub fn row_offset_untracked(&self) -> usize {
        self.state.with_untracked(|s| s.row_offset())
    }

    // ---- wiring for GenericTable ----

    pub fn data_signal(&self) -> Signal<Vec<T>> {
        let table = *self;
        Signal::derive(move || table.items())
    }

    pub fn loading_signal(&self) -> Signal<bool> {
        let table = *self;
        Signal::derive(move || table.loading())
    }

    pub fn total_signal(&self) -> Signal<u64> {
        let table = *self;
        Signal::derive(move || table.total())
    }

    pub fn page_signal(&self) -> Signal<usize> {
        let table = *self;
        Signal::derive(move || table.page_index())
    }

    pub fn page_size_signal(&self) -> Signal<usize> {
        let table = *self;
        Signal::derive(move || table.page_size())
    }

    pub fn search_signal(&self) -> Signal<String> {
        let table = *self;
        Signal::derive(move || table.search_text())
    }

    pub fn on_page_change(&self) -> Callback<usize> {
        let table = *self;
        Callback::new(move |page| table.set_page(page))
    }

    pub fn on_page_size_change(&self) -> Callback<usize> {
        let table = *self;
        Callback::new(move |size| table.set_page_size(size))
    }

    pub fn on_search_change(&self) -> Callback<String> {
        let table = *self;
        Callback::new(move |text| table.set_search_text(text))
    }
}
