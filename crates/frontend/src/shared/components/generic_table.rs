//! GenericTable - paginated table driven entirely by its props.
//!
//! The component owns no list state: it renders whatever the page hands it
//! (usually the signals of a `DataTable`) and reports user intents back
//! through callbacks.

use contracts::shared::data_table::PAGE_SIZE_OPTIONS;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

use super::pagination_controls::PaginationControls;
use crate::shared::icons::icon;

pub const EMPTY_MESSAGE: &str = "No data registered";
pub const NO_RESULTS_MESSAGE: &str = "No results found";

/// Rows must expose a stable id.
pub trait TableRecord {
    fn row_id(&self) -> i64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    fn as_css(self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

pub type CellRenderer<T> = Arc<dyn Fn(&T, usize) -> AnyView + Send + Sync>;

/// Column definition. `render` receives the row and its position on the
/// current page.
pub struct Column<T> {
    pub id: &'static str,
    pub label: String,
    pub align: Align,
    pub min_width: Option<u32>,
    render: CellRenderer<T>,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            label: self.label.clone(),
            align: self.align,
            min_width: self.min_width,
            render: Arc::clone(&self.render),
        }
    }
}

impl<T: 'static> Column<T> {
    pub fn new<F>(id: &'static str, label: impl Into<String>, render: F) -> Self
    where
        F: Fn(&T, usize) -> AnyView + Send + Sync + 'static,
    {
        Self {
            id,
            label: label.into(),
            align: Align::Left,
            min_width: None,
            render: Arc::new(render),
        }
    }

    /// Plain text cell from an accessor.
    pub fn text<F>(id: &'static str, label: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self::new(id, label, move |row, _| accessor(row).into_any())
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn min_width(mut self, px: u32) -> Self {
        self.min_width = Some(px);
        self
    }

    pub fn render(&self, row: &T, index: usize) -> AnyView {
        (self.render)(row, index)
    }

    fn style(&self) -> String {
        match self.min_width {
            Some(w) => format!("text-align: {}; min-width: {}px;", self.align.as_css(), w),
            None => format!("text-align: {};", self.align.as_css()),
        }
    }
}

/// What the table body shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableBodyMode {
    /// `n` placeholder rows
    Skeleton(usize),
    /// A single full-width row with a message
    Empty(&'static str),
    Rows,
}

pub fn empty_state_message(search_query: &str) -> &'static str {
    if search_query.is_empty() {
        EMPTY_MESSAGE
    } else {
        NO_RESULTS_MESSAGE
    }
}

/// Loading always wins, regardless of the rows already present.
pub fn body_mode(loading: bool, row_count: usize, page_size: usize, search_query: &str) -> TableBodyMode {
    if loading {
        TableBodyMode::Skeleton(page_size)
    } else if row_count == 0 {
        TableBodyMode::Empty(empty_state_message(search_query))
    } else {
        TableBodyMode::Rows
    }
}

/// Rows are keyed by their id, never by their position on the page.
fn row_key<T: TableRecord>(entry: &(usize, T)) -> i64 {
    entry.1.row_id()
}

/// One data row. Every cell is rendered up front so the view owns its content.
fn row_view<T: TableRecord + 'static>(columns: &[Column<T>], row: &T, index: usize) -> AnyView {
    let cells = columns
        .iter()
        .map(|col| {
            let style = col.style();
            let content = col.render(row, index);
            view! {
                <TableCell attr:style=style>
                    <TableCellLayout>{content}</TableCellLayout>
                </TableCell>
            }
        })
        .collect_view();
    view! { <TableRow attr:data-row-id=row.row_id().to_string()>{cells}</TableRow> }.into_any()
}

#[component]
pub fn GenericTable<T>(
    columns: Vec<Column<T>>,
    #[prop(into)] data: Signal<Vec<T>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] total: Signal<u64>,
    /// 0-based
    #[prop(into)]
    page: Signal<usize>,
    #[prop(into)] page_size: Signal<usize>,
    #[prop(into)] search_query: Signal<String>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
    on_search_change: Callback<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] search_placeholder: Option<String>,
    /// Extra controls next to the search box (filters, "Add" button)
    #[prop(optional)]
    header_action: Option<ChildrenFn>,
) -> impl IntoView
where
    T: TableRecord + Clone + Send + Sync + 'static,
{
    let column_count = columns.len();
    let columns = StoredValue::new(columns);
    let placeholder = search_placeholder.unwrap_or_else(|| "Search...".to_string());

    // switching modes rebuilds the body; new data within `Rows` is diffed by row id
    let mode = Memo::new(move |_| {
        body_mode(
            loading.get(),
            data.with(|d| d.len()),
            page_size.get(),
            &search_query.get(),
        )
    });

    let body = move || match mode.get() {
        TableBodyMode::Skeleton(rows) => (0..rows)
            .map(|_| {
                view! {
                    <TableRow class="generic-table__skeleton-row">
                        {(0..column_count)
                            .map(|_| view! {
                                <TableCell>
                                    <div class="skeleton-line"></div>
                                </TableCell>
                            })
                            .collect_view()}
                    </TableRow>
                }
            })
            .collect_view()
            .into_any(),
        TableBodyMode::Empty(message) => view! {
            <TableRow>
                <TableCell attr:colspan=column_count.to_string()>
                    <div class="generic-table__empty">{message}</div>
                </TableCell>
            </TableRow>
        }
        .into_any(),
        TableBodyMode::Rows => view! {
            <For
                each=move || data.get().into_iter().enumerate()
                key=row_key
                children=move |(index, row)| columns.with_value(|cols| row_view(cols, &row, index))
            />
        }
        .into_any(),
    };

    let header_cells = columns.with_value(|cols| {
        cols.iter()
            .map(|col| {
                let style = col.style();
                let column_id = col.id;
                let label = col.label.clone();
                view! {
                    <TableHeaderCell attr:style=style attr:data-column-id=column_id>
                        {label}
                    </TableHeaderCell>
                }
            })
            .collect_view()
    });

    view! {
        <div class="generic-table">
            <div class="generic-table__toolbar">
                <div class="generic-table__toolbar-left">
                    {title.map(|t| view! { <h2 class="generic-table__title">{t}</h2> })}
                </div>
                <div class="generic-table__toolbar-right">
                    <div class="generic-table__search">
                        <input
                            type="text"
                            placeholder=placeholder
                            prop:value=move || search_query.get()
                            on:input=move |ev| on_search_change.run(event_target_value(&ev))
                        />
                        {move || (!search_query.get().is_empty()).then(|| view! {
                            <button
                                class="generic-table__search-clear"
                                title="Clear"
                                on:click=move |_| on_search_change.run(String::new())
                            >
                                {icon("x")}
                            </button>
                        })}
                    </div>
                    {header_action.as_ref().map(|action| action())}
                </div>
            </div>

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>{header_cells}</TableRow>
                    </TableHeader>
                    <TableBody>{body}</TableBody>
                </Table>
            </div>

            <PaginationControls
                current_page=page
                page_size=page_size
                total_count=total
                on_page_change=on_page_change
                on_page_size_change=on_page_size_change
                page_size_options=PAGE_SIZE_OPTIONS.to_vec()
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_renders_page_size_skeleton_rows() {
        assert_eq!(body_mode(true, 7, 25, ""), TableBodyMode::Skeleton(25));
        assert_eq!(body_mode(true, 0, 10, "abc"), TableBodyMode::Skeleton(10));
    }

    #[test]
    fn test_empty_messages() {
        assert_eq!(body_mode(false, 0, 10, ""), TableBodyMode::Empty("No data registered"));
        assert_eq!(body_mode(false, 0, 10, "abc"), TableBodyMode::Empty("No results found"));
    }

    #[test]
    fn test_rows() {
        assert_eq!(body_mode(false, 3, 10, "abc"), TableBodyMode::Rows);
    }

    #[derive(Clone)]
    struct Row {
        id: i64,
        name: &'static str,
    }

    impl TableRecord for Row {
        fn row_id(&self) -> i64 {
            self.id
        }
    }

    #[test]
    fn test_row_key_follows_id_not_position() {
        let row = Row { id: 7, name: "Centro" };
        let same_content = Row { id: 9, name: "Centro" };
        // moving a row to another position keeps its key
        assert_eq!(row_key(&(0, row.clone())), 7);
        assert_eq!(row_key(&(3, row)), 7);
        // equal content, different record
        assert_eq!(row_key(&(0, same_content)), 9);
    }

    #[test]
    fn test_column_style() {
        let col = Column::<Row>::text("name", "Name", |r| r.name.to_string())
            .align(Align::Right)
            .min_width(120);
        assert_eq!(col.style(), "text-align: right; min-width: 120px;");
        let plain = Column::<Row>::text("id", "Id", |r| r.id.to_string());
        assert_eq!(plain.clone().style(), "text-align: left;");
    }
}
