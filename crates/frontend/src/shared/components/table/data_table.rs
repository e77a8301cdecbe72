//! Searchable, sortable, paginated table over an in-memory record list.
//!
//! All paging/sorting/filtering is client-side; the component never fetches.

use super::columns::ColumnDescriptor;
use super::sortable_header_cell::SortableHeaderCell;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::use_app_config;
use crate::shared::list_utils::{ListPage, ListViewState, SearchInput};
use crate::shared::record::Record;
use leptos::prelude::*;

#[component]
pub fn DataTable(
    #[prop(into)]
    columns: Signal<Vec<ColumnDescriptor>>,
    #[prop(into)]
    records: Signal<Vec<Record>>,
    #[prop(optional, into)]
    search_placeholder: String,
    /// Restricts search to one field; all fields are searched when unset
    #[prop(optional, into)]
    search_column: Option<String>,
    #[prop(optional)]
    page_size: Option<usize>,
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
    /// DOM id of the `<table>`
    #[prop(optional, into)]
    table_id: Option<String>,
) -> impl IntoView {
    let config = use_app_config();
    let page_size = page_size.unwrap_or(config.default_page_size);
    let page_size_options = page_size_options.unwrap_or_else(|| config.page_size_options.clone());

    let state = RwSignal::new(ListViewState::new(page_size));

    let page: Memo<ListPage> = Memo::new(move |_| {
        let search_column = search_column.as_deref();
        state.with(|s| records.with(|r| s.apply(r, search_column)))
    });
    let total_pages = move || page.with(|p| p.total_pages);

    let on_search = Callback::new(move |query: String| state.update(|s| s.set_search_query(query)));
    let on_sort = Callback::new(move |key: String| state.update(|s| s.toggle_sort(&key)));

    let column_count = move || columns.with(|c| c.len().max(1));

    view! {
        <div class="data-table">
            <div class="data-table__toolbar">
                <SearchInput on_change=on_search placeholder=search_placeholder />
                <PaginationControls
                    current_page=Signal::derive(move || page.with(|p| p.current_page))
                    total_pages=Signal::derive(total_pages)
                    total_count=Signal::derive(move || page.with(|p| p.total_count))
                    page_size=Signal::derive(move || state.with(|s| s.page_size))
                    on_first=Callback::new(move |_| state.update(|s| s.go_first()))
                    on_prev=Callback::new(move |_| {
                        let total = total_pages();
                        state.update(|s| s.go_prev(total));
                    })
                    on_next=Callback::new(move |_| {
                        let total = total_pages();
                        state.update(|s| s.go_next(total));
                    })
                    on_last=Callback::new(move |_| {
                        let total = total_pages();
                        state.update(|s| s.go_last(total));
                    })
                    on_page_size_change=Callback::new(move |size| state.update(|s| s.set_page_size(size)))
                    page_size_options=page_size_options
                />
            </div>

            <div class="table-wrapper">
                <table id=table_id class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {move || columns.get().into_iter().map(|col| {
                                if col.sortable {
                                    view! {
                                        <SortableHeaderCell
                                            label=col.header
                                            sort_key=col.accessor
                                            sort=Signal::derive(move || state.with(|s| s.sort.clone()))
                                            on_sort=on_sort
                                        />
                                    }.into_any()
                                } else {
                                    view! { <th class="table__header-cell">{col.header}</th> }.into_any()
                                }
                            }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = page.with(|p| p.rows.clone());
                            if rows.is_empty() {
                                view! {
                                    <tr class="table__row table__row--empty">
                                        <td class="table__cell table__cell--empty" colspan=column_count()>
                                            "No results found"
                                        </td>
                                    </tr>
                                }.into_any()
                            } else {
                                let cols = columns.get();
                                rows.into_iter().map(|record| {
                                    let cells = cols.iter().map(|col| {
                                        view! { <td class="table__cell">{col.cell.render(&record)}</td> }
                                    }).collect_view();
                                    view! { <tr class="table__row">{cells}</tr> }
                                }).collect_view().into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
