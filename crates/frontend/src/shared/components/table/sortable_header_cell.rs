//! Sortable table header cell
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Last Name"
//!     sort_key="lastName"
//!     sort=Signal::derive(move || state.with(|s| s.sort.clone()))
//!     on_sort=Callback::new(move |key: String| state.update(|s| s.toggle_sort(&key)))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator, SortConfig};
use leptos::prelude::*;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,
    /// Field the column sorts by
    #[prop(into)]
    sort_key: String,
    /// Current sort state
    #[prop(into)]
    sort: Signal<Option<SortConfig>>,
    on_sort: Callback<String>,
) -> impl IntoView {
    let key_for_click = sort_key.clone();
    let key_for_indicator = sort_key.clone();
    let key_for_class = sort_key;

    view! {
        <th class="table__header-cell table__header-cell--sortable">
            <div
                class="table__sortable-header"
                on:click=move |_| on_sort.run(key_for_click.clone())
            >
                {label}
                <span class=move || sort.with(|s| get_sort_class(s.as_ref(), &key_for_class))>
                    {move || sort.with(|s| get_sort_indicator(s.as_ref(), &key_for_indicator))}
                </span>
            </div>
        </th>
    }
}
