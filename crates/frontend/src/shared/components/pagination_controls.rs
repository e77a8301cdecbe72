use crate::shared::icons::Icon;
use leptos::prelude::*;

/// First / previous / next / last controls with a page-size selector.
///
/// Pages are 1-based. `total_pages` may be 0 (no results); the label still
/// reads "Page 1 of 1" and every navigation button is disabled.
#[component]
pub fn PaginationControls(
    #[prop(into)]
    current_page: Signal<usize>,
    #[prop(into)]
    total_pages: Signal<usize>,
    #[prop(into)]
    total_count: Signal<usize>,
    #[prop(into)]
    page_size: Signal<usize>,
    on_first: Callback<()>,
    on_prev: Callback<()>,
    on_next: Callback<()>,
    on_last: Callback<()>,
    on_page_size_change: Callback<usize>,
    page_size_options: Vec<usize>,
) -> impl IntoView {
    let at_start = move || current_page.get() <= 1;
    let at_end = move || {
        let total = total_pages.get();
        total == 0 || current_page.get() >= total
    };

    view! {
        <div class="pagination-controls">
            <button
                type="button"
                class="pagination-btn"
                on:click=move |_| on_first.run(())
                disabled=at_start
                title="First page"
            >
                {Icon::ChevronsLeft.view()}
            </button>
            <button
                type="button"
                class="pagination-btn"
                on:click=move |_| on_prev.run(())
                disabled=at_start
                title="Previous page"
            >
                {Icon::ChevronLeft.view()}
            </button>
            <span class="pagination-info">
                {move || {
                    format!(
                        "Page {} of {} ({})",
                        current_page.get(),
                        total_pages.get().max(1),
                        total_count.get()
                    )
                }}
            </span>
            <button
                type="button"
                class="pagination-btn"
                on:click=move |_| on_next.run(())
                disabled=at_end
                title="Next page"
            >
                {Icon::ChevronRight.view()}
            </button>
            <button
                type="button"
                class="pagination-btn"
                on:click=move |_| on_last.run(())
                disabled=at_end
                title="Last page"
            >
                {Icon::ChevronsRight.view()}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_options.into_iter().map(|size| {
                    view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {format!("{} / page", size)}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
