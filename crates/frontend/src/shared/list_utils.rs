//! Client-side list pipeline: search -> sort -> paginate, plus the search
//! input and sort indicators used by the table components.

use crate::shared::icons::Icon;
use crate::shared::record::{value_to_text, Record};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use serde_json::Value;
use std::cmp::Ordering;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 20, 50];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortConfig {
    pub key: String,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn ascending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// Next sort state after a header click on `key`.
///
/// `{key, asc}` flips to `{key, desc}`; every other state becomes `{key, asc}`.
pub fn toggle_sort(current: Option<&SortConfig>, key: &str) -> SortConfig {
    match current {
        Some(c) if c.key == key && c.direction == SortDirection::Ascending => {
            SortConfig::descending(key)
        }
        _ => SortConfig::ascending(key),
    }
}

fn type_rank(value: Option<&Value>) -> u8 {
    match value {
        None | Some(Value::Null) => 0,
        Some(Value::Bool(_)) => 1,
        Some(Value::Number(_)) => 2,
        Some(Value::String(_)) => 3,
        Some(Value::Array(_)) | Some(Value::Object(_)) => 4,
    }
}

/// Total order over field values: same-typed values compare natively,
/// mixed types by rank (missing/null < bool < number < string < composite).
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let x = x.as_f64().unwrap_or(0.0);
            let y = y.as_f64().unwrap_or(0.0);
            x.total_cmp(&y)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(x @ Value::Array(_)), Some(y @ Value::Array(_)))
        | (Some(x @ Value::Object(_)), Some(y @ Value::Object(_))) => {
            x.to_string().cmp(&y.to_string())
        }
        _ => {
            let (ra, rb) = (type_rank(a), type_rank(b));
            if ra == rb && ra == 4 {
                // array vs object
                let sa = a.map(Value::to_string).unwrap_or_default();
                let sb = b.map(Value::to_string).unwrap_or_default();
                sa.cmp(&sb)
            } else {
                ra.cmp(&rb)
            }
        }
    }
}

/// Case-insensitive substring search, over one field or over every field.
pub fn filter_records(records: &[Record], query: &str, search_column: Option<&str>) -> Vec<Record> {
    if query.is_empty() {
        return records.to_vec();
    }
    let needle = query.to_lowercase();
    let matches = |value: &Value| value_to_text(value).to_lowercase().contains(&needle);

    records
        .iter()
        .filter(|record| match search_column {
            Some(column) => record.get(column).map(matches).unwrap_or(false),
            None => record.values().any(matches),
        })
        .cloned()
        .collect()
}

/// Stable sort; equal keys keep their relative order in both directions.
pub fn sort_records(records: &mut [Record], sort: &SortConfig) {
    records.sort_by(|a, b| {
        let cmp = compare_values(a.get(&sort.key), b.get(&sort.key));
        match sort.direction {
            SortDirection::Ascending => cmp,
            SortDirection::Descending => cmp.reverse(),
        }
    });
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// One rendered page of the pipeline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListPage {
    pub rows: Vec<Record>,
    pub total_count: usize,
    pub total_pages: usize,
    /// 1-based page actually shown, clamped to the available range
    pub current_page: usize,
}

impl ListPage {
    /// Never below 1, so an empty result reads "Page 1 of 1".
    pub fn display_total_pages(&self) -> usize {
        self.total_pages.max(1)
    }

    pub fn can_go_back(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_forward(&self) -> bool {
        self.total_pages > 0 && self.current_page < self.total_pages
    }
}

/// Component-local list state.
#[derive(Debug, Clone, PartialEq)]
pub struct ListViewState {
    pub search_query: String,
    /// 1-based
    pub current_page: usize,
    pub page_size: usize,
    pub sort: Option<SortConfig>,
}

impl Default for ListViewState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ListViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            search_query: String::new(),
            current_page: 1,
            page_size: page_size.max(1),
            sort: None,
        }
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.current_page = 1;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.current_page = 1;
    }

    pub fn toggle_sort(&mut self, key: &str) {
        self.sort = Some(toggle_sort(self.sort.as_ref(), key));
    }

    fn clamped_page(&self, total_pages: usize) -> usize {
        self.current_page.clamp(1, total_pages.max(1))
    }

    pub fn go_first(&mut self) {
        self.current_page = 1;
    }

    pub fn go_prev(&mut self, total_pages: usize) {
        let page = self.clamped_page(total_pages);
        self.current_page = page.saturating_sub(1).max(1);
    }

    pub fn go_next(&mut self, total_pages: usize) {
        let page = self.clamped_page(total_pages);
        self.current_page = if page < total_pages { page + 1 } else { page };
    }

    pub fn go_last(&mut self, total_pages: usize) {
        self.current_page = total_pages.max(1);
    }

    /// Runs filter, sort and paginate over `records`, in that order.
    pub fn apply(&self, records: &[Record], search_column: Option<&str>) -> ListPage {
        let mut rows = filter_records(records, &self.search_query, search_column);
        if let Some(sort) = &self.sort {
            sort_records(&mut rows, sort);
        }

        let total_count = rows.len();
        let total_pages = total_pages(total_count, self.page_size);
        let current_page = self.clamped_page(total_pages);
        let start = (current_page - 1) * self.page_size;
        let end = (start + self.page_size).min(total_count);
        let rows = if start < end {
            rows.drain(start..end).collect()
        } else {
            Vec::new()
        };

        ListPage {
            rows,
            total_count,
            total_pages,
            current_page,
        }
    }
}

/// Replaces the item with the same key, or appends it.
pub fn upsert_by<T, K: PartialEq>(items: &mut Vec<T>, item: T, key: impl Fn(&T) -> K) {
    let item_key = key(&item);
    match items.iter().position(|existing| key(existing) == item_key) {
        Some(index) => items[index] = item,
        None => items.push(item),
    }
}

/// Drops every item whose key equals `target`.
pub fn remove_by<T, K: PartialEq>(items: &mut Vec<T>, target: &K, key: impl Fn(&T) -> K) {
    items.retain(|item| key(item) != *target);
}

/// Sort indicator shown next to a header
pub fn get_sort_indicator(sort: Option<&SortConfig>, key: &str) -> &'static str {
    match sort {
        Some(s) if s.key == key => match s.direction {
            SortDirection::Ascending => " ▲",
            SortDirection::Descending => " ▼",
        },
        _ => " ⇅",
    }
}

pub fn get_sort_class(sort: Option<&SortConfig>, key: &str) -> &'static str {
    match sort {
        Some(s) if s.key == key => "table__sort-indicator table__sort-indicator--active",
        _ => "table__sort-indicator",
    }
}

/// Debounced search input with a clear button
#[component]
pub fn SearchInput(
    /// Callback for the (debounced) query
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(String::new());
    // Dropping the previous timeout cancels it.
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let timeout = Timeout::new(300, move || on_change.run(new_value));
        pending.set_value(Some(timeout));
    };

    let clear_filter = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="search"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            {move || (!input_value.get().is_empty()).then(|| view! {
                <button type="button" class="search-input__clear" on:click=clear_filter title="Clear">
                    {Icon::X.view()}
                </button>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rec(v: Value) -> Record {
        v.as_object().cloned().unwrap()
    }

    fn names(rows: &[Record]) -> Vec<String> {
        rows.iter().map(|r| value_to_text(&r["name"])).collect()
    }

    fn numbered(n: usize) -> Vec<Record> {
        (1..=n).map(|i| rec(json!({"name": format!("row{i}"), "n": i}))).collect()
    }

    #[test]
    fn test_sort_scenario_by_name() {
        let mut rows = vec![rec(json!({"name": "Bob", "age": 5})), rec(json!({"name": "Amy", "age": 5}))];
        sort_records(&mut rows, &SortConfig::ascending("name"));
        assert_eq!(names(&rows), ["Amy", "Bob"]);
        sort_records(&mut rows, &SortConfig::descending("name"));
        assert_eq!(names(&rows), ["Bob", "Amy"]);
    }

    #[test]
    fn test_sort_is_stable_and_idempotent() {
        let base = vec![
            rec(json!({"name": "a", "age": 7})),
            rec(json!({"name": "b", "age": 5})),
            rec(json!({"name": "c", "age": 7})),
            rec(json!({"name": "d", "age": 5})),
        ];
        let mut once = base.clone();
        sort_records(&mut once, &SortConfig::ascending("age"));
        assert_eq!(names(&once), ["b", "d", "a", "c"]);

        let mut twice = once.clone();
        sort_records(&mut twice, &SortConfig::ascending("age"));
        assert_eq!(once, twice);

        let mut desc = base;
        sort_records(&mut desc, &SortConfig::descending("age"));
        assert_eq!(names(&desc), ["a", "c", "b", "d"]);
    }

    #[test]
    fn test_mixed_types_have_a_total_order() {
        let mut rows = vec![
            rec(json!({"name": "s", "v": "text"})),
            rec(json!({"name": "n", "v": 3})),
            rec(json!({"name": "missing"})),
            rec(json!({"name": "b", "v": true})),
            rec(json!({"name": "o", "v": {"a": 1}})),
        ];
        sort_records(&mut rows, &SortConfig::ascending("v"));
        assert_eq!(names(&rows), ["missing", "b", "n", "s", "o"]);
    }

    #[test]
    fn test_numbers_compare_numerically() {
        let mut rows = vec![rec(json!({"name": "ten", "v": 10})), rec(json!({"name": "nine", "v": 9}))];
        sort_records(&mut rows, &SortConfig::ascending("v"));
        assert_eq!(names(&rows), ["nine", "ten"]);
    }

    #[test]
    fn test_filter_single_column_and_all_columns() {
        let rows = vec![
            rec(json!({"name": "Amy Pond", "email": "amy@tardis.org"})),
            rec(json!({"name": "Rory", "email": "rory@AMY.org"})),
        ];
        assert_eq!(filter_records(&rows, "amy", Some("name")).len(), 1);
        assert_eq!(filter_records(&rows, "AMY", None).len(), 2);
        assert_eq!(filter_records(&rows, "", Some("name")).len(), 2);
        assert!(filter_records(&rows, "amy", Some("nope")).is_empty());
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let rows = numbered(30);
        for query in ["row1", "2", "ROW", "zzz"] {
            let once = filter_records(&rows, query, None);
            let twice = filter_records(&once, query, None);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_toggle_law() {
        let mut state = ListViewState::default();
        state.toggle_sort("name");
        assert_eq!(state.sort, Some(SortConfig::ascending("name")));
        state.toggle_sort("name");
        assert_eq!(state.sort, Some(SortConfig::descending("name")));
        state.toggle_sort("name");
        assert_eq!(state.sort, Some(SortConfig::ascending("name")));
        state.toggle_sort("name");
        state.toggle_sort("age");
        assert_eq!(state.sort, Some(SortConfig::ascending("age")));
    }

    #[test]
    fn test_twenty_five_rows_make_three_pages() {
        let rows = numbered(25);
        let mut state = ListViewState::new(10);
        let page = state.apply(&rows, None);
        assert_eq!(page.total_pages, 3);
        assert!(!page.can_go_back());

        state.go_last(page.total_pages);
        let page = state.apply(&rows, None);
        assert_eq!(page.current_page, 3);
        assert_eq!(page.rows.len(), 5);
        assert!(!page.can_go_forward());

        state.go_next(page.total_pages);
        assert_eq!(state.current_page, 3);
    }

    #[test]
    fn test_pages_cover_the_whole_set_exactly_once() {
        let rows = numbered(23);
        for &size in DEFAULT_PAGE_SIZE_OPTIONS.iter() {
            let mut state = ListViewState::new(size);
            state.toggle_sort("n");
            state.toggle_sort("n");
            let expected = {
                let mut all = rows.clone();
                sort_records(&mut all, &SortConfig::descending("n"));
                all
            };

            let mut collected = Vec::new();
            let total = state.apply(&rows, None).total_pages;
            for _ in 0..total {
                collected.extend(state.apply(&rows, None).rows);
                state.go_next(total);
            }
            assert_eq!(collected, expected, "page size {size}");
        }
    }

    #[test]
    fn test_empty_result_shows_single_page_with_controls_disabled() {
        let rows = numbered(5);
        let mut state = ListViewState::default();
        state.set_search_query("no such row");
        let page = state.apply(&rows, None);
        assert!(page.rows.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.display_total_pages(), 1);
        assert_eq!(page.current_page, 1);
        assert!(!page.can_go_back());
        assert!(!page.can_go_forward());
    }

    #[test]
    fn test_search_and_page_size_reset_current_page() {
        let rows = numbered(40);
        let mut state = ListViewState::new(10);
        state.go_next(4);
        state.go_next(4);
        assert_eq!(state.current_page, 3);
        state.set_search_query("row");
        assert_eq!(state.current_page, 1);

        state.go_last(4);
        state.set_page_size(20);
        assert_eq!(state.current_page, 1);
        assert_eq!(state.apply(&rows, None).total_pages, 2);
    }

    #[test]
    fn test_page_is_clamped_when_filter_shrinks_result() {
        let rows = numbered(25);
        let mut state = ListViewState::new(10);
        state.go_last(3);
        state.search_query = "row2".to_string();
        let page = state.apply(&rows, None);
        // row2, row20..row25
        assert_eq!(page.total_count, 7);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.rows.len(), 7);
    }

    #[test]
    fn test_sort_indicator_tracks_active_key() {
        let sort = SortConfig::descending("name");
        assert_eq!(get_sort_indicator(Some(&sort), "name"), " ▼");
        assert_eq!(get_sort_indicator(Some(&sort), "age"), " ⇅");
        assert_eq!(get_sort_indicator(None, "age"), " ⇅");
    }

    #[test]
    fn test_upsert_replaces_by_key_or_appends() {
        let mut items = vec![(1, "a"), (2, "b")];
        upsert_by(&mut items, (2, "B"), |i| i.0);
        upsert_by(&mut items, (3, "c"), |i| i.0);
        assert_eq!(items, vec![(1, "a"), (2, "B"), (3, "c")]);

        remove_by(&mut items, &1, |i| i.0);
        assert_eq!(items, vec![(2, "B"), (3, "c")]);
    }
}
