//! Client-side list processing shared by every table view: search box,
//! discrete filters, column sorting and the debounced search input.

use gloo_timers::future::TimeoutFuture;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::pagination::{page_numbers, paginate, PageItem, PageWindow, ITEMS_PER_PAGE};

/// Filter value that matches every item
pub const FILTER_ALL: &str = "all";

const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Items that can be matched by the search box and discrete filters
pub trait Searchable {
    /// Text fields the search term is matched against. Missing values are
    /// returned as "" and never match a non-empty term.
    fn search_fields(&self) -> Vec<&str>;

    /// Value compared (exactly) against the discrete filter `key`
    fn filter_value(&self, _key: &str) -> Option<String> {
        None
    }
}

/// Items that can be ordered by a named column
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Items carrying a date used for newest-first ordering
pub trait Dated {
    /// ISO-like date/time string (`YYYY-MM-DD...`), "" when missing
    fn sort_date(&self) -> &str;
}

/// Selected discrete filters, keyed by filter name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListFilters(BTreeMap<String, String>);

impl ListFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty value resets the filter to "all"
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() || value == FILTER_ALL {
            self.0.remove(key);
        } else {
            self.0.insert(key.to_string(), value);
        }
    }

    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> &str {
        self.0.get(key).map(String::as_str).unwrap_or(FILTER_ALL)
    }

    pub fn is_active(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn matches<T: Searchable>(&self, item: &T) -> bool {
        self.0
            .iter()
            .all(|(key, value)| item.filter_value(key).as_deref() == Some(value.as_str()))
    }
}

/// Case-insensitive substring match on any searchable field.
/// `term_lower` must already be trimmed and lowercased; empty matches all.
pub fn matches_search<T: Searchable>(item: &T, term_lower: &str) -> bool {
    if term_lower.is_empty() {
        return true;
    }
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(term_lower))
}

/// Filters `items` by search term and discrete filters. Never mutates the
/// input and keeps the original order.
pub fn process_list<T: Searchable + Clone>(
    items: &[T],
    search_term: &str,
    filters: &ListFilters,
) -> Vec<T> {
    let term = search_term.trim().to_lowercase();
    items
        .iter()
        .filter(|item| filters.matches(*item) && matches_search(*item, &term))
        .cloned()
        .collect()
}

/// Newest first; equal dates keep their original order
pub fn sort_by_date_desc<T: Dated>(items: &mut [T]) {
    items.sort_by(|a, b| b.sort_date().cmp(a.sort_date()));
}

/// Sorts a list by the named column
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Case-insensitive comparison of optional text columns; missing sorts last
pub fn compare_text(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Per-view query state. Every change of the search term or a filter
/// resets the view to the first page.
#[derive(Clone, Debug, PartialEq)]
pub struct ListQueryState {
    pub search_term: String,
    pub filters: ListFilters,
    pub current_page: usize,
    pub items_per_page: usize,
    pub sort_field: Option<String>,
    pub sort_ascending: bool,
}

impl Default for ListQueryState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            filters: ListFilters::new(),
            current_page: 1,
            items_per_page: ITEMS_PER_PAGE,
            sort_field: None,
            sort_ascending: true,
        }
    }
}

impl ListQueryState {
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
    }

    pub fn set_filter(&mut self, key: &str, value: impl Into<String>) {
        self.filters.set(key, value);
        self.current_page = 1;
    }

    /// Moves to `page` if it exists; out-of-range requests are ignored.
    pub fn go_to(&mut self, page: usize, total_pages: usize) -> bool {
        if page < 1 || page > total_pages || page == self.current_page {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field.as_deref() == Some(field) {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = Some(field.to_string());
            self.sort_ascending = true;
        }
    }

    /// Branch scope changed: the per-branch filter no longer applies and the
    /// old page may not exist in the new data
    pub fn rescope(&mut self, branch_key: &str) {
        self.filters.set(branch_key, FILTER_ALL);
        self.current_page = 1;
    }

    pub fn reset(&mut self) {
        *self = Self {
            items_per_page: self.items_per_page,
            ..Self::default()
        };
    }
}

/// What a table renders: the visible slice plus pagination data.
#[derive(Clone, Debug, PartialEq)]
pub struct DerivedPage<T> {
    pub visible_items: Vec<T>,
    pub window: PageWindow,
    pub page_numbers: Vec<PageItem>,
    /// Row count after filtering, before slicing
    pub filtered_count: usize,
}

impl<T> DerivedPage<T> {
    pub fn total_pages(&self) -> usize {
        self.window.total_pages
    }
}

/// Full pipeline: filter, optional ordering, then a page slice. The current
/// page is re-clamped here so a narrowed result never renders an empty page.
pub fn derive_page_with<T, F>(items: &[T], query: &ListQueryState, order: F) -> DerivedPage<T>
where
    T: Searchable + Clone,
    F: FnOnce(&mut Vec<T>),
{
    let mut filtered = process_list(items, &query.search_term, &query.filters);
    order(&mut filtered);
    let window = paginate(filtered.len(), query.items_per_page, query.current_page);
    DerivedPage {
        visible_items: window.slice(&filtered).to_vec(),
        page_numbers: page_numbers(window.current_page, window.total_pages),
        filtered_count: filtered.len(),
        window,
    }
}

pub fn derive_page<T: Searchable + Clone>(items: &[T], query: &ListQueryState) -> DerivedPage<T> {
    derive_page_with(items, query, |_| {})
}

/// Pipeline with user-selected column sorting applied after filtering
pub fn derive_sorted_page<T: Searchable + Sortable + Clone>(
    items: &[T],
    query: &ListQueryState,
) -> DerivedPage<T> {
    derive_page_with(items, query, |rows| {
        if let Some(field) = query.sort_field.as_deref() {
            sort_list(rows, field, query.sort_ascending);
        }
    })
}

/// Sort indicator for a column header
pub fn get_sort_indicator(current_field: Option<&str>, field: &str, ascending: bool) -> &'static str {
    if current_field == Some(field) {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: Option<&str>, field: &str) -> &'static str {
    if current_field == Some(field) {
        "sort-icon active"
    } else {
        "sort-icon"
    }
}

/// Click handler toggling the sort column of a list state
pub fn create_sort_toggle(
    field: &'static str,
    state: RwSignal<ListQueryState>,
) -> impl Fn(MouseEvent) + 'static {
    move |_| state.update(|s| s.toggle_sort(field))
}

/// Search box that reports its value 300 ms after the user stops typing
#[component]
pub fn SearchInput(
    /// Current committed search value
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Cari...".to_string()
    } else {
        placeholder
    };

    let input_value = RwSignal::new(value.get_untracked());
    // Only the latest keystroke may fire once its timer elapses
    let keystroke = RwSignal::new(0u64);

    let handle_input = move |new_value: String| {
        input_value.set(new_value.clone());
        keystroke.update(|k| *k += 1);
        let mine = keystroke.get_untracked();
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if keystroke.try_get_untracked() == Some(mine) {
                on_change.run(new_value);
            }
        });
    };

    let clear = move |_| {
        input_value.set(String::new());
        keystroke.update(|k| *k += 1);
        on_change.run(String::new());
    };

    let is_active = move || !value.get().trim().is_empty();

    view! {
        <div class="search-input">
            {crate::shared::icons::icon("search")}
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=is_active
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" title="Hapus pencarian" on:click=clear>
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: Option<String>,
        code: String,
        category: String,
        date: String,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name.as_deref().unwrap_or(""), &self.code]
        }

        fn filter_value(&self, key: &str) -> Option<String> {
            match key {
                "category" => Some(self.category.clone()),
                _ => None,
            }
        }
    }

    impl Dated for Row {
        fn sort_date(&self) -> &str {
            &self.date
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "code" => self.code.cmp(&other.code),
                _ => Ordering::Equal,
            }
        }
    }

    fn row(name: Option<&str>, code: &str, category: &str, date: &str) -> Row {
        Row {
            name: name.map(str::to_string),
            code: code.to_string(),
            category: category.to_string(),
            date: date.to_string(),
        }
    }

    fn sample() -> Vec<Row> {
        vec![
            row(Some("Ayam Geprek"), "P-001", "Makanan", "2026-10-01"),
            row(Some("Es Teh Manis"), "P-002", "Minuman", "2026-10-03"),
            row(None, "P-003", "Makanan", "2026-10-02"),
            row(Some("Ayam Bakar"), "P-004", "Makanan", "2026-10-03"),
        ]
    }

    #[test]
    fn search_is_case_insensitive_subset_in_order() {
        let items = sample();
        let out = process_list(&items, "AYAM", &ListFilters::new());
        assert_eq!(out, vec![items[0].clone(), items[3].clone()]);
        for item in &out {
            assert!(items.contains(item));
        }
    }

    #[test]
    fn empty_or_blank_search_keeps_everything() {
        let items = sample();
        assert_eq!(process_list(&items, "", &ListFilters::new()), items);
        assert_eq!(process_list(&items, "   ", &ListFilters::new()), items);
    }

    #[test]
    fn missing_field_never_matches_a_term() {
        let items = sample();
        let out = process_list(&items, "p-003", &ListFilters::new());
        assert_eq!(out.len(), 1, "matched on code");
        let out = process_list(&items, "geprek", &ListFilters::new());
        assert!(out.iter().all(|r| r.name.is_some()));
    }

    #[test]
    fn all_sentinel_never_excludes() {
        let items = sample();
        let filters = ListFilters::new().with("category", FILTER_ALL);
        assert!(!filters.is_active());
        assert_eq!(process_list(&items, "", &filters), items);
    }

    #[test]
    fn discrete_filter_matches_exactly() {
        let items = sample();
        let filters = ListFilters::new().with("category", "Minuman");
        assert_eq!(process_list(&items, "", &filters), vec![items[1].clone()]);

        let filters = ListFilters::new().with("category", "minuman");
        assert!(process_list(&items, "", &filters).is_empty());

        let filters = ListFilters::new().with("unknown_key", "x");
        assert!(process_list(&items, "", &filters).is_empty());
    }

    #[test]
    fn processing_is_idempotent_and_pure() {
        let items = sample();
        let before = items.clone();
        let filters = ListFilters::new().with("category", "Makanan");
        let once = process_list(&items, "ayam", &filters);
        let twice = process_list(&items, "ayam", &filters);
        assert_eq!(once, twice);
        assert_eq!(items, before);
    }

    #[test]
    fn date_sort_is_descending_and_stable() {
        let mut items = sample();
        sort_by_date_desc(&mut items);
        let codes: Vec<&str> = items.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["P-002", "P-004", "P-003", "P-001"]);
    }

    #[test]
    fn changing_filters_resets_page() {
        let mut query = ListQueryState::default();
        assert!(query.go_to(3, 5));
        query.set_filter("category", "Makanan");
        assert_eq!(query.current_page, 1);
        assert!(query.go_to(2, 5));
        query.set_search("ayam");
        assert_eq!(query.current_page, 1);
    }

    #[test]
    fn go_to_rejects_out_of_range_pages() {
        let mut query = ListQueryState::default();
        assert!(!query.go_to(0, 3));
        assert!(!query.go_to(4, 3));
        assert_eq!(query.current_page, 1);
    }

    #[test]
    fn rescope_drops_branch_filter_and_page() {
        let items = vec![
            row(Some("Ayam Goreng"), "P-001", "Makanan", "2026-01-01"),
            row(Some("Es Teh"), "P-002", "Minuman", "2026-01-02"),
        ];
        let mut query = ListQueryState::default();
        query.set_filter("category", "Minuman");
        query.current_page = 4;

        query.rescope("category");
        assert_eq!(query.current_page, 1);
        assert!(!query.filters.is_active());
        assert_eq!(derive_page(&items, &query).filtered_count, 2);
    }

    #[test]
    fn twenty_five_items_across_three_pages() {
        let items: Vec<Row> = (1..=25)
            .map(|i| row(Some("Item"), &format!("C{:02}", i), "Makanan", "2026-01-01"))
            .collect();
        let mut query = ListQueryState::default();

        let page = derive_page(&items, &query);
        assert_eq!(page.total_pages(), 3);
        assert_eq!(page.visible_items.first().map(|r| r.code.as_str()), Some("C01"));
        assert_eq!(page.visible_items.len(), 10);

        assert!(query.go_to(3, page.total_pages()));
        let page = derive_page(&items, &query);
        assert_eq!(page.visible_items.len(), 5);
        assert_eq!(page.visible_items.first().map(|r| r.code.as_str()), Some("C21"));

        assert!(!query.go_to(4, page.total_pages()));
        assert_eq!(query.current_page, 3);
    }

    #[test]
    fn narrowed_result_clamps_to_last_page() {
        let mut items: Vec<Row> = (1..=30)
            .map(|i| row(Some("Nasi"), &format!("N{:02}", i), "Makanan", "2026-01-01"))
            .collect();
        items.push(row(Some("Es Jeruk"), "M01", "Minuman", "2026-01-01"));

        // Stale page 3 left over from before the filter was narrowed
        let query = ListQueryState {
            current_page: 3,
            filters: ListFilters::new().with("category", "Minuman"),
            ..ListQueryState::default()
        };
        let page = derive_page(&items, &query);
        assert_eq!(page.window.current_page, 1);
        assert_eq!(page.visible_items.len(), 1);
    }

    #[test]
    fn sorted_pipeline_uses_selected_column() {
        let items = sample();
        let mut query = ListQueryState::default();
        query.toggle_sort("code");
        query.toggle_sort("code");
        let page = derive_sorted_page(&items, &query);
        assert_eq!(page.visible_items[0].code, "P-004");
    }
}
