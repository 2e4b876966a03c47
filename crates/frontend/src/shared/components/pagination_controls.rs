use crate::shared::icons::icon;
use crate::shared::pagination::{PageItem, PageWindow};
use leptos::prelude::*;

/// Prev/next plus numbered page buttons.
///
/// Buttons outside `1..=total_pages` are disabled and the change handler is
/// additionally guarded, so `on_page_change` only ever sees a valid page.
#[component]
pub fn PaginationControls(
    /// Current clamped window
    #[prop(into)]
    window: Signal<PageWindow>,
    /// Numbered strip for the window
    #[prop(into)]
    pages: Signal<Vec<PageItem>>,
    /// Callback with the requested 1-based page
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let go = move |page: usize| {
        if window.get_untracked().can_go_to(page) {
            on_page_change.run(page);
        }
    };

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">
                {move || {
                    let w = window.get();
                    format!("Menampilkan {}-{} dari {} data", w.first_row(), w.last_row(), w.total_items)
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| go(window.get_untracked().current_page.saturating_sub(1))
                disabled=move || !window.get().has_prev()
                title="Halaman sebelumnya"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                let current = window.get().current_page;
                pages
                    .get()
                    .into_iter()
                    .map(|item| match item {
                        PageItem::Page(n) => view! {
                            <button
                                class="pagination-btn"
                                class:pagination-btn--active=move || n == current
                                disabled=move || n == current
                                on:click=move |_| go(n)
                            >
                                {n.to_string()}
                            </button>
                        }
                        .into_any(),
                        PageItem::Ellipsis => view! {
                            <span class="pagination-ellipsis">"…"</span>
                        }
                        .into_any(),
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| go(window.get_untracked().current_page + 1)
                disabled=move || !window.get().has_next()
                title="Halaman berikutnya"
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}

/// Controls for a server-paginated collection
#[component]
pub fn ServerPaginationControls(
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] total_items: Signal<usize>,
    #[prop(into)] per_page: Signal<usize>,
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let window = Signal::derive(move || {
        crate::shared::pagination::server_window(
            current_page.get(),
            total_pages.get(),
            total_items.get(),
            per_page.get(),
        )
    });
    let pages = Signal::derive(move || {
        let w = window.get();
        crate::shared::pagination::page_numbers(w.current_page, w.total_pages)
    });

    view! { <PaginationControls window=window pages=pages on_page_change=on_page_change /> }
}
