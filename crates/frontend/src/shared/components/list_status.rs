use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Error banner with a retry button
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>, on_retry: Callback<()>) -> impl IntoView {
    move || {
        message.get().map(|msg| {
            view! {
                <div class="alert alert--error">
                    {icon("alert")}
                    <span class="alert__text">{msg}</span>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_retry.run(())>
                        {icon("refresh")}
                        " Coba lagi"
                    </Button>
                </div>
            }
        })
    }
}

/// Loading indicator, then either the table or an empty state.
///
/// The empty state is shown for a successful load with zero rows and is
/// distinct from the error banner.
#[component]
pub fn ListBody(
    #[prop(into)] loading: Signal<bool>,
    /// True when there is nothing to render after filtering
    #[prop(into)]
    is_empty: Signal<bool>,
    /// Guidance text for the empty state
    #[prop(into)]
    empty_text: Signal<String>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || loading.get()>
            <div class="list-loading">
                <Spinner />
                <span>"Memuat data..."</span>
            </div>
        </Show>
        <Show
            when=move || !is_empty.get()
            fallback=move || view! {
                <Show when=move || !loading.get()>
                    <div class="empty-state">
                        {icon("inbox")}
                        <p class="empty-state__title">"Tidak ada data"</p>
                        <p class="empty-state__hint">{move || empty_text.get()}</p>
                    </div>
                </Show>
            }
        >
            {children()}
        </Show>
    }
}

/// Empty-state guidance depending on whether the user narrowed the list
pub fn empty_hint(filtered: bool, what: &str) -> String {
    if filtered {
        "Tidak ada data yang cocok dengan pencarian atau filter. Ubah kata kunci atau reset filter.".to_string()
    } else {
        format!("Belum ada data {}.", what)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_depends_on_filters() {
        assert!(empty_hint(true, "produk").contains("reset filter"));
        assert_eq!(empty_hint(false, "produk"), "Belum ada data produk.");
    }
}
