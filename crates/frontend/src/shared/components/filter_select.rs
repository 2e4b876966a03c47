use leptos::prelude::*;

/// Labeled native select driven by `(value, label)` options
#[component]
pub fn FilterSelect(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(optional, into)] disabled: Signal<bool>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! { <label class="form__label">{l}</label> })}
            <select
                class=move || format!("form__select {}", additional_class())
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <For
                    each=move || options.get()
                    key=|(val, label)| format!("{}|{}", val, label)
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}

/// Options for a filter: the "all" entry followed by `values` as-is
pub fn filter_options(all_label: &str, values: &[&str]) -> Vec<(String, String)> {
    std::iter::once((crate::shared::list_utils::FILTER_ALL.to_string(), all_label.to_string()))
        .chain(values.iter().map(|v| (v.to_string(), v.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_entry_comes_first() {
        let opts = filter_options("Semua Kategori", &["Makanan", "Minuman"]);
        assert_eq!(opts[0], ("all".to_string(), "Semua Kategori".to_string()));
        assert_eq!(opts.len(), 3);
    }
}
