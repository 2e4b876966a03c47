use leptos::prelude::*;

/// Labeled input with an inline server error
#[component]
pub fn FormField(
    #[prop(into)] label: String,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    /// Input type: "text" (default), "number", "date", "email", "password"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
    /// Validation message from the server for this field
    #[prop(optional, into)]
    error: Signal<Option<String>>,
    /// `id` of a `<datalist>` with suggestions
    #[prop(optional, into)]
    list: MaybeProp<String>,
) -> impl IntoView {
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_placeholder = move || placeholder.get().unwrap_or_default();

    view! {
        <div class="form__group" class:form__group--invalid=move || error.get().is_some()>
            <label class="form__label">{label}</label>
            <input
                class="form__input"
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                list=move || list.get()
                disabled=move || disabled.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}

#[component]
pub fn FormTextarea(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional, into)] error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="form__group" class:form__group--invalid=move || error.get().is_some()>
            <label class="form__label">{label}</label>
            <textarea
                class="form__textarea"
                rows="3"
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}

/// Parses a numeric input; blank or invalid input reads as zero
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim().replace(',', ".").parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0)
}

pub fn parse_count(raw: &str) -> i64 {
    raw.trim().parse::<i64>().unwrap_or(0)
}

/// Renders an amount for a numeric input without a trailing ".0"
pub fn amount_input_value(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_inputs() {
        assert_eq!(parse_amount("15000"), 15000.0);
        assert_eq!(parse_amount("12,5"), 12.5);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_count(" 7 "), 7);
        assert_eq!(parse_count("7.5"), 0);
        assert_eq!(amount_input_value(25000.0), "25000");
        assert_eq!(amount_input_value(0.0), "");
        assert_eq!(amount_input_value(2.5), "2.5");
    }
}
