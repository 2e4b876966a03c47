use crate::shared::list_utils::{
    create_sort_toggle, get_sort_class, get_sort_indicator, ListQueryState,
};
use leptos::prelude::*;
use thaw::*;

/// Column header that toggles sorting of the list by `field`
#[component]
pub fn SortableHeader(
    label: &'static str,
    field: &'static str,
    state: RwSignal<ListQueryState>,
    #[prop(optional)] min_width: Option<f32>,
) -> impl IntoView {
    view! {
        <TableHeaderCell min_width=min_width.unwrap_or(100.0)>
            <div
                class="table__sortable-header"
                style="cursor:pointer;"
                on:click=create_sort_toggle(field, state)
            >
                {label}
                <span class=move || state.with(|s| get_sort_class(s.sort_field.as_deref(), field))>
                    {move || state.with(|s| get_sort_indicator(s.sort_field.as_deref(), field, s.sort_ascending))}
                </span>
            </div>
        </TableHeaderCell>
    }
}
