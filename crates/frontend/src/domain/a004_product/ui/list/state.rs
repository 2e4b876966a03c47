use crate::shared::list_utils::ListQueryState;
use leptos::prelude::*;

pub fn create_state() -> RwSignal<ListQueryState> {
    RwSignal::new(ListQueryState {
        sort_field: Some("nama_produk".to_string()),
        ..ListQueryState::default()
    })
}
