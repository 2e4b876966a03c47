use leptos::prelude::*;

use crate::domain::a007_transaction::TransactionFilters;

pub fn create_state() -> RwSignal<TransactionFilters> {
    RwSignal::new(TransactionFilters::default())
}
