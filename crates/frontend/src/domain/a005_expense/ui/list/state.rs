use leptos::prelude::*;

use crate::domain::a005_expense::ExpensePeriod;
use crate::shared::list_utils::ListQueryState;

/// No column sort: the list stays newest first until a header is clicked
pub fn create_state() -> RwSignal<ListQueryState> {
    RwSignal::new(ListQueryState::default())
}

pub fn create_period() -> RwSignal<ExpensePeriod> {
    RwSignal::new(ExpensePeriod::default())
}
