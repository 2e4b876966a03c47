//! Branch dropdown used by list filters and record forms.

use contracts::domain::a001_branch::Branch;
use contracts::system::access::Capability;
use leptos::prelude::*;

use crate::shared::components::filter_select::FilterSelect;
use crate::shared::list_utils::{ListQueryState, FILTER_ALL};
use crate::shared::remote_list::RemoteList;
use crate::system::auth::context::use_session;

/// Select value of a branch id; `none` stands for "no branch"
pub fn branch_value(id: Option<i64>, none: &str) -> String {
    id.map(|id| id.to_string()).unwrap_or_else(|| none.to_string())
}

pub fn branch_id_from_value(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

/// Options for `branches`, led by the `(none_value, none_label)` entry
pub fn branch_options(branches: &[Branch], none_value: &str, none_label: &str) -> Vec<(String, String)> {
    std::iter::once((none_value.to_string(), none_label.to_string()))
        .chain(
            branches
                .iter()
                .map(|b| (b.id_cabang.to_string(), b.nama_cabang.clone())),
        )
        .collect()
}

/// Loads every branch once and offers them in a select
#[component]
pub fn BranchSelect(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    /// Value of the leading entry ("all" for filters, "" for forms)
    none_value: &'static str,
    none_label: &'static str,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let session = use_session();
    let branches = RemoteList::<Branch>::new("cabang");
    let client = session.client();
    branches.load(async move { client.fetch_all::<Branch>(None).await });

    let options = Signal::derive(move || {
        branches
            .state
            .with(|s| branch_options(&s.items, none_value, none_label))
    });

    view! {
        <FilterSelect
            label=label
            value=value
            on_change=on_change
            options=options
            disabled=Signal::derive(move || disabled.get() || branches.loading())
        />
    }
}

/// Branch input of a record form. Only a super admin picks the branch;
/// everyone else sees their own branch.
#[component]
pub fn BranchField(
    #[prop(into)] value: Signal<Option<i64>>,
    on_change: Callback<Option<i64>>,
    #[prop(optional, into)] error: Signal<Option<String>>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let session = use_session();

    view! {
        {move || if session.can(Capability::SwitchBranch) {
            view! {
                <BranchSelect
                    label="Cabang"
                    value=Signal::derive(move || branch_value(value.get(), ""))
                    on_change=Callback::new(move |v: String| on_change.run(branch_id_from_value(&v)))
                    none_value=""
                    none_label="Pilih cabang"
                    disabled=disabled
                />
            }
            .into_any()
        } else {
            view! {
                <div class="form__group">
                    <label class="form__label">"Cabang"</label>
                    <div class="form__static">{move || session.branch_label()}</div>
                </div>
            }
            .into_any()
        }}
        {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
    }
}

/// Filter key lists use for the branch column
pub const BRANCH_FILTER: &str = "cabang";

/// List filter by branch, shown while a super admin views all branches
#[component]
pub fn BranchFilter(state: RwSignal<ListQueryState>, key: &'static str) -> impl IntoView {
    let session = use_session();
    let visible = move || session.can(Capability::SwitchBranch) && session.branch_scope().is_none();

    view! {
        <Show when=visible>
            <BranchSelect
                label="Cabang"
                value=Signal::derive(move || state.with(|q| q.filters.get(key).to_string()))
                on_change=Callback::new(move |v: String| state.update(|q| q.set_filter(key, v)))
                none_value=FILTER_ALL
                none_label="Semua Cabang"
            />
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_values_round_trip_ids() {
        assert_eq!(branch_value(Some(4), ""), "4");
        assert_eq!(branch_value(None, "all"), "all");
        assert_eq!(branch_id_from_value("4"), Some(4));
        assert_eq!(branch_id_from_value("all"), None);
        assert_eq!(branch_id_from_value(""), None);
    }

    #[test]
    fn leading_entry_comes_first() {
        let branches = vec![Branch {
            id_cabang: 2,
            nama_cabang: "Dago".into(),
            alamat: None,
            telepon: None,
            status: None,
            created_at: None,
        }];
        let opts = branch_options(&branches, "", "Pilih cabang");
        assert_eq!(opts[0], (String::new(), "Pilih cabang".to_string()));
        assert_eq!(opts[1], ("2".to_string(), "Dago".to_string()));
    }
}
