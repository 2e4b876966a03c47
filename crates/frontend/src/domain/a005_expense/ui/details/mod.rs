use contracts::domain::a005_expense::{Expense, ExpenseForm, EXPENSE_CATEGORIES};
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

use crate::domain::a001_branch::ui::picker::BranchField;
use crate::shared::components::filter_select::FilterSelect;
use crate::shared::components::form_field::{amount_input_value, parse_amount, FormField, FormTextarea};
use crate::shared::date_utils::{iso, today};
use crate::shared::form_state::FormViewModel;
use crate::shared::modal::Modal;
use crate::system::auth::context::use_session;

#[component]
pub fn ExpenseDetails(
    expense: Option<Expense>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let initial = match &expense {
        Some(e) => ExpenseForm::from_expense(e),
        None => ExpenseForm {
            tanggal: iso(today()),
            id_cabang: session.branch_scope_untracked(),
            ..ExpenseForm::default()
        },
    };
    let vm = FormViewModel::new(initial, expense.as_ref().map(|e| e.id_pengeluaran));
    let title = if vm.is_edit_mode() { "Edit Pengeluaran" } else { "Catat Pengeluaran" };

    let save = move || {
        let client = session.client();
        vm.submit(
            ExpenseForm::validate,
            move |form, id| async move { client.save::<Expense, _>(id, &form).await },
            on_saved,
        );
    };

    let category_options: Vec<(String, String)> = std::iter::once((String::new(), "Pilih kategori".to_string()))
        .chain(EXPENSE_CATEGORIES.iter().map(|k| (k.to_string(), k.to_string())))
        .collect();

    let category_error = vm.field_error("kategori");

    let footer: ChildrenFn = Arc::new(move || {
        view! {
            <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(()) disabled=vm.saving>
                "Batal"
            </Button>
            <Button appearance=ButtonAppearance::Primary on_click=move |_| save() disabled=vm.saving>
                {move || if vm.saving.get() { "Menyimpan..." } else { "Simpan" }}
            </Button>
        }
        .into_any()
    });

    view! {
        <Modal title=title on_close=on_close footer=footer>
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <div class="form__row">
                <FormField
                    label="Tanggal *"
                    input_type="date"
                    value=Signal::derive(move || vm.form.with(|f| f.tanggal.get(..10).unwrap_or(&f.tanggal).to_string()))
                    on_input=Callback::new(move |v| vm.form.update(|f| f.tanggal = v))
                    error=vm.field_error("tanggal")
                    disabled=vm.saving
                />
                <FilterSelect
                    label="Kategori *"
                    value=Signal::derive(move || vm.form.with(|f| f.kategori.clone()))
                    on_change=Callback::new(move |v| vm.form.update(|f| f.kategori = v))
                    options=category_options
                    disabled=vm.saving
                />
            </div>
            {move || category_error.get().map(|e| view! { <div class="form__error">{e}</div> })}
            <FormField
                label="Jumlah (Rp) *"
                input_type="number"
                value=Signal::derive(move || vm.form.with(|f| amount_input_value(f.jumlah)))
                on_input=Callback::new(move |v: String| vm.form.update(|f| f.jumlah = parse_amount(&v)))
                error=vm.field_error("jumlah")
                disabled=vm.saving
            />
            <FormTextarea
                label="Keterangan"
                value=Signal::derive(move || vm.form.with(|f| f.keterangan.clone()))
                on_input=Callback::new(move |v| vm.form.update(|f| f.keterangan = v))
                error=vm.field_error("keterangan")
                disabled=vm.saving
            />
            <BranchField
                value=Signal::derive(move || vm.form.with(|f| f.id_cabang))
                on_change=Callback::new(move |id| vm.form.update(|f| f.id_cabang = id))
                error=vm.field_error("id_cabang")
                disabled=vm.saving
            />
        </Modal>
    }
}
