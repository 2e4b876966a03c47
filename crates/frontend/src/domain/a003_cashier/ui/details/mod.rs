use contracts::domain::a003_cashier::{Cashier, CashierForm};
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

use crate::domain::a001_branch::ui::picker::BranchField;
use crate::shared::components::form_field::FormField;
use crate::shared::form_state::FormViewModel;
use crate::shared::modal::Modal;
use crate::system::auth::context::use_session;

/// Add/edit dialog for a cashier account. The password is required when
/// adding and left unchanged on edit unless a new one is typed.
#[component]
pub fn CashierDetails(
    cashier: Option<Cashier>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let initial = match &cashier {
        Some(c) => CashierForm::from_cashier(c),
        None => CashierForm {
            id_cabang: session.branch_scope_untracked(),
            ..CashierForm::default()
        },
    };
    let vm = FormViewModel::new(initial, cashier.as_ref().map(|c| c.id));
    let creating = !vm.is_edit_mode();
    let title = if creating { "Tambah Akun Kasir" } else { "Edit Akun Kasir" };

    let save = move || {
        let client = session.client();
        vm.submit(
            move |form: &CashierForm| form.validate(creating),
            move |form, id| async move { client.save::<Cashier, _>(id, &form).await },
            on_saved,
        );
    };

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
            <FormField
                label="Nama *"
                value=Signal::derive(move || vm.form.with(|f| f.nama.clone()))
                on_input=Callback::new(move |v| vm.form.update(|f| f.nama = v))
                error=vm.field_error("nama")
                disabled=vm.saving
            />
            <FormField
                label="Email *"
                input_type="email"
                value=Signal::derive(move || vm.form.with(|f| f.email.clone()))
                on_input=Callback::new(move |v| vm.form.update(|f| f.email = v))
                error=vm.field_error("email")
                disabled=vm.saving
            />
            <FormField
                label=if creating { "Password *" } else { "Password baru (kosongkan jika tidak diubah)" }
                input_type="password"
                value=Signal::derive(move || vm.form.with(|f| f.password.clone().unwrap_or_default()))
                on_input=Callback::new(move |v: String| {
                    vm.form.update(|f| f.password = if v.is_empty() { None } else { Some(v) })
                })
                error=vm.field_error("password")
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
