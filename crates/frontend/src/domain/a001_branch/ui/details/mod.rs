use contracts::domain::a001_branch::{Branch, BranchForm};
use contracts::domain::common::ActiveStatus;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

use crate::shared::components::filter_select::FilterSelect;
use crate::shared::components::form_field::{FormField, FormTextarea};
use crate::shared::form_state::FormViewModel;
use crate::shared::modal::Modal;
use crate::system::auth::context::use_session;

/// Add/edit dialog for a branch
#[component]
pub fn BranchDetails(
    /// Record to edit, `None` to add
    branch: Option<Branch>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let vm = FormViewModel::new(
        branch.as_ref().map(BranchForm::from_branch).unwrap_or_default(),
        branch.as_ref().map(|b| b.id_cabang),
    );
    let title = if vm.is_edit_mode() { "Edit Cabang" } else { "Tambah Cabang" };

    let save = move || {
        let client = session.client();
        vm.submit(
            BranchForm::validate,
            move |form, id| async move { client.save::<Branch, _>(id, &form).await },
            on_saved,
        );
    };

    let status_options: Vec<(String, String)> = ActiveStatus::all()
        .into_iter()
        .map(|s| (s.code().to_string(), s.display_name().to_string()))
        .collect();

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
                label="Nama Cabang *"
                value=Signal::derive(move || vm.form.with(|f| f.nama_cabang.clone()))
                on_input=Callback::new(move |v| vm.form.update(|f| f.nama_cabang = v))
                error=vm.field_error("nama_cabang")
                disabled=vm.saving
            />
            <FormTextarea
                label="Alamat *"
                value=Signal::derive(move || vm.form.with(|f| f.alamat.clone()))
                on_input=Callback::new(move |v| vm.form.update(|f| f.alamat = v))
                error=vm.field_error("alamat")
                disabled=vm.saving
            />
            <FormField
                label="Telepon"
                input_type="tel"
                value=Signal::derive(move || vm.form.with(|f| f.telepon.clone()))
                on_input=Callback::new(move |v| vm.form.update(|f| f.telepon = v))
                error=vm.field_error("telepon")
                disabled=vm.saving
            />
            <FilterSelect
                label="Status"
                value=Signal::derive(move || vm.form.with(|f| f.status.code().to_string()))
                on_change=Callback::new(move |v: String| {
                    if let Some(status) = ActiveStatus::from_code(&v) {
                        vm.form.update(|f| f.status = status);
                    }
                })
                options=status_options
                disabled=vm.saving
            />
        </Modal>
    }
}
