use contracts::domain::a002_employee::{Employee, EmployeeForm};
use contracts::domain::common::ActiveStatus;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

use crate::domain::a001_branch::ui::picker::BranchField;
use crate::shared::components::filter_select::FilterSelect;
use crate::shared::components::form_field::{amount_input_value, parse_amount, FormField, FormTextarea};
use crate::shared::form_state::FormViewModel;
use crate::shared::modal::Modal;
use crate::system::auth::context::use_session;

#[component]
pub fn EmployeeDetails(
    employee: Option<Employee>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let initial = match &employee {
        Some(e) => EmployeeForm::from_employee(e),
        None => EmployeeForm {
            id_cabang: session.branch_scope_untracked(),
            ..EmployeeForm::default()
        },
    };
    let vm = FormViewModel::new(initial, employee.as_ref().map(|e| e.id_karyawan));
    let title = if vm.is_edit_mode() { "Edit Karyawan" } else { "Tambah Karyawan" };

    let save = move || {
        let client = session.client();
        vm.submit(
            EmployeeForm::validate,
            move |form, id| async move { client.save::<Employee, _>(id, &form).await },
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
            <div class="form__row">
                <FormField
                    label="Nama *"
                    value=Signal::derive(move || vm.form.with(|f| f.nama.clone()))
                    on_input=Callback::new(move |v| vm.form.update(|f| f.nama = v))
                    error=vm.field_error("nama")
                    disabled=vm.saving
                />
                <FormField
                    label="Jabatan *"
                    value=Signal::derive(move || vm.form.with(|f| f.jabatan.clone()))
                    on_input=Callback::new(move |v| vm.form.update(|f| f.jabatan = v))
                    error=vm.field_error("jabatan")
                    disabled=vm.saving
                />
            </div>
            <div class="form__row">
                <FormField
                    label="Telepon"
                    input_type="tel"
                    value=Signal::derive(move || vm.form.with(|f| f.telepon.clone()))
                    on_input=Callback::new(move |v| vm.form.update(|f| f.telepon = v))
                    error=vm.field_error("telepon")
                    disabled=vm.saving
                />
                <FormField
                    label="Gaji (Rp)"
                    input_type="number"
                    value=Signal::derive(move || vm.form.with(|f| amount_input_value(f.gaji)))
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.gaji = parse_amount(&v)))
                    error=vm.field_error("gaji")
                    disabled=vm.saving
                />
            </div>
            <FormTextarea
                label="Alamat"
                value=Signal::derive(move || vm.form.with(|f| f.alamat.clone()))
                on_input=Callback::new(move |v| vm.form.update(|f| f.alamat = v))
                error=vm.field_error("alamat")
                disabled=vm.saving
            />
            <div class="form__row">
                <BranchField
                    value=Signal::derive(move || vm.form.with(|f| f.id_cabang))
                    on_change=Callback::new(move |id| vm.form.update(|f| f.id_cabang = id))
                    error=vm.field_error("id_cabang")
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
            </div>
        </Modal>
    }
}
