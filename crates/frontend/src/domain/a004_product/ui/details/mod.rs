use contracts::domain::a004_product::{Product, ProductForm};
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

use crate::domain::a001_branch::ui::picker::BranchField;
use crate::shared::components::form_field::{
    amount_input_value, parse_amount, parse_count, FormField, FormTextarea,
};
use crate::shared::form_state::FormViewModel;
use crate::shared::modal::Modal;
use crate::system::auth::context::use_session;

const CATEGORY_LIST_ID: &str = "product-categories";

#[component]
pub fn ProductDetails(
    product: Option<Product>,
    /// Known categories offered as suggestions
    categories: Vec<String>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let initial = match &product {
        Some(p) => ProductForm::from_product(p),
        None => ProductForm {
            id_cabang: session.branch_scope_untracked(),
            ..ProductForm::default()
        },
    };
    let vm = FormViewModel::new(initial, product.as_ref().map(|p| p.id_produk));
    let title = if vm.is_edit_mode() { "Edit Produk" } else { "Tambah Produk" };

    let save = move || {
        let client = session.client();
        vm.submit(
            ProductForm::validate,
            move |form, id| async move { client.save::<Product, _>(id, &form).await },
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
            <div class="form__row">
                <FormField
                    label="Kode Produk"
                    value=Signal::derive(move || vm.form.with(|f| f.kode_produk.clone()))
                    on_input=Callback::new(move |v| vm.form.update(|f| f.kode_produk = v))
                    error=vm.field_error("kode_produk")
                    disabled=vm.saving
                />
                <FormField
                    label="Nama Produk *"
                    value=Signal::derive(move || vm.form.with(|f| f.nama_produk.clone()))
                    on_input=Callback::new(move |v| vm.form.update(|f| f.nama_produk = v))
                    error=vm.field_error("nama_produk")
                    disabled=vm.saving
                />
            </div>
            <FormField
                label="Kategori *"
                value=Signal::derive(move || vm.form.with(|f| f.kategori.clone()))
                on_input=Callback::new(move |v| vm.form.update(|f| f.kategori = v))
                error=vm.field_error("kategori")
                disabled=vm.saving
                list=CATEGORY_LIST_ID
            />
            <datalist id=CATEGORY_LIST_ID>
                {categories.into_iter().map(|k| view! { <option value=k></option> }).collect_view()}
            </datalist>
            <div class="form__row">
                <FormField
                    label="Harga (Rp) *"
                    input_type="number"
                    value=Signal::derive(move || vm.form.with(|f| amount_input_value(f.harga)))
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.harga = parse_amount(&v)))
                    error=vm.field_error("harga")
                    disabled=vm.saving
                />
                <FormField
                    label="Stok *"
                    input_type="number"
                    value=Signal::derive(move || vm.form.with(|f| f.stok.to_string()))
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.stok = parse_count(&v)))
                    error=vm.field_error("stok")
                    disabled=vm.saving
                />
            </div>
            <FormTextarea
                label="Deskripsi"
                value=Signal::derive(move || vm.form.with(|f| f.deskripsi.clone()))
                on_input=Callback::new(move |v| vm.form.update(|f| f.deskripsi = v))
                error=vm.field_error("deskripsi")
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
