mod state;

use contracts::domain::a004_product::Product;
use contracts::system::access::Capability;
use leptos::prelude::*;
use thaw::*;

use super::details::ProductDetails;
use crate::domain::a001_branch::ui::picker::{BranchFilter, BRANCH_FILTER};
use crate::domain::a004_product::product_categories;
use crate::shared::components::filter_select::FilterSelect;
use crate::shared::components::list_status::{empty_hint, ErrorBanner, ListBody};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::sortable_header::SortableHeader;
use crate::shared::form_state::DeleteState;
use crate::shared::icons::icon;
use crate::shared::list_utils::{derive_sorted_page, SearchInput, FILTER_ALL};
use crate::shared::modal::{ConfirmDeleteModal, ModalState};
use crate::shared::number_format::{format_number_int, format_rupiah};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::remote_list::RemoteList;
use crate::system::auth::context::use_session;
use state::create_state;

#[component]
pub fn ProductList() -> impl IntoView {
    let session = use_session();
    let products = RemoteList::<Product>::new("produk");
    let state = create_state();
    let modal = RwSignal::new(ModalState::<Product>::None);
    let delete = DeleteState::new();
    // Cashiers browse the catalogue without editing it
    let can_manage = move || session.can(Capability::ManageProducts);

    let load_data = move |scope: Option<i64>| {
        let client = session.client();
        products.load(async move { client.fetch_all::<Product>(scope).await });
    };
    Effect::new(move |_| {
        let scope = session.branch_scope();
        state.update_untracked(|q| q.rescope(BRANCH_FILTER));
        load_data(scope);
    });
    let reload = move || load_data(session.branch_scope_untracked());

    let page = Memo::new(move |_| {
        products
            .state
            .with(|s| state.with(|q| derive_sorted_page(&s.items, q)))
    });
    let categories = Memo::new(move |_| products.state.with(|s| product_categories(&s.items)));
    let category_options = Signal::derive(move || {
        std::iter::once((FILTER_ALL.to_string(), "Semua Kategori".to_string()))
            .chain(categories.get().into_iter().map(|k| (k.clone(), k)))
            .collect::<Vec<_>>()
    });

    let close_modal = Callback::new(move |_| modal.set(ModalState::None));
    let after_change = Callback::new(move |_| {
        modal.set(ModalState::None);
        reload();
    });
    let confirm_delete = Callback::new(move |_| {
        if let ModalState::Delete(product) = modal.get_untracked() {
            let client = session.client();
            delete.run(
                async move { client.remove::<Product>(product.id_produk).await },
                after_change,
            );
        }
    });

    let is_empty = Signal::derive(move || page.with(|p| p.filtered_count == 0));
    let empty_text = Signal::derive(move || {
        let filtered = state.with(|q| !q.search_term.trim().is_empty() || q.filters.is_active());
        empty_hint(filtered, "produk")
    });

    view! {
        <PageFrame page_id="a004_product--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Data Produk"</h1>
                    <Badge>{move || page.with(|p| p.filtered_count.to_string())}</Badge>
                </div>
                <div class="page__header-right">
                    <Show when=can_manage>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| modal.set(ModalState::Add)>
                            {icon("plus")}
                            " Tambah Produk"
                        </Button>
                    </Show>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| reload()
                        disabled=Signal::derive(move || products.loading())
                    >
                        {icon("refresh")}
                        " Muat ulang"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <ErrorBanner
                    message=Signal::derive(move || products.error())
                    on_retry=Callback::new(move |_| reload())
                />

                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div style="flex: 1; max-width: 360px;">
                            <SearchInput
                                value=Signal::derive(move || state.with(|q| q.search_term.clone()))
                                on_change=Callback::new(move |term: String| state.update(|q| q.set_search(term)))
                                placeholder="Cari nama, kode, atau deskripsi..."
                            />
                        </div>
                        <FilterSelect
                            label="Kategori"
                            value=Signal::derive(move || state.with(|q| q.filters.get("kategori").to_string()))
                            on_change=Callback::new(move |v: String| state.update(|q| q.set_filter("kategori", v)))
                            options=category_options
                        />
                        <BranchFilter state=state key=BRANCH_FILTER />
                    </Flex>
                </div>

                <ListBody
                    loading=Signal::derive(move || products.loading())
                    is_empty=is_empty
                    empty_text=empty_text
                >
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <SortableHeader label="Kode" field="kode_produk" state=state />
                                    <SortableHeader label="Nama Produk" field="nama_produk" state=state min_width=180.0 />
                                    <SortableHeader label="Kategori" field="kategori" state=state />
                                    <SortableHeader label="Harga" field="harga" state=state />
                                    <SortableHeader label="Stok" field="stok" state=state min_width=80.0 />
                                    <Show when=can_manage>
                                        <TableHeaderCell min_width=90.0>""</TableHeaderCell>
                                    </Show>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || {
                                    let manage = can_manage();
                                    page.get()
                                        .visible_items
                                        .into_iter()
                                        .map(|product| {
                                            let for_edit = product.clone();
                                            let for_delete = product.clone();
                                            let low_stock = product.is_low_stock();
                                            view! {
                                                <TableRow>
                                                    <TableCell>
                                                        <TableCellLayout>{product.kode_produk.clone().unwrap_or_else(|| "-".to_string())}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>
                                                            <div class="product-cell">
                                                                {product.gambar.clone().map(|src| view! {
                                                                    <img class="product-cell__thumb" src=src alt="" />
                                                                })}
                                                                <span style="font-weight: 500;">{product.nama_produk.clone().unwrap_or_else(|| "-".to_string())}</span>
                                                            </div>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>{product.kategori.clone().unwrap_or_else(|| "-".to_string())}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <span class="table__number">{format_rupiah(product.harga)}</span>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <span class=if low_stock { "badge badge--warning" } else { "badge badge--success" }>
                                                                {format_number_int(product.stok as f64)}
                                                            </span>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    {manage.then(move || view! {
                                                        <TableCell>
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| modal.set(ModalState::Edit(for_edit.clone()))
                                                                attr:title="Edit"
                                                            >
                                                                {icon("edit")}
                                                            </Button>
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| {
                                                                    delete.reset();
                                                                    modal.set(ModalState::Delete(for_delete.clone()));
                                                                }
                                                                attr:title="Hapus"
                                                            >
                                                                {icon("delete")}
                                                            </Button>
                                                        </TableCell>
                                                    })}
                                                </TableRow>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </TableBody>
                        </Table>
                    </div>
                    <PaginationControls
                        window=Signal::derive(move || page.with(|p| p.window.clone()))
                        pages=Signal::derive(move || page.with(|p| p.page_numbers.clone()))
                        on_page_change=Callback::new(move |n| {
                            let total = page.with_untracked(|p| p.total_pages());
                            state.update(|q| {
                                q.go_to(n, total);
                            });
                        })
                    />
                </ListBody>
            </div>

            {move || match modal.get() {
                ModalState::Add => view! {
                    <ProductDetails
                        product=None
                        categories=categories.get_untracked()
                        on_close=close_modal
                        on_saved=after_change
                    />
                }
                .into_any(),
                ModalState::Edit(product) => view! {
                    <ProductDetails
                        product=Some(product)
                        categories=categories.get_untracked()
                        on_close=close_modal
                        on_saved=after_change
                    />
                }
                .into_any(),
                ModalState::Delete(product) => view! {
                    <ConfirmDeleteModal
                        subject=format!("produk {}", product.nama_produk.unwrap_or_default())
                        busy=delete.busy
                        error=delete.error
                        on_confirm=confirm_delete
                        on_close=close_modal
                    />
                }
                .into_any(),
                ModalState::View(_) | ModalState::None => view! { <></> }.into_any(),
            }}
        </PageFrame>
    }
}
