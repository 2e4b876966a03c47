mod state;

use contracts::domain::a001_branch::Branch;
use contracts::domain::common::ActiveStatus;
use contracts::system::access::Capability;
use leptos::prelude::*;
use thaw::*;

use super::details::BranchDetails;
use crate::shared::components::filter_select::FilterSelect;
use crate::shared::components::list_status::{empty_hint, ErrorBanner, ListBody};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::sortable_header::SortableHeader;
use crate::shared::date_utils::format_date_id;
use crate::shared::form_state::DeleteState;
use crate::shared::icons::icon;
use crate::shared::list_utils::{derive_sorted_page, SearchInput, FILTER_ALL};
use crate::shared::modal::{ConfirmDeleteModal, ModalState};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::remote_list::RemoteList;
use crate::system::auth::context::use_session;
use state::create_state;

#[component]
pub fn BranchList() -> impl IntoView {
    let session = use_session();
    let branches = RemoteList::<Branch>::new("cabang");
    let state = create_state();
    let modal = RwSignal::new(ModalState::<Branch>::None);
    let delete = DeleteState::new();
    let can_manage = move || session.can(Capability::ManageBranches);

    let load_data = move || {
        let client = session.client();
        branches.load(async move { client.fetch_all::<Branch>(None).await });
    };
    load_data();

    let page = Memo::new(move |_| {
        branches
            .state
            .with(|s| state.with(|q| derive_sorted_page(&s.items, q)))
    });

    let status_options = std::iter::once((FILTER_ALL.to_string(), "Semua Status".to_string()))
        .chain(
            ActiveStatus::all()
                .into_iter()
                .map(|s| (s.code().to_string(), s.display_name().to_string())),
        )
        .collect::<Vec<_>>();

    let close_modal = Callback::new(move |_| modal.set(ModalState::None));
    let after_change = Callback::new(move |_| {
        modal.set(ModalState::None);
        load_data();
    });

    let confirm_delete = Callback::new(move |_| {
        if let ModalState::Delete(branch) = modal.get_untracked() {
            let client = session.client();
            delete.run(
                async move { client.remove::<Branch>(branch.id_cabang).await },
                after_change,
            );
        }
    });

    let is_empty = Signal::derive(move || page.with(|p| p.filtered_count == 0));
    let empty_text = Signal::derive(move || {
        let filtered = state.with(|q| !q.search_term.trim().is_empty() || q.filters.is_active());
        empty_hint(filtered, "cabang")
    });

    view! {
        <PageFrame page_id="a001_branch--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Data Cabang"</h1>
                    <Badge>{move || page.with(|p| p.filtered_count.to_string())}</Badge>
                </div>
                <div class="page__header-right">
                    <Show when=can_manage>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| modal.set(ModalState::Add)
                        >
                            {icon("plus")}
                            " Tambah Cabang"
                        </Button>
                    </Show>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || branches.loading())
                    >
                        {icon("refresh")}
                        " Muat ulang"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <ErrorBanner
                    message=Signal::derive(move || branches.error())
                    on_retry=Callback::new(move |_| load_data())
                />

                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div style="flex: 1; max-width: 360px;">
                            <SearchInput
                                value=Signal::derive(move || state.with(|q| q.search_term.clone()))
                                on_change=Callback::new(move |term: String| state.update(|q| q.set_search(term)))
                                placeholder="Cari nama, alamat, atau telepon..."
                            />
                        </div>
                        <FilterSelect
                            label="Status"
                            value=Signal::derive(move || state.with(|q| q.filters.get("status").to_string()))
                            on_change=Callback::new(move |v: String| state.update(|q| q.set_filter("status", v)))
                            options=status_options
                        />
                    </Flex>
                </div>

                <ListBody
                    loading=Signal::derive(move || branches.loading())
                    is_empty=is_empty
                    empty_text=empty_text
                >
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <SortableHeader label="Nama Cabang" field="nama_cabang" state=state min_width=160.0 />
                                    <SortableHeader label="Alamat" field="alamat" state=state min_width=200.0 />
                                    <TableHeaderCell min_width=120.0>"Telepon"</TableHeaderCell>
                                    <SortableHeader label="Status" field="status" state=state />
                                    <SortableHeader label="Dibuat" field="created_at" state=state />
                                    <TableHeaderCell min_width=90.0>""</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || {
                                    page.get()
                                        .visible_items
                                        .into_iter()
                                        .map(|branch| {
                                            let for_edit = branch.clone();
                                            let for_delete = branch.clone();
                                            let status = branch.active_status();
                                            view! {
                                                <TableRow>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>
                                                            <span style="font-weight: 500;">{branch.nama_cabang.clone()}</span>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>
                                                            {branch.alamat.clone().unwrap_or_else(|| "-".to_string())}
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            {branch.telepon.clone().unwrap_or_else(|| "-".to_string())}
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            {match status {
                                                                Some(s) => view! { <span class=s.badge_class()>{s.display_name()}</span> }.into_any(),
                                                                None => view! { <span class="badge badge--neutral">"-"</span> }.into_any(),
                                                            }}
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            {branch.created_at.as_deref().map(format_date_id).unwrap_or_else(|| "-".to_string())}
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        {can_manage().then(move || view! {
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
                                                        })}
                                                    </TableCell>
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
                    <BranchDetails branch=None on_close=close_modal on_saved=after_change />
                }
                .into_any(),
                ModalState::Edit(branch) => view! {
                    <BranchDetails branch=Some(branch) on_close=close_modal on_saved=after_change />
                }
                .into_any(),
                ModalState::Delete(branch) => view! {
                    <ConfirmDeleteModal
                        subject=format!("cabang {}", branch.nama_cabang)
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
