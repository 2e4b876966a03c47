mod state;

use contracts::domain::a003_cashier::Cashier;
use leptos::prelude::*;
use thaw::*;

use super::details::CashierDetails;
use crate::domain::a001_branch::ui::picker::{BranchFilter, BRANCH_FILTER};
use crate::shared::components::list_status::{empty_hint, ErrorBanner, ListBody};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::sortable_header::SortableHeader;
use crate::shared::date_utils::format_date_id;
use crate::shared::form_state::DeleteState;
use crate::shared::icons::icon;
use crate::shared::list_utils::{derive_sorted_page, SearchInput};
use crate::shared::modal::{ConfirmDeleteModal, ModalState};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::remote_list::RemoteList;
use crate::system::auth::context::use_session;
use state::create_state;

#[component]
pub fn CashierList() -> impl IntoView {
    let session = use_session();
    let cashiers = RemoteList::<Cashier>::new("kasir");
    let state = create_state();
    let modal = RwSignal::new(ModalState::<Cashier>::None);
    let delete = DeleteState::new();

    let load_data = move |scope: Option<i64>| {
        let client = session.client();
        cashiers.load(async move { client.fetch_all::<Cashier>(scope).await });
    };
    Effect::new(move |_| {
        let scope = session.branch_scope();
        state.update_untracked(|q| q.rescope(BRANCH_FILTER));
        load_data(scope);
    });
    let reload = move || load_data(session.branch_scope_untracked());

    let page = Memo::new(move |_| {
        cashiers
            .state
            .with(|s| state.with(|q| derive_sorted_page(&s.items, q)))
    });

    let close_modal = Callback::new(move |_| modal.set(ModalState::None));
    let after_change = Callback::new(move |_| {
        modal.set(ModalState::None);
        reload();
    });
    let confirm_delete = Callback::new(move |_| {
        if let ModalState::Delete(cashier) = modal.get_untracked() {
            let client = session.client();
            delete.run(async move { client.remove::<Cashier>(cashier.id).await }, after_change);
        }
    });

    let is_empty = Signal::derive(move || page.with(|p| p.filtered_count == 0));
    let empty_text = Signal::derive(move || {
        let filtered = state.with(|q| !q.search_term.trim().is_empty() || q.filters.is_active());
        empty_hint(filtered, "akun kasir")
    });

    view! {
        <PageFrame page_id="a003_cashier--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Akun Kasir"</h1>
                    <Badge>{move || page.with(|p| p.filtered_count.to_string())}</Badge>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| modal.set(ModalState::Add)>
                        {icon("plus")}
                        " Tambah Kasir"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| reload()
                        disabled=Signal::derive(move || cashiers.loading())
                    >
                        {icon("refresh")}
                        " Muat ulang"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <ErrorBanner
                    message=Signal::derive(move || cashiers.error())
                    on_retry=Callback::new(move |_| reload())
                />

                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div style="flex: 1; max-width: 360px;">
                            <SearchInput
                                value=Signal::derive(move || state.with(|q| q.search_term.clone()))
                                on_change=Callback::new(move |term: String| state.update(|q| q.set_search(term)))
                                placeholder="Cari nama atau email..."
                            />
                        </div>
                        <BranchFilter state=state key=BRANCH_FILTER />
                    </Flex>
                </div>

                <ListBody
                    loading=Signal::derive(move || cashiers.loading())
                    is_empty=is_empty
                    empty_text=empty_text
                >
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <SortableHeader label="Nama" field="nama" state=state min_width=160.0 />
                                    <SortableHeader label="Email" field="email" state=state min_width=180.0 />
                                    <SortableHeader label="Cabang" field="cabang" state=state />
                                    <TableHeaderCell min_width=90.0>"Status"</TableHeaderCell>
                                    <SortableHeader label="Dibuat" field="created_at" state=state />
                                    <TableHeaderCell min_width=90.0>""</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || {
                                    page.get()
                                        .visible_items
                                        .into_iter()
                                        .map(|cashier| {
                                            let for_edit = cashier.clone();
                                            let for_delete = cashier.clone();
                                            let status = cashier.active_status();
                                            let nama = cashier.nama.clone().unwrap_or_else(|| "-".to_string());
                                            let email = cashier.email.clone().unwrap_or_else(|| "-".to_string());
                                            let branch = match cashier.branch_name() {
                                                "" => "-".to_string(),
                                                name => name.to_string(),
                                            };
                                            let created = cashier.created_at.as_deref().map(format_date_id).unwrap_or_else(|| "-".to_string());
                                            view! {
                                                <TableRow>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>
                                                            <span style="font-weight: 500;">{nama}</span>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>{email}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>
                                                            {branch}
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            {status.map(|s| view! { <span class=s.badge_class()>{s.display_name()}</span> })}
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            {created}
                                                        </TableCellLayout>
                                                    </TableCell>
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
                    <CashierDetails cashier=None on_close=close_modal on_saved=after_change />
                }
                .into_any(),
                ModalState::Edit(cashier) => view! {
                    <CashierDetails cashier=Some(cashier) on_close=close_modal on_saved=after_change />
                }
                .into_any(),
                ModalState::Delete(cashier) => view! {
                    <ConfirmDeleteModal
                        subject=format!("akun kasir {}", cashier.nama.unwrap_or_default())
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
