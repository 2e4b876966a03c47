mod state;

use contracts::domain::a002_employee::Employee;
use contracts::domain::common::ActiveStatus;
use leptos::prelude::*;
use thaw::*;

use super::details::EmployeeDetails;
use crate::domain::a001_branch::ui::picker::{BranchFilter, BRANCH_FILTER};
use crate::shared::components::filter_select::FilterSelect;
use crate::shared::components::list_status::{empty_hint, ErrorBanner, ListBody};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::sortable_header::SortableHeader;
use crate::shared::form_state::DeleteState;
use crate::shared::icons::icon;
use crate::shared::list_utils::{derive_sorted_page, SearchInput, FILTER_ALL};
use crate::shared::modal::{ConfirmDeleteModal, ModalState};
use crate::shared::number_format::format_rupiah;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::remote_list::RemoteList;
use crate::system::auth::context::use_session;
use state::create_state;

#[component]
pub fn EmployeeList() -> impl IntoView {
    let session = use_session();
    let employees = RemoteList::<Employee>::new("karyawan");
    let state = create_state();
    let modal = RwSignal::new(ModalState::<Employee>::None);
    let delete = DeleteState::new();

    let load_data = move |scope: Option<i64>| {
        let client = session.client();
        employees.load(async move { client.fetch_all::<Employee>(scope).await });
    };

    // Reload whenever the branch scope changes
    Effect::new(move |_| {
        let scope = session.branch_scope();
        state.update_untracked(|q| q.rescope(BRANCH_FILTER));
        load_data(scope);
    });
    let reload = move || load_data(session.branch_scope_untracked());

    let page = Memo::new(move |_| {
        employees
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
        reload();
    });
    let confirm_delete = Callback::new(move |_| {
        if let ModalState::Delete(employee) = modal.get_untracked() {
            let client = session.client();
            delete.run(
                async move { client.remove::<Employee>(employee.id_karyawan).await },
                after_change,
            );
        }
    });

    let is_empty = Signal::derive(move || page.with(|p| p.filtered_count == 0));
    let empty_text = Signal::derive(move || {
        let filtered = state.with(|q| !q.search_term.trim().is_empty() || q.filters.is_active());
        empty_hint(filtered, "karyawan")
    });

    view! {
        <PageFrame page_id="a002_employee--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Data Karyawan"</h1>
                    <Badge>{move || page.with(|p| p.filtered_count.to_string())}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| modal.set(ModalState::Add)
                    >
                        {icon("plus")}
                        " Tambah Karyawan"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| reload()
                        disabled=Signal::derive(move || employees.loading())
                    >
                        {icon("refresh")}
                        " Muat ulang"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <ErrorBanner
                    message=Signal::derive(move || employees.error())
                    on_retry=Callback::new(move |_| reload())
                />

                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div style="flex: 1; max-width: 360px;">
                            <SearchInput
                                value=Signal::derive(move || state.with(|q| q.search_term.clone()))
                                on_change=Callback::new(move |term: String| state.update(|q| q.set_search(term)))
                                placeholder="Cari nama, jabatan, atau telepon..."
                            />
                        </div>
                        <BranchFilter state=state key=BRANCH_FILTER />
                        <FilterSelect
                            label="Status"
                            value=Signal::derive(move || state.with(|q| q.filters.get("status").to_string()))
                            on_change=Callback::new(move |v: String| state.update(|q| q.set_filter("status", v)))
                            options=status_options
                        />
                    </Flex>
                </div>

                <ListBody
                    loading=Signal::derive(move || employees.loading())
                    is_empty=is_empty
                    empty_text=empty_text
                >
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <SortableHeader label="Nama" field="nama" state=state min_width=160.0 />
                                    <SortableHeader label="Jabatan" field="jabatan" state=state />
                                    <TableHeaderCell min_width=120.0>"Telepon"</TableHeaderCell>
                                    <SortableHeader label="Cabang" field="cabang" state=state />
                                    <SortableHeader label="Gaji" field="gaji" state=state />
                                    <SortableHeader label="Status" field="status" state=state />
                                    <TableHeaderCell min_width=90.0>""</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || {
                                    page.get()
                                        .visible_items
                                        .into_iter()
                                        .map(|employee| {
                                            let for_edit = employee.clone();
                                            let for_delete = employee.clone();
                                            let status = employee.active_status();
                                            let branch = match employee.branch_name() {
                                                "" => "-".to_string(),
                                                name => name.to_string(),
                                            };
                                            view! {
                                                <TableRow>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>
                                                            <span style="font-weight: 500;">
                                                                {employee.nama.clone().unwrap_or_else(|| "-".to_string())}
                                                            </span>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>{employee.jabatan.clone().unwrap_or_else(|| "-".to_string())}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>{employee.telepon.clone().unwrap_or_else(|| "-".to_string())}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>{branch}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <span class="table__number">{format_rupiah(employee.gaji.unwrap_or(0.0))}</span>
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
                    <EmployeeDetails employee=None on_close=close_modal on_saved=after_change />
                }
                .into_any(),
                ModalState::Edit(employee) => view! {
                    <EmployeeDetails employee=Some(employee) on_close=close_modal on_saved=after_change />
                }
                .into_any(),
                ModalState::Delete(employee) => view! {
                    <ConfirmDeleteModal
                        subject=format!("karyawan {}", employee.nama.unwrap_or_default())
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
