mod state;

use contracts::domain::a005_expense::{Expense, EXPENSE_CATEGORIES};
use leptos::prelude::*;
use thaw::*;

use super::details::ExpenseDetails;
use crate::domain::a001_branch::ui::picker::{BranchFilter, BRANCH_FILTER};
use crate::domain::a005_expense::{filtered_expenses, order_expenses};
use crate::shared::components::filter_select::{filter_options, FilterSelect};
use crate::shared::components::form_field::FormField;
use crate::shared::components::list_status::{empty_hint, ErrorBanner, ListBody};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::sortable_header::SortableHeader;
use crate::shared::date_utils::{format_date_id, iso, today};
use crate::shared::export::{export_filename, export_to_spreadsheet, ExportTitle};
use crate::shared::form_state::DeleteState;
use crate::shared::icons::icon;
use crate::shared::list_utils::{derive_page_with, SearchInput};
use crate::shared::modal::{ConfirmDeleteModal, ModalState};
use crate::shared::number_format::format_rupiah;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::remote_list::RemoteList;
use crate::system::auth::context::use_session;
use state::{create_period, create_state};

#[component]
pub fn ExpenseList() -> impl IntoView {
    let session = use_session();
    let expenses = RemoteList::<Expense>::new("pengeluaran");
    let state = create_state();
    let period = create_period();
    let modal = RwSignal::new(ModalState::<Expense>::None);
    let delete = DeleteState::new();
    let (export_error, set_export_error) = signal::<Option<String>>(None);

    let load_data = move |scope: Option<i64>| {
        let client = session.client();
        expenses.load(async move { client.fetch_all::<Expense>(scope).await });
    };
    Effect::new(move |_| {
        let scope = session.branch_scope();
        state.update_untracked(|q| q.rescope(BRANCH_FILTER));
        load_data(scope);
    });
    let reload = move || load_data(session.branch_scope_untracked());

    // Page slice plus the sum of every matching row
    let page = Memo::new(move |_| {
        let range = period.get();
        expenses.state.with(|s| {
            state.with(|q| {
                let mut total = 0.0;
                let page = derive_page_with(&s.items, q, |rows| {
                    order_expenses(rows, q, &range);
                    total = rows.iter().map(|e| e.jumlah).sum();
                });
                (page, total)
            })
        })
    });

    let set_period = move |start: Option<String>, end: Option<String>| {
        period.update(|p| {
            if let Some(start) = start {
                p.start_date = start;
            }
            if let Some(end) = end {
                p.end_date = end;
            }
        });
        state.update(|q| q.current_page = 1);
    };

    let export = move |_| {
        let rows = expenses
            .state
            .with_untracked(|s| state.with_untracked(|q| filtered_expenses(&s.items, q, &period.get_untracked())));
        let title = ExportTitle::new("Laporan Pengeluaran GoChicken").with_subtitle(format!(
            "Periode: {} | Cabang: {}",
            period.get_untracked().label(),
            session.branch_label()
        ));
        let filename = export_filename("pengeluaran", &iso(today()), "csv");
        match export_to_spreadsheet(&rows, &title, &filename) {
            Ok(()) => set_export_error.set(None),
            Err(e) => {
                log::warn!("expense export failed: {}", e);
                set_export_error.set(Some(e));
            }
        }
    };

    let close_modal = Callback::new(move |_| modal.set(ModalState::None));
    let after_change = Callback::new(move |_| {
        modal.set(ModalState::None);
        reload();
    });
    let confirm_delete = Callback::new(move |_| {
        if let ModalState::Delete(expense) = modal.get_untracked() {
            let client = session.client();
            delete.run(
                async move { client.remove::<Expense>(expense.id_pengeluaran).await },
                after_change,
            );
        }
    });

    let is_empty = Signal::derive(move || page.with(|(p, _)| p.filtered_count == 0));
    let empty_text = Signal::derive(move || {
        let filtered = period.with(|p| p.is_active())
            || state.with(|q| !q.search_term.trim().is_empty() || q.filters.is_active());
        empty_hint(filtered, "pengeluaran")
    });

    view! {
        <PageFrame page_id="a005_expense--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Pengeluaran"</h1>
                    <Badge>{move || page.with(|(p, _)| p.filtered_count.to_string())}</Badge>
                    <span class="page__summary">
                        "Total: "
                        <strong>{move || page.with(|(_, total)| format_rupiah(*total))}</strong>
                    </span>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| modal.set(ModalState::Add)>
                        {icon("plus")}
                        " Catat Pengeluaran"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=export
                        disabled=Signal::derive(move || expenses.loading() || page.with(|(p, _)| p.filtered_count == 0))
                    >
                        {icon("download")}
                        " Export Excel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| reload()
                        disabled=Signal::derive(move || expenses.loading())
                    >
                        {icon("refresh")}
                        " Muat ulang"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <ErrorBanner
                    message=Signal::derive(move || expenses.error())
                    on_retry=Callback::new(move |_| reload())
                />
                {move || export_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div style="flex: 1; max-width: 320px;">
                            <SearchInput
                                value=Signal::derive(move || state.with(|q| q.search_term.clone()))
                                on_change=Callback::new(move |term: String| state.update(|q| q.set_search(term)))
                                placeholder="Cari keterangan atau kategori..."
                            />
                        </div>
                        <FilterSelect
                            label="Kategori"
                            value=Signal::derive(move || state.with(|q| q.filters.get("kategori").to_string()))
                            on_change=Callback::new(move |v: String| state.update(|q| q.set_filter("kategori", v)))
                            options=filter_options("Semua Kategori", EXPENSE_CATEGORIES)
                        />
                        <FormField
                            label="Dari"
                            input_type="date"
                            value=Signal::derive(move || period.with(|p| p.start_date.clone()))
                            on_input=Callback::new(move |v| set_period(Some(v), None))
                        />
                        <FormField
                            label="Sampai"
                            input_type="date"
                            value=Signal::derive(move || period.with(|p| p.end_date.clone()))
                            on_input=Callback::new(move |v| set_period(None, Some(v)))
                        />
                        <BranchFilter state=state key=BRANCH_FILTER />
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| {
                                period.set(Default::default());
                                state.update(|q| q.reset());
                            }
                        >
                            "Reset"
                        </Button>
                    </Flex>
                </div>

                <ListBody
                    loading=Signal::derive(move || expenses.loading())
                    is_empty=is_empty
                    empty_text=empty_text
                >
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <SortableHeader label="Tanggal" field="tanggal" state=state min_width=120.0 />
                                    <SortableHeader label="Kategori" field="kategori" state=state />
                                    <TableHeaderCell min_width=200.0>"Keterangan"</TableHeaderCell>
                                    <SortableHeader label="Cabang" field="cabang" state=state />
                                    <SortableHeader label="Jumlah" field="jumlah" state=state />
                                    <TableHeaderCell min_width=90.0>""</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || {
                                    page.get()
                                        .0
                                        .visible_items
                                        .into_iter()
                                        .map(|expense| {
                                            let for_edit = expense.clone();
                                            let for_delete = expense.clone();
                                            let tanggal = format_date_id(&expense.tanggal);
                                            let kategori = expense.kategori.clone().unwrap_or_else(|| "-".to_string());
                                            let keterangan = expense.keterangan.clone().unwrap_or_else(|| "-".to_string());
                                            let branch = match expense.branch_name() {
                                                "" => "-".to_string(),
                                                name => name.to_string(),
                                            };
                                            let jumlah = format_rupiah(expense.jumlah);
                                            view! {
                                                <TableRow>
                                                    <TableCell>
                                                        <TableCellLayout>{tanggal}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <span class="badge badge--neutral">
                                                                {kategori}
                                                            </span>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>
                                                            {keterangan}
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>
                                                            {branch}
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <span class="table__number">{jumlah}</span>
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
                        window=Signal::derive(move || page.with(|(p, _)| p.window.clone()))
                        pages=Signal::derive(move || page.with(|(p, _)| p.page_numbers.clone()))
                        on_page_change=Callback::new(move |n| {
                            let total = page.with_untracked(|(p, _)| p.total_pages());
                            state.update(|q| {
                                q.go_to(n, total);
                            });
                        })
                    />
                </ListBody>
            </div>

            {move || match modal.get() {
                ModalState::Add => view! {
                    <ExpenseDetails expense=None on_close=close_modal on_saved=after_change />
                }
                .into_any(),
                ModalState::Edit(expense) => view! {
                    <ExpenseDetails expense=Some(expense) on_close=close_modal on_saved=after_change />
                }
                .into_any(),
                ModalState::Delete(expense) => view! {
                    <ConfirmDeleteModal
                        subject=format!(
                            "pengeluaran {} tanggal {}",
                            expense.kategori.unwrap_or_default(),
                            format_date_id(&expense.tanggal)
                        )
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
