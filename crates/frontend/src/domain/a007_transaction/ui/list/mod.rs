mod state;

use contracts::domain::common::Resource;
use contracts::domain::a007_transaction::Transaction;
use contracts::enums::payment_method::{PaymentMethod, PaymentMethodLabel};
use contracts::system::access::Capability;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::details::TransactionDetails;
use crate::domain::a007_transaction::{fetch_for_export, TRANSACTIONS_PER_PAGE};
use crate::shared::components::filter_select::FilterSelect;
use crate::shared::components::form_field::FormField;
use crate::shared::components::list_status::{empty_hint, ErrorBanner, ListBody};
use crate::shared::components::pagination_controls::ServerPaginationControls;
use crate::shared::date_utils::{format_datetime_id, iso, today};
use crate::shared::export::{export_filename, export_to_spreadsheet, ExportTitle};
use crate::shared::icons::icon;
use crate::shared::list_utils::{SearchInput, FILTER_ALL};
use crate::shared::modal::ModalState;
use crate::shared::number_format::format_rupiah;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::remote_list::{load_error_message, RemoteList};
use crate::system::auth::context::use_session;
use state::create_state;

#[component]
pub fn TransactionList() -> impl IntoView {
    let session = use_session();
    let transactions = RemoteList::<Transaction>::new("transaksi");
    let filters = create_state();
    let modal = RwSignal::new(ModalState::<Transaction>::None);
    let (exporting, set_exporting) = signal(false);
    let (export_error, set_export_error) = signal::<Option<String>>(None);

    let load_page = move |scope: Option<i64>| {
        let query = filters.with_untracked(|f| f.to_query(scope, TRANSACTIONS_PER_PAGE));
        let client = session.client();
        transactions.load(async move {
            client
                .get_page::<Transaction, _>(&Transaction::collection_path(), &query)
                .await
        });
    };

    // Every filter, page or branch change is a new server request
    Effect::new(move |previous_scope: Option<Option<i64>>| {
        let scope = session.branch_scope();
        if previous_scope.is_some_and(|previous| previous != scope) {
            filters.update_untracked(|f| f.rescope());
        }
        filters.track();
        load_page(scope);
        scope
    });

    // The result set shrank below the requested page: ask for the last one
    Effect::new(move |_| {
        let Some(pagination) = transactions.pagination() else {
            return;
        };
        let mut next = filters.get_untracked();
        if next.page == pagination.current_page as usize && next.clamp_to(&pagination) {
            log::debug!("transaction page past the end, moving to {}", next.page);
            filters.set(next);
        }
    });
    let reload = move || load_page(session.branch_scope_untracked());

    let total_items = Signal::derive(move || {
        transactions.state.with(|s| match &s.pagination {
            Some(p) => p.total as usize,
            None => s.items.len(),
        })
    });
    let total_pages = Signal::derive(move || {
        transactions
            .pagination()
            .map(|p| p.last_page.max(1) as usize)
            .unwrap_or(1)
    });
    let current_page = Signal::derive(move || {
        transactions
            .pagination()
            .map(|p| p.current_page.max(1) as usize)
            .unwrap_or_else(|| filters.with(|f| f.page))
    });
    let per_page = Signal::derive(move || {
        transactions
            .pagination()
            .map(|p| p.per_page.max(1) as usize)
            .unwrap_or(TRANSACTIONS_PER_PAGE)
    });

    let payment_options = std::iter::once((FILTER_ALL.to_string(), "Semua Metode".to_string()))
        .chain(
            PaymentMethod::all()
                .into_iter()
                .map(|m| (m.code().to_string(), m.label().to_string())),
        )
        .collect::<Vec<_>>();

    let export = move |_| {
        if exporting.get_untracked() {
            return;
        }
        set_exporting.set(true);
        set_export_error.set(None);
        let scope = session.branch_scope_untracked();
        let query = filters.with_untracked(|f| f.to_query(scope, TRANSACTIONS_PER_PAGE));
        let subtitle = filters.with_untracked(|f| {
            let period = match (f.start_date.is_empty(), f.end_date.is_empty()) {
                (true, true) => "Semua tanggal".to_string(),
                _ => format!("{} s/d {}", f.start_date, f.end_date),
            };
            format!("Periode: {} | Cabang: {}", period, session.branch_label())
        });
        let client = session.client();
        spawn_local(async move {
            let result = fetch_for_export(&client, query).await;
            set_exporting.set(false);
            let outcome = match result {
                Ok(rows) => {
                    let title = ExportTitle::new("Riwayat Transaksi GoChicken").with_subtitle(subtitle);
                    let filename = export_filename("transaksi", &iso(today()), "csv");
                    export_to_spreadsheet(&rows, &title, &filename)
                }
                Err(e) => Err(load_error_message("transaksi", &e)),
            };
            if let Err(e) = outcome {
                log::warn!("transaction export failed: {}", e);
                set_export_error.set(Some(e));
            }
        });
    };

    let close_modal = Callback::new(move |_| modal.set(ModalState::None));

    let is_empty = Signal::derive(move || transactions.state.with(|s| s.items.is_empty()));
    let empty_text = Signal::derive(move || empty_hint(filters.with(|f| f.is_active()), "transaksi"));

    view! {
        <PageFrame page_id="a007_transaction--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Riwayat Transaksi"</h1>
                    <Badge>{move || total_items.get().to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Show when=move || session.can(Capability::ExportData)>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=export
                            disabled=Signal::derive(move || exporting.get() || total_items.get() == 0)
                        >
                            {icon("download")}
                            {move || if exporting.get() { " Mengekspor..." } else { " Export Excel" }}
                        </Button>
                    </Show>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| reload()
                        disabled=Signal::derive(move || transactions.loading())
                    >
                        {icon("refresh")}
                        " Muat ulang"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <ErrorBanner
                    message=Signal::derive(move || transactions.error())
                    on_retry=Callback::new(move |_| reload())
                />
                {move || export_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div style="flex: 1; max-width: 320px;">
                            <SearchInput
                                value=Signal::derive(move || filters.with(|f| f.search.clone()))
                                on_change=Callback::new(move |term: String| filters.update(|f| f.update(|f| f.search = term)))
                                placeholder="Cari kode transaksi..."
                            />
                        </div>
                        <FilterSelect
                            label="Metode"
                            value=Signal::derive(move || filters.with(|f| f.payment_method.clone()))
                            on_change=Callback::new(move |v: String| filters.update(|f| f.update(|f| f.payment_method = v)))
                            options=payment_options
                        />
                        <FormField
                            label="Dari"
                            input_type="date"
                            value=Signal::derive(move || filters.with(|f| f.start_date.clone()))
                            on_input=Callback::new(move |v: String| filters.update(|f| f.update(|f| f.start_date = v)))
                        />
                        <FormField
                            label="Sampai"
                            input_type="date"
                            value=Signal::derive(move || filters.with(|f| f.end_date.clone()))
                            on_input=Callback::new(move |v: String| filters.update(|f| f.update(|f| f.end_date = v)))
                        />
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| filters.set(Default::default())
                        >
                            "Reset"
                        </Button>
                    </Flex>
                </div>

                <ListBody
                    loading=Signal::derive(move || transactions.loading())
                    is_empty=is_empty
                    empty_text=empty_text
                >
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell min_width=130.0>"Kode"</TableHeaderCell>
                                    <TableHeaderCell min_width=160.0>"Waktu"</TableHeaderCell>
                                    <TableHeaderCell min_width=120.0>"Kasir"</TableHeaderCell>
                                    <TableHeaderCell min_width=120.0>"Cabang"</TableHeaderCell>
                                    <TableHeaderCell min_width=120.0>"Metode"</TableHeaderCell>
                                    <TableHeaderCell min_width=120.0>"Total"</TableHeaderCell>
                                    <TableHeaderCell min_width=60.0>""</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || {
                                    transactions
                                        .items()
                                        .into_iter()
                                        .map(|trx| {
                                            let for_view = trx.clone();
                                            let payment = PaymentMethodLabel::from_code(trx.metode_pembayaran.as_deref().unwrap_or(""));
                                            let kode = trx.kode_transaksi.clone().unwrap_or_else(|| "-".to_string());
                                            let waktu = format_datetime_id(trx.timestamp());
                                            let cashier = trx.cashier_name().to_string();
                                            let branch = trx.branch_name().to_string();
                                            let total = format_rupiah(trx.total);
                                            view! {
                                                <TableRow>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <span style="font-weight: 500;">{kode}</span>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>{waktu}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>{cashier}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>{branch}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <span class="payment-method">{icon(payment.icon)}" "{payment.label}</span>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <span class="table__number">{total}</span>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            on_click=move |_| modal.set(ModalState::View(for_view.clone()))
                                                            attr:title="Detail"
                                                        >
                                                            {icon("eye")}
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
                    <ServerPaginationControls
                        current_page=current_page
                        total_pages=total_pages
                        total_items=total_items
                        per_page=per_page
                        on_page_change=Callback::new(move |n| filters.update(|f| f.page = n))
                    />
                </ListBody>
            </div>

            {move || match modal.get() {
                ModalState::View(transaction) => view! {
                    <TransactionDetails transaction=transaction on_close=close_modal />
                }
                .into_any(),
                _ => view! { <></> }.into_any(),
            }}
        </PageFrame>
    }
}
