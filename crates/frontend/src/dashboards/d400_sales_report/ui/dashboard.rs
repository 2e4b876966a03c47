use contracts::enums::payment_method::PaymentMethodLabel;
use contracts::projections::p900_sales_report::SalesReport;
use contracts::shared::api::ApiError;
use contracts::system::access::Capability;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboards::d400_sales_report::{api, begin_report_load, net_profit, printable_report, ReportPeriod};
use crate::shared::components::form_field::FormField;
use crate::shared::components::list_status::ErrorBanner;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::date_utils::{format_date_id, iso, today};
use crate::shared::export::{export_filename, export_to_spreadsheet, ExportTitle};
use crate::shared::icons::icon;
use crate::shared::number_format::{format_number_int, format_percent, format_rupiah};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::remote_list::{load_error_message, RequestTracker};
use crate::system::auth::context::use_session;

/// Sales report for a period: summary cards, per-branch, per-payment and daily tables
#[component]
pub fn SalesReportPage() -> impl IntoView {
    let session = use_session();
    let period = RwSignal::new(ReportPeriod::default());
    let (data, set_data) = signal(None::<SalesReport>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (export_error, set_export_error) = signal(None::<String>);

    let tracker = RequestTracker::new();
    let on_unmount = tracker.clone();
    on_cleanup(move || on_unmount.cancel());
    let tracker = StoredValue::new(tracker);

    let load = move |scope: Option<i64>| {
        let tracker = tracker.get_value();
        let (ticket, query) = period.with_untracked(|p| begin_report_load(&tracker, p, scope));
        let query = match query {
            Ok(query) => query,
            Err(message) => {
                set_loading.set(false);
                set_data.set(None);
                set_error.set(Some(message));
                return;
            }
        };
        let client = session.client();
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = api::get_sales_report(&client, &query).await;
            if !tracker.is_current(ticket) {
                return;
            }
            set_loading.set(false);
            match result {
                Ok(report) => set_data.set(Some(report)),
                Err(e) => {
                    log::warn!("failed to load sales report: {}", e);
                    if e == ApiError::Unauthenticated {
                        session.expire();
                    }
                    set_error.set(Some(load_error_message("laporan", &e)));
                }
            }
        });
    };

    // Reload whenever the period or the branch scope changes
    Effect::new(move |_| {
        period.track();
        load(session.branch_scope());
    });
    let reload = move || load(session.branch_scope_untracked());

    let subtitle = move || {
        format!(
            "Periode: {} | Cabang: {}",
            period.with_untracked(|p| p.label()),
            session.branch_label()
        )
    };

    let export_csv = move |_| {
        set_export_error.set(None);
        let Some(report) = data.get_untracked() else {
            return;
        };
        let title = ExportTitle::new("Laporan Penjualan GoChicken").with_subtitle(subtitle());
        let filename = export_filename("laporan-penjualan", &iso(today()), "csv");
        if let Err(e) = export_to_spreadsheet(&report.harian, &title, &filename) {
            log::warn!("sales report export failed: {}", e);
            set_export_error.set(Some(e));
        }
    };

    let export_pdf = move |_| {
        set_export_error.set(None);
        let Some(report) = data.get_untracked() else {
            return;
        };
        if let Err(e) = printable_report(&report, subtitle()).open_print_view() {
            log::warn!("sales report print failed: {}", e);
            set_export_error.set(Some(e));
        }
    };

    let amount = move |f: fn(&SalesReport) -> f64| {
        Signal::derive(move || data.with(|d| d.as_ref().map(|r| format_rupiah(f(r)))))
    };
    let profit_tone = Signal::derive(move || {
        data.with(|d| d.as_ref().map(|r| StatTone::of_amount(net_profit(r))).unwrap_or_default())
    });
    let no_data = Signal::derive(move || loading.get() || data.with(|d| d.is_none()));

    view! {
        <PageFrame page_id="d400_sales_report--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Laporan Penjualan"</h1>
                </div>
                <div class="page__header-right">
                    <Show when=move || session.can(Capability::ExportData)>
                        <Button appearance=ButtonAppearance::Secondary on_click=export_csv disabled=no_data>
                            {icon("download")}
                            " Export Excel"
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=export_pdf disabled=no_data>
                            {icon("printer")}
                            " Export PDF"
                        </Button>
                    </Show>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| reload()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        " Muat ulang"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <FormField
                            label="Dari"
                            input_type="date"
                            value=Signal::derive(move || period.with(|p| p.start_date.clone()))
                            on_input=Callback::new(move |v: String| period.update(|p| p.start_date = v))
                        />
                        <FormField
                            label="Sampai"
                            input_type="date"
                            value=Signal::derive(move || period.with(|p| p.end_date.clone()))
                            on_input=Callback::new(move |v: String| period.update(|p| p.end_date = v))
                        />
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| period.set(ReportPeriod::default())
                        >
                            "Bulan ini"
                        </Button>
                    </Flex>
                </div>

                <ErrorBanner message=error on_retry=Callback::new(move |_| reload()) />
                {move || export_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <Show when=move || loading.get()>
                    <div class="list-loading">
                        <Spinner />
                        <span>"Memuat laporan..."</span>
                    </div>
                </Show>

                <div class="stat-grid">
                    <StatCard label="Total Penjualan" icon_name="trending-up" value=amount(|r| r.total_penjualan) />
                    <StatCard
                        label="Jumlah Transaksi"
                        icon_name="receipt"
                        value=Signal::derive(move || data.with(|d| d.as_ref().map(|r| format_number_int(r.total_transaksi as f64))))
                        subtitle=Signal::derive(move || {
                            data.with(|d| d.as_ref().map(|r| format!("Rata-rata {}", format_rupiah(r.average_transaction()))))
                        })
                    />
                    <StatCard label="Total Pengeluaran" icon_name="trending-down" value=amount(|r| r.total_pengeluaran) />
                    <StatCard label="Laba Bersih" icon_name="wallet" value=amount(net_profit) tone=profit_tone />
                </div>

                {move || data.get().map(|report| view! { <ReportTables report=report /> })}
            </div>
        </PageFrame>
    }
}

#[component]
fn ReportTables(report: SalesReport) -> impl IntoView {
    let sales_total = report.total_penjualan;
    let payment_total: f64 = report.per_metode.iter().map(|p| p.total).sum();

    let branch_rows = report
        .per_cabang
        .into_iter()
        .map(|b| {
            view! {
                <TableRow>
                    <TableCell><TableCellLayout truncate=true>{b.nama_cabang}</TableCellLayout></TableCell>
                    <TableCell><span class="table__number">{format_number_int(b.total_transaksi as f64)}</span></TableCell>
                    <TableCell><span class="table__number">{format_rupiah(b.total_penjualan)}</span></TableCell>
                    <TableCell><span class="table__number">{format_percent(b.total_penjualan, sales_total)}</span></TableCell>
                </TableRow>
            }
        })
        .collect_view();

    let payment_rows = report
        .per_metode
        .into_iter()
        .map(|p| {
            let method = PaymentMethodLabel::from_code(&p.metode_pembayaran);
            view! {
                <TableRow>
                    <TableCell>
                        <span class="payment-method">{icon(method.icon)}" "{method.label}</span>
                    </TableCell>
                    <TableCell><span class="table__number">{format_number_int(p.jumlah as f64)}</span></TableCell>
                    <TableCell><span class="table__number">{format_rupiah(p.total)}</span></TableCell>
                    <TableCell><span class="table__number">{format_percent(p.total, payment_total)}</span></TableCell>
                </TableRow>
            }
        })
        .collect_view();

    let daily_rows = report
        .harian
        .into_iter()
        .map(|d| {
            view! {
                <TableRow>
                    <TableCell>{format_date_id(&d.tanggal)}</TableCell>
                    <TableCell><span class="table__number">{format_number_int(d.total_transaksi as f64)}</span></TableCell>
                    <TableCell><span class="table__number">{format_rupiah(d.total_penjualan)}</span></TableCell>
                </TableRow>
            }
        })
        .collect_view();

    view! {
        <div class="report-grid">
            <section class="report-section">
                <h2 class="report-section__title">"Penjualan per Cabang"</h2>
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Cabang"</TableHeaderCell>
                            <TableHeaderCell>"Transaksi"</TableHeaderCell>
                            <TableHeaderCell>"Penjualan"</TableHeaderCell>
                            <TableHeaderCell>"Porsi"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>{branch_rows}</TableBody>
                </Table>
            </section>
            <section class="report-section">
                <h2 class="report-section__title">"Metode Pembayaran"</h2>
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Metode"</TableHeaderCell>
                            <TableHeaderCell>"Transaksi"</TableHeaderCell>
                            <TableHeaderCell>"Total"</TableHeaderCell>
                            <TableHeaderCell>"Porsi"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>{payment_rows}</TableBody>
                </Table>
            </section>
        </div>
        <section class="report-section">
            <h2 class="report-section__title">"Penjualan Harian"</h2>
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Tanggal"</TableHeaderCell>
                        <TableHeaderCell>"Transaksi"</TableHeaderCell>
                        <TableHeaderCell>"Penjualan"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>{daily_rows}</TableBody>
            </Table>
        </section>
    }
}
