pub mod api;
pub mod ui;

use chrono::NaiveDate;
use contracts::enums::payment_method::PaymentMethodLabel;
use contracts::projections::p900_sales_report::{BranchSales, DailySales, PaymentSales, ReportQuery, SalesReport};

use crate::shared::date_utils::{format_date_id, iso, month_start, today};
use crate::shared::export::{PrintTable, PrintableReport, SpreadsheetExportable};
use crate::shared::number_format::{format_number_int, format_percent, format_rupiah};
use crate::shared::remote_list::{RequestTicket, RequestTracker};

/// Reporting period picked on the dashboard, as `YYYY-MM-DD` strings
#[derive(Clone, Debug, PartialEq)]
pub struct ReportPeriod {
    pub start_date: String,
    pub end_date: String,
}

impl ReportPeriod {
    /// First of the current month up to today
    pub fn month_to_date(today: NaiveDate) -> Self {
        Self {
            start_date: iso(month_start(today)),
            end_date: iso(today),
        }
    }

    pub fn to_query(&self, branch: Option<i64>) -> Result<ReportQuery, String> {
        let start = parse_date(&self.start_date).ok_or("Tanggal mulai tidak valid")?;
        let end = parse_date(&self.end_date).ok_or("Tanggal akhir tidak valid")?;
        if start > end {
            return Err("Tanggal mulai harus sebelum tanggal akhir".to_string());
        }
        Ok(ReportQuery {
            start_date: iso(start),
            end_date: iso(end),
            id_cabang: branch,
        })
    }

    pub fn label(&self) -> String {
        format!("{} - {}", format_date_id(&self.start_date), format_date_id(&self.end_date))
    }
}

impl Default for ReportPeriod {
    fn default() -> Self {
        Self::month_to_date(today())
    }
}

/// Takes a new ticket before validating, so a request for the previous
/// period can no longer land even when the new period is rejected
pub fn begin_report_load(
    tracker: &RequestTracker,
    period: &ReportPeriod,
    branch: Option<i64>,
) -> (RequestTicket, Result<ReportQuery, String>) {
    let ticket = tracker.begin();
    (ticket, period.to_query(branch))
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Net profit as reported, or sales minus expenses when the server omits it
pub fn net_profit(report: &SalesReport) -> f64 {
    report
        .net_profit()
        .unwrap_or(report.total_penjualan - report.total_pengeluaran)
}

impl SpreadsheetExportable for DailySales {
    fn headers() -> Vec<&'static str> {
        vec!["Tanggal", "Jumlah Transaksi", "Total Penjualan"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            format_date_id(&self.tanggal),
            self.total_transaksi.to_string(),
            format_number_int(self.total_penjualan),
        ]
    }
}

fn branch_rows(report: &SalesReport) -> Vec<Vec<String>> {
    report
        .per_cabang
        .iter()
        .map(|b: &BranchSales| {
            vec![
                b.nama_cabang.clone(),
                b.total_transaksi.to_string(),
                format_rupiah(b.total_penjualan),
                format_percent(b.total_penjualan, report.total_penjualan),
            ]
        })
        .collect()
}

fn payment_rows(report: &SalesReport) -> Vec<Vec<String>> {
    let grand_total: f64 = report.per_metode.iter().map(|p| p.total).sum();
    report
        .per_metode
        .iter()
        .map(|p: &PaymentSales| {
            vec![
                PaymentMethodLabel::from_code(&p.metode_pembayaran).label,
                p.jumlah.to_string(),
                format_rupiah(p.total),
                format_percent(p.total, grand_total),
            ]
        })
        .collect()
}

/// Printable version of the dashboard: summary cards followed by the three tables
pub fn printable_report(report: &SalesReport, subtitle: String) -> PrintableReport {
    PrintableReport {
        title: "Laporan Penjualan GoChicken".to_string(),
        subtitle: Some(subtitle),
        cards: vec![
            ("Total Penjualan".to_string(), format_rupiah(report.total_penjualan)),
            ("Jumlah Transaksi".to_string(), format_number_int(report.total_transaksi as f64)),
            ("Rata-rata Transaksi".to_string(), format_rupiah(report.average_transaction())),
            ("Total Pengeluaran".to_string(), format_rupiah(report.total_pengeluaran)),
            ("Laba Bersih".to_string(), format_rupiah(net_profit(report))),
        ],
        tables: vec![
            PrintTable {
                title: "Penjualan per Cabang".to_string(),
                headers: strings(&["Cabang", "Transaksi", "Penjualan", "Porsi"]),
                rows: branch_rows(report),
            },
            PrintTable {
                title: "Metode Pembayaran".to_string(),
                headers: strings(&["Metode", "Transaksi", "Total", "Porsi"]),
                rows: payment_rows(report),
            },
            PrintTable {
                title: "Penjualan Harian".to_string(),
                headers: strings(&DailySales::headers()),
                rows: report.harian.iter().map(|d| d.to_csv_row()).collect(),
            },
        ],
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> SalesReport {
        serde_json::from_str(
            r#"{
                "total_penjualan": 400000, "total_transaksi": 8, "total_pengeluaran": 150000,
                "per_cabang": [
                    {"nama_cabang": "Cabang Pusat", "total_penjualan": 300000, "total_transaksi": 6},
                    {"nama_cabang": "Cabang Timur", "total_penjualan": 100000, "total_transaksi": 2}
                ],
                "per_metode": [
                    {"metode_pembayaran": "cash", "total": 100000, "jumlah": 3},
                    {"metode_pembayaran": "e-wallet", "total": 300000, "jumlah": 5}
                ],
                "harian": [{"tanggal": "2026-10-17", "total_penjualan": 400000, "total_transaksi": 8}]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn period_defaults_to_month_to_date() {
        let day = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let period = ReportPeriod::month_to_date(day);
        assert_eq!(period.start_date, "2026-10-01");
        assert_eq!(period.end_date, "2026-10-18");

        let query = period.to_query(Some(3)).unwrap();
        assert_eq!(query.id_cabang, Some(3));
    }

    #[test]
    fn reversed_or_blank_period_is_rejected() {
        let reversed = ReportPeriod {
            start_date: "2026-10-18".into(),
            end_date: "2026-10-01".into(),
        };
        assert!(reversed.to_query(None).is_err());

        let blank = ReportPeriod {
            start_date: String::new(),
            end_date: "2026-10-01".into(),
        };
        assert!(blank.to_query(None).is_err());
    }

    #[test]
    fn rejected_period_supersedes_request_in_flight() {
        let tracker = RequestTracker::new();
        let october = ReportPeriod::month_to_date(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
        let (in_flight, query) = begin_report_load(&tracker, &october, None);
        assert!(query.is_ok());

        let reversed = ReportPeriod {
            start_date: "2026-10-18".into(),
            end_date: "2026-10-01".into(),
        };
        let (_, query) = begin_report_load(&tracker, &reversed, None);
        assert!(query.is_err());
        assert!(!tracker.is_current(in_flight));
    }

    #[test]
    fn net_profit_falls_back_to_sales_minus_expenses() {
        let mut r = report();
        assert_eq!(net_profit(&r), 250_000.0);
        r.laba_bersih = Some(-5_000.0);
        assert_eq!(net_profit(&r), -5_000.0);
    }

    #[test]
    fn printable_report_lists_shares() {
        let printable = printable_report(&report(), "Periode: Oktober".into());
        assert_eq!(printable.cards.len(), 5);
        assert_eq!(printable.tables[0].rows[0][3], "75,0%");
        assert_eq!(printable.tables[1].rows[1][0], "QRIS");
        assert_eq!(printable.tables[2].rows[0][0], "17 Oktober 2026");
    }
}
