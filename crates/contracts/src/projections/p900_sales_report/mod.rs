use serde::{Deserialize, Serialize};

use crate::domain::common::lenient;

/// Aggregated sales report computed by the backend for a period
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesReport {
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub total_penjualan: f64,
    #[serde(default, deserialize_with = "lenient::i64_or_zero")]
    pub total_transaksi: i64,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub total_pengeluaran: f64,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub laba_bersih: Option<f64>,
    #[serde(default)]
    pub per_cabang: Vec<BranchSales>,
    #[serde(default)]
    pub per_metode: Vec<PaymentSales>,
    #[serde(default)]
    pub harian: Vec<DailySales>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchSales {
    #[serde(default)]
    pub nama_cabang: String,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub total_penjualan: f64,
    #[serde(default, deserialize_with = "lenient::i64_or_zero")]
    pub total_transaksi: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentSales {
    #[serde(default)]
    pub metode_pembayaran: String,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub total: f64,
    #[serde(default, deserialize_with = "lenient::i64_or_zero")]
    pub jumlah: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySales {
    #[serde(default)]
    pub tanggal: String,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub total_penjualan: f64,
    #[serde(default, deserialize_with = "lenient::i64_or_zero")]
    pub total_transaksi: i64,
}

/// Query for `/api/laporan/penjualan`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportQuery {
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_cabang: Option<i64>,
}

pub const SALES_REPORT_PATH: &str = "/api/laporan/penjualan";

impl SalesReport {
    /// Average ticket size; zero when there were no transactions
    pub fn average_transaction(&self) -> f64 {
        if self.total_transaksi <= 0 {
            0.0
        } else {
            self.total_penjualan / self.total_transaksi as f64
        }
    }

    /// Server-provided net profit, or `None` when the backend omits it
    pub fn net_profit(&self) -> Option<f64> {
        self.laba_bersih
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_decodes_to_defaults() {
        let report: SalesReport = serde_json::from_str("{}").unwrap();
        assert_eq!(report.total_transaksi, 0);
        assert_eq!(report.average_transaction(), 0.0);
        assert!(report.per_metode.is_empty());
    }

    #[test]
    fn average_ticket() {
        let report = SalesReport {
            total_penjualan: 300_000.0,
            total_transaksi: 4,
            ..SalesReport::default()
        };
        assert_eq!(report.average_transaction(), 75_000.0);
    }
}
