use serde::{Deserialize, Serialize};

use crate::domain::a001_branch::BranchRef;
use crate::domain::common::{lenient, Resource};

/// Sales transaction (transaksi) recorded at a till
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(alias = "id", deserialize_with = "lenient::i64_or_zero")]
    pub id_transaksi: i64,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub kode_transaksi: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub metode_pembayaran: Option<String>,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub total: f64,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub bayar: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub kembalian: Option<f64>,
    #[serde(default)]
    pub tanggal: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub kasir: Option<UserRef>,
    #[serde(default)]
    pub cabang: Option<BranchRef>,
    #[serde(default, alias = "detail")]
    pub items: Vec<TransactionItem>,
}

/// User embedded in transactions and audit entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub id: Option<i64>,
    #[serde(default)]
    pub nama: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionItem {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub nama_produk: Option<String>,
    #[serde(default, deserialize_with = "lenient::i64_or_zero")]
    pub jumlah: i64,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub harga: f64,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub subtotal: f64,
}

impl Transaction {
    /// Transaction time; older rows only carry `created_at`
    pub fn timestamp(&self) -> &str {
        self.tanggal
            .as_deref()
            .or(self.created_at.as_deref())
            .unwrap_or("")
    }

    pub fn cashier_name(&self) -> &str {
        self.kasir.as_ref().map(|k| k.nama.as_str()).unwrap_or("")
    }

    pub fn branch_name(&self) -> &str {
        self.cabang
            .as_ref()
            .map(|c| c.nama_cabang.as_str())
            .unwrap_or("")
    }
}

impl Resource for Transaction {
    fn collection_name() -> &'static str {
        "transaksi"
    }

    fn element_name() -> &'static str {
        "Transaksi"
    }

    fn list_name() -> &'static str {
        "Riwayat Transaksi"
    }

    fn id(&self) -> i64 {
        self.id_transaksi
    }
}

/// Server-side filter/pagination query for `/api/transaksi`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionQuery {
    pub page: u32,
    pub per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metode_pembayaran: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_cabang: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_cashier_and_branch_are_empty_names() {
        let trx: Transaction =
            serde_json::from_str(r#"{"id_transaksi":1,"total":25000,"kasir":null}"#).unwrap();
        assert_eq!(trx.cashier_name(), "");
        assert_eq!(trx.branch_name(), "");
        assert!(trx.items.is_empty());
    }

    #[test]
    fn timestamp_prefers_tanggal() {
        let trx: Transaction = serde_json::from_str(
            r#"{"id":2,"tanggal":"2026-10-01 10:00:00","created_at":"2026-10-01T03:00:05Z"}"#,
        )
        .unwrap();
        assert_eq!(trx.timestamp(), "2026-10-01 10:00:00");

        let trx: Transaction =
            serde_json::from_str(r#"{"id":3,"created_at":"2026-10-02T03:00:05Z"}"#).unwrap();
        assert_eq!(trx.timestamp(), "2026-10-02T03:00:05Z");
    }
}
