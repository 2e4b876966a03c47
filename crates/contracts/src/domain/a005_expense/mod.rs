use serde::{Deserialize, Serialize};

use crate::domain::a001_branch::BranchRef;
use crate::domain::common::{lenient, Resource};

/// Expense (pengeluaran) booked against a branch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    #[serde(alias = "id", deserialize_with = "lenient::i64_or_zero")]
    pub id_pengeluaran: i64,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub kategori: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub keterangan: Option<String>,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub jumlah: f64,
    /// `YYYY-MM-DD`
    #[serde(default)]
    pub tanggal: String,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub id_cabang: Option<i64>,
    #[serde(default)]
    pub cabang: Option<BranchRef>,
}

pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Bahan Baku",
    "Operasional",
    "Gaji",
    "Sewa",
    "Listrik & Air",
    "Lainnya",
];

impl Expense {
    pub fn branch_name(&self) -> &str {
        self.cabang
            .as_ref()
            .map(|c| c.nama_cabang.as_str())
            .unwrap_or("")
    }
}

impl Resource for Expense {
    fn collection_name() -> &'static str {
        "pengeluaran"
    }

    fn element_name() -> &'static str {
        "Pengeluaran"
    }

    fn list_name() -> &'static str {
        "Daftar Pengeluaran"
    }

    fn id(&self) -> i64 {
        self.id_pengeluaran
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseForm {
    pub kategori: String,
    pub keterangan: String,
    pub jumlah: f64,
    pub tanggal: String,
    pub id_cabang: Option<i64>,
}

impl ExpenseForm {
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            kategori: expense.kategori.clone().unwrap_or_default(),
            keterangan: expense.keterangan.clone().unwrap_or_default(),
            jumlah: expense.jumlah,
            tanggal: expense.tanggal.clone(),
            id_cabang: expense.id_cabang,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.kategori.trim().is_empty() {
            return Err("Kategori wajib dipilih".into());
        }
        if self.jumlah <= 0.0 {
            return Err("Jumlah harus lebih dari 0".into());
        }
        if chrono::NaiveDate::parse_from_str(self.tanggal.trim(), "%Y-%m-%d").is_err() {
            return Err("Tanggal tidak valid".into());
        }
        if self.id_cabang.is_none() {
            return Err("Cabang wajib dipilih".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_checks_date_format() {
        let mut form = ExpenseForm {
            kategori: "Sewa".into(),
            keterangan: "Sewa ruko".into(),
            jumlah: 2_500_000.0,
            tanggal: "15/10/2026".into(),
            id_cabang: Some(2),
        };
        assert_eq!(form.validate(), Err("Tanggal tidak valid".to_string()));
        form.tanggal = "2026-10-15".into();
        assert!(form.validate().is_ok());
    }
}
