pub mod ui;

use contracts::domain::a005_expense::Expense;
use std::cmp::Ordering;

use crate::shared::date_utils::{date_key, format_date_id};
use crate::shared::export::SpreadsheetExportable;
use crate::shared::list_utils::{
    compare_f64, compare_text, process_list, sort_by_date_desc, sort_list, Dated,
    ListQueryState, Searchable, Sortable,
};
use crate::shared::number_format::format_number_int;

impl Searchable for Expense {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.keterangan.as_deref().unwrap_or(""),
            self.kategori.as_deref().unwrap_or(""),
            self.branch_name(),
        ]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            "kategori" => self.kategori.clone(),
            "cabang" => self.id_cabang.map(|id| id.to_string()),
            _ => None,
        }
    }
}

impl Sortable for Expense {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "tanggal" => self.tanggal.cmp(&other.tanggal),
            "kategori" => compare_text(self.kategori.as_deref(), other.kategori.as_deref()),
            "cabang" => compare_text(Some(self.branch_name()), Some(other.branch_name())),
            "jumlah" => compare_f64(self.jumlah, other.jumlah),
            _ => Ordering::Equal,
        }
    }
}

impl Dated for Expense {
    fn sort_date(&self) -> &str {
        &self.tanggal
    }
}

impl SpreadsheetExportable for Expense {
    fn headers() -> Vec<&'static str> {
        vec!["Tanggal", "Kategori", "Keterangan", "Cabang", "Jumlah (Rp)"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            format_date_id(&self.tanggal),
            self.kategori.clone().unwrap_or_default(),
            self.keterangan.clone().unwrap_or_default(),
            self.branch_name().to_string(),
            format_number_int(self.jumlah),
        ]
    }
}

/// Inclusive `YYYY-MM-DD` bounds; an empty bound is open
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpensePeriod {
    pub start_date: String,
    pub end_date: String,
}

impl ExpensePeriod {
    pub fn is_active(&self) -> bool {
        !self.start_date.is_empty() || !self.end_date.is_empty()
    }

    /// Expenses with an unreadable date only match an open period
    pub fn contains(&self, expense: &Expense) -> bool {
        if !self.is_active() {
            return true;
        }
        let Some(day) = date_key(&expense.tanggal) else {
            return false;
        };
        (self.start_date.is_empty() || day.as_str() >= self.start_date.as_str())
            && (self.end_date.is_empty() || day.as_str() <= self.end_date.as_str())
    }

    pub fn label(&self) -> String {
        match (self.start_date.is_empty(), self.end_date.is_empty()) {
            (true, true) => "Semua tanggal".to_string(),
            (false, true) => format!("Sejak {}", format_date_id(&self.start_date)),
            (true, false) => format!("Sampai {}", format_date_id(&self.end_date)),
            (false, false) => format!(
                "{} - {}",
                format_date_id(&self.start_date),
                format_date_id(&self.end_date)
            ),
        }
    }
}

/// Period filter, then newest first unless a column sort is chosen
pub fn order_expenses(rows: &mut Vec<Expense>, query: &ListQueryState, period: &ExpensePeriod) {
    rows.retain(|e| period.contains(e));
    match query.sort_field.as_deref() {
        Some(field) => sort_list(rows, field, query.sort_ascending),
        None => sort_by_date_desc(rows),
    }
}

/// Every row matching the current filters, in display order
pub fn filtered_expenses(items: &[Expense], query: &ListQueryState, period: &ExpensePeriod) -> Vec<Expense> {
    let mut rows = process_list(items, &query.search_term, &query.filters);
    order_expenses(&mut rows, query, period);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::ListFilters;

    fn expense(id: i64, tanggal: &str, kategori: &str, jumlah: f64) -> Expense {
        Expense {
            id_pengeluaran: id,
            kategori: Some(kategori.into()),
            keterangan: None,
            jumlah,
            tanggal: tanggal.into(),
            id_cabang: Some(1),
            cabang: None,
        }
    }

    #[test]
    fn newest_first_by_default() {
        let items = vec![
            expense(1, "2026-10-01", "Sewa", 1.0),
            expense(2, "2026-10-15", "Gaji", 1.0),
            expense(3, "2026-10-07", "Sewa", 1.0),
        ];
        let rows = filtered_expenses(&items, &ListQueryState::default(), &ExpensePeriod::default());
        let ids: Vec<i64> = rows.iter().map(|e| e.id_pengeluaran).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn period_bounds_are_inclusive() {
        let items = vec![
            expense(1, "2026-10-01", "Sewa", 1.0),
            expense(2, "2026-10-15 09:00:00", "Gaji", 1.0),
            expense(3, "2026-10-16", "Sewa", 1.0),
            expense(4, "", "Sewa", 1.0),
        ];
        let period = ExpensePeriod {
            start_date: "2026-10-01".into(),
            end_date: "2026-10-15".into(),
        };
        let rows = filtered_expenses(&items, &ListQueryState::default(), &period);
        let ids: Vec<i64> = rows.iter().map(|e| e.id_pengeluaran).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn category_filter_with_column_sort() {
        let items = vec![
            expense(1, "2026-10-01", "Sewa", 300.0),
            expense(2, "2026-10-02", "Gaji", 100.0),
            expense(3, "2026-10-03", "Sewa", 200.0),
        ];
        let query = ListQueryState {
            filters: ListFilters::new().with("kategori", "Sewa"),
            sort_field: Some("jumlah".into()),
            sort_ascending: true,
            ..ListQueryState::default()
        };
        let rows = filtered_expenses(&items, &query, &ExpensePeriod::default());
        let ids: Vec<i64> = rows.iter().map(|e| e.id_pengeluaran).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn csv_row_uses_local_formats() {
        let row = expense(1, "2026-10-18", "Sewa", 1_500_000.0).to_csv_row();
        assert_eq!(row[0], "18 Oktober 2026");
        assert_eq!(row[4], "1.500.000");
    }
}
