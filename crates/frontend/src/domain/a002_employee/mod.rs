pub mod ui;

use contracts::domain::a002_employee::Employee;
use std::cmp::Ordering;

use crate::shared::list_utils::{compare_f64, compare_text, Searchable, Sortable};

impl Searchable for Employee {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.nama.as_deref().unwrap_or(""),
            self.jabatan.as_deref().unwrap_or(""),
            self.telepon.as_deref().unwrap_or(""),
        ]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            "cabang" => self.id_cabang.map(|id| id.to_string()),
            "status" => self.active_status().map(|s| s.code().to_string()),
            _ => None,
        }
    }
}

impl Sortable for Employee {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "nama" => compare_text(self.nama.as_deref(), other.nama.as_deref()),
            "jabatan" => compare_text(self.jabatan.as_deref(), other.jabatan.as_deref()),
            "cabang" => compare_text(Some(self.branch_name()), Some(other.branch_name())),
            "gaji" => compare_f64(self.gaji.unwrap_or(0.0), other.gaji.unwrap_or(0.0)),
            "status" => compare_text(self.status.as_deref(), other.status.as_deref()),
            _ => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::{process_list, sort_list, ListFilters};

    fn employee(id: i64, nama: Option<&str>, jabatan: &str, branch: i64, gaji: f64) -> Employee {
        Employee {
            id_karyawan: id,
            nama: nama.map(str::to_string),
            jabatan: Some(jabatan.into()),
            telepon: None,
            alamat: None,
            gaji: Some(gaji),
            id_cabang: Some(branch),
            cabang: None,
            status: Some("aktif".into()),
        }
    }

    #[test]
    fn search_and_branch_filter_combine() {
        let items = vec![
            employee(1, Some("Rina"), "Kasir", 1, 3_000_000.0),
            employee(2, Some("Andi"), "Kasir", 2, 3_500_000.0),
            employee(3, None, "Koki", 1, 4_000_000.0),
        ];
        let filters = ListFilters::new().with("cabang", "1");
        let result = process_list(&items, "kasir", &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id_karyawan, 1);
    }

    #[test]
    fn missing_name_sorts_last() {
        let mut items = vec![
            employee(3, None, "Koki", 1, 0.0),
            employee(1, Some("rina"), "Kasir", 1, 0.0),
            employee(2, Some("Andi"), "Kasir", 1, 0.0),
        ];
        sort_list(&mut items, "nama", true);
        let ids: Vec<i64> = items.iter().map(|e| e.id_karyawan).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }
}
