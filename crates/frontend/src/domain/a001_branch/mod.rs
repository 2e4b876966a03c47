pub mod ui;

use contracts::domain::a001_branch::Branch;
use std::cmp::Ordering;

use crate::shared::list_utils::{compare_text, Searchable, Sortable};

impl Searchable for Branch {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            &self.nama_cabang,
            self.alamat.as_deref().unwrap_or(""),
            self.telepon.as_deref().unwrap_or(""),
        ]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            "status" => self.active_status().map(|s| s.code().to_string()),
            _ => None,
        }
    }
}

impl Sortable for Branch {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "nama_cabang" => compare_text(Some(&self.nama_cabang), Some(&other.nama_cabang)),
            "alamat" => compare_text(self.alamat.as_deref(), other.alamat.as_deref()),
            "status" => compare_text(self.status.as_deref(), other.status.as_deref()),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::{process_list, ListFilters};

    fn branch(id: i64, name: &str, status: &str) -> Branch {
        Branch {
            id_cabang: id,
            nama_cabang: name.into(),
            alamat: None,
            telepon: None,
            status: Some(status.into()),
            created_at: None,
        }
    }

    #[test]
    fn status_filter_normalizes_backend_spelling() {
        let items = vec![branch(1, "Dago", "Aktif"), branch(2, "Buah Batu", "nonaktif")];
        let filters = ListFilters::new().with("status", "aktif");
        let result = process_list(&items, "", &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id_cabang, 1);
    }

    #[test]
    fn missing_address_never_matches_search() {
        let items = vec![branch(1, "Dago", "aktif")];
        assert!(process_list(&items, "jl.", &ListFilters::new()).is_empty());
        assert_eq!(process_list(&items, "DAG", &ListFilters::new()).len(), 1);
    }
}
