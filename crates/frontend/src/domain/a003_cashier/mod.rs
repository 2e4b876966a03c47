pub mod ui;

use contracts::domain::a003_cashier::Cashier;
use std::cmp::Ordering;

use crate::shared::list_utils::{compare_text, Searchable, Sortable};

impl Searchable for Cashier {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.nama.as_deref().unwrap_or(""),
            self.email.as_deref().unwrap_or(""),
        ]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            "cabang" => self.id_cabang.map(|id| id.to_string()),
            _ => None,
        }
    }
}

impl Sortable for Cashier {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "nama" => compare_text(self.nama.as_deref(), other.nama.as_deref()),
            "email" => compare_text(self.email.as_deref(), other.email.as_deref()),
            "cabang" => compare_text(Some(self.branch_name()), Some(other.branch_name())),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::{process_list, ListFilters};

    #[test]
    fn search_covers_email() {
        let items = vec![
            Cashier {
                id: 1,
                nama: Some("Dewi".into()),
                email: Some("dewi@gochicken.id".into()),
                id_cabang: Some(1),
                cabang: None,
                status: None,
                created_at: None,
            },
            Cashier {
                id: 2,
                nama: Some("Joko".into()),
                email: None,
                id_cabang: Some(2),
                cabang: None,
                status: None,
                created_at: None,
            },
        ];
        assert_eq!(process_list(&items, "GOCHICKEN", &ListFilters::new()).len(), 1);
        let by_branch = process_list(&items, "", &ListFilters::new().with("cabang", "2"));
        assert_eq!(by_branch[0].id, 2);
    }
}
