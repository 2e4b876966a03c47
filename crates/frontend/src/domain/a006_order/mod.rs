pub mod ui;

use contracts::domain::a006_order::Order;
use std::cmp::Ordering;

use crate::shared::list_utils::{compare_f64, compare_text, Dated, Searchable, Sortable};

impl Searchable for Order {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.kode_pesanan.as_deref().unwrap_or(""),
            self.nama_pelanggan.as_deref().unwrap_or(""),
        ]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            "status" => self.order_status().map(|s| s.code().to_string()),
            _ => None,
        }
    }
}

impl Sortable for Order {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "kode_pesanan" => compare_text(self.kode_pesanan.as_deref(), other.kode_pesanan.as_deref()),
            "nama_pelanggan" => compare_text(self.nama_pelanggan.as_deref(), other.nama_pelanggan.as_deref()),
            "total" => compare_f64(self.total, other.total),
            "created_at" => self.sort_date().cmp(other.sort_date()),
            _ => Ordering::Equal,
        }
    }
}

impl Dated for Order {
    fn sort_date(&self) -> &str {
        self.created_at.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::{process_list, sort_by_date_desc, ListFilters};

    fn order(id: i64, kode: &str, pelanggan: Option<&str>, status: &str, created: &str) -> Order {
        Order {
            id_pesanan: id,
            kode_pesanan: Some(kode.into()),
            nama_pelanggan: pelanggan.map(str::to_string),
            status: Some(status.into()),
            total: 0.0,
            catatan: None,
            id_cabang: None,
            cabang: None,
            created_at: Some(created.into()),
            items: Vec::new(),
        }
    }

    #[test]
    fn status_filter_accepts_backend_aliases() {
        let items = vec![
            order(1, "PSN-001", Some("Budi"), "pending", "2026-10-18 10:00:00"),
            order(2, "PSN-002", None, "Menunggu", "2026-10-18 11:00:00"),
            order(3, "PSN-003", Some("Sari"), "selesai", "2026-10-18 12:00:00"),
        ];
        let filters = ListFilters::new().with("status", "pending");
        assert_eq!(process_list(&items, "", &filters).len(), 2);
        assert_eq!(process_list(&items, "sari", &ListFilters::new())[0].id_pesanan, 3);
    }

    #[test]
    fn newest_orders_first() {
        let mut items = vec![
            order(1, "A", None, "pending", "2026-10-17 10:00:00"),
            order(2, "B", None, "pending", "2026-10-18 09:00:00"),
        ];
        sort_by_date_desc(&mut items);
        assert_eq!(items[0].id_pesanan, 2);
    }
}
