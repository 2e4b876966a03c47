pub mod ui;

use contracts::domain::a004_product::Product;
use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::shared::list_utils::{compare_f64, compare_text, Searchable, Sortable};

impl Searchable for Product {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.nama_produk.as_deref().unwrap_or(""),
            self.kode_produk.as_deref().unwrap_or(""),
            self.deskripsi.as_deref().unwrap_or(""),
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

impl Sortable for Product {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "kode_produk" => compare_text(self.kode_produk.as_deref(), other.kode_produk.as_deref()),
            "nama_produk" => compare_text(self.nama_produk.as_deref(), other.nama_produk.as_deref()),
            "kategori" => compare_text(self.kategori.as_deref(), other.kategori.as_deref()),
            "harga" => compare_f64(self.harga, other.harga),
            "stok" => self.stok.cmp(&other.stok),
            _ => Ordering::Equal,
        }
    }
}

/// Distinct non-empty categories of the loaded products, sorted
pub fn product_categories(items: &[Product]) -> Vec<String> {
    items
        .iter()
        .filter_map(|p| p.kategori.as_deref())
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::{process_list, sort_list, ListFilters};

    fn product(id: i64, name: &str, kategori: Option<&str>, harga: f64, stok: i64) -> Product {
        Product {
            id_produk: id,
            kode_produk: Some(format!("P{:03}", id)),
            nama_produk: Some(name.into()),
            kategori: kategori.map(str::to_string),
            deskripsi: None,
            harga,
            stok,
            id_cabang: Some(1),
            gambar: None,
        }
    }

    #[test]
    fn category_filter_and_code_search() {
        let items = vec![
            product(1, "Ayam Geprek", Some("Makanan"), 18_000.0, 20),
            product(2, "Es Teh", Some("Minuman"), 5_000.0, 50),
            product(3, "Ayam Bakar", Some("Makanan"), 22_000.0, 3),
        ];
        let filters = ListFilters::new().with("kategori", "Makanan");
        assert_eq!(process_list(&items, "ayam", &filters).len(), 2);
        assert_eq!(process_list(&items, "p002", &ListFilters::new())[0].id_produk, 2);
    }

    #[test]
    fn sorts_by_price_descending() {
        let mut items = vec![
            product(1, "A", None, 18_000.0, 1),
            product(2, "B", None, 5_000.0, 1),
            product(3, "C", None, 22_000.0, 1),
        ];
        sort_list(&mut items, "harga", false);
        let ids: Vec<i64> = items.iter().map(|p| p.id_produk).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn categories_are_distinct_and_sorted() {
        let items = vec![
            product(1, "A", Some("Minuman"), 1.0, 1),
            product(2, "B", Some("Makanan"), 1.0, 1),
            product(3, "C", Some("Minuman"), 1.0, 1),
            product(4, "D", None, 1.0, 1),
        ];
        assert_eq!(product_categories(&items), vec!["Makanan", "Minuman"]);
    }
}
