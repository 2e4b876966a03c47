use serde::{Deserialize, Serialize};

use crate::domain::common::{lenient, Resource};

/// Product (produk) sold at the branches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(alias = "id", deserialize_with = "lenient::i64_or_zero")]
    pub id_produk: i64,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub kode_produk: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub nama_produk: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub kategori: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub deskripsi: Option<String>,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub harga: f64,
    #[serde(default, deserialize_with = "lenient::i64_or_zero")]
    pub stok: i64,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub id_cabang: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub gambar: Option<String>,
}

/// Stock levels at or below this are flagged in the table
pub const LOW_STOCK_THRESHOLD: i64 = 10;

impl Product {
    pub fn is_low_stock(&self) -> bool {
        self.stok <= LOW_STOCK_THRESHOLD
    }
}

impl Resource for Product {
    fn collection_name() -> &'static str {
        "produk"
    }

    fn element_name() -> &'static str {
        "Produk"
    }

    fn list_name() -> &'static str {
        "Daftar Produk"
    }

    fn id(&self) -> i64 {
        self.id_produk
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductForm {
    pub kode_produk: String,
    pub nama_produk: String,
    pub kategori: String,
    pub deskripsi: String,
    pub harga: f64,
    pub stok: i64,
    pub id_cabang: Option<i64>,
}

impl ProductForm {
    pub fn from_product(product: &Product) -> Self {
        Self {
            kode_produk: product.kode_produk.clone().unwrap_or_default(),
            nama_produk: product.nama_produk.clone().unwrap_or_default(),
            kategori: product.kategori.clone().unwrap_or_default(),
            deskripsi: product.deskripsi.clone().unwrap_or_default(),
            harga: product.harga,
            stok: product.stok,
            id_cabang: product.id_cabang,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.nama_produk.trim().is_empty() {
            return Err("Nama produk wajib diisi".into());
        }
        if self.kategori.trim().is_empty() {
            return Err("Kategori wajib diisi".into());
        }
        if self.harga <= 0.0 {
            return Err("Harga harus lebih dari 0".into());
        }
        if self.stok < 0 {
            return Err("Stok tidak boleh negatif".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_string_prices_and_null_names() {
        let product: Product = serde_json::from_str(
            r#"{"id_produk":1,"nama_produk":null,"harga":"18000.00","stok":"4","kategori":"Makanan"}"#,
        )
        .unwrap();
        assert_eq!(product.harga, 18000.0);
        assert_eq!(product.stok, 4);
        assert!(product.is_low_stock());
        assert_eq!(product.nama_produk, None);
    }

    #[test]
    fn form_rejects_zero_price() {
        let form = ProductForm {
            nama_produk: "Ayam Geprek".into(),
            kategori: "Makanan".into(),
            harga: 0.0,
            ..ProductForm::default()
        };
        assert_eq!(form.validate(), Err("Harga harus lebih dari 0".to_string()));
    }
}
