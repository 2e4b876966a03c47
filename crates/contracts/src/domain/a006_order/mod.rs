use serde::{Deserialize, Serialize};

use crate::domain::a001_branch::BranchRef;
use crate::domain::common::{lenient, Resource};
use crate::enums::order_status::OrderStatus;

/// Customer order (pesanan)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(alias = "id", deserialize_with = "lenient::i64_or_zero")]
    pub id_pesanan: i64,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub kode_pesanan: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub nama_pelanggan: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub total: f64,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub catatan: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub id_cabang: Option<i64>,
    #[serde(default)]
    pub cabang: Option<BranchRef>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, alias = "detail")]
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub nama_produk: Option<String>,
    #[serde(default, deserialize_with = "lenient::i64_or_zero")]
    pub jumlah: i64,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub harga: f64,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub subtotal: f64,
}

impl Order {
    pub fn order_status(&self) -> Option<OrderStatus> {
        self.status.as_deref().and_then(OrderStatus::from_code)
    }

    pub fn branch_name(&self) -> &str {
        self.cabang
            .as_ref()
            .map(|c| c.nama_cabang.as_str())
            .unwrap_or("")
    }
}

impl Resource for Order {
    fn collection_name() -> &'static str {
        "pesanan"
    }

    fn element_name() -> &'static str {
        "Pesanan"
    }

    fn list_name() -> &'static str {
        "Daftar Pesanan"
    }

    fn id(&self) -> i64 {
        self.id_pesanan
    }
}

/// Body of `PUT /api/pesanan/{id}/status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

impl OrderStatusUpdate {
    pub fn path(id: i64) -> String {
        format!("{}/status", Order::item_path(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_detail_alias_for_items() {
        let order: Order = serde_json::from_str(
            r#"{"id":5,"kode_pesanan":"PSN-005","status":"Diproses","total":"36000",
                "detail":[{"nama_produk":"Paha Atas","jumlah":2,"harga":18000,"subtotal":36000}]}"#,
        )
        .unwrap();
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.order_status(), Some(OrderStatus::Diproses));
        assert_eq!(order.total, 36000.0);
    }

    #[test]
    fn status_update_serializes_lowercase() {
        let body = serde_json::to_string(&OrderStatusUpdate {
            status: OrderStatus::Selesai,
        })
        .unwrap();
        assert_eq!(body, r#"{"status":"selesai"}"#);
        assert_eq!(OrderStatusUpdate::path(5), "/api/pesanan/5/status");
    }
}
