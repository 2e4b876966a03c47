use serde::{Deserialize, Serialize};

use crate::domain::a007_transaction::UserRef;
use crate::domain::common::{lenient, Resource};

/// Audit trail entry written by the backend on every mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLog {
    #[serde(alias = "id_log", deserialize_with = "lenient::i64_or_zero")]
    pub id: i64,
    #[serde(default)]
    pub user: Option<UserRef>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub aksi: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub modul: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub deskripsi: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

pub const AUDIT_ACTIONS: &[&str] = &["create", "update", "delete", "login", "logout"];

pub const AUDIT_MODULES: &[&str] = &[
    "cabang",
    "karyawan",
    "kasir",
    "produk",
    "pengeluaran",
    "pesanan",
    "transaksi",
    "auth",
];

impl AuditLog {
    pub fn user_name(&self) -> &str {
        self.user.as_ref().map(|u| u.nama.as_str()).unwrap_or("")
    }

    /// Badge class keyed by action
    pub fn action_badge_class(&self) -> &'static str {
        match self.aksi.as_deref().map(str::to_lowercase).as_deref() {
            Some("create") => "badge badge--success",
            Some("update") => "badge badge--info",
            Some("delete") => "badge badge--error",
            Some("login") | Some("logout") => "badge badge--neutral",
            _ => "badge",
        }
    }
}

impl Resource for AuditLog {
    fn collection_name() -> &'static str {
        "audit-log"
    }

    fn element_name() -> &'static str {
        "Log Aktivitas"
    }

    fn list_name() -> &'static str {
        "Audit Log"
    }

    fn id(&self) -> i64 {
        self.id
    }
}

/// Server-side filter/pagination query for `/api/audit-log`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditLogQuery {
    pub page: u32,
    pub per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aksi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modul: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_follows_action_case_insensitively() {
        let log: AuditLog =
            serde_json::from_str(r#"{"id":1,"aksi":"DELETE","modul":"produk"}"#).unwrap();
        assert_eq!(log.action_badge_class(), "badge badge--error");
        assert_eq!(log.user_name(), "");
    }
}
