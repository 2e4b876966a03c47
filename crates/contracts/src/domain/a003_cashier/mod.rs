use serde::{Deserialize, Serialize};

use crate::domain::a001_branch::BranchRef;
use crate::domain::common::{lenient, ActiveStatus, Resource};

/// Cashier login account (kasir)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cashier {
    #[serde(alias = "id_kasir", deserialize_with = "lenient::i64_or_zero")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub nama: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub id_cabang: Option<i64>,
    #[serde(default)]
    pub cabang: Option<BranchRef>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Cashier {
    pub fn branch_name(&self) -> &str {
        self.cabang
            .as_ref()
            .map(|c| c.nama_cabang.as_str())
            .unwrap_or("")
    }

    pub fn active_status(&self) -> Option<ActiveStatus> {
        self.status.as_deref().and_then(ActiveStatus::from_code)
    }
}

impl Resource for Cashier {
    fn collection_name() -> &'static str {
        "kasir"
    }

    fn element_name() -> &'static str {
        "Kasir"
    }

    fn list_name() -> &'static str {
        "Daftar Kasir"
    }

    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CashierForm {
    pub nama: String,
    pub email: String,
    /// Only sent when creating or resetting the password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub id_cabang: Option<i64>,
}

impl CashierForm {
    pub fn from_cashier(cashier: &Cashier) -> Self {
        Self {
            nama: cashier.nama.clone().unwrap_or_default(),
            email: cashier.email.clone().unwrap_or_default(),
            password: None,
            id_cabang: cashier.id_cabang,
        }
    }

    pub fn validate(&self, creating: bool) -> Result<(), String> {
        if self.nama.trim().is_empty() {
            return Err("Nama kasir wajib diisi".into());
        }
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err("Email tidak valid".into());
        }
        let password_len = self.password.as_deref().map(str::len).unwrap_or(0);
        if creating && password_len == 0 {
            return Err("Password wajib diisi".into());
        }
        if password_len > 0 && password_len < 6 {
            return Err("Password minimal 6 karakter".into());
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

    fn form() -> CashierForm {
        CashierForm {
            nama: "Dewi".into(),
            email: "dewi@gochicken.id".into(),
            password: None,
            id_cabang: Some(1),
        }
    }

    #[test]
    fn password_required_only_when_creating() {
        assert!(form().validate(false).is_ok());
        assert_eq!(form().validate(true), Err("Password wajib diisi".to_string()));
        let short = CashierForm {
            password: Some("123".into()),
            ..form()
        };
        assert!(short.validate(false).is_err());
    }

    #[test]
    fn password_is_not_serialized_when_absent() {
        let json = serde_json::to_string(&form()).unwrap();
        assert!(!json.contains("password"));
    }
}
