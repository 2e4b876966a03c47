use serde::{Deserialize, Serialize};

use crate::domain::common::{lenient, ActiveStatus, Resource};

/// Branch (cabang) as listed by `/api/cabang`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    #[serde(alias = "id", deserialize_with = "lenient::i64_or_zero")]
    pub id_cabang: i64,
    #[serde(default)]
    pub nama_cabang: String,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub alamat: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub telepon: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Branch {
    pub fn active_status(&self) -> Option<ActiveStatus> {
        self.status.as_deref().and_then(ActiveStatus::from_code)
    }

    pub fn to_ref(&self) -> BranchRef {
        BranchRef {
            id_cabang: self.id_cabang,
            nama_cabang: self.nama_cabang.clone(),
        }
    }
}

impl Resource for Branch {
    fn collection_name() -> &'static str {
        "cabang"
    }

    fn element_name() -> &'static str {
        "Cabang"
    }

    fn list_name() -> &'static str {
        "Daftar Cabang"
    }

    fn id(&self) -> i64 {
        self.id_cabang
    }
}

/// Branch reference embedded in other resources and stored under `cabang`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchRef {
    #[serde(alias = "id", deserialize_with = "lenient::i64_or_zero")]
    pub id_cabang: i64,
    #[serde(default)]
    pub nama_cabang: String,
}

/// Create/update payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchForm {
    pub nama_cabang: String,
    pub alamat: String,
    pub telepon: String,
    pub status: ActiveStatus,
}

impl Default for BranchForm {
    fn default() -> Self {
        Self {
            nama_cabang: String::new(),
            alamat: String::new(),
            telepon: String::new(),
            status: ActiveStatus::Aktif,
        }
    }
}

impl BranchForm {
    pub fn from_branch(branch: &Branch) -> Self {
        Self {
            nama_cabang: branch.nama_cabang.clone(),
            alamat: branch.alamat.clone().unwrap_or_default(),
            telepon: branch.telepon.clone().unwrap_or_default(),
            status: branch.active_status().unwrap_or(ActiveStatus::Aktif),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.nama_cabang.trim().is_empty() {
            return Err("Nama cabang wajib diisi".into());
        }
        if self.alamat.trim().is_empty() {
            return Err("Alamat cabang wajib diisi".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_with_id_alias_and_nulls() {
        let branch: Branch = serde_json::from_str(
            r#"{"id":3,"nama_cabang":"Cabang Dago","alamat":null,"status":"aktif"}"#,
        )
        .unwrap();
        assert_eq!(branch.id(), 3);
        assert_eq!(branch.alamat, None);
        assert_eq!(branch.active_status(), Some(ActiveStatus::Aktif));
        assert_eq!(Branch::item_path(3), "/api/cabang/3");
    }

    #[test]
    fn form_requires_name_and_address() {
        let mut form = BranchForm::default();
        assert!(form.validate().is_err());
        form.nama_cabang = "Cabang Dago".into();
        form.alamat = "Jl. Dago 12".into();
        assert!(form.validate().is_ok());
    }
}
