use serde::{Deserialize, Serialize};

use crate::domain::a001_branch::BranchRef;
use crate::domain::common::{lenient, ActiveStatus, Resource};

/// Employee (karyawan) record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(alias = "id", deserialize_with = "lenient::i64_or_zero")]
    pub id_karyawan: i64,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub nama: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub jabatan: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub telepon: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub alamat: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub gaji: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub id_cabang: Option<i64>,
    #[serde(default)]
    pub cabang: Option<BranchRef>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub status: Option<String>,
}

impl Employee {
    pub fn active_status(&self) -> Option<ActiveStatus> {
        self.status.as_deref().and_then(ActiveStatus::from_code)
    }

    pub fn branch_name(&self) -> &str {
        self.cabang
            .as_ref()
            .map(|c| c.nama_cabang.as_str())
            .unwrap_or("")
    }
}

impl Resource for Employee {
    fn collection_name() -> &'static str {
        "karyawan"
    }

    fn element_name() -> &'static str {
        "Karyawan"
    }

    fn list_name() -> &'static str {
        "Daftar Karyawan"
    }

    fn id(&self) -> i64 {
        self.id_karyawan
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeForm {
    pub nama: String,
    pub jabatan: String,
    pub telepon: String,
    pub alamat: String,
    pub gaji: f64,
    pub id_cabang: Option<i64>,
    pub status: ActiveStatus,
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self {
            nama: String::new(),
            jabatan: String::new(),
            telepon: String::new(),
            alamat: String::new(),
            gaji: 0.0,
            id_cabang: None,
            status: ActiveStatus::Aktif,
        }
    }
}

impl EmployeeForm {
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            nama: employee.nama.clone().unwrap_or_default(),
            jabatan: employee.jabatan.clone().unwrap_or_default(),
            telepon: employee.telepon.clone().unwrap_or_default(),
            alamat: employee.alamat.clone().unwrap_or_default(),
            gaji: employee.gaji.unwrap_or(0.0),
            id_cabang: employee.id_cabang,
            status: employee.active_status().unwrap_or(ActiveStatus::Aktif),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.nama.trim().is_empty() {
            return Err("Nama karyawan wajib diisi".into());
        }
        if self.jabatan.trim().is_empty() {
            return Err("Jabatan wajib diisi".into());
        }
        if self.id_cabang.is_none() {
            return Err("Cabang wajib dipilih".into());
        }
        if self.gaji < 0.0 {
            return Err("Gaji tidak boleh negatif".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_nested_branch_yields_empty_name() {
        let employee: Employee =
            serde_json::from_str(r#"{"id_karyawan":9,"nama":"Rina","cabang":null}"#).unwrap();
        assert_eq!(employee.branch_name(), "");
        assert_eq!(employee.jabatan, None);
    }

    #[test]
    fn form_requires_branch() {
        let form = EmployeeForm {
            nama: "Rina".into(),
            jabatan: "Koki".into(),
            ..EmployeeForm::default()
        };
        assert_eq!(form.validate(), Err("Cabang wajib dipilih".to_string()));
    }
}
