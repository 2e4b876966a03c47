use serde::{Deserialize, Serialize};

use crate::domain::a001_branch::BranchRef;
use crate::domain::common::lenient;

/// Dashboard roles as assigned by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    SuperAdmin,
    Admin,
    Kasir,
}

impl Role {
    pub fn code(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::Admin => "admin",
            Role::Kasir => "kasir",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super Admin",
            Role::Admin => "Admin Cabang",
            Role::Kasir => "Kasir",
        }
    }

    /// Parses the role field of the stored user; spacing, case and
    /// separators vary between backend versions.
    pub fn from_code(code: &str) -> Option<Self> {
        let normalized: String = code
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect();
        match normalized.as_str() {
            "superadmin" => Some(Role::SuperAdmin),
            "admin" | "admincabang" | "branchadmin" => Some(Role::Admin),
            "kasir" | "cashier" => Some(Role::Kasir),
            _ => None,
        }
    }
}

/// Logged-in user as persisted under the `user` storage key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default, deserialize_with = "lenient::i64_or_zero")]
    pub id: i64,
    #[serde(default)]
    pub nama: String,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub email: Option<String>,
    #[serde(default)]
    pub role: String,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub id_cabang: Option<i64>,
}

impl SessionUser {
    pub fn role(&self) -> Option<Role> {
        Role::from_code(&self.role)
    }

    /// Display name; falls back to the email when the name is blank
    pub fn display_name(&self) -> String {
        if self.nama.trim().is_empty() {
            self.email.clone().unwrap_or_else(|| "Pengguna".to_string())
        } else {
            self.nama.clone()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `data` of a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "access_token")]
    pub token: String,
    pub user: SessionUser,
    #[serde(default)]
    pub cabang: Option<BranchRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_spellings() {
        assert_eq!(Role::from_code("super admin"), Some(Role::SuperAdmin));
        assert_eq!(Role::from_code("Super_Admin"), Some(Role::SuperAdmin));
        assert_eq!(Role::from_code("SUPERADMIN"), Some(Role::SuperAdmin));
        assert_eq!(Role::from_code("admin"), Some(Role::Admin));
        assert_eq!(Role::from_code("Kasir"), Some(Role::Kasir));
        assert_eq!(Role::from_code("cashier"), Some(Role::Kasir));
        assert_eq!(Role::from_code("owner"), None);
        assert_eq!(Role::from_code(""), None);
    }

    #[test]
    fn stored_user_decodes_with_missing_fields() {
        let user: SessionUser =
            serde_json::from_str(r#"{"id":"4","nama":"Sari","role":"kasir","id_cabang":null}"#)
                .unwrap();
        assert_eq!(user.id, 4);
        assert_eq!(user.role(), Some(Role::Kasir));
        assert_eq!(user.id_cabang, None);
        assert_eq!(user.email, None);

        let user: SessionUser = serde_json::from_str(r#"{"email":"a@b.c"}"#).unwrap();
        assert_eq!(user.role(), None);
        assert_eq!(user.display_name(), "a@b.c");
    }

    #[test]
    fn login_response_accepts_access_token_alias() {
        let resp: LoginResponse = serde_json::from_str(
            r#"{"access_token":"abc","user":{"id":1,"nama":"Budi","role":"admin","id_cabang":2},
                "cabang":{"id_cabang":2,"nama_cabang":"Cabang Sudirman"}}"#,
        )
        .unwrap();
        assert_eq!(resp.token, "abc");
        assert_eq!(resp.cabang.map(|c| c.id_cabang), Some(2));
    }
}
