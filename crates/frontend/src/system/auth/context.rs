use contracts::domain::a001_branch::BranchRef;
use contracts::shared::api::ApiError;
use contracts::system::access::{self, Capability};
use contracts::system::auth::{LoginResponse, Role, SessionUser};
use leptos::prelude::*;

use super::{api, storage};
use crate::shared::api_client::ApiClient;

/// Logged-in session: token, user and the branch queries are scoped to.
///
/// Built once from localStorage when the app mounts and provided through
/// context; pages never read storage themselves.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub token: RwSignal<Option<String>>,
    pub user: RwSignal<Option<SessionUser>>,
    pub branch: RwSignal<Option<BranchRef>>,
}

/// Branch id list queries are narrowed to.
///
/// A super admin works across all branches unless one was picked in the
/// branch switcher. Everyone else is pinned to their own branch.
pub fn resolve_branch_scope(
    user: Option<&SessionUser>,
    selected: Option<&BranchRef>,
) -> Option<i64> {
    match user.and_then(SessionUser::role) {
        Some(Role::SuperAdmin) => selected.map(|b| b.id_cabang),
        _ => user
            .and_then(|u| u.id_cabang)
            .or_else(|| selected.map(|b| b.id_cabang)),
    }
}

impl SessionContext {
    pub fn from_storage() -> Self {
        let token = storage::get_token();
        let user = storage::get_user();
        // Token without a readable user cannot be role-checked
        let (token, user) = match (token, user) {
            (Some(t), Some(u)) => (Some(t), Some(u)),
            (None, None) => (None, None),
            _ => {
                log::info!("discarding incomplete stored session");
                storage::clear_session();
                (None, None)
            }
        };
        if let Some(u) = &user {
            log::info!("restored session for {} ({})", u.display_name(), u.role);
        }
        Self {
            token: RwSignal::new(token),
            user: RwSignal::new(user),
            branch: RwSignal::new(storage::get_branch()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.with(Option::is_some)
    }

    pub fn role(&self) -> Option<Role> {
        self.user.with(|u| u.as_ref().and_then(SessionUser::role))
    }

    /// Single permission check used by menus, guards and action buttons
    pub fn can(&self, capability: Capability) -> bool {
        access::can(self.role(), capability)
    }

    pub fn branch_scope(&self) -> Option<i64> {
        let user = self.user.get();
        let branch = self.branch.get();
        resolve_branch_scope(user.as_ref(), branch.as_ref())
    }

    /// Untracked variant for use inside event handlers
    pub fn branch_scope_untracked(&self) -> Option<i64> {
        let user = self.user.get_untracked();
        let branch = self.branch.get_untracked();
        resolve_branch_scope(user.as_ref(), branch.as_ref())
    }

    pub fn branch_label(&self) -> String {
        match self.branch.get() {
            Some(b) if !b.nama_cabang.is_empty() => b.nama_cabang,
            _ if self.role() == Some(Role::SuperAdmin) => "Semua Cabang".to_string(),
            _ => "-".to_string(),
        }
    }

    /// Client carrying the current bearer token
    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.token.get_untracked())
    }

    pub fn sign_in(&self, response: LoginResponse) {
        log::info!(
            "signed in as {} ({})",
            response.user.display_name(),
            response.user.role
        );
        storage::save_token(&response.token);
        storage::save_user(&response.user);
        storage::save_branch(response.cabang.as_ref());
        self.branch.set(response.cabang);
        self.user.set(Some(response.user));
        self.token.set(Some(response.token));
    }

    /// Super admin branch switcher; `None` means all branches
    pub fn select_branch(&self, branch: Option<BranchRef>) {
        if !self.can(Capability::SwitchBranch) {
            return;
        }
        storage::save_branch(branch.as_ref());
        self.branch.set(branch);
    }

    fn clear(&self) {
        storage::clear_session();
        self.token.set(None);
        self.user.set(None);
        self.branch.set(None);
    }

    /// Called when the backend rejects the token
    pub fn expire(&self) {
        if self.token.get_untracked().is_some() {
            log::info!("session expired");
            self.clear();
        }
    }

    pub async fn sign_out(&self) -> Result<(), ApiError> {
        let result = api::logout(&self.client()).await;
        if let Err(e) = &result {
            log::warn!("logout request failed: {}", e);
        }
        log::info!("signed out");
        self.clear();
        result
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: &str, branch: Option<i64>) -> SessionUser {
        SessionUser {
            id: 1,
            nama: "Budi".into(),
            email: None,
            role: role.into(),
            id_cabang: branch,
        }
    }

    fn branch(id: i64) -> BranchRef {
        BranchRef {
            id_cabang: id,
            nama_cabang: format!("Cabang {}", id),
        }
    }

    #[test]
    fn super_admin_scope_follows_the_switcher() {
        let u = user("super admin", None);
        assert_eq!(resolve_branch_scope(Some(&u), None), None);
        assert_eq!(resolve_branch_scope(Some(&u), Some(&branch(4))), Some(4));
    }

    #[test]
    fn branch_staff_are_pinned_to_their_branch() {
        let u = user("admin", Some(2));
        assert_eq!(resolve_branch_scope(Some(&u), Some(&branch(4))), Some(2));
        let k = user("kasir", None);
        assert_eq!(resolve_branch_scope(Some(&k), Some(&branch(3))), Some(3));
    }

    #[test]
    fn no_user_no_scope() {
        assert_eq!(resolve_branch_scope(None, None), None);
    }
}
