//! Persisted session: the `token`, `user` and `cabang` localStorage keys.

use contracts::domain::a001_branch::BranchRef;
use contracts::system::auth::SessionUser;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::window;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";
const BRANCH_KEY: &str = "cabang";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn get_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = get_local_storage()?.get_item(key).ok()??;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("ignoring malformed '{}' in storage: {}", key, e);
            None
        }
    }
}

fn set_json<T: Serialize>(key: &str, value: &T) {
    let Some(storage) = get_local_storage() else {
        return;
    };
    match serde_json::to_string(value) {
        Ok(raw) => {
            let _ = storage.set_item(key, &raw);
        }
        Err(e) => log::warn!("failed to persist '{}': {}", key, e),
    }
}

pub fn save_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

/// Stored bearer token; blank values count as absent
pub fn get_token() -> Option<String> {
    get_local_storage()?
        .get_item(TOKEN_KEY)
        .ok()?
        .filter(|t| !t.trim().is_empty())
}

pub fn save_user(user: &SessionUser) {
    set_json(USER_KEY, user);
}

pub fn get_user() -> Option<SessionUser> {
    get_json(USER_KEY)
}

pub fn save_branch(branch: Option<&BranchRef>) {
    match branch {
        Some(branch) => set_json(BRANCH_KEY, branch),
        None => {
            if let Some(storage) = get_local_storage() {
                let _ = storage.remove_item(BRANCH_KEY);
            }
        }
    }
}

pub fn get_branch() -> Option<BranchRef> {
    get_json(BRANCH_KEY)
}

/// Removes every session key
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        for key in [TOKEN_KEY, USER_KEY, BRANCH_KEY] {
            let _ = storage.remove_item(key);
        }
    }
}
