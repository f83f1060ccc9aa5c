//! Admin session cookies.
//!
//! The browser owns both cookies; this service reads them on every admin
//! request and writes them only at login and logout. Access goes through
//! [`SessionStore`] so guards can run against an in-memory jar in tests.

mod cookies;

pub use cookies::CookieSessionStore;

use std::collections::HashMap;
use std::sync::Mutex;

use crate::authz::AdminPermissionSet;
use crate::errors::AppError;

pub const ADMIN_TOKEN_COOKIE: &str = "admin_token";
pub const ADMIN_DATA_COOKIE: &str = "admin_data";

pub trait SessionStore: Send + Sync {
    fn get(&self, name: &str) -> Option<String>;
    fn set(&self, name: &str, value: String);
    fn clear(&self, name: &str);
}

/// The admin bearer credential. Empty values count as absent.
pub fn admin_token(store: &dyn SessionStore) -> Option<String> {
    store.get(ADMIN_TOKEN_COOKIE).filter(|token| !token.trim().is_empty())
}

pub fn admin_data_raw(store: &dyn SessionStore) -> Option<String> {
    store.get(ADMIN_DATA_COOKIE)
}

pub fn store_admin_session(
    store: &dyn SessionStore,
    token: &str,
    permissions: &AdminPermissionSet,
) -> Result<(), AppError> {
    let data = permissions
        .to_json()
        .map_err(|err| AppError::internal(format!("failed to encode admin_data: {err}")))?;

    store.set(ADMIN_TOKEN_COOKIE, token.to_string());
    store.set(ADMIN_DATA_COOKIE, data);
    Ok(())
}

pub fn clear_admin_session(store: &dyn SessionStore) {
    store.clear(ADMIN_TOKEN_COOKIE);
    store.clear(ADMIN_DATA_COOKIE);
}

/// Cookie jar kept in memory.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, value.into());
        self
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, name: &str) -> Option<String> {
        self.values
            .lock()
            .ok()
            .and_then(|values| values.get(name).cloned())
    }

    fn set(&self, name: &str, value: String) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(name.to_string(), value);
        }
    }

    fn clear(&self, name: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.remove(name);
        }
    }
}
