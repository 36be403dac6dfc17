//! Durable vendor session storage. The bearer token and the serialized vendor
//! profile live under two fixed keys that are always written together and read
//! together. The storage backend is injected through `SessionStore` so the
//! flow logic can run against an in-memory double in tests; the running app
//! uses `window.localStorage`.

use crate::app_lib::AppError;
use crate::features::auth::types::VendorInfo;

pub const TOKEN_KEY: &str = "vendorToken";
pub const INFO_KEY: &str = "vendorInfo";

/// Narrow key-value contract over the browser's durable storage.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Persists the session credentials. Token and profile go in as a pair; the
/// profile is serialized first so a failure leaves storage untouched.
pub fn persist(
    store: &impl SessionStore,
    token: &str,
    vendor: &VendorInfo,
) -> Result<(), AppError> {
    let info = serde_json::to_string(vendor)
        .map_err(|err| AppError::Serialization(format!("Failed to encode session: {err}")))?;
    store.set(TOKEN_KEY, token);
    store.set(INFO_KEY, &info);
    Ok(())
}

/// Reads the bearer token, treating an empty value as absent.
pub fn token(store: &impl SessionStore) -> Option<String> {
    store.get(TOKEN_KEY).filter(|value| !value.is_empty())
}

/// Loads the full session; both keys must be present and decodable.
pub fn load(store: &impl SessionStore) -> Option<(String, VendorInfo)> {
    let token = token(store)?;
    let vendor = serde_json::from_str(&store.get(INFO_KEY)?).ok()?;
    Some((token, vendor))
}

/// Clears both session keys.
pub fn clear(store: &impl SessionStore) {
    store.remove(TOKEN_KEY);
    store.remove(INFO_KEY);
}

/// `localStorage`-backed store used by the running app.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Default)]
pub struct BrowserSession;

#[cfg(target_arch = "wasm32")]
impl BrowserSession {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok()).flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionStore for BrowserSession {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(key).ok()).flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory store for unit tests.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct MemorySession(std::cell::RefCell<std::collections::HashMap<String, String>>);

#[cfg(test)]
impl SessionStore for MemorySession {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.0.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.0.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vendor() -> VendorInfo {
        VendorInfo {
            id: "v-1".to_string(),
            email: "a@b.com".to_string(),
            name: Some("Stall One".to_string()),
            status: None,
        }
    }

    #[test]
    fn persist_writes_both_keys_together() {
        let store = MemorySession::default();
        persist(&store, "T", &vendor()).expect("persist failed");

        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("T"));
        let info = store.get(INFO_KEY).expect("missing vendor info");
        let decoded: VendorInfo = serde_json::from_str(&info).expect("bad vendor info");
        assert_eq!(decoded, vendor());
    }

    #[test]
    fn load_requires_both_keys() {
        let store = MemorySession::default();
        assert!(load(&store).is_none());

        store.set(TOKEN_KEY, "T");
        assert!(load(&store).is_none());

        persist(&store, "T", &vendor()).expect("persist failed");
        let (token, decoded) = load(&store).expect("expected session");
        assert_eq!(token, "T");
        assert_eq!(decoded.email, "a@b.com");
    }

    #[test]
    fn empty_token_counts_as_absent() {
        let store = MemorySession::default();
        store.set(TOKEN_KEY, "");
        assert_eq!(token(&store), None);
    }

    #[test]
    fn clear_removes_both_keys() {
        let store = MemorySession::default();
        persist(&store, "T", &vendor()).expect("persist failed");
        clear(&store);
        assert!(store.get(TOKEN_KEY).is_none());
        assert!(store.get(INFO_KEY).is_none());
    }
}
