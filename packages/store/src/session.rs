//! # Persisted session record
//!
//! A session is two `localStorage` entries:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`AUTH_TOKEN_KEY`] (`"authToken"`) | opaque token placeholder |
//! | [`USER_DATA_KEY`] (`"userData"`) | JSON-encoded [`Identity`] |
//!
//! Presence of both entries (with a parseable identity) is the whole session
//! validity check. There is no expiry and no server verification.

use serde::{Deserialize, Serialize};

use crate::kv::KeyValueStore;
use crate::StoreError;

pub const AUTH_TOKEN_KEY: &str = "authToken";
pub const USER_DATA_KEY: &str = "userData";

/// The signed-in administrator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl Identity {
    /// The built-in administrator identity written on a successful login.
    pub fn administrator(email: &str) -> Self {
        Self {
            id: 1,
            name: "Admin User".to_string(),
            email: email.to_string(),
            role: "admin".to_string(),
        }
    }

    /// Get display name, falling back to email if name is empty.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub identity: Identity,
    pub token: String,
}

impl Session {
    /// Restore the session from `store`. Returns `None` unless both keys are
    /// present and the identity decodes.
    pub fn load(store: &impl KeyValueStore) -> Option<Self> {
        let token = store.get(AUTH_TOKEN_KEY)?;
        let raw = store.get(USER_DATA_KEY)?;
        match serde_json::from_str::<Identity>(&raw) {
            Ok(identity) => Some(Self { identity, token }),
            Err(e) => {
                tracing::warn!("Discarding unreadable stored identity: {}", e);
                None
            }
        }
    }

    pub fn save(&self, store: &impl KeyValueStore) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(&self.identity)?;
        store.set(AUTH_TOKEN_KEY, &self.token)?;
        store.set(USER_DATA_KEY, &encoded)
    }

    /// Remove both session keys.
    pub fn clear(store: &impl KeyValueStore) -> Result<(), StoreError> {
        store.remove(AUTH_TOKEN_KEY)?;
        store.remove(USER_DATA_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use pretty_assertions::assert_eq;

    fn sample() -> Session {
        Session {
            identity: Identity::administrator("admin@nellisauto.com"),
            token: "dummy-auth-token".to_string(),
        }
    }

    #[test]
    fn test_save_and_load() {
        let store = MemoryStore::new();
        sample().save(&store).unwrap();

        assert_eq!(Session::load(&store), Some(sample()));
        assert_eq!(
            store.get(AUTH_TOKEN_KEY).as_deref(),
            Some("dummy-auth-token")
        );
    }

    #[test]
    fn test_load_requires_both_keys() {
        let store = MemoryStore::new();
        store.set(AUTH_TOKEN_KEY, "dummy-auth-token").unwrap();
        assert!(Session::load(&store).is_none());

        let store = MemoryStore::new();
        store
            .set(USER_DATA_KEY, r#"{"id":1,"name":"A","email":"a@b.c","role":"admin"}"#)
            .unwrap();
        assert!(Session::load(&store).is_none());
    }

    #[test]
    fn test_load_rejects_garbage_identity() {
        let store = MemoryStore::new();
        store.set(AUTH_TOKEN_KEY, "t").unwrap();
        store.set(USER_DATA_KEY, "not json").unwrap();
        assert!(Session::load(&store).is_none());
    }

    #[test]
    fn test_clear() {
        let store = MemoryStore::new();
        sample().save(&store).unwrap();
        Session::clear(&store).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let mut identity = Identity::administrator("admin@nellisauto.com");
        assert_eq!(identity.display_name(), "Admin User");
        identity.name.clear();
        assert_eq!(identity.display_name(), "admin@nellisauto.com");
    }
}
