//! # Auth gate
//!
//! [`AuthGate`] owns the in-memory session and keeps it in step with the
//! persisted copy in a [`KeyValueStore`]:
//!
//! - [`AuthGate::open`] restores a stored session synchronously, so the UI can
//!   decide between the login screen and protected content on its first render.
//! - [`AuthGate::login`] compares the submitted pair against the configured
//!   [`Credentials`]. A match persists a new session; anything else leaves the
//!   store untouched.
//! - [`AuthGate::logout`] clears both the store and the in-memory session.
//!
//! The credential check is local and illustrative only. It is not a security
//! boundary.

use crate::kv::KeyValueStore;
use crate::session::{Identity, Session};
use crate::StoreError;

const SESSION_TOKEN: &str = "dummy-auth-token";
const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// The identifier/secret pair the gate accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub identifier: String,
    pub secret: String,
}

impl Credentials {
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
        }
    }

    fn matches(&self, identifier: &str, secret: &str) -> bool {
        self.identifier == identifier && self.secret == secret
    }
}

/// Result of a login attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginOutcome {
    pub success: bool,
    pub error: Option<String>,
}

impl LoginOutcome {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }
}

pub struct AuthGate<S: KeyValueStore> {
    store: S,
    expected: Credentials,
    session: Option<Session>,
}

impl<S: KeyValueStore> AuthGate<S> {
    /// Create a gate and restore any session already persisted in `store`.
    pub fn open(store: S, expected: Credentials) -> Self {
        let session = Session::load(&store);
        if let Some(ref s) = session {
            tracing::debug!("Restored session for {}", s.identity.email);
        }
        Self {
            store,
            expected,
            session,
        }
    }

    pub fn login(&mut self, identifier: &str, secret: &str) -> LoginOutcome {
        if !self.expected.matches(identifier, secret) {
            tracing::warn!("Rejected login for {}", identifier);
            return LoginOutcome::failed(INVALID_CREDENTIALS);
        }

        let session = Session {
            identity: Identity::administrator(identifier),
            token: SESSION_TOKEN.to_string(),
        };
        if let Err(e) = session.save(&self.store) {
            tracing::error!("Failed to persist session: {}", e);
            return LoginOutcome::failed(e.to_string());
        }

        tracing::info!("Signed in as {}", identifier);
        self.session = Some(session);
        LoginOutcome::ok()
    }

    /// Clear the session. The in-memory session is dropped even when the
    /// store rejects the removal.
    pub fn logout(&mut self) -> Result<(), StoreError> {
        self.session = None;
        Session::clear(&self.store)
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.session.as_ref().map(|s| &s.identity)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{AUTH_TOKEN_KEY, USER_DATA_KEY};
    use crate::MemoryStore;

    fn gate(store: MemoryStore) -> AuthGate<MemoryStore> {
        AuthGate::open(
            store,
            Credentials::new("admin@nellisauto.com", "password123"),
        )
    }

    #[test]
    fn test_login_with_expected_pair() {
        let store = MemoryStore::new();
        let mut gate = gate(store.clone());
        assert!(!gate.is_authenticated());

        let outcome = gate.login("admin@nellisauto.com", "password123");
        assert!(outcome.success);
        assert!(outcome.error.is_none());
        assert!(gate.is_authenticated());
        assert_eq!(
            gate.identity().map(|i| i.email.as_str()),
            Some("admin@nellisauto.com")
        );
        assert!(store.get(AUTH_TOKEN_KEY).is_some());
        assert!(store.get(USER_DATA_KEY).is_some());
    }

    #[test]
    fn test_login_with_other_pair_stores_nothing() {
        let store = MemoryStore::new();
        let mut gate = gate(store.clone());

        for (id, secret) in [
            ("admin@nellisauto.com", "wrong"),
            ("someone@else.com", "password123"),
            ("", ""),
        ] {
            let outcome = gate.login(id, secret);
            assert!(!outcome.success);
            assert_eq!(outcome.error.as_deref(), Some("Invalid credentials"));
        }
        assert!(!gate.is_authenticated());
        assert!(store.is_empty());
    }

    #[test]
    fn test_session_survives_reopen() {
        let store = MemoryStore::new();
        let mut first = gate(store.clone());
        first.login("admin@nellisauto.com", "password123");

        let reopened = gate(store);
        assert!(reopened.is_authenticated());
        assert_eq!(
            reopened.identity().map(|i| i.role.as_str()),
            Some("admin")
        );
    }

    #[test]
    fn test_logout_clears_everything() {
        let store = MemoryStore::new();
        let mut auth = gate(store.clone());
        auth.login("admin@nellisauto.com", "password123");

        auth.logout().unwrap();
        assert!(!auth.is_authenticated());
        assert!(store.is_empty());
        assert!(!gate(store).is_authenticated());
    }
}
