//! Session gate
//!
//! Single authority for "is this client authenticated, and as whom".
//! State lives in the injected [`SessionStore`] under two keys:
//! `isLoggedIn` (the literal string `"true"`) and `user` (the public
//! user record as JSON). The invariant is that `user` is meaningful
//! only while the flag reads exactly `"true"`; every other combination
//! reads as not authenticated.

use tracing::warn;

use loginwall_common::{
    PublicUser, Result, KEY_IS_LOGGED_IN, KEY_USER, LOGGED_IN_SENTINEL,
};

use crate::store::SessionStore;

/// What the gate currently knows about the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    Authenticated(PublicUser),
    Anonymous,
}

impl SessionStatus {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionStatus::Authenticated(_))
    }
}

/// Client-side authority over session state.
pub struct SessionGate<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> SessionGate<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Establish a session for `user`.
    ///
    /// The user record is written before the flag. If either write
    /// fails the flag is never left set without a readable record, the
    /// error propagates, and the caller must treat the session as not
    /// established.
    pub fn record_login(&self, user: &PublicUser) -> Result<()> {
        let payload = serde_json::to_string(user)?;
        self.store.set(KEY_USER, &payload)?;
        self.store.set(KEY_IS_LOGGED_IN, LOGGED_IN_SENTINEL)?;
        Ok(())
    }

    /// Tear down the session. Idempotent: absent keys are fine.
    pub fn record_logout(&self) -> Result<()> {
        self.store.remove(KEY_IS_LOGGED_IN)?;
        self.store.remove(KEY_USER)?;
        Ok(())
    }

    /// Read the current session state.
    ///
    /// Authenticated only when the flag reads exactly `"true"` and the
    /// user payload parses as a public user record. Corrupt payloads
    /// and storage failures degrade to [`SessionStatus::Anonymous`];
    /// acting as unauthenticated is always the safe choice, so this
    /// never returns an error.
    pub fn current_session(&self) -> SessionStatus {
        let flag = match self.store.get(KEY_IS_LOGGED_IN) {
            Ok(flag) => flag,
            Err(e) => {
                warn!("session store unreadable, treating as anonymous: {}", e);
                return SessionStatus::Anonymous;
            }
        };

        if flag.as_deref() != Some(LOGGED_IN_SENTINEL) {
            return SessionStatus::Anonymous;
        }

        let payload = match self.store.get(KEY_USER) {
            Ok(Some(payload)) => payload,
            Ok(None) => return SessionStatus::Anonymous,
            Err(e) => {
                warn!("session store unreadable, treating as anonymous: {}", e);
                return SessionStatus::Anonymous;
            }
        };

        match serde_json::from_str::<PublicUser>(&payload) {
            Ok(user) => SessionStatus::Authenticated(user),
            Err(e) => {
                warn!("stored user payload is corrupt, treating as anonymous: {}", e);
                SessionStatus::Anonymous
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use loginwall_common::{Error, KEY_IS_LOGGED_IN, KEY_USER};

    /// Store that always fails, modelling disabled browser storage.
    struct BrokenStore;

    impl SessionStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(Error::StoreUnavailable("storage disabled".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::StoreUnavailable("storage disabled".to_string()))
        }

        fn remove(&self, _key: &str) -> Result<()> {
            Err(Error::StoreUnavailable("storage disabled".to_string()))
        }
    }

    #[test]
    fn cold_start_is_anonymous() {
        let gate = SessionGate::new(MemoryStore::new());
        assert_eq!(gate.current_session(), SessionStatus::Anonymous);
    }

    #[test]
    fn login_round_trips() {
        let gate = SessionGate::new(MemoryStore::new());
        let user = PublicUser::new("admin");
        gate.record_login(&user).unwrap();
        assert_eq!(gate.current_session(), SessionStatus::Authenticated(user));
    }

    #[test]
    fn logout_clears_and_is_idempotent() {
        let gate = SessionGate::new(MemoryStore::new());
        gate.record_login(&PublicUser::new("admin")).unwrap();

        gate.record_logout().unwrap();
        assert_eq!(gate.current_session(), SessionStatus::Anonymous);

        // Second logout with keys already absent must also succeed.
        gate.record_logout().unwrap();
        assert_eq!(gate.current_session(), SessionStatus::Anonymous);
    }

    #[test]
    fn login_writes_exact_storage_contract() {
        let gate = SessionGate::new(MemoryStore::new());
        gate.record_login(&PublicUser::new("admin")).unwrap();

        let store = gate.store();
        assert_eq!(
            store.get(KEY_IS_LOGGED_IN).unwrap(),
            Some("true".to_string())
        );
        let payload = store.get(KEY_USER).unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(json["userName"], "admin");
    }

    #[test]
    fn corrupt_user_payload_degrades_to_anonymous() {
        let gate = SessionGate::new(MemoryStore::new());
        gate.store().set(KEY_IS_LOGGED_IN, "true").unwrap();
        gate.store().set(KEY_USER, "{not json").unwrap();
        assert_eq!(gate.current_session(), SessionStatus::Anonymous);
    }

    #[test]
    fn flag_without_user_is_anonymous() {
        let gate = SessionGate::new(MemoryStore::new());
        gate.store().set(KEY_IS_LOGGED_IN, "true").unwrap();
        assert_eq!(gate.current_session(), SessionStatus::Anonymous);
    }

    #[test]
    fn user_without_flag_is_anonymous() {
        let gate = SessionGate::new(MemoryStore::new());
        gate.store()
            .set(KEY_USER, r#"{"userName":"admin"}"#)
            .unwrap();
        assert_eq!(gate.current_session(), SessionStatus::Anonymous);
    }

    #[test]
    fn non_sentinel_flag_is_anonymous() {
        let gate = SessionGate::new(MemoryStore::new());
        gate.store().set(KEY_IS_LOGGED_IN, "TRUE").unwrap();
        gate.store()
            .set(KEY_USER, r#"{"userName":"admin"}"#)
            .unwrap();
        assert_eq!(gate.current_session(), SessionStatus::Anonymous);
    }

    #[test]
    fn broken_store_degrades_everywhere() {
        let gate = SessionGate::new(BrokenStore);
        assert_eq!(gate.current_session(), SessionStatus::Anonymous);
        assert!(gate.record_login(&PublicUser::new("admin")).is_err());
        assert!(gate.record_logout().is_err());
        // Still anonymous after the failed login attempt.
        assert_eq!(gate.current_session(), SessionStatus::Anonymous);
    }
}
