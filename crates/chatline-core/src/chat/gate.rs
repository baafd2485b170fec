//! Single-flight gate: at most one in-flight processing cycle per identity.
//!
//! The gate rejects a second concurrent cycle instead of queueing it; the
//! caller answers with a busy notice and touches nothing. Acquisition is
//! non-blocking and scoped: the returned guard clears the lock flag on drop,
//! so every exit path of a processing cycle releases the gate.

use chatline_types::chat::ConversationId;

use super::store::SessionStore;

/// RAII guard for one processing cycle.
///
/// Held for the duration of a cycle; dropping it unlocks the session. This
/// covers normal completion, backend failure, the completion deadline, and
/// unwinding alike -- a session can never stay locked after its cycle ends.
#[must_use = "dropping the guard releases the gate"]
pub struct SessionGuard<'a> {
    store: &'a SessionStore,
    identity: ConversationId,
}

impl Drop for SessionGuard<'_> {
    fn drop(&mut self) {
        self.store.release(&self.identity);
    }
}

impl SessionStore {
    /// Try to begin a processing cycle for `identity`.
    ///
    /// Creates the session if absent. Returns `None` when the session is
    /// already locked; otherwise flips the lock flag under the per-entry
    /// lock and returns the guard. Non-blocking either way.
    pub fn try_enter(&self, identity: &ConversationId) -> Option<SessionGuard<'_>> {
        let mut session = self.sessions.entry(identity.clone()).or_default();
        if session.locked {
            return None;
        }
        session.locked = true;
        drop(session);
        Some(SessionGuard {
            store: self,
            identity: identity.clone(),
        })
    }

    /// Clear the lock flag for `identity`. Unknown identities are a no-op.
    fn release(&self, identity: &ConversationId) {
        if let Some(mut session) = self.sessions.get_mut(identity) {
            session.locked = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ConversationId {
        ConversationId::new(s)
    }

    #[test]
    fn test_try_enter_locks_session() {
        let store = SessionStore::new();
        let guard = store.try_enter(&id("a"));
        assert!(guard.is_some());
        assert!(store.is_locked(&id("a")));
    }

    #[test]
    fn test_second_enter_is_rejected() {
        let store = SessionStore::new();
        let _guard = store.try_enter(&id("a")).unwrap();
        assert!(store.try_enter(&id("a")).is_none());
    }

    #[test]
    fn test_drop_releases_gate() {
        let store = SessionStore::new();
        {
            let _guard = store.try_enter(&id("a")).unwrap();
            assert!(store.is_locked(&id("a")));
        }
        assert!(!store.is_locked(&id("a")));
        assert!(store.try_enter(&id("a")).is_some());
    }

    #[test]
    fn test_identities_do_not_contend() {
        let store = SessionStore::new();
        let _a = store.try_enter(&id("a")).unwrap();
        let b = store.try_enter(&id("b"));
        assert!(b.is_some());
    }

    #[test]
    fn test_release_survives_early_return() {
        let store = SessionStore::new();
        fn cycle(store: &SessionStore, fail: bool) -> Result<(), ()> {
            let _guard = store.try_enter(&ConversationId::new("a")).ok_or(())?;
            if fail {
                return Err(());
            }
            Ok(())
        }
        assert!(cycle(&store, true).is_err());
        assert!(!store.is_locked(&id("a")));
        assert!(cycle(&store, false).is_ok());
        assert!(!store.is_locked(&id("a")));
    }
}
