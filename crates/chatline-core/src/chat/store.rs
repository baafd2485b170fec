//! Session store: per-conversation state keyed by identity.
//!
//! The store is the only shared mutable resource in the relay. Each entry
//! guards one conversation, so unrelated conversations never contend on a
//! single lock. Sessions are created lazily on first reference and live for
//! the process lifetime; no mutable handle to a session escapes the store.

use dashmap::DashMap;

use chatline_types::chat::ConversationId;

use super::transcript::TranscriptWindow;

/// Per-conversation state: the single-flight lock flag and the transcript.
#[derive(Debug, Default)]
pub(crate) struct Session {
    pub(crate) locked: bool,
    pub(crate) transcript: TranscriptWindow,
}

/// Mapping from conversation identity to session state.
///
/// All transcript and lock access goes through store methods; callers get
/// copies, never references into the map.
#[derive(Debug, Default)]
pub struct SessionStore {
    pub(crate) sessions: DashMap<ConversationId, Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure a session exists for `identity`, creating an empty unlocked
    /// one if absent. Never fails.
    pub fn get_or_create(&self, identity: &ConversationId) {
        self.sessions.entry(identity.clone()).or_default();
    }

    /// Unconditionally replace any existing session with a fresh one.
    ///
    /// Discards the prior transcript and clears the lock flag. Used when the
    /// conversation-start command is received.
    pub fn reset(&self, identity: &ConversationId) {
        self.sessions.insert(identity.clone(), Session::default());
    }

    /// Current lock state, without mutating.
    ///
    /// Unknown identities read as unlocked; callers probe before creating.
    pub fn is_locked(&self, identity: &ConversationId) -> bool {
        self.sessions
            .get(identity)
            .map(|session| session.locked)
            .unwrap_or(false)
    }

    /// Append a turn line to the conversation's transcript, creating the
    /// session if needed.
    pub fn append(&self, identity: &ConversationId, line: &str) {
        self.sessions
            .entry(identity.clone())
            .or_default()
            .transcript
            .append(line);
    }

    /// Render the conversation's transcript as a completion prompt body.
    ///
    /// Unknown identities render as the empty string.
    pub fn render(&self, identity: &ConversationId) -> String {
        self.sessions
            .get(identity)
            .map(|session| session.transcript.render())
            .unwrap_or_default()
    }

    /// Snapshot of the transcript lines for `identity`, in order.
    pub fn transcript_lines(&self, identity: &ConversationId) -> Vec<String> {
        self.sessions
            .get(identity)
            .map(|session| session.transcript.lines())
            .unwrap_or_default()
    }

    /// Number of sessions currently held, for the health endpoint.
    pub fn active_sessions(&self) -> usize {
        self.sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ConversationId {
        ConversationId::new(s)
    }

    #[test]
    fn test_get_or_create_is_lazy_and_idempotent() {
        let store = SessionStore::new();
        assert_eq!(store.active_sessions(), 0);

        store.get_or_create(&id("5511999999999"));
        assert_eq!(store.active_sessions(), 1);
        assert!(!store.is_locked(&id("5511999999999")));

        store.get_or_create(&id("5511999999999"));
        assert_eq!(store.active_sessions(), 1);
    }

    #[test]
    fn test_is_locked_unknown_identity_is_false() {
        let store = SessionStore::new();
        assert!(!store.is_locked(&id("unknown")));
        // Probing must not create a session.
        assert_eq!(store.active_sessions(), 0);
    }

    #[test]
    fn test_append_creates_session() {
        let store = SessionStore::new();
        store.append(&id("a"), "a: hi");
        assert_eq!(store.active_sessions(), 1);
        assert_eq!(store.transcript_lines(&id("a")), vec!["a: hi"]);
    }

    #[test]
    fn test_reset_discards_transcript_and_lock() {
        let store = SessionStore::new();
        for i in 0..7 {
            store.append(&id("a"), &format!("line-{i}"));
        }
        let guard = store.try_enter(&id("a"));
        assert!(guard.is_some());
        assert!(store.is_locked(&id("a")));

        store.reset(&id("a"));
        assert!(!store.is_locked(&id("a")));
        assert!(store.transcript_lines(&id("a")).is_empty());
        drop(guard);
    }

    #[test]
    fn test_render_unknown_identity_is_empty() {
        let store = SessionStore::new();
        assert_eq!(store.render(&id("nobody")), "");
    }

    #[test]
    fn test_sessions_are_independent() {
        let store = SessionStore::new();
        store.append(&id("a"), "a: hi");
        store.append(&id("b"), "b: yo");
        assert_eq!(store.transcript_lines(&id("a")), vec!["a: hi"]);
        assert_eq!(store.transcript_lines(&id("b")), vec!["b: yo"]);
    }
}
