//! Conversation identity type.

use serde::{Deserialize, Serialize};

use std::fmt;

/// Opaque key distinguishing one conversation from another.
///
/// The messaging gateway supplies phone-number-like identifiers; Chatline
/// treats them as opaque strings and uses them as the sole key into the
/// session store. The identity also appears verbatim in transcript lines
/// and completion stop sequences, so it must round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationId(String);

impl ConversationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ConversationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ConversationId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_verbatim() {
        let id = ConversationId::new("5511999999999");
        assert_eq!(id.to_string(), "5511999999999");
    }

    #[test]
    fn test_serde_transparent() {
        let id = ConversationId::new("5511999999999");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"5511999999999\"");
        let parsed: ConversationId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_map_key_equality() {
        let a = ConversationId::from("5511999999999");
        let b: ConversationId = "5511999999999".into();
        assert_eq!(a, b);
    }
}
