//! Business logic for the Chatline relay.
//!
//! The chat module holds the conversation session manager: the bounded
//! transcript window, the session store, the single-flight gate, and the
//! relay service that orchestrates one inbound message. The llm and gateway
//! modules define the collaborator traits implemented in chatline-infra.

pub mod chat;
pub mod gateway;
pub mod llm;
