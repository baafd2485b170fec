//! Relay service: orchestrates one inbound message end to end.
//!
//! Gate check, transcript append, prompt assembly, completion call, reply
//! append, delivery, gate release. Generic over the completion and delivery
//! collaborators; chatline-api pins the concrete infra implementations.

use std::time::Duration;

use tokio::time::timeout;
use tracing::{debug, info, warn};

use chatline_types::chat::ConversationId;
use chatline_types::completion::CompletionRequest;
use chatline_types::message::InboundMessage;

use crate::gateway::MessageDelivery;
use crate::llm::CompletionBackend;

use super::store::SessionStore;

/// Command text that (re)starts a conversation.
pub const TRIGGER_TOKEN: &str = "!chat";

/// Role tag for assistant turns in the transcript. User turns are tagged
/// with the conversation identity itself.
pub const ASSISTANT_TAG: &str = "ASSISTANT";

/// Sent after a conversation (re)start.
pub const WELCOME_MESSAGE: &str = "Welcome to Chatline! How can I help you today?";

/// Sent when a processing cycle is already in flight for the identity.
pub const BUSY_MESSAGE: &str = "One moment please";

/// Sent when the completion backend fails or returns nothing.
pub const FAILURE_MESSAGE: &str =
    "Sorry, I had trouble processing that. You can restart our conversation by sending !chat again.";

/// Hard deadline on the completion call. An abandoned backend request must
/// not hold the session gate past this.
const COMPLETION_DEADLINE: Duration = Duration::from_secs(60);

/// Completion sampling parameters, fixed for every request.
const TEMPERATURE: f64 = 0.9;
const TOP_P: f64 = 1.0;
const MAX_TOKENS: u32 = 500;
const FREQUENCY_PENALTY: f64 = 0.0;
const PRESENCE_PENALTY: f64 = 0.6;

/// Terminal state of one inbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayOutcome {
    /// Echo or empty message; nothing happened.
    Ignored,
    /// Conversation-start command handled.
    Welcomed,
    /// A cycle was already in flight; busy notice sent.
    Busy,
    /// Completion delivered.
    Replied,
    /// Backend failed or returned nothing; failure notice sent.
    Failed,
}

/// The conversation controller.
///
/// Owns the session store; the hosting application constructs one relay per
/// process and shares it across webhook calls.
pub struct ChatRelay<C, D> {
    sessions: SessionStore,
    completion: C,
    delivery: D,
    model: String,
}

impl<C, D> ChatRelay<C, D>
where
    C: CompletionBackend,
    D: MessageDelivery,
{
    pub fn new(sessions: SessionStore, completion: C, delivery: D, model: impl Into<String>) -> Self {
        Self {
            sessions,
            completion,
            delivery,
            model: model.into(),
        }
    }

    /// The session store, for liveness reporting.
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Handle one inbound message to its terminal state.
    ///
    /// Never returns an error: backend failures are conversational (the user
    /// gets a fixed notice), and delivery failures are logged only.
    pub async fn handle(&self, message: &InboundMessage) -> RelayOutcome {
        if message.is_echo || message.text.is_empty() {
            debug!(identity = %message.identity, echo = message.is_echo, "ignoring message");
            return RelayOutcome::Ignored;
        }

        if message.text == TRIGGER_TOKEN {
            return self.start_conversation(&message.identity).await;
        }

        let Some(_guard) = self.sessions.try_enter(&message.identity) else {
            info!(identity = %message.identity, "cycle already in flight, sending busy notice");
            self.deliver(&message.identity, BUSY_MESSAGE).await;
            return RelayOutcome::Busy;
        };
        self.process(&message.identity, &message.text).await
    }

    /// Reset the session and greet. Does not take the gate: re-initialization
    /// is idempotent and must work even while a stale cycle is in flight.
    async fn start_conversation(&self, identity: &ConversationId) -> RelayOutcome {
        info!(identity = %identity, "conversation start command received");
        self.sessions.reset(identity);
        self.deliver(identity, WELCOME_MESSAGE).await;
        self.sessions
            .append(identity, &format!("{ASSISTANT_TAG}: {WELCOME_MESSAGE}"));
        RelayOutcome::Welcomed
    }

    /// One processing cycle. The caller holds the session gate.
    async fn process(&self, identity: &ConversationId, text: &str) -> RelayOutcome {
        self.sessions.append(identity, &format!("{identity}: {text}"));
        self.sessions.append(identity, &format!("{ASSISTANT_TAG}:"));

        let request = CompletionRequest {
            model: self.model.clone(),
            prompt: self.sessions.render(identity),
            temperature: TEMPERATURE,
            top_p: TOP_P,
            max_tokens: MAX_TOKENS,
            frequency_penalty: FREQUENCY_PENALTY,
            presence_penalty: PRESENCE_PENALTY,
            stop: vec![format!("{identity}:"), format!("{ASSISTANT_TAG}:")],
        };

        let response = match timeout(COMPLETION_DEADLINE, self.completion.complete(&request)).await
        {
            Ok(Ok(response)) => response,
            Ok(Err(err)) => {
                warn!(identity = %identity, error = %err, "completion backend failed");
                return self.fail(identity).await;
            }
            Err(_) => {
                warn!(identity = %identity, "completion deadline exceeded");
                return self.fail(identity).await;
            }
        };

        let Some(raw) = response.first_text() else {
            warn!(identity = %identity, "completion backend returned no choices");
            return self.fail(identity).await;
        };

        // The transcript keeps the raw text (leading whitespace preserved);
        // the user gets the trimmed form.
        let reply = raw.trim().to_string();
        self.sessions.append(identity, raw);
        debug!(identity = %identity, "delivering completion reply");
        self.deliver(identity, &reply).await;
        RelayOutcome::Replied
    }

    /// Failure path: fixed notice pointing the user at the trigger command.
    /// The transcript is not rolled back; the placeholder turn remains.
    async fn fail(&self, identity: &ConversationId) -> RelayOutcome {
        self.deliver(identity, FAILURE_MESSAGE).await;
        RelayOutcome::Failed
    }

    async fn deliver(&self, identity: &ConversationId, message: &str) {
        if let Err(err) = self.delivery.send(identity, message).await {
            warn!(identity = %identity, error = %err, "gateway delivery failed");
        }
    }
}
