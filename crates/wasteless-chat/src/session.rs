use chrono::Utc;

use wasteless_models::ChatMessage;

use crate::client::{AssistantApi, AssistantReply};
use crate::error::ExchangeError;

/// Substituted when the greeting fetch fails; the user never sees an empty
/// transcript.
pub const FALLBACK_GREETING: &str = "Hello! How can I help you manage your inventory today?";

/// Appended as an assistant message when a send fails. The user's own
/// message stays in the transcript.
pub const FALLBACK_ERROR_REPLY: &str = "Sorry, I encountered an error. Please try again.";

/// Where the session is in its exchange cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No exchange in flight; input accepted.
    #[default]
    Idle,
    /// A request has been sent; further submissions are no-ops until it
    /// resolves.
    Awaiting,
}

/// What a successful [`ChatSession::submit`] hands the transport: the trimmed
/// message text plus a snapshot of the session id to echo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub message: String,
    pub session_id: Option<String>,
}

/// A linear conversation with the assistant backend.
///
/// The transcript is append-only and chronological. The session id is issued
/// by the backend on the first successful exchange and adopted exactly once;
/// a later response carrying a different id is ignored. All I/O results pass
/// through [`ChatSession::complete`], which maps the failure path to a fixed
/// fallback message, so an error is never fatal to the conversation.
#[derive(Debug, Default)]
pub struct ChatSession {
    transcript: Vec<ChatMessage>,
    session_id: Option<String>,
    phase: Phase,
    closed: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_awaiting(&self) -> bool {
        self.phase == Phase::Awaiting
    }

    /// True until the opening message has been fetched (or substituted).
    pub fn needs_greeting(&self) -> bool {
        self.transcript.is_empty() && !self.closed
    }

    /// Apply the result of the greeting fetch. A failure substitutes the
    /// fixed fallback greeting rather than surfacing an error. Does nothing
    /// if the transcript already has content or the session was torn down.
    pub fn apply_greeting(&mut self, result: Result<String, ExchangeError>) {
        if !self.needs_greeting() {
            return;
        }
        let content = result.unwrap_or_else(|_| FALLBACK_GREETING.to_string());
        self.transcript.push(ChatMessage::assistant(content, Utc::now()));
    }

    /// Accept user input for sending.
    ///
    /// Empty or whitespace-only input, input while an exchange is in flight,
    /// and input after teardown are all silent no-ops: no append, no state
    /// change. Otherwise the trimmed message is appended optimistically, the
    /// session enters [`Phase::Awaiting`], and the caller gets the payload to
    /// put on the wire.
    pub fn submit(&mut self, input: &str) -> Option<OutboundMessage> {
        if self.closed || self.phase == Phase::Awaiting {
            return None;
        }
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.transcript
            .push(ChatMessage::user(trimmed.to_string(), Utc::now()));
        self.phase = Phase::Awaiting;
        Some(OutboundMessage {
            message: trimmed.to_string(),
            session_id: self.session_id.clone(),
        })
    }

    /// Resolve the exchange issued by the last [`ChatSession::submit`].
    ///
    /// On success the backend's session id is adopted if none is held yet,
    /// and the assistant reply is appended. On failure the fixed fallback
    /// reply is appended instead. Either way the session returns to
    /// [`Phase::Idle`]. A resolution arriving after [`ChatSession::close`]
    /// is discarded, never applied to a stale view.
    pub fn complete(&mut self, result: Result<AssistantReply, ExchangeError>) {
        if self.closed {
            return;
        }
        if self.phase != Phase::Awaiting {
            // Nothing was in flight; a stray resolution carries no meaning.
            return;
        }
        let content = match result {
            Ok(reply) => {
                if self.session_id.is_none() {
                    self.session_id = Some(reply.session_id);
                }
                reply.response
            }
            Err(_) => FALLBACK_ERROR_REPLY.to_string(),
        };
        self.transcript.push(ChatMessage::assistant(content, Utc::now()));
        self.phase = Phase::Idle;
    }

    /// Tear the session down. Any exchange still outstanding resolves into
    /// the void: its result will be discarded by [`ChatSession::complete`].
    pub fn close(&mut self) {
        self.closed = true;
    }

    /// Fetch the opening message through `api` and apply it, with the
    /// fallback substitution on failure.
    pub async fn greet(&mut self, api: &dyn AssistantApi) {
        if !self.needs_greeting() {
            return;
        }
        let result = api.fetch_greeting().await;
        self.apply_greeting(result);
    }

    /// Run one full submit/resolve cycle through `api`.
    ///
    /// Returns false when the input was rejected (blank, or an exchange
    /// already in flight). The `&mut self` receiver is what guarantees a
    /// single exchange at a time.
    pub async fn exchange(&mut self, api: &dyn AssistantApi, input: &str) -> bool {
        let Some(outbound) = self.submit(input) else {
            return false;
        };
        let result = api
            .send_message(&outbound.message, outbound.session_id.as_deref())
            .await;
        self.complete(result);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wasteless_models::Role;

    fn reply(response: &str, session_id: &str) -> AssistantReply {
        AssistantReply {
            response: response.to_string(),
            session_id: session_id.to_string(),
        }
    }

    fn exchange_failure() -> ExchangeError {
        ExchangeError::Malformed("connection refused".to_string())
    }

    #[test]
    fn greeting_success_becomes_sole_assistant_message() {
        let mut session = ChatSession::new();
        session.apply_greeting(Ok("Good morning! 3 batches need attention.".to_string()));

        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.transcript()[0].role, Role::Assistant);
        assert_eq!(
            session.transcript()[0].content,
            "Good morning! 3 batches need attention."
        );
        assert!(!session.needs_greeting());
    }

    #[test]
    fn greeting_failure_substitutes_fallback() {
        let mut session = ChatSession::new();
        session.apply_greeting(Err(exchange_failure()));

        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.transcript()[0].role, Role::Assistant);
        assert_eq!(session.transcript()[0].content, FALLBACK_GREETING);
    }

    #[test]
    fn greeting_is_applied_at_most_once() {
        let mut session = ChatSession::new();
        session.apply_greeting(Ok("first".to_string()));
        session.apply_greeting(Ok("second".to_string()));
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.transcript()[0].content, "first");
    }

    #[test]
    fn blank_submit_is_a_complete_noop() {
        let mut session = ChatSession::new();
        session.apply_greeting(Ok("hi".to_string()));

        assert!(session.submit("").is_none());
        assert!(session.submit("   \t\n").is_none());
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.transcript().len(), 1);
    }

    #[test]
    fn submit_trims_and_appends_optimistically() {
        let mut session = ChatSession::new();
        let outbound = session.submit("  How much milk is expiring soon?  ").unwrap();

        assert_eq!(outbound.message, "How much milk is expiring soon?");
        assert_eq!(outbound.session_id, None);
        assert_eq!(session.phase(), Phase::Awaiting);
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.transcript()[0].role, Role::User);
        assert_eq!(
            session.transcript()[0].content,
            "How much milk is expiring soon?"
        );
    }

    #[test]
    fn submit_while_awaiting_is_rejected() {
        let mut session = ChatSession::new();
        assert!(session.submit("first").is_some());
        assert!(session.submit("second").is_none());
        assert_eq!(session.transcript().len(), 1);
    }

    #[test]
    fn success_appends_reply_and_adopts_session_id() {
        let mut session = ChatSession::new();
        session.submit("How much milk is expiring soon?").unwrap();
        session.complete(Ok(reply("48 units across 2 batches.", "sess-1")));

        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.session_id(), Some("sess-1"));
        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.transcript()[1].role, Role::Assistant);
        assert_eq!(session.transcript()[1].content, "48 units across 2 batches.");
    }

    #[test]
    fn session_id_is_adopted_only_once() {
        let mut session = ChatSession::new();
        session.submit("first").unwrap();
        session.complete(Ok(reply("ok", "sess-1")));

        let outbound = session.submit("second").unwrap();
        assert_eq!(outbound.session_id.as_deref(), Some("sess-1"));

        // A differing id from a later response is ignored.
        session.complete(Ok(reply("ok again", "sess-2")));
        assert_eq!(session.session_id(), Some("sess-1"));
    }

    #[test]
    fn failure_keeps_user_message_and_appends_fallback() {
        let mut session = ChatSession::new();
        session.submit("anything fresh?").unwrap();
        session.complete(Err(exchange_failure()));

        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.transcript()[0].role, Role::User);
        assert_eq!(session.transcript()[0].content, "anything fresh?");
        assert_eq!(session.transcript()[1].role, Role::Assistant);
        assert_eq!(session.transcript()[1].content, FALLBACK_ERROR_REPLY);

        // Submit is re-enabled after the failure.
        assert!(session.submit("retry by hand").is_some());
    }

    #[test]
    fn failure_does_not_set_session_id() {
        let mut session = ChatSession::new();
        session.submit("hello").unwrap();
        session.complete(Err(exchange_failure()));
        assert_eq!(session.session_id(), None);
    }

    #[test]
    fn resolution_after_close_is_discarded() {
        let mut session = ChatSession::new();
        session.submit("hello").unwrap();
        session.close();
        session.complete(Ok(reply("too late", "sess-9")));

        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.session_id(), None);
    }

    #[test]
    fn stray_resolution_without_submit_is_ignored() {
        let mut session = ChatSession::new();
        session.complete(Ok(reply("unprompted", "sess-3")));
        assert!(session.transcript().is_empty());
        assert_eq!(session.session_id(), None);
    }

    #[test]
    fn closed_session_rejects_submit() {
        let mut session = ChatSession::new();
        session.close();
        assert!(session.submit("hello?").is_none());
        assert!(!session.needs_greeting());
    }

    #[test]
    fn transcript_stays_chronological() {
        let mut session = ChatSession::new();
        session.apply_greeting(Ok("hi".to_string()));
        session.submit("one").unwrap();
        session.complete(Ok(reply("reply one", "s")));
        session.submit("two").unwrap();
        session.complete(Err(exchange_failure()));

        let roles: Vec<Role> = session.transcript().iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![
                Role::Assistant,
                Role::User,
                Role::Assistant,
                Role::User,
                Role::Assistant
            ]
        );
        for pair in session.transcript().windows(2) {
            assert!(pair[0].timestamp <= pair[1].timestamp);
        }
    }
}
