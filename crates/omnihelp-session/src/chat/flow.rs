//! Chat send flow over a helpdesk provider.

use omnihelp_client::{Error, HelpdeskProvider, QueryRequest, QueryResponse};
use tracing::{debug, warn};
use uuid::Uuid;

use super::Transcript;
use crate::CHAT_TARGET;

/// Number of passages requested with each query.
const DEFAULT_N_RESULTS: u32 = 5;

/// Outcome of a send attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// A reply was appended to the transcript.
    Answered {
        /// Id of the appended assistant message.
        message_id: u64,
    },

    /// The failure was converted into an error bubble.
    Failed {
        /// Id of the appended error message.
        message_id: u64,
    },

    /// The attempt was dropped: blank input or a query already in flight.
    Ignored,
}

/// Conversation state for one assistant session.
///
/// The flow owns the transcript and serializes its requests: while a query is
/// in flight further send attempts are dropped, not queued. Every query
/// carries the session's conversation id so the backend can thread context.
#[derive(Debug, Clone)]
pub struct ChatFlow {
    transcript: Transcript,
    conversation_id: Uuid,
    n_results: u32,
    loading: bool,
    last_intent: Option<String>,
    last_route: Option<String>,
}

impl ChatFlow {
    /// Creates a flow with a fresh conversation id and a greeted transcript.
    pub fn new() -> Self {
        Self {
            transcript: Transcript::new(),
            conversation_id: Uuid::new_v4(),
            n_results: DEFAULT_N_RESULTS,
            loading: false,
            last_intent: None,
            last_route: None,
        }
    }

    /// Overrides the number of passages requested per query.
    pub fn with_n_results(mut self, n_results: u32) -> Self {
        self.n_results = n_results;
        self
    }

    /// Conversation transcript.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Conversation id attached to every query.
    pub fn conversation_id(&self) -> Uuid {
        self.conversation_id
    }

    /// Returns true while a query is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Intent label from the most recent reply.
    pub fn last_intent(&self) -> Option<&str> {
        self.last_intent.as_deref()
    }

    /// Routing label from the most recent reply.
    pub fn last_route(&self) -> Option<&str> {
        self.last_route.as_deref()
    }

    /// Accepts the text, appending the user message and marking the flow busy.
    ///
    /// Returns the request to issue, or `None` when the text is blank or a
    /// query is already in flight; in that case nothing changes.
    pub fn begin(&mut self, text: &str) -> Option<QueryRequest> {
        if text.trim().is_empty() {
            debug!(target: CHAT_TARGET, "Dropping blank chat input");
            return None;
        }
        if self.loading {
            debug!(target: CHAT_TARGET, "Dropping send attempt while a query is in flight");
            return None;
        }

        self.transcript.append_user(text);
        self.loading = true;

        Some(
            QueryRequest::new(text)
                .with_conversation_id(self.conversation_id)
                .with_n_results(self.n_results),
        )
    }

    /// Folds a successful reply into the transcript and clears the busy flag.
    ///
    /// Returns the id of the appended assistant message.
    pub fn complete(&mut self, reply: &QueryResponse) -> u64 {
        self.last_intent = reply.intent.clone();
        self.last_route = reply.route_to.clone();
        self.loading = false;
        self.transcript.append_reply(reply)
    }

    /// Converts a failure into an error bubble and clears the busy flag.
    ///
    /// The bubble carries the backend's detail text when present, otherwise a
    /// generic description of the failure.
    pub fn fail(&mut self, error: &Error) -> u64 {
        warn!(target: CHAT_TARGET, %error, "Chat query failed");
        self.loading = false;
        self.transcript.append_error(format!(
            "Sorry, I encountered an error: {}. Please try again.",
            error.user_message()
        ))
    }

    /// Sends one query and folds the result into the transcript.
    pub async fn send<P>(&mut self, provider: &P, text: &str) -> SendOutcome
    where
        P: HelpdeskProvider + ?Sized,
    {
        let Some(request) = self.begin(text) else {
            return SendOutcome::Ignored;
        };

        debug!(
            target: CHAT_TARGET,
            conversation_id = %self.conversation_id,
            query_len = request.query.len(),
            "Sending chat query"
        );

        match provider.query(&request).await {
            Ok(reply) => SendOutcome::Answered {
                message_id: self.complete(&reply),
            },
            Err(error) => SendOutcome::Failed {
                message_id: self.fail(&error),
            },
        }
    }
}

impl Default for ChatFlow {
    fn default() -> Self {
        Self::new()
    }
}
