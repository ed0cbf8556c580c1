//! Append-only conversation transcript.

use std::fmt;

use jiff::Timestamp;
use omnihelp_client::QueryResponse;
use serde::{Deserialize, Serialize};

/// Greeting shown before the first user message.
pub const WELCOME_MESSAGE: &str = "Hello! I'm your product assistant. Ask me anything about our \
                                   products, and I'll help you find the information you need.";

/// Role of a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Message typed by the user.
    User,

    /// Message produced by the assistant, including error bubbles.
    Assistant,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single transcript entry.
///
/// Entries are immutable once appended; builders attach the optional fields
/// at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Transcript-unique identifier, assigned in send/receive order.
    pub id: u64,

    /// Sender role.
    pub role: MessageRole,

    /// Display text.
    pub text: String,

    /// Source documents cited by the answer.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,

    /// Raw retrieved passages attached to the answer.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub retrieved_chunks: Vec<serde_json::Value>,

    /// Additional response metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,

    /// Timestamp when the entry was appended.
    pub created_at: Timestamp,

    /// Marks replies synthesized from a failed request.
    #[serde(default)]
    pub is_error: bool,
}

impl ChatMessage {
    /// Creates a new message with the given id, role, and text.
    pub fn new(id: u64, role: MessageRole, text: impl Into<String>) -> Self {
        Self {
            id,
            role,
            text: text.into(),
            sources: Vec::new(),
            retrieved_chunks: Vec::new(),
            metadata: None,
            created_at: Timestamp::now(),
            is_error: false,
        }
    }

    /// Attaches source citations.
    pub fn with_sources(mut self, sources: Vec<String>) -> Self {
        self.sources = sources;
        self
    }

    /// Attaches retrieved passages.
    pub fn with_retrieved_chunks(mut self, chunks: Vec<serde_json::Value>) -> Self {
        self.retrieved_chunks = chunks;
        self
    }

    /// Attaches response metadata.
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Flags this message as synthesized from a failure.
    pub fn with_error_flag(mut self) -> Self {
        self.is_error = true;
        self
    }

    /// Returns true for user-typed messages.
    pub fn is_user_message(&self) -> bool {
        self.role == MessageRole::User
    }

    /// Returns true for assistant messages.
    pub fn is_assistant_message(&self) -> bool {
        self.role == MessageRole::Assistant
    }

    /// Returns true when the answer cites at least one source.
    pub fn has_sources(&self) -> bool {
        !self.sources.is_empty()
    }
}

/// Append-only, strictly ordered sequence of chat messages.
///
/// A new transcript starts with the assistant greeting. Ids grow
/// monotonically and entries are never edited or removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Transcript {
    /// Creates a transcript seeded with the assistant greeting.
    pub fn new() -> Self {
        let mut transcript = Self {
            messages: Vec::new(),
            next_id: 1,
        };
        let id = transcript.allocate_id();
        transcript
            .messages
            .push(ChatMessage::new(id, MessageRole::Assistant, WELCOME_MESSAGE));
        transcript
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Appends a user message and returns its id.
    pub fn append_user(&mut self, text: impl Into<String>) -> u64 {
        let id = self.allocate_id();
        self.messages
            .push(ChatMessage::new(id, MessageRole::User, text));
        id
    }

    /// Appends an assistant message built from a backend reply.
    pub fn append_reply(&mut self, reply: &QueryResponse) -> u64 {
        let id = self.allocate_id();
        let mut message = ChatMessage::new(id, MessageRole::Assistant, reply.answer.clone())
            .with_sources(reply.sources.clone())
            .with_retrieved_chunks(reply.retrieved_chunks.clone());
        if let Some(metadata) = reply.metadata.clone() {
            message = message.with_metadata(metadata);
        }
        self.messages.push(message);
        id
    }

    /// Appends an assistant message flagged as an error.
    pub fn append_error(&mut self, text: impl Into<String>) -> u64 {
        let id = self.allocate_id();
        self.messages
            .push(ChatMessage::new(id, MessageRole::Assistant, text).with_error_flag());
        id
    }

    /// All messages in send/receive order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Looks up a message by id.
    pub fn message(&self, id: u64) -> Option<&ChatMessage> {
        self.messages.iter().find(|message| message.id == id)
    }

    /// The most recent message.
    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Number of messages, greeting included.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true when the transcript holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transcript_is_greeted() {
        let transcript = Transcript::new();

        assert_eq!(transcript.len(), 1);
        let greeting = transcript.last().unwrap();
        assert_eq!(greeting.role, MessageRole::Assistant);
        assert_eq!(greeting.text, WELCOME_MESSAGE);
        assert!(!greeting.is_error);
    }

    #[test]
    fn test_ids_grow_monotonically() {
        let mut transcript = Transcript::new();

        let first = transcript.append_user("Where is my order?");
        let second = transcript.append_error("Sorry, something went wrong.");
        let third = transcript.append_user("Is anyone there?");

        assert!(first < second);
        assert!(second < third);
        let ids: Vec<u64> = transcript.messages().iter().map(|m| m.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_append_reply_carries_citations() {
        let mut transcript = Transcript::new();
        let reply = QueryResponse {
            answer: "30 days".to_string(),
            sources: vec!["policy.pdf".to_string()],
            retrieved_chunks: vec![serde_json::json!({"text": "Returns accepted within 30 days"})],
            ..QueryResponse::default()
        };

        let id = transcript.append_reply(&reply);

        let message = transcript.message(id).unwrap();
        assert_eq!(message.text, "30 days");
        assert_eq!(message.sources, vec!["policy.pdf"]);
        assert_eq!(message.retrieved_chunks.len(), 1);
        assert!(message.has_sources());
        assert!(!message.is_error);
    }

    #[test]
    fn test_append_error_flags_message() {
        let mut transcript = Transcript::new();

        let id = transcript.append_error("Sorry, I encountered an error. Please try again.");

        let message = transcript.message(id).unwrap();
        assert!(message.is_error);
        assert!(message.is_assistant_message());
        assert!(!message.has_sources());
    }

    #[test]
    fn test_message_lookup_by_id() {
        let mut transcript = Transcript::new();
        let id = transcript.append_user("hello");

        assert_eq!(transcript.message(id).map(|m| m.text.as_str()), Some("hello"));
        assert!(transcript.message(9999).is_none());
    }
}
