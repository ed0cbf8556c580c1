//! Conversation state and the chat send flow.
//!
//! [`Transcript`] holds the append-only message sequence; [`ChatFlow`] wraps
//! it with the request lifecycle: optimistic user messages, a single query in
//! flight at a time, and error bubbles synthesized from failures.

mod flow;
mod transcript;

pub use flow::{ChatFlow, SendOutcome};
pub use transcript::{ChatMessage, MessageRole, Transcript, WELCOME_MESSAGE};
