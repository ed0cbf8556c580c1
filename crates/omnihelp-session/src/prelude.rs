//! Convenience re-exports for driving the session flows.

pub use crate::chat::{ChatFlow, ChatMessage, MessageRole, SendOutcome, Transcript};
pub use crate::orders::{CreateOutcome, OrderCreateFlow, OrderSearchFlow, SearchOutcome};
pub use crate::upload::{SelectedFile, UploadFlow, UploadOutcome, UploadResult};
