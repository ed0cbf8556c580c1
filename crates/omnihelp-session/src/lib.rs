#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for chat flow events.
pub const CHAT_TARGET: &str = "omnihelp_session::chat";

/// Tracing target for document upload events.
pub const UPLOAD_TARGET: &str = "omnihelp_session::upload";

/// Tracing target for order management events.
pub const ORDERS_TARGET: &str = "omnihelp_session::orders";

pub mod chat;
pub mod orders;
#[doc(hidden)]
pub mod prelude;
pub mod upload;

pub use chat::{ChatFlow, ChatMessage, MessageRole, SendOutcome, Transcript, WELCOME_MESSAGE};
pub use orders::{CreateOutcome, OrderCreateFlow, OrderSearchFlow, SearchOutcome};
pub use upload::{SelectedFile, UploadFlow, UploadOutcome, UploadResult, format_file_size};
