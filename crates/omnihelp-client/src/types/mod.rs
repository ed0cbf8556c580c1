//! Wire types for the Omni-Help backend contract.
//!
//! The backend's observed response shapes vary slightly between deployments,
//! so response types model the superset union: required fields are those
//! every variant reports, everything else is optional with serde defaults.

mod chat;
mod document;
mod health;
mod order;

pub use chat::{QueryRequest, QueryResponse};
pub use document::{DocumentDeleted, DocumentInfo, DocumentUploadResponse};
pub use health::HealthStatus;
pub use order::{OrderDraft, OrderItem, OrderRecord, OrderStatus};
