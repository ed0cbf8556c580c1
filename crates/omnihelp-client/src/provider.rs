//! Backend provider abstraction.

use bytes::Bytes;

use crate::types::{
    DocumentDeleted, DocumentInfo, DocumentUploadResponse, HealthStatus, OrderDraft, OrderRecord,
    QueryRequest, QueryResponse,
};
use crate::Result;

/// Unified trait over the Omni-Help backend surface.
///
/// The trait mirrors the backend's logical operations one to one so the
/// session flows can be driven by either the live HTTP client or a scripted
/// mock. Implementations surface failures immediately; callers own all
/// user-facing formatting and never retry.
#[async_trait::async_trait]
pub trait HelpdeskProvider: Send + Sync {
    /// Send a query to the assistant.
    async fn query(&self, request: &QueryRequest) -> Result<QueryResponse>;

    /// Upload a document for indexing.
    async fn upload_document(
        &self,
        filename: &str,
        content: Bytes,
    ) -> Result<DocumentUploadResponse>;

    /// List the documents currently indexed by the backend.
    async fn list_documents(&self) -> Result<Vec<DocumentInfo>>;

    /// Delete an indexed document by id.
    async fn delete_document(&self, document_id: &str) -> Result<DocumentDeleted>;

    /// Create an order from a draft.
    async fn create_order(&self, draft: &OrderDraft) -> Result<OrderRecord>;

    /// Fetch a single order by its order id.
    async fn get_order(&self, order_id: &str) -> Result<OrderRecord>;

    /// Fetch all orders for a customer.
    async fn customer_orders(&self, customer_id: &str) -> Result<Vec<OrderRecord>>;

    /// Check backend health.
    async fn health(&self) -> Result<HealthStatus>;
}
