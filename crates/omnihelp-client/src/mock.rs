//! Scripted mock backend for testing.
//!
//! This module provides [`MockHelpdesk`], an in-memory implementation of
//! [`HelpdeskProvider`] that returns scripted answers, records uploads and
//! orders, and can be switched into a failing mode to exercise error paths.
//!
//! # Feature Flag
//!
//! Downstream crates see this module only with the `test-utils` feature
//! enabled:
//!
//! ```toml
//! [dev-dependencies]
//! omnihelp-client = { version = "...", features = ["test-utils"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use omnihelp_client::{MockHelpdesk, MockScript};
//!
//! // Scripted answer with a source citation
//! let mock = MockHelpdesk::new(MockScript {
//!     answer: "30 days".into(),
//!     sources: vec!["policy.pdf".into()],
//!     ..Default::default()
//! });
//!
//! // Or a backend that rejects everything
//! let failing = MockHelpdesk::with_failure(400, "Total amount must be non-negative");
//! ```

use std::sync::{Arc, Mutex, MutexGuard};

use bytes::Bytes;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{
    DocumentDeleted, DocumentInfo, DocumentUploadResponse, HealthStatus, OrderDraft, OrderRecord,
    QueryRequest, QueryResponse,
};
use crate::{Error, HelpdeskProvider, Result};

/// Scripted behavior for [`MockHelpdesk`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockScript {
    /// Answer returned for every assistant query.
    pub answer: String,

    /// Source citations attached to answers.
    #[serde(default)]
    pub sources: Vec<String>,

    /// Intent label attached to answers.
    #[serde(default)]
    pub intent: Option<String>,

    /// Routing label attached to answers.
    #[serde(default)]
    pub route_to: Option<String>,

    /// Chunk count reported for uploads.
    #[serde(default = "default_chunks")]
    pub chunks: u32,

    /// When set, every operation fails with this outcome.
    #[serde(default)]
    pub failure: Option<MockFailure>,
}

fn default_chunks() -> u32 {
    1
}

impl Default for MockScript {
    fn default() -> Self {
        Self {
            answer: "This is a mock answer.".to_string(),
            sources: Vec::new(),
            intent: None,
            route_to: None,
            chunks: default_chunks(),
            failure: None,
        }
    }
}

/// Scripted failure outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockFailure {
    /// HTTP status code the failure reports.
    pub status: u16,

    /// Backend detail message, if any.
    pub detail: Option<String>,
}

/// In-memory state accumulated by a mock backend.
#[derive(Debug, Default)]
struct MockState {
    documents: Vec<DocumentInfo>,
    orders: Vec<OrderRecord>,
    next_row_id: i64,
    query_calls: usize,
    upload_calls: usize,
    search_calls: usize,
}

/// Scripted in-memory stand-in for the Omni-Help backend.
///
/// Implements [`HelpdeskProvider`], returning the scripted answer for
/// queries and recording uploads and orders so later listings and lookups
/// behave like a real backend. Clones share state.
#[derive(Clone, Debug)]
pub struct MockHelpdesk {
    script: MockScript,
    state: Arc<Mutex<MockState>>,
}

impl Default for MockHelpdesk {
    fn default() -> Self {
        Self::new(MockScript::default())
    }
}

impl MockHelpdesk {
    /// Creates a new mock backend with the given script.
    pub fn new(script: MockScript) -> Self {
        Self {
            script,
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    /// Creates a mock backend that returns the given answer for every query.
    pub fn with_answer(answer: impl Into<String>) -> Self {
        Self::new(MockScript {
            answer: answer.into(),
            ..Default::default()
        })
    }

    /// Creates a mock backend where every operation fails with the given
    /// status and detail.
    pub fn with_failure(status: u16, detail: impl Into<String>) -> Self {
        Self::new(MockScript {
            failure: Some(MockFailure {
                status,
                detail: Some(detail.into()),
            }),
            ..Default::default()
        })
    }

    /// Preloads an order into the mock backend's store.
    pub fn seed_order(&self, record: OrderRecord) {
        self.state().orders.push(record);
    }

    /// Preloads a document descriptor into the mock backend's store.
    pub fn seed_document(&self, info: DocumentInfo) {
        self.state().documents.push(info);
    }

    /// Number of assistant queries received.
    pub fn query_calls(&self) -> usize {
        self.state().query_calls
    }

    /// Number of document uploads received.
    pub fn upload_calls(&self) -> usize {
        self.state().upload_calls
    }

    /// Number of customer-order searches received.
    pub fn search_calls(&self) -> usize {
        self.state().search_calls
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn scripted_failure(&self) -> Result<()> {
        match &self.script.failure {
            Some(failure) => Err(Error::api(failure.status, failure.detail.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl HelpdeskProvider for MockHelpdesk {
    async fn query(&self, request: &QueryRequest) -> Result<QueryResponse> {
        self.state().query_calls += 1;
        self.scripted_failure()?;

        if request.query.trim().is_empty() {
            return Err(Error::api(400, Some("Query cannot be empty".to_string())));
        }

        Ok(QueryResponse {
            answer: self.script.answer.clone(),
            intent: self.script.intent.clone(),
            route_to: self.script.route_to.clone(),
            sources: self.script.sources.clone(),
            retrieved_chunks: Vec::new(),
            metadata: None,
            error: None,
        })
    }

    async fn upload_document(
        &self,
        filename: &str,
        _content: Bytes,
    ) -> Result<DocumentUploadResponse> {
        self.state().upload_calls += 1;
        self.scripted_failure()?;

        let document_id = Uuid::new_v4().to_string();
        let document_type = filename.rsplit('.').next().unwrap_or("pdf").to_lowercase();
        let chunks = self.script.chunks;

        self.state().documents.push(DocumentInfo {
            document_id: document_id.clone(),
            filename: filename.to_string(),
            document_type: document_type.clone(),
            chunks,
            upload_date: Some(Timestamp::now().to_string()),
        });

        Ok(DocumentUploadResponse {
            document_id,
            filename: filename.to_string(),
            chunks,
            document_type: Some(document_type),
            message: Some(format!("Successfully processed {chunks} chunks")),
            file_path: None,
        })
    }

    async fn list_documents(&self) -> Result<Vec<DocumentInfo>> {
        self.scripted_failure()?;
        Ok(self.state().documents.clone())
    }

    async fn delete_document(&self, document_id: &str) -> Result<DocumentDeleted> {
        self.scripted_failure()?;

        self.state()
            .documents
            .retain(|d| d.document_id != document_id);

        Ok(DocumentDeleted {
            message: format!("Document {document_id} deleted successfully"),
        })
    }

    async fn create_order(&self, draft: &OrderDraft) -> Result<OrderRecord> {
        self.scripted_failure()?;

        let mut state = self.state();
        state.next_row_id += 1;
        let now = Timestamp::now().to_string();

        let record = OrderRecord {
            id: state.next_row_id,
            order_id: draft.order_id.clone(),
            customer_id: draft.customer_id.clone(),
            product_name: draft.product_name.clone(),
            product_model: draft.product_model.clone(),
            order_date: draft.order_date.clone(),
            status: draft.status,
            total_amount: Some(draft.total_amount),
            created_at: now.clone(),
            updated_at: now,
        };

        state.orders.push(record.clone());
        Ok(record)
    }

    async fn get_order(&self, order_id: &str) -> Result<OrderRecord> {
        self.scripted_failure()?;

        self.state()
            .orders
            .iter()
            .find(|o| o.order_id == order_id)
            .cloned()
            .ok_or_else(|| Error::api(404, Some("Order not found".to_string())))
    }

    async fn customer_orders(&self, customer_id: &str) -> Result<Vec<OrderRecord>> {
        self.state().search_calls += 1;
        self.scripted_failure()?;

        Ok(self
            .state()
            .orders
            .iter()
            .filter(|o| o.customer_id == customer_id)
            .cloned()
            .collect())
    }

    async fn health(&self) -> Result<HealthStatus> {
        self.scripted_failure()?;

        Ok(HealthStatus {
            status: "healthy".to_string(),
            documents: Some(self.state().documents.len() as u64),
            error: None,
        })
    }
}
