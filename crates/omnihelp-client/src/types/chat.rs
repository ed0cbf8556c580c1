//! Assistant query request and response types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for the assistant query endpoint.
///
/// Only the raw query text is required; the remaining fields are hints the
/// backend may honor and are omitted from the wire format when unset.
///
/// # Examples
///
/// ```rust
/// use omnihelp_client::QueryRequest;
/// use uuid::Uuid;
///
/// let request = QueryRequest::new("What is the return policy?")
///     .with_conversation_id(Uuid::new_v4())
///     .with_n_results(5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    /// Raw query text.
    pub query: String,

    /// Conversation this query belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<Uuid>,

    /// Number of passages to retrieve.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n_results: Option<u32>,

    /// Metadata filters applied during retrieval.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<serde_json::Value>,
}

impl QueryRequest {
    /// Creates a new query request with the given text.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            conversation_id: None,
            n_results: None,
            filters: None,
        }
    }

    /// Sets the conversation id.
    pub fn with_conversation_id(mut self, conversation_id: Uuid) -> Self {
        self.conversation_id = Some(conversation_id);
        self
    }

    /// Sets the number of passages to retrieve.
    pub fn with_n_results(mut self, n_results: u32) -> Self {
        self.n_results = Some(n_results);
        self
    }

    /// Sets retrieval metadata filters.
    pub fn with_filters(mut self, filters: serde_json::Value) -> Self {
        self.filters = Some(filters);
        self
    }
}

/// Response body from the assistant query endpoint.
///
/// Only the answer text is guaranteed; intent and routing labels, source
/// citations, retrieved passages, and metadata are reported when the backend
/// pipeline produces them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Generated answer text.
    pub answer: String,

    /// Intent label the backend assigned to the query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,

    /// Agent or pipeline the query was routed to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_to: Option<String>,

    /// Source documents cited by the answer.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,

    /// Raw retrieved passages, when the backend reports them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub retrieved_chunks: Vec<serde_json::Value>,

    /// Additional response metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,

    /// Error note attached by the backend pipeline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QueryResponse {
    /// Creates a response with only an answer, for tests and defaults.
    pub fn with_answer(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_minimal_wire_shape() {
        let request = QueryRequest::new("Where is my order?");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json, serde_json::json!({"query": "Where is my order?"}));
    }

    #[test]
    fn test_request_full_wire_shape() {
        let conversation_id = Uuid::new_v4();
        let request = QueryRequest::new("What is the return policy?")
            .with_conversation_id(conversation_id)
            .with_n_results(5)
            .with_filters(serde_json::json!({"document_type": "pdf"}));

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["n_results"], 5);
        assert_eq!(json["conversation_id"], conversation_id.to_string());
        assert_eq!(json["filters"]["document_type"], "pdf");
    }

    #[test]
    fn test_response_tolerates_sparse_body() {
        // The leaner backend variant reports only answer/intent/route/sources.
        let response: QueryResponse = serde_json::from_str(
            r#"{"answer": "30 days", "intent": "policy_document", "route_to": "rag_agent", "sources": ["policy.pdf"]}"#,
        )
        .unwrap();

        assert_eq!(response.answer, "30 days");
        assert_eq!(response.intent.as_deref(), Some("policy_document"));
        assert_eq!(response.sources, vec!["policy.pdf"]);
        assert!(response.retrieved_chunks.is_empty());
        assert_eq!(response.metadata, None);
    }

    #[test]
    fn test_response_tolerates_rich_body() {
        let response: QueryResponse = serde_json::from_str(
            r#"{
                "answer": "The X100 supports fast charging.",
                "sources": ["manual.pdf"],
                "retrieved_chunks": [{"text": "fast charging", "score": 0.91}],
                "metadata": {"n_results": 5}
            }"#,
        )
        .unwrap();

        assert_eq!(response.retrieved_chunks.len(), 1);
        assert_eq!(response.metadata.unwrap()["n_results"], 5);
        assert_eq!(response.intent, None);
    }
}
