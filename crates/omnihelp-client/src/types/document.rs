//! Document management types.

use serde::{Deserialize, Serialize};

/// Response from a successful document upload.
///
/// Deployments differ in which descriptive fields they attach beyond the
/// document id, filename, and chunk count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentUploadResponse {
    /// Backend-assigned document identifier.
    pub document_id: String,

    /// Original filename as stored by the backend.
    pub filename: String,

    /// Number of chunks the document was split into.
    pub chunks: u32,

    /// Detected document type (e.g. "pdf").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,

    /// Human-readable confirmation message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Server-side storage path, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

/// Descriptor of a document already indexed by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentInfo {
    /// Backend-assigned document identifier.
    pub document_id: String,

    /// Original filename.
    pub filename: String,

    /// Document type (e.g. "pdf", "csv").
    pub document_type: String,

    /// Number of indexed chunks.
    pub chunks: u32,

    /// Upload timestamp, when the backend tracks one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_date: Option<String>,
}

/// Acknowledgement returned when a document is removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentDeleted {
    /// Human-readable confirmation message.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_response_without_message() {
        // Some deployments omit the confirmation message field.
        let response: DocumentUploadResponse = serde_json::from_str(
            r#"{
                "document_id": "doc-42",
                "filename": "manual.pdf",
                "document_type": "pdf",
                "chunks": 17,
                "file_path": "/data/uploads/manual.pdf"
            }"#,
        )
        .unwrap();

        assert_eq!(response.document_id, "doc-42");
        assert_eq!(response.chunks, 17);
        assert_eq!(response.message, None);
    }

    #[test]
    fn test_upload_response_with_message() {
        let response: DocumentUploadResponse = serde_json::from_str(
            r#"{"document_id": "doc-1", "filename": "policy.pdf", "chunks": 3, "message": "Processed 3 chunks"}"#,
        )
        .unwrap();

        assert_eq!(response.message.as_deref(), Some("Processed 3 chunks"));
        assert_eq!(response.document_type, None);
    }

    #[test]
    fn test_document_info_optional_date() {
        let info: DocumentInfo = serde_json::from_str(
            r#"{"document_id": "doc-1", "filename": "policy.pdf", "document_type": "pdf", "chunks": 3}"#,
        )
        .unwrap();

        assert_eq!(info.upload_date, None);
    }
}
