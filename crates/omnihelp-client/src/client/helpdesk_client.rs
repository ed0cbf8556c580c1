//! Omni-Help backend HTTP client implementation.

use std::path::Path;
use std::time::Instant;

use bytes::Bytes;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use url::Url;

use crate::types::{
    DocumentDeleted, DocumentInfo, DocumentUploadResponse, HealthStatus, OrderDraft, OrderRecord,
    QueryRequest, QueryResponse,
};
use crate::{Error, GATEWAY_TARGET, HelpdeskConfig, HelpdeskProvider, Result};

/// HTTP client for the Omni-Help backend.
///
/// Translates the backend's logical operations (assistant queries, document
/// upload and management, orders, health) into HTTP requests against a
/// configurable base URL. Failures are returned unmodified as [`Error`]
/// values carrying the backend's status and detail text; there are no
/// retries and no caching beyond what the transport provides.
///
/// The client is cheap to clone and can be shared across flows.
///
/// # Examples
///
/// ```ignore
/// use omnihelp_client::{HelpdeskClient, HelpdeskConfig, QueryRequest};
///
/// #[tokio::main]
/// async fn main() -> Result<(), omnihelp_client::Error> {
///     let config = HelpdeskConfig::new("http://localhost:8000");
///     let client = HelpdeskClient::new(config)?;
///
///     let response = client.query(&QueryRequest::new("Where is my order?")).await?;
///     println!("Answer: {}", response.answer);
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct HelpdeskClient {
    /// HTTP client
    http_client: Client,

    /// Parsed backend base URL
    base_url: Url,

    /// Configuration
    config: HelpdeskConfig,
}

impl HelpdeskClient {
    /// Create a new backend client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the base URL is invalid, the timeout
    /// is out of range, or the HTTP client cannot be built.
    pub fn new(config: HelpdeskConfig) -> Result<Self> {
        config.validate()?;
        let base_url = config.parsed_base_url()?;

        let http_client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.effective_user_agent())
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        debug!(
            target: GATEWAY_TARGET,
            base_url = %base_url,
            timeout = ?config.timeout(),
            "Omni-Help client initialized"
        );

        Ok(Self {
            http_client,
            base_url,
            config,
        })
    }

    /// Get a reference to the client configuration.
    pub fn config(&self) -> &HelpdeskConfig {
        &self.config
    }

    /// Get the parsed backend base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Send a query to the assistant.
    ///
    /// # Errors
    ///
    /// Returns the backend failure (status and detail) or the transport
    /// error unmodified.
    pub async fn query(&self, request: &QueryRequest) -> Result<QueryResponse> {
        let url = self.endpoint("/api/v1/chat/query")?;

        debug!(
            target: GATEWAY_TARGET,
            url = %url,
            query_len = request.query.len(),
            conversation_id = ?request.conversation_id,
            "Sending assistant query"
        );

        let start = Instant::now();
        let response = self.http_client.post(url).json(request).send().await?;
        let result: QueryResponse = self.handle_response(response).await?;

        debug!(
            target: GATEWAY_TARGET,
            elapsed_ms = start.elapsed().as_millis() as u64,
            answer_len = result.answer.len(),
            sources = result.sources.len(),
            intent = ?result.intent,
            "Assistant query completed"
        );

        Ok(result)
    }

    /// Upload a document for indexing.
    ///
    /// The file is transmitted as a multipart body with a single `file`
    /// field; the MIME type is derived from the filename extension.
    ///
    /// # Errors
    ///
    /// Returns an invalid input error for unsupported extensions, otherwise
    /// propagates backend and transport failures.
    pub async fn upload_document(
        &self,
        filename: &str,
        content: Bytes,
    ) -> Result<DocumentUploadResponse> {
        let url = self.endpoint("/api/v1/documents/upload")?;
        let mime_type = self.mime_type_for(filename)?;

        info!(
            target: GATEWAY_TARGET,
            filename,
            size = content.len(),
            mime_type,
            "Uploading document"
        );

        let part = reqwest::multipart::Part::bytes(content.to_vec())
            .file_name(filename.to_string())
            .mime_str(mime_type)
            .map_err(|e| Error::config(format!("Invalid MIME type '{}': {}", mime_type, e)))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let start = Instant::now();
        let response = self.http_client.post(url).multipart(form).send().await?;
        let result: DocumentUploadResponse = self.handle_response(response).await?;

        info!(
            target: GATEWAY_TARGET,
            document_id = %result.document_id,
            chunks = result.chunks,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Document upload completed"
        );

        Ok(result)
    }

    /// List the documents currently indexed by the backend.
    pub async fn list_documents(&self) -> Result<Vec<DocumentInfo>> {
        let url = self.endpoint("/api/v1/documents/")?;

        debug!(target: GATEWAY_TARGET, url = %url, "Listing documents");

        let response = self.http_client.get(url).send().await?;
        let documents: Vec<DocumentInfo> = self.handle_response(response).await?;

        debug!(
            target: GATEWAY_TARGET,
            count = documents.len(),
            "Document listing completed"
        );

        Ok(documents)
    }

    /// Delete an indexed document by id.
    pub async fn delete_document(&self, document_id: &str) -> Result<DocumentDeleted> {
        let url = self.endpoint(&format!("/api/v1/documents/{document_id}"))?;

        info!(target: GATEWAY_TARGET, document_id, "Deleting document");

        let response = self.http_client.delete(url).send().await?;
        self.handle_response(response).await
    }

    /// Create an order from a draft.
    ///
    /// The draft is sent verbatim; the backend is the sole authority on
    /// validation beyond presence and type.
    pub async fn create_order(&self, draft: &OrderDraft) -> Result<OrderRecord> {
        let url = self.endpoint("/api/v1/orders/")?;

        debug!(
            target: GATEWAY_TARGET,
            order_id = %draft.order_id,
            customer_id = %draft.customer_id,
            "Creating order"
        );

        let start = Instant::now();
        let response = self.http_client.post(url).json(draft).send().await?;
        let record: OrderRecord = self.handle_response(response).await?;

        info!(
            target: GATEWAY_TARGET,
            order_id = %record.order_id,
            status = %record.status,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Order created"
        );

        Ok(record)
    }

    /// Fetch a single order by its order id.
    pub async fn get_order(&self, order_id: &str) -> Result<OrderRecord> {
        let url = self.endpoint(&format!("/api/v1/orders/{order_id}"))?;

        debug!(target: GATEWAY_TARGET, order_id, "Fetching order");

        let response = self.http_client.get(url).send().await?;
        self.handle_response(response).await
    }

    /// Fetch all orders for a customer, ordered by the backend.
    pub async fn customer_orders(&self, customer_id: &str) -> Result<Vec<OrderRecord>> {
        let url = self.endpoint(&format!("/api/v1/orders/customer/{customer_id}"))?;

        debug!(target: GATEWAY_TARGET, customer_id, "Fetching customer orders");

        let response = self.http_client.get(url).send().await?;
        let orders: Vec<OrderRecord> = self.handle_response(response).await?;

        debug!(
            target: GATEWAY_TARGET,
            customer_id,
            count = orders.len(),
            "Customer order search completed"
        );

        Ok(orders)
    }

    /// Check backend health.
    ///
    /// The health endpoint lives at the server root rather than under the
    /// API prefix.
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = self.endpoint("/health")?;

        debug!(target: GATEWAY_TARGET, url = %url, "Performing health check");

        let response = self.http_client.get(url).send().await?;
        self.handle_response(response).await
    }

    /// Resolve an absolute endpoint URL against the configured base.
    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::config(format!("Failed to construct URL for '{}': {}", path, e)))
    }

    /// Parse a response body, mapping non-success statuses to API errors.
    async fn handle_response<T>(&self, response: reqwest::Response) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();

        debug!(
            target: GATEWAY_TARGET,
            status = status.as_u16(),
            "Received backend response"
        );

        if status.is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                Error::invalid_response(
                    format!("Failed to parse success response: {}", e),
                    Some(body),
                )
            })
        } else {
            let body = response.text().await.ok();
            let detail = body.as_deref().and_then(extract_detail);
            Err(Error::api(status.as_u16(), detail))
        }
    }

    /// Determine the MIME type for an upload from its filename.
    fn mime_type_for(&self, filename: &str) -> Result<&'static str> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::invalid_input("File has no extension"))?;

        match extension.to_lowercase().as_str() {
            "pdf" => Ok("application/pdf"),
            "csv" => Ok("text/csv"),
            ext => Err(Error::invalid_input(format!(
                "Unsupported file extension: {}",
                ext
            ))),
        }
    }
}

/// Extract the human-readable `detail` field from a failure body.
///
/// The backend reports failures as `{"detail": ...}`; non-string detail
/// values (e.g. validation reports) are rendered as compact JSON.
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(detail) => Some(detail.clone()),
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}

#[async_trait::async_trait]
impl HelpdeskProvider for HelpdeskClient {
    async fn query(&self, request: &QueryRequest) -> Result<QueryResponse> {
        HelpdeskClient::query(self, request).await
    }

    async fn upload_document(
        &self,
        filename: &str,
        content: Bytes,
    ) -> Result<DocumentUploadResponse> {
        HelpdeskClient::upload_document(self, filename, content).await
    }

    async fn list_documents(&self) -> Result<Vec<DocumentInfo>> {
        HelpdeskClient::list_documents(self).await
    }

    async fn delete_document(&self, document_id: &str) -> Result<DocumentDeleted> {
        HelpdeskClient::delete_document(self, document_id).await
    }

    async fn create_order(&self, draft: &OrderDraft) -> Result<OrderRecord> {
        HelpdeskClient::create_order(self, draft).await
    }

    async fn get_order(&self, order_id: &str) -> Result<OrderRecord> {
        HelpdeskClient::get_order(self, order_id).await
    }

    async fn customer_orders(&self, customer_id: &str) -> Result<Vec<OrderRecord>> {
        HelpdeskClient::customer_orders(self, customer_id).await
    }

    async fn health(&self) -> Result<HealthStatus> {
        HelpdeskClient::health(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> HelpdeskClient {
        HelpdeskClient::new(HelpdeskConfig::new("http://localhost:8000")).unwrap()
    }

    #[test]
    fn test_client_creation() {
        let config = HelpdeskConfig::new("http://localhost:8000").with_timeout_secs(60);
        assert!(HelpdeskClient::new(config).is_ok());
    }

    #[test]
    fn test_client_with_invalid_config() {
        let config = HelpdeskConfig::new("not a valid url");
        assert!(HelpdeskClient::new(config).is_err());
    }

    #[test]
    fn test_endpoint_resolution() {
        let client = test_client();

        assert_eq!(
            client.endpoint("/api/v1/chat/query").unwrap().as_str(),
            "http://localhost:8000/api/v1/chat/query"
        );
        assert_eq!(
            client
                .endpoint("/api/v1/orders/customer/CUST-1")
                .unwrap()
                .as_str(),
            "http://localhost:8000/api/v1/orders/customer/CUST-1"
        );
        assert_eq!(
            client.endpoint("/health").unwrap().as_str(),
            "http://localhost:8000/health"
        );
    }

    #[test]
    fn test_mime_type_detection() {
        let client = test_client();

        assert_eq!(client.mime_type_for("manual.pdf").unwrap(), "application/pdf");
        assert_eq!(client.mime_type_for("MANUAL.PDF").unwrap(), "application/pdf");
        assert_eq!(client.mime_type_for("orders.csv").unwrap(), "text/csv");

        assert!(client.mime_type_for("notes.txt").is_err());
        assert!(client.mime_type_for("noextension").is_err());
    }

    #[test]
    fn test_extract_detail() {
        assert_eq!(
            extract_detail(r#"{"detail": "Order not found"}"#),
            Some("Order not found".to_string())
        );
        assert_eq!(extract_detail(r#"{"detail": null}"#), None);
        assert_eq!(extract_detail(r#"{"message": "nope"}"#), None);
        assert_eq!(extract_detail("not json"), None);

        // FastAPI validation failures report detail as a structured list
        let validation = extract_detail(r#"{"detail": [{"loc": ["body", "query"]}]}"#);
        assert!(validation.is_some_and(|d| d.contains("loc")));
    }
}
