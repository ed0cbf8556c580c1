//! Commonly used items from omnihelp-client.
//!
//! This prelude re-exports the gateway client, its configuration, the
//! provider trait, and the wire types so consuming code can pull the whole
//! surface in with a single import.
//!
//! # Usage
//!
//! ```rust,ignore
//! use omnihelp_client::prelude::*;
//! ```

// Gateway client and configuration
pub use crate::client::{HelpdeskClient, HelpdeskConfig};
// Error types
pub use crate::error::{Error, Result};
// Scripted mock backend (test-utils feature)
#[cfg(any(test, feature = "test-utils"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-utils")))]
pub use crate::mock::{MockFailure, MockHelpdesk, MockScript};
// Provider seam
pub use crate::provider::HelpdeskProvider;
// Wire types
pub use crate::types::{
    DocumentDeleted, DocumentInfo, DocumentUploadResponse, HealthStatus, OrderDraft, OrderItem,
    OrderRecord, OrderStatus, QueryRequest, QueryResponse,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_prelude_surface() {
        let config = HelpdeskConfig::new("http://localhost:8000");
        assert!(config.validate().is_ok());

        let mock = MockHelpdesk::with_answer("30 days");
        let provider: &dyn HelpdeskProvider = &mock;
        let reply = provider
            .query(&QueryRequest::new("What is the return policy?"))
            .await
            .unwrap();

        assert_eq!(reply.answer, "30 days");
    }
}
