#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

//! # omnihelp-client
//!
//! A typed HTTP client for the Omni-Help assistant backend.
//!
//! This crate wraps the backend's REST surface in strongly-typed async
//! methods, with structured logging and a flat error type that preserves the
//! backend's human-readable failure detail for display.
//!
//! ## Features
//!
//! - **Gateway**: one method per backend operation over a configurable base URL
//! - **Wire types**: tolerant superset-union request/response structures
//! - **Provider trait**: swap the live gateway for a scripted mock in tests
//! - **Observability**: structured logging and tracing integration
//!
//! ## Quick Start
//!
//! ```ignore
//! use omnihelp_client::{HelpdeskClient, HelpdeskConfig, QueryRequest};
//!
//! #[tokio::main]
//! async fn main() -> omnihelp_client::Result<()> {
//!     let config = HelpdeskConfig::new("http://localhost:8000");
//!     let client = HelpdeskClient::new(config)?;
//!
//!     let request = QueryRequest::new("What is the return policy?");
//!     let response = client.query(&request).await?;
//!     println!("Answer: {}", response.answer);
//!
//!     Ok(())
//! }
//! ```

// Tracing targets for observability
/// Logging target for gateway request/response edges.
pub const GATEWAY_TARGET: &str = "omnihelp_client::gateway";

/// Logging target for client configuration.
pub const CONFIG_TARGET: &str = "omnihelp_client::config";

// Core modules
pub mod client;
mod error;
#[cfg(any(test, feature = "test-utils"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-utils")))]
mod mock;
#[doc(hidden)]
pub mod prelude;
mod provider;
pub mod types;

pub use client::{HelpdeskClient, HelpdeskConfig};
pub use error::{Error, Result};
#[cfg(any(test, feature = "test-utils"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-utils")))]
pub use mock::{MockFailure, MockHelpdesk, MockScript};
pub use provider::HelpdeskProvider;
pub use types::{
    DocumentDeleted, DocumentInfo, DocumentUploadResponse, HealthStatus, OrderDraft, OrderItem,
    OrderRecord, OrderStatus, QueryRequest, QueryResponse,
};
