//! Omni-Help HTTP client module.
//!
//! This module provides the client interface for the Omni-Help backend,
//! covering assistant queries, document management, orders, and health.

mod helpdesk_client;
mod helpdesk_config;

pub use helpdesk_client::HelpdeskClient;
pub use helpdesk_config::HelpdeskConfig;
