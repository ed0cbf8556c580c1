//! Console configuration management.
//!
//! The console carries a single configuration group, the backend connection
//! settings from [`HelpdeskConfig`]. Everything can be provided via CLI
//! arguments or environment variables; use `--help` to see all options.
//!
//! # Example
//!
//! ```bash
//! # Point the console at a backend
//! omnihelp-console --base-url "http://localhost:8000"
//!
//! # Or via environment variables
//! OMNIHELP_BASE_URL="http://localhost:8000" omnihelp-console
//! ```

use std::process;

use anyhow::Context;
use clap::Parser;
use omnihelp_client::HelpdeskConfig;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::{TRACING_TARGET_CONFIG, TRACING_TARGET_STARTUP};

/// Complete console configuration.
#[derive(Debug, Clone, Parser, Serialize, Deserialize)]
#[command(name = "omnihelp")]
#[command(about = "Interactive terminal console for the Omni-Help assistant")]
#[command(version)]
pub struct Cli {
    /// Backend connection configuration.
    #[clap(flatten)]
    pub helpdesk: HelpdeskConfig,
}

impl Cli {
    /// Loads environment variables from .env file (if enabled) and parses CLI arguments.
    ///
    /// Ensures .env files are loaded before clap parses arguments, so
    /// environment variables from .env can be used as defaults.
    pub fn init() -> Self {
        Self::load_dotenv();
        Self::parse()
    }

    /// Loads environment variables from .env file if the dotenv feature is enabled.
    #[cfg(feature = "dotenv")]
    fn load_dotenv() {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }
    }

    /// No-op when dotenv feature is disabled.
    #[cfg(not(feature = "dotenv"))]
    fn load_dotenv() {}

    /// Initializes tracing with environment-based filtering.
    pub fn init_tracing() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    /// Logs build information at debug level.
    fn log_build_info() {
        tracing::debug!(
            target: TRACING_TARGET_STARTUP,
            version = env!("CARGO_PKG_VERSION"),
            pid = process::id(),
            arch = std::env::consts::ARCH,
            os = std::env::consts::OS,
            features = ?Self::enabled_features(),
            "Build information"
        );
    }

    /// Validates all configuration values.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.helpdesk
            .validate()
            .context("invalid backend configuration")?;
        Ok(())
    }

    /// Logs configuration at startup (no sensitive information).
    pub fn log(&self) {
        Self::log_build_info();

        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            base_url = %self.helpdesk.base_url,
            request_timeout_secs = self.helpdesk.request_timeout_secs,
            "Backend configuration"
        );
    }

    /// Returns a list of enabled compile-time features.
    fn enabled_features() -> Vec<&'static str> {
        [cfg!(feature = "dotenv").then_some("dotenv")]
            .into_iter()
            .flatten()
            .collect()
    }
}
