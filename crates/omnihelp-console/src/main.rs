#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod views;

use std::process;

use anyhow::Context;
use omnihelp_client::HelpdeskClient;

use crate::config::Cli;

// Tracing target constants
pub const TRACING_TARGET_STARTUP: &str = "omnihelp_console::startup";
pub const TRACING_TARGET_SHUTDOWN: &str = "omnihelp_console::shutdown";
pub const TRACING_TARGET_CONFIG: &str = "omnihelp_console::config";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let Err(error) = run().await else {
        tracing::info!(
            target: TRACING_TARGET_SHUTDOWN,
            "console terminated successfully"
        );
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_SHUTDOWN,
            error = %error,
            "console terminated with error"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::init();

    Cli::init_tracing();
    cli.log();
    cli.validate().context("invalid configuration")?;

    let client = HelpdeskClient::new(cli.helpdesk.clone())
        .context("failed to create backend client")?;

    views::main_loop(&client).await
}
