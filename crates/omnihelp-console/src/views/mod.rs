//! Interactive views: main menu, chat, documents, and orders.
//!
//! Each view runs its own prompt loop against the shared backend client and
//! returns to the main menu when done. Backend failures are rendered inline
//! and never terminate the console; only terminal I/O errors propagate.

mod chat;
mod documents;
mod orders;

use console::style;
use dialoguer::Select;
use dialoguer::theme::ColorfulTheme;
use omnihelp_client::HelpdeskClient;

use crate::TRACING_TARGET_STARTUP;

const MAIN_MENU: [&str; 5] = [
    "Chat with the assistant",
    "Manage documents",
    "Manage orders",
    "Backend health",
    "Quit",
];

/// Runs the main menu loop until the user quits.
pub async fn main_loop(client: &HelpdeskClient) -> anyhow::Result<()> {
    let theme = ColorfulTheme::default();

    println!("{}", style("OmniHelp Product Assistant").cyan().bold());
    println!("{}", style(format!("Backend: {}", client.base_url())).dim());
    show_health(client).await;
    println!();

    loop {
        let choice = Select::with_theme(&theme)
            .with_prompt("Main menu")
            .items(&MAIN_MENU)
            .default(0)
            .interact()?;

        match choice {
            0 => chat::run(client).await?,
            1 => documents::run(client).await?,
            2 => orders::run(client).await?,
            3 => show_health(client).await,
            _ => break,
        }
        println!();
    }

    Ok(())
}

/// Queries the backend health endpoint and renders the result.
async fn show_health(client: &HelpdeskClient) {
    match client.health().await {
        Ok(status) if status.is_healthy() => {
            tracing::debug!(
                target: TRACING_TARGET_STARTUP,
                documents = ?status.documents,
                "Backend healthy"
            );
            match status.documents {
                Some(count) => println!(
                    "{} Backend is healthy ({count} documents indexed)",
                    style("✔").green()
                ),
                None => println!("{} Backend is healthy", style("✔").green()),
            }
        }
        Ok(status) => {
            let note = status.error.as_deref().unwrap_or(&status.status);
            println!("{} Backend reported: {note}", style("●").yellow());
        }
        Err(error) => {
            println!(
                "{} Backend unreachable: {}",
                style("✘").red(),
                error.user_message()
            );
        }
    }
}

/// Renders an inline error line.
pub(crate) fn print_error(message: &str) {
    println!("{} {message}", style("✘").red());
}

/// Renders an inline success line.
pub(crate) fn print_success(message: &str) {
    println!("{} {message}", style("✔").green());
}
