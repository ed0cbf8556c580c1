//! Chat view: a REPL over the conversation flow.

use console::style;
use dialoguer::Input;
use dialoguer::theme::ColorfulTheme;
use omnihelp_client::HelpdeskClient;
use omnihelp_session::{ChatFlow, ChatMessage, MessageRole, SendOutcome};

/// Command that returns to the main menu.
const BACK_COMMAND: &str = "/back";

/// Runs the chat view until the user types the back command.
pub async fn run(client: &HelpdeskClient) -> anyhow::Result<()> {
    let theme = ColorfulTheme::default();
    let mut flow = ChatFlow::new();

    println!();
    for message in flow.transcript().messages() {
        render_message(message);
    }
    println!(
        "{}",
        style(format!("Type {BACK_COMMAND} to return to the menu.")).dim()
    );

    loop {
        let line: String = Input::with_theme(&theme)
            .with_prompt("You")
            .allow_empty(true)
            .interact_text()?;

        if line.trim() == BACK_COMMAND {
            break;
        }

        match flow.send(client, &line).await {
            SendOutcome::Answered { message_id } | SendOutcome::Failed { message_id } => {
                if let Some(message) = flow.transcript().message(message_id) {
                    render_message(message);
                }
                render_intent(&flow);
            }
            SendOutcome::Ignored => {}
        }
    }

    Ok(())
}

/// Renders one transcript entry.
fn render_message(message: &ChatMessage) {
    match message.role {
        MessageRole::User => {
            println!("{} {}", style("you:").cyan().bold(), message.text);
        }
        MessageRole::Assistant if message.is_error => {
            println!("{} {}", style("assistant:").red().bold(), style(&message.text).red());
        }
        MessageRole::Assistant => {
            println!("{} {}", style("assistant:").green().bold(), message.text);
            if message.has_sources() {
                println!(
                    "  {}",
                    style(format!("Sources: {}", message.sources.join(", "))).dim()
                );
            }
        }
    }
}

/// Renders the intent and routing labels from the most recent reply.
fn render_intent(flow: &ChatFlow) {
    if let Some(intent) = flow.last_intent() {
        let route = flow.last_route().unwrap_or("-");
        println!("  {}", style(format!("Intent: {intent} → {route}")).dim());
    }
}
