//! Documents view: list, upload, and delete indexed documents.

use std::path::Path;

use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use omnihelp_client::{DocumentInfo, HelpdeskClient};
use omnihelp_session::{SelectedFile, UploadFlow};

use super::{print_error, print_success};

const DOCUMENTS_MENU: [&str; 4] = [
    "List indexed documents",
    "Upload a PDF",
    "Delete a document",
    "Back",
];

/// Runs the documents view until the user goes back.
pub async fn run(client: &HelpdeskClient) -> anyhow::Result<()> {
    let theme = ColorfulTheme::default();
    let mut flow = UploadFlow::new();

    loop {
        let choice = Select::with_theme(&theme)
            .with_prompt("Documents")
            .items(&DOCUMENTS_MENU)
            .default(0)
            .interact()?;

        match choice {
            0 => list(client).await,
            1 => upload(client, &mut flow, &theme).await?,
            2 => delete(client, &theme).await?,
            _ => break,
        }
    }

    Ok(())
}

/// Fetches and renders the indexed documents.
async fn list(client: &HelpdeskClient) {
    match client.list_documents().await {
        Ok(documents) if documents.is_empty() => {
            println!("{}", style("No documents indexed yet.").dim());
        }
        Ok(documents) => {
            for document in &documents {
                render_document(document);
            }
        }
        Err(error) => print_error(&error.user_message()),
    }
}

/// Renders one document descriptor line.
fn render_document(document: &DocumentInfo) {
    let date = document.upload_date.as_deref().unwrap_or("-");
    println!(
        "{}  {} chunks, uploaded {date}  {}",
        style(&document.filename).bold(),
        document.chunks,
        style(&document.document_id).dim()
    );
}

/// Prompts for a file path, stages the file, and uploads it on confirmation.
async fn upload(
    client: &HelpdeskClient,
    flow: &mut UploadFlow,
    theme: &ColorfulTheme,
) -> anyhow::Result<()> {
    let path: String = Input::with_theme(theme)
        .with_prompt("Path to a PDF file")
        .allow_empty(true)
        .interact_text()?;
    let path = path.trim();
    if path.is_empty() {
        return Ok(());
    }

    let content = match tokio::fs::read(path).await {
        Ok(content) => content,
        Err(error) => {
            print_error(&format!("Could not read {path}: {error}"));
            return Ok(());
        }
    };
    let name = Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path);

    let file = SelectedFile::new(name, content);
    let prompt = format!("Upload {} ({})?", file.name(), file.formatted_size());
    if !flow.select(file) {
        print_error("Only PDF files can be uploaded.");
        return Ok(());
    }

    let confirmed = Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(true)
        .interact()?;
    if !confirmed {
        flow.clear();
        return Ok(());
    }

    flow.upload(client).await;
    if let Some(result) = flow.last_result() {
        if result.success {
            print_success(&result.message);
            if let Some(chunks) = result.chunks {
                println!("  {}", style(format!("Processed {chunks} chunks")).dim());
            }
        } else {
            print_error(&result.message);
        }
    }

    Ok(())
}

/// Prompts for a document id and deletes it.
async fn delete(client: &HelpdeskClient, theme: &ColorfulTheme) -> anyhow::Result<()> {
    let document_id: String = Input::with_theme(theme)
        .with_prompt("Document id")
        .allow_empty(true)
        .interact_text()?;
    let document_id = document_id.trim();
    if document_id.is_empty() {
        return Ok(());
    }

    match client.delete_document(document_id).await {
        Ok(deleted) => print_success(&deleted.message),
        Err(error) => print_error(&error.user_message()),
    }

    Ok(())
}
