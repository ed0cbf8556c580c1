//! Orders view: create, search by customer, and look up by id.

use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use omnihelp_client::{HelpdeskClient, OrderRecord, OrderStatus};
use omnihelp_session::{CreateOutcome, OrderCreateFlow, OrderSearchFlow, SearchOutcome};

use super::{print_error, print_success};

const ORDERS_MENU: [&str; 4] = [
    "Create an order",
    "Search orders by customer",
    "Look up an order",
    "Back",
];

/// Runs the orders view until the user goes back.
pub async fn run(client: &HelpdeskClient) -> anyhow::Result<()> {
    let theme = ColorfulTheme::default();
    let mut create_flow = OrderCreateFlow::new();
    let mut search_flow = OrderSearchFlow::new();

    loop {
        let choice = Select::with_theme(&theme)
            .with_prompt("Orders")
            .items(&ORDERS_MENU)
            .default(0)
            .interact()?;

        match choice {
            0 => create(client, &mut create_flow, &theme).await?,
            1 => search(client, &mut search_flow, &theme).await?,
            2 => lookup(client, &theme).await?,
            _ => break,
        }
    }

    Ok(())
}

/// Fills the draft from form prompts and submits it.
///
/// Values are submitted as entered; the backend decides what is acceptable.
async fn create(
    client: &HelpdeskClient,
    flow: &mut OrderCreateFlow,
    theme: &ColorfulTheme,
) -> anyhow::Result<()> {
    let draft = flow.draft_mut();

    // Prompts are pre-filled from the draft so a rejected submission comes
    // back with its values intact.
    draft.order_id = Input::with_theme(theme)
        .with_prompt("Order id")
        .with_initial_text(draft.order_id.clone())
        .allow_empty(true)
        .interact_text()?;
    draft.customer_id = Input::with_theme(theme)
        .with_prompt("Customer id")
        .with_initial_text(draft.customer_id.clone())
        .allow_empty(true)
        .interact_text()?;
    draft.product_name = Input::with_theme(theme)
        .with_prompt("Product name")
        .with_initial_text(draft.product_name.clone())
        .allow_empty(true)
        .interact_text()?;

    let model: String = Input::with_theme(theme)
        .with_prompt("Product model (optional)")
        .with_initial_text(draft.product_model.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;
    draft.product_model = (!model.trim().is_empty()).then_some(model);

    draft.order_date = Input::with_theme(theme)
        .with_prompt("Order date")
        .default(draft.order_date.clone())
        .interact_text()?;

    let status = Select::with_theme(theme)
        .with_prompt("Status")
        .items(&OrderStatus::ALL)
        .default(0)
        .interact()?;
    draft.status = OrderStatus::ALL[status];

    draft.total_amount = Input::with_theme(theme)
        .with_prompt("Total amount")
        .default(draft.total_amount)
        .interact_text()?;

    match flow.submit(client).await {
        CreateOutcome::Created => {
            if let Some(confirmation) = flow.confirmation() {
                print_success(confirmation);
            }
            if let Some(record) = flow.last_created() {
                println!("  {}", style(format!("Stored as {}", record.order_id)).dim());
            }
        }
        CreateOutcome::Failed => {
            if let Some(error) = flow.last_error() {
                print_error(error);
            }
        }
        CreateOutcome::Ignored => {}
    }

    Ok(())
}

/// Prompts for a customer id and renders the matching orders.
async fn search(
    client: &HelpdeskClient,
    flow: &mut OrderSearchFlow,
    theme: &ColorfulTheme,
) -> anyhow::Result<()> {
    let customer_id: String = Input::with_theme(theme)
        .with_prompt("Customer id")
        .allow_empty(true)
        .interact_text()?;

    match flow.search(client, &customer_id).await {
        SearchOutcome::Ignored => {
            println!("{}", style("Enter a customer id to search.").dim());
        }
        SearchOutcome::Failed => {
            if let Some(error) = flow.last_error() {
                print_error(error);
            }
        }
        SearchOutcome::Found { .. } => {
            if flow.no_matches() {
                println!("No orders found for this customer.");
            } else {
                for order in flow.orders() {
                    render_order(order);
                }
            }
        }
    }

    Ok(())
}

/// Prompts for an order id and renders the stored order.
async fn lookup(client: &HelpdeskClient, theme: &ColorfulTheme) -> anyhow::Result<()> {
    let order_id: String = Input::with_theme(theme)
        .with_prompt("Order id")
        .allow_empty(true)
        .interact_text()?;
    let order_id = order_id.trim();
    if order_id.is_empty() {
        return Ok(());
    }

    match client.get_order(order_id).await {
        Ok(order) => render_order(&order),
        Err(error) => print_error(&error.user_message()),
    }

    Ok(())
}

/// Renders one stored order as a card.
fn render_order(order: &OrderRecord) {
    println!("{}", style(format!("Order {}", order.order_id)).bold());
    println!("  Customer: {}", order.customer_id);
    match order.product_model.as_deref() {
        Some(model) => println!("  Product: {} ({model})", order.product_name),
        None => println!("  Product: {}", order.product_name),
    }
    println!("  Status: {}   Date: {}", order.status, order.order_date);
    if let Some(total) = order.total_amount {
        println!("  Amount: ${total:.2}");
    }
}
