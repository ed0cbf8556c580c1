//! Order management types.

use serde::{Deserialize, Serialize};

/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(strum::Display, strum::AsRefStr, strum::EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OrderStatus {
    /// Order received but not yet picked up for processing.
    #[default]
    Pending,

    /// Order is being prepared.
    Processing,

    /// Order has left the warehouse.
    Shipped,

    /// Order reached the customer.
    Delivered,

    /// Order was cancelled before completion.
    Cancelled,
}

impl OrderStatus {
    /// All statuses in lifecycle order, for selection prompts.
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];
}

/// Line item attached to an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Item description.
    pub item_name: String,

    /// Ordered quantity.
    pub quantity: u32,

    /// Unit price.
    pub price: f64,
}

/// Order draft submitted to the backend.
///
/// The draft is sent verbatim; the backend is the sole authority on
/// validation beyond presence and type, so nothing here constrains values
/// (a negative total passes through).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    /// Customer-facing order identifier.
    pub order_id: String,

    /// Identifier of the ordering customer.
    pub customer_id: String,

    /// Ordered product name.
    pub product_name: String,

    /// Product model or variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_model: Option<String>,

    /// Order date as a plain `YYYY-MM-DD` string.
    pub order_date: String,

    /// Lifecycle state.
    pub status: OrderStatus,

    /// Order total.
    pub total_amount: f64,

    /// Line items, when itemized.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<OrderItem>,
}

/// Stored order returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Backend-internal row id.
    pub id: i64,

    /// Customer-facing order identifier.
    pub order_id: String,

    /// Identifier of the ordering customer.
    pub customer_id: String,

    /// Ordered product name.
    pub product_name: String,

    /// Product model or variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_model: Option<String>,

    /// Order date as stored by the backend.
    pub order_date: String,

    /// Lifecycle state.
    pub status: OrderStatus,

    /// Order total, when recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,

    /// Creation timestamp as reported by the backend.
    pub created_at: String,

    /// Last-update timestamp as reported by the backend.
    pub updated_at: String,
}
