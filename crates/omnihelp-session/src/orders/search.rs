//! Customer order search flow.

use omnihelp_client::{Error, HelpdeskProvider, OrderRecord};
use tracing::{debug, warn};

use crate::ORDERS_TARGET;

/// Fallback surfaced when a failure carries no backend detail.
const SEARCH_FALLBACK: &str = "Unknown error";

/// Outcome of a search attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The result list was replaced with the returned orders.
    Found {
        /// Number of orders returned.
        count: usize,
    },

    /// The lookup failed; the result list was cleared.
    Failed,

    /// The attempt was dropped: blank customer id or a lookup in flight.
    Ignored,
}

/// Search form state: one customer id lookup at a time.
///
/// The `searched` flag distinguishes an empty result list from the initial
/// state, so "no orders found" only renders after a lookup actually ran.
#[derive(Debug, Clone, Default)]
pub struct OrderSearchFlow {
    orders: Vec<OrderRecord>,
    searched: bool,
    searching: bool,
    error: Option<String>,
}

impl OrderSearchFlow {
    /// Creates a flow in the not-yet-searched state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Orders from the last completed lookup.
    pub fn orders(&self) -> &[OrderRecord] {
        &self.orders
    }

    /// Returns true once a lookup has completed, success or failure.
    pub fn has_searched(&self) -> bool {
        self.searched
    }

    /// Returns true while a lookup is in flight.
    pub fn is_searching(&self) -> bool {
        self.searching
    }

    /// Error surfaced by the last failed lookup.
    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns true when the last lookup completed with no matches.
    pub fn no_matches(&self) -> bool {
        self.searched && self.orders.is_empty()
    }

    /// Accepts the lookup, marking the flow busy.
    ///
    /// Blank ids are dropped without issuing a request or touching the
    /// searched flag. Returns the trimmed customer id to look up.
    pub fn begin(&mut self, customer_id: &str) -> Option<String> {
        let trimmed = customer_id.trim();
        if trimmed.is_empty() {
            debug!(target: ORDERS_TARGET, "Dropping blank customer id lookup");
            return None;
        }
        if self.searching {
            debug!(target: ORDERS_TARGET, "Dropping lookup while one is in flight");
            return None;
        }

        self.searching = true;
        self.error = None;
        Some(trimmed.to_string())
    }

    /// Replaces the result list with a completed lookup's orders.
    pub fn complete(&mut self, orders: Vec<OrderRecord>) {
        debug!(target: ORDERS_TARGET, count = orders.len(), "Customer lookup finished");
        self.orders = orders;
        self.searched = true;
        self.searching = false;
    }

    /// Applies a failed lookup: list cleared, error surfaced.
    pub fn fail(&mut self, error: &Error) {
        warn!(target: ORDERS_TARGET, %error, "Customer lookup failed");
        self.orders.clear();
        self.searched = true;
        self.searching = false;
        self.error = Some(format!(
            "Error searching orders: {}",
            error.detail().unwrap_or(SEARCH_FALLBACK)
        ));
    }

    /// Looks up a customer's orders and folds the result into the flow state.
    pub async fn search<P>(&mut self, provider: &P, customer_id: &str) -> SearchOutcome
    where
        P: HelpdeskProvider + ?Sized,
    {
        let Some(customer_id) = self.begin(customer_id) else {
            return SearchOutcome::Ignored;
        };

        match provider.customer_orders(&customer_id).await {
            Ok(orders) => {
                let count = orders.len();
                self.complete(orders);
                SearchOutcome::Found { count }
            }
            Err(error) => {
                self.fail(&error);
                SearchOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use omnihelp_client::{MockHelpdesk, OrderStatus};

    use super::*;

    fn record(row: i64, order_id: &str, customer_id: &str) -> OrderRecord {
        OrderRecord {
            id: row,
            order_id: order_id.to_string(),
            customer_id: customer_id.to_string(),
            product_name: "X100 Laptop".to_string(),
            product_model: None,
            order_date: "2026-08-01".to_string(),
            status: OrderStatus::Shipped,
            total_amount: Some(1299.99),
            created_at: "2026-08-01T09:30:00".to_string(),
            updated_at: "2026-08-02T14:00:00".to_string(),
        }
    }

    #[tokio::test]
    async fn test_blank_customer_id_is_a_no_op() {
        let mock = MockHelpdesk::default();
        let mut flow = OrderSearchFlow::new();

        assert_eq!(flow.search(&mock, "   ").await, SearchOutcome::Ignored);
        assert_eq!(flow.search(&mock, "").await, SearchOutcome::Ignored);

        assert!(!flow.has_searched());
        assert!(!flow.no_matches());
        assert_eq!(mock.search_calls(), 0);
    }

    #[tokio::test]
    async fn test_empty_result_is_distinguishable_from_initial_state() {
        let mock = MockHelpdesk::default();
        let mut flow = OrderSearchFlow::new();
        assert!(!flow.has_searched());

        let outcome = flow.search(&mock, "CUST-404").await;

        assert_eq!(outcome, SearchOutcome::Found { count: 0 });
        assert!(flow.has_searched());
        assert!(flow.no_matches());
        assert!(flow.orders().is_empty());
        assert!(flow.last_error().is_none());
    }

    #[tokio::test]
    async fn test_results_replace_previous_list() {
        let mock = MockHelpdesk::default();
        mock.seed_order(record(1, "ORD-1", "CUST-1"));
        mock.seed_order(record(2, "ORD-2", "CUST-1"));
        mock.seed_order(record(3, "ORD-3", "CUST-2"));
        let mut flow = OrderSearchFlow::new();

        assert_eq!(
            flow.search(&mock, "CUST-1").await,
            SearchOutcome::Found { count: 2 }
        );
        assert_eq!(
            flow.search(&mock, "CUST-2").await,
            SearchOutcome::Found { count: 1 }
        );

        assert_eq!(flow.orders().len(), 1);
        assert_eq!(flow.orders()[0].customer_id, "CUST-2");
        assert!(!flow.no_matches());
    }

    #[tokio::test]
    async fn test_whitespace_around_customer_id_is_trimmed() {
        let mock = MockHelpdesk::default();
        mock.seed_order(record(1, "ORD-1", "CUST-1"));
        let mut flow = OrderSearchFlow::new();

        let outcome = flow.search(&mock, "  CUST-1  ").await;

        assert_eq!(outcome, SearchOutcome::Found { count: 1 });
    }

    #[tokio::test]
    async fn test_failure_clears_results_and_sets_error() {
        let healthy = MockHelpdesk::default();
        healthy.seed_order(record(1, "ORD-1", "CUST-1"));
        let failing = MockHelpdesk::with_failure(503, "Database connection lost");
        let mut flow = OrderSearchFlow::new();

        flow.search(&healthy, "CUST-1").await;
        assert_eq!(flow.orders().len(), 1);

        let outcome = flow.search(&failing, "CUST-1").await;

        assert_eq!(outcome, SearchOutcome::Failed);
        assert!(flow.orders().is_empty());
        assert!(flow.has_searched());
        assert_eq!(
            flow.last_error(),
            Some("Error searching orders: Database connection lost")
        );
    }
}
