//! Order creation flow.

use jiff::Zoned;
use omnihelp_client::{Error, HelpdeskProvider, OrderDraft, OrderRecord, OrderStatus};
use tracing::{debug, warn};

use crate::ORDERS_TARGET;

/// Fallback surfaced when a failure carries no backend detail.
const CREATE_FALLBACK: &str = "Unknown error";

/// Confirmation surfaced after a successful creation.
const CREATED_MESSAGE: &str = "Order created successfully!";

/// Outcome of a creation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The order was stored by the backend.
    Created,

    /// The backend rejected the draft; it is retained for correction.
    Failed,

    /// The attempt was dropped because a submission is already in flight.
    Ignored,
}

/// Order form state: a draft bound to form fields, submitted verbatim.
///
/// No local validation is applied; the backend is the sole authority on the
/// draft's values, so even a negative total is submitted as-is.
#[derive(Debug, Clone)]
pub struct OrderCreateFlow {
    draft: OrderDraft,
    submitting: bool,
    confirmation: Option<String>,
    error: Option<String>,
    last_created: Option<OrderRecord>,
}

impl OrderCreateFlow {
    /// Creates a flow with a fresh default draft.
    pub fn new() -> Self {
        Self {
            draft: Self::default_draft(),
            submitting: false,
            confirmation: None,
            error: None,
            last_created: None,
        }
    }

    /// A fresh draft: pending status, zero total, today's date.
    fn default_draft() -> OrderDraft {
        OrderDraft {
            order_id: String::new(),
            customer_id: String::new(),
            product_name: String::new(),
            product_model: None,
            order_date: Zoned::now().date().to_string(),
            status: OrderStatus::Pending,
            total_amount: 0.0,
            items: Vec::new(),
        }
    }

    /// Current draft, bound to the form fields.
    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    /// Mutable access to the draft for form binding.
    pub fn draft_mut(&mut self) -> &mut OrderDraft {
        &mut self.draft
    }

    /// Returns true while a submission is in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Confirmation from the last successful creation.
    pub fn confirmation(&self) -> Option<&str> {
        self.confirmation.as_deref()
    }

    /// Error surfaced by the last failed creation.
    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Record echoed by the backend for the last successful creation.
    pub fn last_created(&self) -> Option<&OrderRecord> {
        self.last_created.as_ref()
    }

    /// Accepts the submission, marking the flow busy.
    ///
    /// The draft is submitted as-is. Returns `None` while a submission is
    /// already in flight.
    pub fn begin(&mut self) -> Option<OrderDraft> {
        if self.submitting {
            debug!(target: ORDERS_TARGET, "Dropping submission while one is in flight");
            return None;
        }

        self.submitting = true;
        self.confirmation = None;
        self.error = None;
        Some(self.draft.clone())
    }

    /// Applies a successful creation: confirmation set, draft reset to
    /// defaults.
    pub fn complete(&mut self, record: OrderRecord) {
        debug!(target: ORDERS_TARGET, order_id = %record.order_id, "Order created");
        self.submitting = false;
        self.confirmation = Some(CREATED_MESSAGE.to_string());
        self.last_created = Some(record);
        self.draft = Self::default_draft();
    }

    /// Applies a failed creation: error surfaced, draft retained intact.
    pub fn fail(&mut self, error: &Error) {
        warn!(target: ORDERS_TARGET, %error, "Order creation failed");
        self.submitting = false;
        self.error = Some(format!(
            "Error creating order: {}",
            error.detail().unwrap_or(CREATE_FALLBACK)
        ));
    }

    /// Submits the current draft and folds the result into the flow state.
    pub async fn submit<P>(&mut self, provider: &P) -> CreateOutcome
    where
        P: HelpdeskProvider + ?Sized,
    {
        let Some(draft) = self.begin() else {
            return CreateOutcome::Ignored;
        };

        match provider.create_order(&draft).await {
            Ok(record) => {
                self.complete(record);
                CreateOutcome::Created
            }
            Err(error) => {
                self.fail(&error);
                CreateOutcome::Failed
            }
        }
    }
}

impl Default for OrderCreateFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use omnihelp_client::{MockFailure, MockHelpdesk, MockScript};

    use super::*;

    fn filled_flow() -> OrderCreateFlow {
        let mut flow = OrderCreateFlow::new();
        let draft = flow.draft_mut();
        draft.order_id = "ORD-1001".to_string();
        draft.customer_id = "CUST-1".to_string();
        draft.product_name = "X100 Laptop".to_string();
        draft.product_model = Some("X100-16".to_string());
        draft.status = OrderStatus::Processing;
        draft.total_amount = 1299.99;
        flow
    }

    #[test]
    fn test_new_draft_defaults() {
        let flow = OrderCreateFlow::new();
        let draft = flow.draft();

        assert!(draft.order_id.is_empty());
        assert_eq!(draft.status, OrderStatus::Pending);
        assert_eq!(draft.total_amount, 0.0);
        assert_eq!(draft.order_date, Zoned::now().date().to_string());
        assert!(draft.items.is_empty());
    }

    #[tokio::test]
    async fn test_submit_resets_draft_and_confirms() {
        let mock = MockHelpdesk::default();
        let mut flow = filled_flow();

        let outcome = flow.submit(&mock).await;

        assert_eq!(outcome, CreateOutcome::Created);
        assert_eq!(flow.confirmation(), Some("Order created successfully!"));
        assert!(flow.last_error().is_none());
        assert!(!flow.is_submitting());

        let draft = flow.draft();
        assert!(draft.order_id.is_empty());
        assert!(draft.customer_id.is_empty());
        assert_eq!(draft.status, OrderStatus::Pending);
        assert_eq!(draft.total_amount, 0.0);

        let record = flow.last_created().unwrap();
        assert_eq!(record.order_id, "ORD-1001");
        assert_eq!(record.customer_id, "CUST-1");
    }

    #[tokio::test]
    async fn test_negative_total_is_not_blocked_locally() {
        let mock = MockHelpdesk::with_failure(400, "Total amount must be non-negative");
        let mut flow = filled_flow();
        flow.draft_mut().total_amount = -5.0;

        let outcome = flow.submit(&mock).await;

        // Failed rather than Ignored: the draft reached the backend.
        assert_eq!(outcome, CreateOutcome::Failed);
        assert_eq!(
            flow.last_error(),
            Some("Error creating order: Total amount must be non-negative")
        );
        assert_eq!(flow.draft().total_amount, -5.0);
        assert_eq!(flow.draft().order_id, "ORD-1001");
    }

    #[tokio::test]
    async fn test_failure_without_detail_uses_fallback() {
        let mock = MockHelpdesk::new(MockScript {
            failure: Some(MockFailure {
                status: 500,
                detail: None,
            }),
            ..MockScript::default()
        });
        let mut flow = filled_flow();

        flow.submit(&mock).await;

        assert_eq!(flow.last_error(), Some("Error creating order: Unknown error"));
    }

    #[tokio::test]
    async fn test_submission_clears_previous_feedback() {
        let failing = MockHelpdesk::with_failure(400, "Missing product name");
        let healthy = MockHelpdesk::default();
        let mut flow = filled_flow();

        flow.submit(&failing).await;
        assert!(flow.last_error().is_some());

        flow.submit(&healthy).await;
        assert!(flow.last_error().is_none());
        assert!(flow.confirmation().is_some());
    }
}
