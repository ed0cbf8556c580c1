//! Order creation and customer order search flows.
//!
//! The two flows are usually rendered together but share no state: the create
//! form binds an [`omnihelp_client::OrderDraft`] submitted verbatim, while
//! the search form replaces its result list wholesale on every lookup.

mod create;
mod search;

pub use create::{CreateOutcome, OrderCreateFlow};
pub use search::{OrderSearchFlow, SearchOutcome};
