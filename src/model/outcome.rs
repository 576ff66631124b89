use crate::model::OrderId;
use serde::{Deserialize, Serialize};

/// The success/failure result of processing a single order.
///
/// Produced exactly once per task and consumed by the aggregation step in
/// [`BatchRunner`](crate::runtime::BatchRunner). A rejected checkpoint shows
/// up here as `succeeded = false`; the error itself stays at the task
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderOutcome {
    pub order_id: OrderId,
    pub succeeded: bool,
}
