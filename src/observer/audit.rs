use std::time::Duration;

use tracing::{info, warn};

use crate::model::OrderId;
use crate::observer::ProcessObserver;
use crate::processing::ProcessingError;

/// Logs audit and performance events through `tracing`.
///
/// One started/finished pair per order, plus a warning carrying the error
/// when a checkpoint trips. The finished event doubles as the performance
/// line: it reports the measured duration for successes and failures alike.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuditLogger;

impl ProcessObserver for AuditLogger {
    fn began(&self, order_id: OrderId) {
        info!(%order_id, "Processing started");
    }

    fn failed(&self, order_id: OrderId, error: &ProcessingError) {
        warn!(%order_id, error = %error, "Processing failed");
    }

    fn ended(&self, order_id: OrderId, elapsed: Duration, succeeded: bool) {
        info!(
            %order_id,
            elapsed_ms = elapsed.as_millis() as u64,
            succeeded,
            "Processing finished"
        );
    }
}
