//! The randomized order pipeline: stage delays plus two failure checkpoints.

use std::ops::Range;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;
use tracing::debug;

use crate::model::Order;
use crate::processing::{OrderProcessor, ProcessingError};

/// Tunables for the simulated pipeline.
///
/// The defaults reproduce the demo behavior: every stage waits somewhere in
/// `[500, 2000)` ms and each checkpoint trips 20% of the time. Tests shrink
/// the delay range so the suite stays fast.
///
/// Failure rates must lie within `0.0..=1.0`, and `delay_ms` must be
/// non-empty.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Uniform range for each simulated stage delay, in milliseconds.
    pub delay_ms: Range<u64>,
    /// Probability that the payment checkpoint rejects the order.
    pub payment_failure_rate: f64,
    /// Probability that the stock checkpoint fails, once payment passed.
    pub stock_failure_rate: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            delay_ms: 500..2000,
            payment_failure_rate: 0.2,
            stock_failure_rate: 0.2,
        }
    }
}

/// Simulates the stock-check/payment/shipping pipeline for one order.
///
/// No real work happens here: each stage is a randomized
/// [`tokio::time::sleep`], so a "busy" order only suspends its own task.
pub struct SimulatedProcessor {
    config: SimulationConfig,
}

impl SimulatedProcessor {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Draws one stage delay.
    ///
    /// The thread-local generator is not `Send`, so draws happen in sync
    /// helpers and never live across an await point.
    fn stage_delay(&self) -> Duration {
        Duration::from_millis(rand::random_range(self.config.delay_ms.clone()))
    }

    fn checkpoint_trips(&self, rate: f64) -> bool {
        rand::random_bool(rate)
    }
}

impl Default for SimulatedProcessor {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

#[async_trait]
impl OrderProcessor for SimulatedProcessor {
    async fn process(&self, order: &Order) -> Result<(), ProcessingError> {
        // Stock check and payment, modeled as one wait.
        let delay = self.stage_delay();
        debug!(order_id = %order.id, delay_ms = delay.as_millis() as u64, "Checking stock and payment");
        sleep(delay).await;

        if self.checkpoint_trips(self.config.payment_failure_rate) {
            return Err(ProcessingError::PaymentRejected(order.id.clone()));
        }
        // The stock draw only happens once payment passed; a rejected payment
        // returns before it.
        if self.checkpoint_trips(self.config.stock_failure_rate) {
            return Err(ProcessingError::StockUnavailable(order.id.clone()));
        }

        // Shipping preparation.
        let delay = self.stage_delay();
        debug!(order_id = %order.id, delay_ms = delay.as_millis() as u64, "Preparing shipment");
        sleep(delay).await;

        Ok(())
    }
}
