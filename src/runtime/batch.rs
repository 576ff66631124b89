use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{error, info};

use crate::model::{Order, OrderOutcome};
use crate::observer::{NoopObserver, ProcessObserver};
use crate::processing::OrderProcessor;

/// Aggregated result of one batch run.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchSummary {
    pub success_count: usize,
    pub failure_count: usize,
    /// Wall-clock time from batch start until every task reported.
    pub elapsed: Duration,
}

impl BatchSummary {
    /// Total number of orders accounted for. Always equals the batch size.
    pub fn total(&self) -> usize {
        self.success_count + self.failure_count
    }
}

/// Fans a batch of orders out across Tokio tasks and joins the results.
///
/// # Concurrency Model
/// One task per order, no ordering guarantees between tasks. The processor
/// and observer are shared behind `Arc`s; neither holds mutable state, so no
/// locks are needed. The join loop is a barrier: aggregation starts strictly
/// after every task has produced an outcome, and a failing task never cancels
/// its siblings.
pub struct BatchRunner<P> {
    processor: Arc<P>,
    observer: Arc<dyn ProcessObserver>,
}

impl<P: OrderProcessor> BatchRunner<P> {
    /// Creates a runner that processes orders silently.
    pub fn new(processor: P) -> Self {
        Self::with_observer(processor, Arc::new(NoopObserver))
    }

    /// Creates a runner that reports every task's lifecycle to `observer`.
    pub fn with_observer(processor: P, observer: Arc<dyn ProcessObserver>) -> Self {
        Self {
            processor: Arc::new(processor),
            observer,
        }
    }

    /// Runs every order concurrently and waits for all of them.
    ///
    /// Errors stop at each task's boundary as a failed outcome, so the
    /// summary always accounts for the full batch: `total()` equals
    /// `orders.len()` whatever the individual results were.
    pub async fn run(&self, orders: Vec<Order>) -> BatchSummary {
        let batch_size = orders.len();
        info!(batch_size, "Batch started");
        let start = Instant::now();

        let mut handles = Vec::with_capacity(batch_size);
        for order in orders {
            let processor = self.processor.clone();
            let observer = self.observer.clone();
            handles.push(tokio::spawn(async move {
                process_one(processor.as_ref(), observer.as_ref(), &order).await
            }));
        }

        let mut success_count = 0;
        let mut failure_count = 0;
        for handle in handles {
            match handle.await {
                Ok(outcome) if outcome.succeeded => success_count += 1,
                Ok(_) => failure_count += 1,
                Err(e) => {
                    // A panicked task still counts against the batch total.
                    error!(error = %e, "Order task aborted");
                    failure_count += 1;
                }
            }
        }

        let summary = BatchSummary {
            success_count,
            failure_count,
            elapsed: start.elapsed(),
        };
        info!(
            success = summary.success_count,
            failed = summary.failure_count,
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "Batch finished"
        );
        summary
    }
}

/// Runs one order through the processor, reporting lifecycle events.
///
/// This is the task boundary: whatever the processor returns, the task yields
/// an [`OrderOutcome`] and the error goes no further than the observer.
async fn process_one<P: OrderProcessor>(
    processor: &P,
    observer: &dyn ProcessObserver,
    order: &Order,
) -> OrderOutcome {
    observer.began(order.id.clone());
    let started = Instant::now();

    let result = processor.process(order).await;
    let elapsed = started.elapsed();

    let succeeded = match result {
        Ok(()) => true,
        Err(e) => {
            observer.failed(order.id.clone(), &e);
            false
        }
    };
    observer.ended(order.id.clone(), elapsed, succeeded);

    OrderOutcome {
        order_id: order.id.clone(),
        succeeded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::ProcessingError;
    use async_trait::async_trait;

    /// Deterministic processor: rejects orders with an even id, instantly.
    struct FailEvenIds;

    #[async_trait]
    impl OrderProcessor for FailEvenIds {
        async fn process(&self, order: &Order) -> Result<(), ProcessingError> {
            if order.id.0 % 2 == 0 {
                Err(ProcessingError::PaymentRejected(order.id.clone()))
            } else {
                Ok(())
            }
        }
    }

    /// Processor that panics instead of returning an outcome.
    struct Panicking;

    #[async_trait]
    impl OrderProcessor for Panicking {
        async fn process(&self, _order: &Order) -> Result<(), ProcessingError> {
            panic!("boom");
        }
    }

    fn orders(count: u32) -> Vec<Order> {
        (1..=count)
            .map(|id| Order::new(id, 10.0 * f64::from(id), format!("Customer {}", id)))
            .collect()
    }

    #[tokio::test]
    async fn tally_matches_batch_size() {
        let runner = BatchRunner::new(FailEvenIds);
        let summary = runner.run(orders(10)).await;

        assert_eq!(summary.success_count, 5);
        assert_eq!(summary.failure_count, 5);
        assert_eq!(summary.total(), 10);
    }

    #[tokio::test]
    async fn empty_batch_yields_empty_summary() {
        let runner = BatchRunner::new(FailEvenIds);
        let summary = runner.run(Vec::new()).await;

        assert_eq!(summary.success_count, 0);
        assert_eq!(summary.failure_count, 0);
        assert_eq!(summary.total(), 0);
    }

    #[tokio::test]
    async fn panicking_task_counts_as_failure() {
        let runner = BatchRunner::new(Panicking);
        let summary = runner.run(orders(3)).await;

        assert_eq!(summary.success_count, 0);
        assert_eq!(summary.failure_count, 3);
    }
}
