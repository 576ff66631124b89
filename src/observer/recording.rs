//! # Recording Observer
//!
//! Test utility for asserting on the exact observer event stream without
//! scraping log output.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::model::OrderId;
use crate::observer::ProcessObserver;
use crate::processing::ProcessingError;

/// One event captured by [`RecordingObserver`].
#[derive(Debug, Clone, PartialEq)]
pub enum ObservedEvent {
    Began(OrderId),
    Failed(OrderId, ProcessingError),
    Ended {
        order_id: OrderId,
        succeeded: bool,
    },
}

/// Observer that records every event for later assertions.
///
/// Clones share the same underlying event log, so a test can hand one clone
/// to the runner and keep another for verification.
///
/// # Example
/// ```ignore
/// let observer = RecordingObserver::new();
/// let runner = BatchRunner::with_observer(processor, Arc::new(observer.clone()));
/// runner.run(orders).await;
/// assert_eq!(observer.began_count(), 10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<ObservedEvent>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every event recorded so far, in arrival order.
    pub fn events(&self) -> Vec<ObservedEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn began_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|event| matches!(event, ObservedEvent::Began(_)))
            .count()
    }

    /// The `(order_id, succeeded)` pairs from every `Ended` event.
    pub fn ended_outcomes(&self) -> Vec<(OrderId, bool)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ObservedEvent::Ended {
                    order_id,
                    succeeded,
                } => Some((order_id, succeeded)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: ObservedEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl ProcessObserver for RecordingObserver {
    fn began(&self, order_id: OrderId) {
        self.record(ObservedEvent::Began(order_id));
    }

    fn failed(&self, order_id: OrderId, error: &ProcessingError) {
        self.record(ObservedEvent::Failed(order_id, error.clone()));
    }

    fn ended(&self, order_id: OrderId, _elapsed: Duration, succeeded: bool) {
        self.record(ObservedEvent::Ended {
            order_id,
            succeeded,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_one_event_log() {
        let observer = RecordingObserver::new();
        let clone = observer.clone();

        clone.began(OrderId(1));
        clone.ended(OrderId(1), Duration::from_millis(5), true);

        assert_eq!(observer.began_count(), 1);
        assert_eq!(observer.ended_outcomes(), vec![(OrderId(1), true)]);
    }
}
