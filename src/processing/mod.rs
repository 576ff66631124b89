//! Order processing logic: the processor seam and its simulated implementation.

pub mod error;
pub mod simulator;

pub use error::*;
pub use simulator::*;

use crate::model::Order;
use async_trait::async_trait;

/// Processes a single order to completion.
///
/// # Architecture Note
/// The batch runner is written against this trait, not against the simulation.
/// That keeps the fan-out/join/tally logic reusable and lets tests plug in
/// deterministic processors with no sleeps and no randomness. Implementations
/// must be shareable across tasks (`Send + Sync`), since one instance serves
/// the whole batch.
///
/// An `Err` return means this order failed; it is converted to a failed
/// outcome at the task boundary and never affects sibling orders.
#[async_trait]
pub trait OrderProcessor: Send + Sync + 'static {
    async fn process(&self, order: &Order) -> Result<(), ProcessingError>;
}
