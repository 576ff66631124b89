//! Error types for order processing.

use crate::model::OrderId;
use thiserror::Error;

/// Errors that can occur while processing one order.
///
/// Both variants are simulated checkpoint rejections. They are always caught
/// at the task boundary and converted into a failed outcome; neither aborts
/// the batch.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProcessingError {
    /// The payment checkpoint rejected the order.
    #[error("Payment rejected for {0} (simulated)")]
    PaymentRejected(OrderId),

    /// The stock checkpoint found no stock for the order.
    #[error("Stock unavailable for {0} (simulated)")]
    StockUnavailable(OrderId),
}
