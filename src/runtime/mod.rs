//! Batch orchestration and observability setup.

pub mod batch;
pub mod tracing;

pub use batch::*;
pub use tracing::*;
