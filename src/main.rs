//! # Order Batch Simulator
//!
//! Ten-order demo of the concurrent batch runner.
//!
//! The entry point demonstrates:
//! 1. Setting up [`tracing`](order_batch_sim::runtime::setup_tracing).
//! 2. Announcing the fixed demo batch.
//! 3. Fanning the batch out with [`BatchRunner`] and the randomized
//!    [`SimulatedProcessor`], audited by [`AuditLogger`].
//! 4. Reporting the aggregated summary.
//!
//! No arguments, no configuration; `RUST_LOG` controls verbosity.

use std::sync::Arc;

use order_batch_sim::model::sample_batch;
use order_batch_sim::observer::AuditLogger;
use order_batch_sim::processing::SimulatedProcessor;
use order_batch_sim::runtime::{setup_tracing, BatchRunner};
use tracing::info;

#[tokio::main]
async fn main() {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting order batch simulation");

    let orders = sample_batch();
    for order in &orders {
        info!(
            order_id = %order.id,
            customer = %order.customer_name,
            total = order.total,
            "Order received"
        );
    }

    let runner = BatchRunner::with_observer(SimulatedProcessor::default(), Arc::new(AuditLogger));
    let summary = runner.run(orders).await;

    info!(
        success = summary.success_count,
        failed = summary.failure_count,
        elapsed_ms = summary.elapsed.as_millis() as u64,
        "Simulation finished"
    );
}
