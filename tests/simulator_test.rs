use std::time::Instant;

use order_batch_sim::model::Order;
use order_batch_sim::processing::{
    OrderProcessor, ProcessingError, SimulatedProcessor, SimulationConfig,
};

fn order() -> Order {
    Order::new(1, 42.0, "Timing Customer")
}

/// A successful run sleeps through both stages, so it can never return in
/// less than twice the minimum stage delay.
#[tokio::test]
async fn success_path_sleeps_through_both_stages() {
    let processor = SimulatedProcessor::new(SimulationConfig {
        delay_ms: 40..42,
        payment_failure_rate: 0.0,
        stock_failure_rate: 0.0,
    });

    let started = Instant::now();
    let result = processor.process(&order()).await;
    let elapsed = started.elapsed();

    assert_eq!(result, Ok(()));
    assert!(
        elapsed.as_millis() >= 80,
        "Two stages of at least 40 ms each, got {:?}",
        elapsed
    );
}

/// A payment rejection returns after the first stage only: the shipping
/// delay is never paid.
#[tokio::test]
async fn payment_failure_returns_after_single_stage() {
    let processor = SimulatedProcessor::new(SimulationConfig {
        delay_ms: 100..102,
        payment_failure_rate: 1.0,
        stock_failure_rate: 0.0,
    });

    let started = Instant::now();
    let result = processor.process(&order()).await;
    let elapsed = started.elapsed();

    assert!(matches!(result, Err(ProcessingError::PaymentRejected(_))));
    assert!(
        elapsed.as_millis() >= 100,
        "The first stage still runs before the checkpoint, got {:?}",
        elapsed
    );
    assert!(
        elapsed.as_millis() < 200,
        "A rejected order must not sleep through the second stage, got {:?}",
        elapsed
    );
}

/// Over many zero-delay runs, each checkpoint's observed failure rate
/// converges to its configured probability.
#[tokio::test]
async fn checkpoint_rates_converge() {
    const RUNS: usize = 2000;

    let payment_only = SimulatedProcessor::new(SimulationConfig {
        delay_ms: 0..1,
        payment_failure_rate: 0.2,
        stock_failure_rate: 0.0,
    });
    let stock_only = SimulatedProcessor::new(SimulationConfig {
        delay_ms: 0..1,
        payment_failure_rate: 0.0,
        stock_failure_rate: 0.2,
    });

    let mut payment_failures = 0usize;
    let mut stock_failures = 0usize;
    for _ in 0..RUNS {
        if payment_only.process(&order()).await.is_err() {
            payment_failures += 1;
        }
        if stock_only.process(&order()).await.is_err() {
            stock_failures += 1;
        }
    }

    // 0.2 +/- 0.05 is over five standard deviations at this sample size.
    let payment_rate = payment_failures as f64 / RUNS as f64;
    let stock_rate = stock_failures as f64 / RUNS as f64;
    assert!(
        (0.15..=0.25).contains(&payment_rate),
        "Payment failure rate drifted to {}",
        payment_rate
    );
    assert!(
        (0.15..=0.25).contains(&stock_rate),
        "Stock failure rate drifted to {}",
        stock_rate
    );
}
