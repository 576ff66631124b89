#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Order Batch Simulator
//!
//! > **A Recipe for Fan-out/Fan-in Batch Processing in Rust.**
//!
//! This crate demonstrates a pattern for running a batch of independent jobs
//! concurrently on Tokio: one task per order, a join-all barrier, and a single
//! aggregated summary at the end. The "work" itself is simulated — each order
//! sleeps through randomized stage delays and may be rejected at two
//! checkpoints — so the interesting part is the orchestration, not the domain.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Why an explicit observer instead of interception?
//!
//! Audit and timing logging is a cross-cutting concern. Rather than weaving it
//! into the pipeline (or reaching for reflection to pull an ID out of an
//! arbitrary object), the runner reports lifecycle events through the
//! [`ProcessObserver`](observer::ProcessObserver) trait:
//! - **Explicit**: the order ID is a parameter, not a field lookup.
//! - **Side-effect only**: nothing an observer does can change an outcome or
//!   abort a sibling task.
//! - **Testable**: swap in a [`RecordingObserver`](observer::RecordingObserver)
//!   and assert on the exact event stream.
//!
//! ### Why a processor trait?
//!
//! The runner is generic over [`OrderProcessor`](processing::OrderProcessor).
//! We wrote the fan-out/join/tally loop **once**, and it works for the
//! randomized simulation, for deterministic test processors, and for whatever
//! real pipeline you plug in later.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Concurrency Model
//! Each order runs in its own Tokio task. The only suspension points are the
//! two simulated stage delays, and they suspend only the task that owns them.
//! There is no shared mutable state between tasks; the success/failure tally
//! is written strictly after the join barrier.
//!
//! ### 2. Failure Semantics
//! A checkpoint rejection is an error *for that order only*. It is caught at
//! the task boundary, converted into a failed
//! [`OrderOutcome`](model::OrderOutcome), and never propagates to siblings or
//! to the aggregation step. There are no retries and no cancellation.
//!
//! ### 3. Observability
//! We use `tracing` with structured fields everywhere. The
//! [`AuditLogger`](observer::AuditLogger) emits one started/finished pair per
//! order plus an error event for each rejection, and the runner logs the
//! batch-level summary. See [`runtime::tracing`] for setup.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! Pure data structures: [`Order`](model::Order), the type-safe
//! [`OrderId`](model::OrderId), and the per-task
//! [`OrderOutcome`](model::OrderOutcome).
//!
//! ### 2. The Work ([`processing`])
//! The [`OrderProcessor`](processing::OrderProcessor) seam and its simulated
//! implementation, [`SimulatedProcessor`](processing::SimulatedProcessor):
//! randomized stage delays, two failure checkpoints, typed
//! [`ProcessingError`](processing::ProcessingError)s.
//!
//! ### 3. The Eyes ([`observer`])
//! Audit/timing observers attached to every task.
//!
//! ### 4. The Orchestrator ([`runtime`])
//! [`BatchRunner`](runtime::BatchRunner) fans the batch out, joins every task,
//! and tallies the [`BatchSummary`](runtime::BatchSummary).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the ten-order demo with info logs
//! RUST_LOG=info cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod model;
pub mod observer;
pub mod processing;
pub mod runtime;
