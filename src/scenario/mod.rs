//! Scenario driver: the named units of synthetic work.
//!
//! # Data Flow
//! ```text
//! HTTP handler (http/server.rs)
//!     → scenario function (driver.rs)
//!         → anomaly model (sampled values)
//!         → simulated delay (tokio sleep, cancellable by drop)
//!         → telemetry sink (counters, histogram)
//!         → tracing (spans, log lines inside the span scope)
//!     → outcome value (types.rs), mapped to a response by the handler
//! ```
//!
//! # Design Decisions
//! - Outcomes are returned, never thrown: the simulated 500 is an
//!   expected result, not a fault
//! - Each scenario opens exactly one top-level span; stages of the
//!   multi-stage scenario are strictly sequential child spans
//! - Randomness is threaded in by the caller so a rigged rng can force
//!   any branch in tests

pub mod driver;
pub mod types;

pub use driver::{anomaly_trigger, basic_request, data_fetch, process_request, ScenarioContext};
pub use types::{AnomalyReport, DataFetchOutcome, DataItem, DataPayload, Processed, ServiceStatus};
