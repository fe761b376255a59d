//! Signal emission subsystem.
//!
//! # Data Flow
//! ```text
//! scenario / observer code
//!     → sink.rs (TelemetrySink trait, production impl over `metrics`)
//!     → global recorder (Prometheus exporter, exporter.rs)
//!
//! spans and log lines go through `tracing` directly; log lines fire
//! while the owning span guard is live so subscribers correlate them
//! ```
//!
//! # Design Decisions
//! - Metric names and label keys are constants in `names.rs`; call sites
//!   never spell raw strings, so the same dimension always carries the
//!   same key
//! - Metric emission is fire-and-forget; the recorder owns buffering and
//!   retention
//! - The trait seam exists so scenario tests can capture emissions
//!   without installing a global recorder

pub mod exporter;
pub mod names;
pub mod sink;

pub use sink::{MetricsSink, TelemetrySink};
