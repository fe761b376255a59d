//! Synthetic telemetry workload generator.
//!
//! An HTTP service whose handlers and background samplers emit
//! correlated metrics, traces, and logs with statistically shaped
//! baselines and rare anomalous excursions, for exercising a downstream
//! observability pipeline and anomaly-detection model.
//!
//! ```text
//!   HTTP request / observer tick
//!       → scenario driver / resource observer
//!       → anomaly model (sampled values, injected rng + clock)
//!       → telemetry sink (counters, histogram, gauges)
//!         + tracing (spans, correlated log lines)
//! ```

// Signal generation core
pub mod anomaly;
pub mod observer;
pub mod scenario;

// Emission and transport
pub mod telemetry;

// Cross-cutting concerns
pub mod clock;
pub mod config;
pub mod http;
pub mod lifecycle;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
