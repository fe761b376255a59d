//! Metric sink seam.
//!
//! Scenarios and observers record through [`TelemetrySink`] so the
//! emission contract (which counters, which labels, exactly once per
//! outcome) is testable without a global recorder. [`MetricsSink`]
//! forwards to the `metrics` macros in production.

use metrics::{counter, gauge, histogram};

use crate::telemetry::names;

/// The four metric capabilities the core records against.
///
/// Calls are fire-and-forget; a malformed emission is a programming
/// error, not a runtime condition to recover from.
pub trait TelemetrySink: Send + Sync {
    /// Count one completed request for `(method, endpoint)`.
    fn increment_request(&self, method: &'static str, endpoint: &'static str);

    /// Count one error outcome for `(method, endpoint, kind)`.
    fn increment_error(&self, method: &'static str, endpoint: &'static str, kind: &'static str);

    /// Record one request duration in seconds for `(method, endpoint)`.
    fn record_duration(&self, method: &'static str, endpoint: &'static str, seconds: f64);

    /// Set a resource gauge (percent) for the given host.
    fn record_gauge(&self, name: &'static str, host: &str, percent: f64);
}

/// Production sink backed by the global `metrics` recorder.
pub struct MetricsSink;

impl TelemetrySink for MetricsSink {
    fn increment_request(&self, method: &'static str, endpoint: &'static str) {
        counter!(
            names::HTTP_REQUESTS_TOTAL,
            names::LABEL_METHOD => method,
            names::LABEL_ENDPOINT => endpoint
        )
        .increment(1);
    }

    fn increment_error(&self, method: &'static str, endpoint: &'static str, kind: &'static str) {
        counter!(
            names::HTTP_ERRORS_TOTAL,
            names::LABEL_METHOD => method,
            names::LABEL_ENDPOINT => endpoint,
            names::LABEL_ERROR => kind
        )
        .increment(1);
    }

    fn record_duration(&self, method: &'static str, endpoint: &'static str, seconds: f64) {
        histogram!(
            names::HTTP_REQUEST_DURATION_SECONDS,
            names::LABEL_METHOD => method,
            names::LABEL_ENDPOINT => endpoint
        )
        .record(seconds);
    }

    fn record_gauge(&self, name: &'static str, host: &str, percent: f64) {
        gauge!(name, names::LABEL_HOST => host.to_string()).set(percent);
    }
}

/// Test sink that records every emission in order.
#[cfg(test)]
pub use recording::{Emission, RecordingSink};

#[cfg(test)]
mod recording {
    use std::sync::Mutex;

    use super::TelemetrySink;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Emission {
        Request {
            method: &'static str,
            endpoint: &'static str,
        },
        Error {
            method: &'static str,
            endpoint: &'static str,
            kind: &'static str,
        },
        Duration {
            method: &'static str,
            endpoint: &'static str,
            seconds: f64,
        },
        Gauge {
            name: &'static str,
            host: String,
            percent: f64,
        },
    }

    #[derive(Default)]
    pub struct RecordingSink {
        emissions: Mutex<Vec<Emission>>,
    }

    impl RecordingSink {
        pub fn take(&self) -> Vec<Emission> {
            std::mem::take(&mut self.emissions.lock().unwrap())
        }
    }

    impl TelemetrySink for RecordingSink {
        fn increment_request(&self, method: &'static str, endpoint: &'static str) {
            self.emissions
                .lock()
                .unwrap()
                .push(Emission::Request { method, endpoint });
        }

        fn increment_error(&self, method: &'static str, endpoint: &'static str, kind: &'static str) {
            self.emissions
                .lock()
                .unwrap()
                .push(Emission::Error {
                    method,
                    endpoint,
                    kind,
                });
        }

        fn record_duration(&self, method: &'static str, endpoint: &'static str, seconds: f64) {
            self.emissions.lock().unwrap().push(Emission::Duration {
                method,
                endpoint,
                seconds,
            });
        }

        fn record_gauge(&self, name: &'static str, host: &str, percent: f64) {
            self.emissions.lock().unwrap().push(Emission::Gauge {
                name,
                host: host.to_string(),
                percent,
            });
        }
    }
}
