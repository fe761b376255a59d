//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files;
//! every section and field has a usable default.

use serde::{Deserialize, Serialize};

/// Root configuration for the telemetry generator.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Service identity reported in payloads and resource labels.
    pub service: ServiceConfig,

    /// HTTP listener configuration.
    pub listener: ListenerConfig,

    /// Logging, metrics exposition, and observer cadence.
    pub observability: ObservabilityConfig,

    /// Statistical knobs for the signal generator.
    pub simulation: SimulationConfig,
}

/// Service identity.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Service name echoed in responses.
    pub name: String,

    /// Value of the `host` label on resource gauges.
    pub host_label: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "demo-service".to_string(),
            host_label: "demo-host".to_string(),
        }
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Request timeout in seconds. Generous: the anomaly trigger can
    /// legitimately sleep for several seconds.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus scrape endpoint.
    pub metrics_enabled: bool,

    /// Scrape endpoint bind address.
    pub metrics_address: String,

    /// Cadence of the periodic CPU/memory observers, in seconds.
    pub observer_interval_secs: u64,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
            metrics_address: "0.0.0.0:9090".to_string(),
            observer_interval_secs: 5,
        }
    }
}

/// Statistical knobs for the signal generator.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Probability of the simulated server error on the data endpoint.
    pub error_probability: f64,

    /// Seed for per-invocation rngs. Unset means entropy; set makes
    /// every invocation's draws reproducible.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            error_probability: 0.05,
            seed: None,
        }
    }
}
