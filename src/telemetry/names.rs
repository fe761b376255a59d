//! Metric names and label keys.
//!
//! One conceptual dimension, one key: `method`, `endpoint`, and `error`
//! mean the same thing at every call site.

/// Total HTTP requests, by method and endpoint.
pub const HTTP_REQUESTS_TOTAL: &str = "http_requests_total";

/// Total HTTP errors, by method, endpoint, and error kind.
pub const HTTP_ERRORS_TOTAL: &str = "http_errors_total";

/// Request duration in seconds, by method and endpoint.
pub const HTTP_REQUEST_DURATION_SECONDS: &str = "http_request_duration_seconds";

/// Simulated CPU usage percentage, by host.
pub const SYSTEM_CPU_USAGE: &str = "system_cpu_usage";

/// Simulated memory usage percentage, by host.
pub const SYSTEM_MEMORY_USAGE: &str = "system_memory_usage";

pub const LABEL_METHOD: &str = "method";
pub const LABEL_ENDPOINT: &str = "endpoint";
pub const LABEL_ERROR: &str = "error";
pub const LABEL_HOST: &str = "host";

/// Error kind for the simulated uncaught server error.
pub const ERROR_KIND_SERVER: &str = "500";

/// Error kind for manually triggered anomalies.
pub const ERROR_KIND_SIMULATED: &str = "simulated";
