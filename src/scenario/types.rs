//! Scenario outcome payloads.
//!
//! These are the externally visible results of one scenario invocation;
//! the HTTP layer serializes them as-is. Nothing here is retained by the
//! core.

use serde::Serialize;

/// Result of the basic request scenario.
#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    pub status: &'static str,
    pub service: String,
    pub timestamp: f64,
}

/// One synthesized data item.
#[derive(Debug, Serialize)]
pub struct DataItem {
    pub id: u32,
    pub value: u32,
}

/// Success payload of the data fetch scenario.
#[derive(Debug, Serialize)]
pub struct DataPayload {
    pub items: Vec<DataItem>,
}

/// Outcome of the data fetch scenario. The error branch carries no
/// payload; the HTTP layer renders the generic error body.
#[derive(Debug)]
pub enum DataFetchOutcome {
    Fetched(DataPayload),
    Failed,
}

/// Result of the multi-stage processing scenario.
#[derive(Debug, Serialize)]
pub struct Processed {
    pub status: &'static str,
    pub timestamp: f64,
}

/// Result of the manual anomaly trigger scenario.
#[derive(Debug, Serialize)]
pub struct AnomalyReport {
    pub status: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}
