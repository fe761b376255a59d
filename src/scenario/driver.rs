//! The four request scenarios.

use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::Rng;
use tokio::time::sleep;
use tracing::{info_span, Instrument};

use crate::anomaly::{self, AnomalyKind};
use crate::clock::Clock;
use crate::scenario::types::{
    AnomalyReport, DataFetchOutcome, DataItem, DataPayload, Processed, ServiceStatus,
};
use crate::telemetry::{names, TelemetrySink};

const GET: &str = "GET";
const POST: &str = "POST";

const ROOT_ENDPOINT: &str = "/";
const DATA_ENDPOINT: &str = "/api/data";
const PROCESS_ENDPOINT: &str = "/api/process";
const ANOMALY_ENDPOINT: &str = "/simulate/anomaly";

/// Shared collaborators handed to every scenario invocation.
///
/// The scenarios themselves are stateless; everything mutable (the rng)
/// is threaded in per call.
pub struct ScenarioContext {
    pub sink: Arc<dyn TelemetrySink>,
    pub clock: Arc<dyn Clock>,
    pub service_name: String,
    pub error_probability: f64,
}

/// Basic request: one simulated delay, one matched counter/histogram/log
/// triple, service identity in the payload.
pub async fn basic_request(
    ctx: &ScenarioContext,
    rng: &mut (impl Rng + Send),
) -> ServiceStatus {
    let start = Instant::now();
    let span = info_span!("index_request", http.method = GET, http.route = ROOT_ENDPOINT);

    async {
        let latency = anomaly::sample_latency(rng);
        sleep(Duration::from_secs_f64(latency)).await;

        ctx.sink.increment_request(GET, ROOT_ENDPOINT);
        ctx.sink
            .record_duration(GET, ROOT_ENDPOINT, start.elapsed().as_secs_f64());
        tracing::info!(latency_secs = latency, "Request to / completed");

        ServiceStatus {
            status: "ok",
            service: ctx.service_name.clone(),
            timestamp: ctx.clock.epoch_seconds(),
        }
    }
    .instrument(span)
    .await
}

/// Data fetch: the error draw comes first and short-circuits the whole
/// scenario. Exactly one of the success counter or the error counter is
/// emitted per invocation, never both.
pub async fn data_fetch(
    ctx: &ScenarioContext,
    rng: &mut (impl Rng + Send),
) -> DataFetchOutcome {
    let start = Instant::now();
    let span = info_span!(
        "get_data",
        http.method = GET,
        http.route = DATA_ENDPOINT,
        error = tracing::field::Empty,
    );

    async {
        if anomaly::error_occurs(rng, ctx.error_probability) {
            ctx.sink
                .increment_error(GET, DATA_ENDPOINT, names::ERROR_KIND_SERVER);
            tracing::error!("Internal server error occurred");
            tracing::Span::current().record("error", true);
            return DataFetchOutcome::Failed;
        }

        let latency = anomaly::sample_latency(rng);
        sleep(Duration::from_secs_f64(latency)).await;

        let count = rng.gen_range(5..=20u32);
        let items = (0..count)
            .map(|id| DataItem {
                id,
                value: rng.gen_range(1..=100),
            })
            .collect();

        ctx.sink.increment_request(GET, DATA_ENDPOINT);
        ctx.sink
            .record_duration(GET, DATA_ENDPOINT, start.elapsed().as_secs_f64());
        tracing::info!(item_count = count, "Data request completed");

        DataFetchOutcome::Fetched(DataPayload { items })
    }
    .instrument(span)
    .await
}

/// Multi-stage processing: a strictly sequential pair of child spans
/// (validate, then execute), each closed before the next opens and both
/// closed before the parent. `body_size` is the serialized size of the
/// request payload, recorded on the execute stage.
pub async fn process_request(
    ctx: &ScenarioContext,
    rng: &mut (impl Rng + Send),
    body_size: usize,
) -> Processed {
    let start = Instant::now();
    let span = info_span!(
        "process_data",
        http.method = POST,
        http.route = PROCESS_ENDPOINT,
    );

    async {
        let validation_time = anomaly::validation_delay(rng);
        sleep(Duration::from_secs_f64(validation_time))
            .instrument(info_span!("validate_input", validation.time = validation_time))
            .await;

        let processing_time = anomaly::sample_latency(rng);
        sleep(Duration::from_secs_f64(processing_time))
            .instrument(info_span!(
                "execute_processing",
                processing.time = processing_time,
                data.size = body_size as u64,
            ))
            .await;

        ctx.sink.increment_request(POST, PROCESS_ENDPOINT);
        ctx.sink
            .record_duration(POST, PROCESS_ENDPOINT, start.elapsed().as_secs_f64());
        tracing::info!(
            duration_secs = start.elapsed().as_secs_f64(),
            "Processing completed"
        );

        Processed {
            status: "processed",
            timestamp: ctx.clock.epoch_seconds(),
        }
    }
    .instrument(span)
    .await
}

/// Manual anomaly trigger: uniformly picks one anomaly kind. The CPU
/// branch only logs; the periodic CPU observer reflects spikes in the
/// metrics on its own cadence.
pub async fn anomaly_trigger(
    ctx: &ScenarioContext,
    rng: &mut (impl Rng + Send),
    sleep_override: Option<f64>,
) -> AnomalyReport {
    let span = info_span!("simulate_anomaly", "anomaly.type" = tracing::field::Empty);

    async {
        let kind = anomaly::choose_anomaly(rng);
        match kind {
            AnomalyKind::Latency => {
                // Non-finite overrides fall back to the random duration.
                let sleep_secs = sleep_override
                    .filter(|s| s.is_finite())
                    .map(|s| s.max(0.0))
                    .unwrap_or_else(|| anomaly::trigger_sleep_secs(rng));
                sleep(Duration::from_secs_f64(sleep_secs)).await;
                tracing::warn!(sleep_secs, "Simulated latency anomaly");
            }
            AnomalyKind::Error => {
                ctx.sink
                    .increment_error(GET, ANOMALY_ENDPOINT, names::ERROR_KIND_SIMULATED);
                tracing::error!("Simulated error anomaly");
            }
            AnomalyKind::Cpu => {
                tracing::warn!("Simulated CPU anomaly (check metrics)");
            }
        }
        tracing::Span::current().record("anomaly.type", kind.as_str());

        AnomalyReport {
            status: "anomaly_simulated",
            kind: kind.as_str(),
        }
    }
    .instrument(span)
    .await
}
