//! HTTP server setup and request dispatch.
//!
//! # Responsibilities
//! - Create the Axum router with the scenario handlers
//! - Wire up middleware (request tracing, timeout)
//! - Map scenario outcomes to HTTP responses
//! - Serve with graceful shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::clock::Clock;
use crate::config::AppConfig;
use crate::scenario::{self, DataFetchOutcome, ScenarioContext};
use crate::telemetry::TelemetrySink;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    scenario: Arc<ScenarioContext>,
    seed: Option<u64>,
}

impl AppState {
    /// Per-invocation randomness source: entropy-seeded by default,
    /// fixed-seeded when the configuration pins one.
    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

/// HTTP server for the telemetry generator.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and sinks.
    pub fn new(config: &AppConfig, sink: Arc<dyn TelemetrySink>, clock: Arc<dyn Clock>) -> Self {
        let state = AppState {
            scenario: Arc::new(ScenarioContext {
                sink,
                clock,
                service_name: config.service.name.clone(),
                error_probability: config.simulation.error_probability,
            }),
            seed: config.simulation.seed,
        };

        let router = Self::build_router(config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(index))
            .route("/api/data", get(get_data))
            .route("/api/process", post(process_data))
            .route("/health", get(health))
            .route("/simulate/anomaly", get(simulate_anomaly))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.listener.request_timeout_secs,
            )))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// `GET /` — basic request scenario.
async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let mut rng = state.rng();
    Json(scenario::basic_request(&state.scenario, &mut rng).await)
}

/// `GET /api/data` — data fetch scenario; the error branch surfaces as a
/// plain 500 with a generic body, per the simulated-failure contract.
async fn get_data(State(state): State<AppState>) -> Response {
    let mut rng = state.rng();
    match scenario::data_fetch(&state.scenario, &mut rng).await {
        DataFetchOutcome::Fetched(payload) => (StatusCode::OK, Json(payload)).into_response(),
        DataFetchOutcome::Failed => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Internal server error" })),
        )
            .into_response(),
    }
}

/// `POST /api/process` — multi-stage scenario. The body is arbitrary
/// JSON, consumed only for its serialized size; an absent or malformed
/// body counts as the empty object.
async fn process_data(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let payload: serde_json::Value =
        serde_json::from_slice(&body).unwrap_or_else(|_| json!({}));
    let body_size = payload.to_string().len();

    let mut rng = state.rng();
    Json(scenario::process_request(&state.scenario, &mut rng, body_size).await)
}

/// `GET /health` — liveness probe; deliberately emits no telemetry.
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "healthy" }))
}

#[derive(Debug, Deserialize)]
struct AnomalyParams {
    /// Overrides the random sleep duration when the latency branch is
    /// chosen.
    sleep: Option<f64>,
}

/// `GET /simulate/anomaly` — manual anomaly trigger.
async fn simulate_anomaly(
    State(state): State<AppState>,
    Query(params): Query<AnomalyParams>,
) -> impl IntoResponse {
    let mut rng = state.rng();
    Json(scenario::anomaly_trigger(&state.scenario, &mut rng, params.sleep).await)
}
