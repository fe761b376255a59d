//! Periodic resource observers.
//!
//! # Responsibilities
//! - Sample simulated CPU and memory on a fixed cadence, independent of
//!   any request
//! - Emit one gauge sample per tick, tagged with the host label
//! - Log a warning when a tick draws from the spike distribution
//!
//! # Design Decisions
//! - One tokio task per resource, exiting on the shutdown broadcast
//! - Ticks never block: sampling has no simulated delay

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use tokio::sync::broadcast;
use tokio::time;

use crate::anomaly;
use crate::clock::Clock;
use crate::telemetry::{names, TelemetrySink};

/// Which simulated resource an observer samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Cpu,
    Memory,
}

impl Resource {
    fn gauge_name(self) -> &'static str {
        match self {
            Resource::Cpu => names::SYSTEM_CPU_USAGE,
            Resource::Memory => names::SYSTEM_MEMORY_USAGE,
        }
    }
}

/// Interval-driven sampler for one simulated resource.
pub struct ResourceObserver {
    resource: Resource,
    sink: Arc<dyn TelemetrySink>,
    clock: Arc<dyn Clock>,
    host: String,
    interval: Duration,
    rng: StdRng,
}

impl ResourceObserver {
    pub fn new(
        resource: Resource,
        sink: Arc<dyn TelemetrySink>,
        clock: Arc<dyn Clock>,
        host: String,
        interval: Duration,
        rng: StdRng,
    ) -> Self {
        Self {
            resource,
            sink,
            clock,
            host,
            interval,
            rng,
        }
    }

    /// Sample until the shutdown signal arrives.
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(
            resource = ?self.resource,
            interval_secs = self.interval.as_secs_f64(),
            "Resource observer starting"
        );

        let mut ticker = time::interval(self.interval);
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.sample_once();
                }
                _ = shutdown.recv() => {
                    tracing::info!(resource = ?self.resource, "Resource observer stopping");
                    break;
                }
            }
        }
    }

    /// One draw, one gauge sample, a warning if the draw was anomalous.
    fn sample_once(&mut self) {
        let (percent, anomalous) = match self.resource {
            Resource::Cpu => {
                let s = anomaly::sample_cpu(&mut self.rng);
                if s.anomalous {
                    tracing::warn!(percent = s.percent, "HIGH CPU spike detected");
                }
                (s.percent, s.anomalous)
            }
            Resource::Memory => {
                let s = anomaly::sample_memory(&mut self.rng, self.clock.epoch_seconds());
                if s.anomalous {
                    tracing::warn!(percent = s.percent, "Memory spike detected");
                }
                (s.percent, s.anomalous)
            }
        };

        self.sink
            .record_gauge(self.resource.gauge_name(), &self.host, percent);
        tracing::debug!(
            resource = ?self.resource,
            percent,
            anomalous,
            "Resource sampled"
        );
    }
}
