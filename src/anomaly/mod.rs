//! Anomaly model: statistically shaped synthetic signals.
//!
//! # Responsibilities
//! - Sample baseline and anomalous values for latency, CPU, and memory
//! - Decide error occurrence via caller-supplied Bernoulli thresholds
//! - Pick the anomaly kind for the manual trigger endpoint
//!
//! # Design Decisions
//! - Every operation takes an explicit `&mut impl Rng`; nothing reaches
//!   for ambient randomness, so seeded runs reproduce exactly
//! - Probabilities are disjoint per call site (no shared anomaly budget),
//!   keeping the per-dimension arrival rates independent for downstream
//!   detection models
//! - The memory sawtooth is the single deliberate time correlation; the
//!   current time is a parameter, never read internally

pub mod model;

pub use model::{
    choose_anomaly, error_occurs, sample_cpu, sample_latency, sample_memory, trigger_sleep_secs,
    validation_delay, AnomalyKind, CpuSample, MemorySample,
};
