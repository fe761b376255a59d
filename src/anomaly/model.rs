//! Sampling functions for the synthetic signal distributions.

use rand::Rng;

/// Fraction of simulated delays drawn from the slow distribution.
pub const SLOW_REQUEST_PROBABILITY: f64 = 0.15;

/// Fraction of CPU readings drawn from the spike distribution.
pub const CPU_SPIKE_PROBABILITY: f64 = 0.01;

/// Fraction of memory readings overridden by a spike.
pub const MEMORY_SPIKE_PROBABILITY: f64 = 0.05;

/// Period of the memory-drift sawtooth, in seconds.
pub const MEMORY_DRIFT_PERIOD_SECS: f64 = 300.0;

/// One CPU reading plus whether it came from the spike distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CpuSample {
    pub percent: f64,
    pub anomalous: bool,
}

/// One memory reading plus whether it came from the spike distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemorySample {
    pub percent: f64,
    pub anomalous: bool,
}

/// Anomaly kind chosen by the manual trigger endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnomalyKind {
    Latency,
    Error,
    Cpu,
}

impl AnomalyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AnomalyKind::Latency => "latency",
            AnomalyKind::Error => "error",
            AnomalyKind::Cpu => "cpu",
        }
    }
}

/// Sample one simulated processing delay, in seconds.
///
/// 15% of draws land in the slow band [0.5, 2.0]; the rest in the
/// baseline band [0.01, 0.1]. Every simulated delay in the service uses
/// this one distribution, so a single request can stack several
/// independent slow draws.
pub fn sample_latency(rng: &mut impl Rng) -> f64 {
    if rng.gen_bool(SLOW_REQUEST_PROBABILITY) {
        rng.gen_range(0.5..2.0)
    } else {
        rng.gen_range(0.01..0.1)
    }
}

/// Sample one CPU usage reading, in percent.
///
/// 1% of draws are spikes in [90, 100]; the baseline is [20, 40].
pub fn sample_cpu(rng: &mut impl Rng) -> CpuSample {
    if rng.gen_bool(CPU_SPIKE_PROBABILITY) {
        CpuSample {
            percent: rng.gen_range(90.0..100.0),
            anomalous: true,
        }
    } else {
        CpuSample {
            percent: rng.gen_range(20.0..40.0),
            anomalous: false,
        }
    }
}

/// Position within the drift sawtooth, in [0, 1).
pub fn time_factor(now_secs: f64) -> f64 {
    (now_secs % MEMORY_DRIFT_PERIOD_SECS) / MEMORY_DRIFT_PERIOD_SECS
}

/// Sample one memory usage reading, in percent.
///
/// Baseline is uniform [50, 70] plus up to 20 points of deterministic
/// drift that resets every 5 minutes. 5% of draws replace the drifted
/// baseline with a spike in [85, 95]; spike and drift never add.
pub fn sample_memory(rng: &mut impl Rng, now_secs: f64) -> MemorySample {
    let drifted = rng.gen_range(50.0..70.0) + time_factor(now_secs) * 20.0;

    if rng.gen_bool(MEMORY_SPIKE_PROBABILITY) {
        MemorySample {
            percent: rng.gen_range(85.0..95.0),
            anomalous: true,
        }
    } else {
        MemorySample {
            percent: drifted,
            anomalous: false,
        }
    }
}

/// One Bernoulli draw against a caller-supplied threshold.
pub fn error_occurs(rng: &mut impl Rng, probability: f64) -> bool {
    rng.gen_bool(probability.clamp(0.0, 1.0))
}

/// Delay for the validation stage of multi-stage processing, in seconds.
///
/// Deliberately narrower than [`sample_latency`]: validation never goes
/// slow on its own.
pub fn validation_delay(rng: &mut impl Rng) -> f64 {
    rng.gen_range(0.01..0.05)
}

/// Uniform choice of anomaly kind for the manual trigger.
pub fn choose_anomaly(rng: &mut impl Rng) -> AnomalyKind {
    match rng.gen_range(0..3) {
        0 => AnomalyKind::Latency,
        1 => AnomalyKind::Error,
        _ => AnomalyKind::Cpu,
    }
}

/// Sleep duration for the latency branch of the manual trigger.
pub fn trigger_sleep_secs(rng: &mut impl Rng) -> f64 {
    rng.gen_range(2.0..5.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn latency_distribution_matches_slow_fraction() {
        let mut rng = StdRng::seed_from_u64(42);
        let n = 10_000;
        let mut slow = 0;
        for _ in 0..n {
            let v = sample_latency(&mut rng);
            assert!((0.01..=2.0).contains(&v), "latency out of range: {v}");
            if v >= 0.5 {
                slow += 1;
            }
        }
        let fraction = slow as f64 / n as f64;
        assert!(
            (0.13..0.17).contains(&fraction),
            "slow fraction {fraction} outside tolerance"
        );
    }

    #[test]
    fn cpu_spikes_are_rare_and_high() {
        let mut rng = StdRng::seed_from_u64(7);
        let n = 10_000;
        let mut spikes = 0;
        for _ in 0..n {
            let s = sample_cpu(&mut rng);
            assert!((20.0..100.0).contains(&s.percent));
            if s.anomalous {
                spikes += 1;
                assert!(s.percent >= 90.0, "anomalous reading below 90: {}", s.percent);
            } else {
                assert!(s.percent < 40.0);
            }
        }
        let fraction = spikes as f64 / n as f64;
        assert!(
            (0.003..0.02).contains(&fraction),
            "spike fraction {fraction} outside tolerance"
        );
    }

    #[test]
    fn memory_is_deterministic_for_fixed_rng_and_time() {
        let a = sample_memory(&mut StdRng::seed_from_u64(5), 120.0);
        let b = sample_memory(&mut StdRng::seed_from_u64(5), 120.0);
        assert_eq!(a, b);
    }

    #[test]
    fn memory_drift_is_periodic() {
        assert_eq!(time_factor(10.0), time_factor(10.0 + MEMORY_DRIFT_PERIOD_SECS));
        assert_eq!(time_factor(0.0), 0.0);
        assert!(time_factor(299.0) > 0.99);
    }

    #[test]
    fn memory_spike_replaces_drift() {
        // A zero-filled rng forces the spike branch; the reading must sit
        // in the spike band regardless of how far the drift has advanced.
        let mut rng = StepRng::new(0, 0);
        let s = sample_memory(&mut rng, 299.0);
        assert!(s.anomalous);
        assert!((85.0..95.0).contains(&s.percent), "spike out of band: {}", s.percent);
    }

    #[test]
    fn memory_baseline_tracks_drift() {
        let mut spiked = 0;
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1000 {
            let s = sample_memory(&mut rng, 150.0);
            if s.anomalous {
                spiked += 1;
            } else {
                // halfway through the period: uniform [50,70] + 10
                assert!((60.0..80.0).contains(&s.percent));
            }
        }
        assert!(spiked > 0, "expected some spikes over 1000 draws");
    }

    #[test]
    fn error_occurs_honors_degenerate_thresholds() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            assert!(error_occurs(&mut rng, 1.0));
            assert!(!error_occurs(&mut rng, 0.0));
        }
    }

    #[test]
    fn zero_rng_forces_the_anomalous_branches() {
        let mut rng = StepRng::new(0, 0);
        assert!(sample_latency(&mut rng) >= 0.5);
        assert_eq!(choose_anomaly(&mut StepRng::new(0, 0)), AnomalyKind::Latency);
        assert!(error_occurs(&mut StepRng::new(0, 0), 0.05));
    }

    #[test]
    fn saturated_rng_stays_on_the_baseline() {
        let mut rng = StepRng::new(u64::MAX, 0);
        assert!(sample_latency(&mut rng) <= 0.1);
        let s = sample_cpu(&mut StepRng::new(u64::MAX, 0));
        assert!(!s.anomalous);
    }

    #[test]
    fn validation_delay_stays_in_band() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..1000 {
            let v = validation_delay(&mut rng);
            assert!((0.01..0.05).contains(&v));
        }
    }
}
