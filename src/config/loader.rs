//! Configuration loading and validation.

use std::env;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AppConfig;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Load configuration, apply environment overrides, and validate.
///
/// With no path, starts from defaults; the binary is expected to run
/// with zero configuration in development.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut config = match path {
        Some(p) => toml::from_str(&fs::read_to_string(p)?)?,
        None => AppConfig::default(),
    };

    apply_env_overrides(&mut config);
    validate(&config)?;

    Ok(config)
}

fn apply_env_overrides(config: &mut AppConfig) {
    if let Ok(v) = env::var("TELEGEN_SERVICE_NAME") {
        config.service.name = v;
    }
    if let Ok(v) = env::var("TELEGEN_BIND_ADDRESS") {
        config.listener.bind_address = v;
    }
    if let Ok(v) = env::var("TELEGEN_METRICS_ADDRESS") {
        config.observability.metrics_address = v;
    }
}

fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    let p = config.simulation.error_probability;
    if !(0.0..=1.0).contains(&p) {
        return Err(ConfigError::Invalid(format!(
            "simulation.error_probability must be in [0, 1], got {p}"
        )));
    }
    if config.observability.observer_interval_secs == 0 {
        return Err(ConfigError::Invalid(
            "observability.observer_interval_secs must be positive".to_string(),
        ));
    }
    if config.listener.request_timeout_secs == 0 {
        return Err(ConfigError::Invalid(
            "listener.request_timeout_secs must be positive".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        assert!(validate(&config).is_ok());
        assert_eq!(config.service.name, "demo-service");
        assert_eq!(config.simulation.error_probability, 0.05);
        assert_eq!(config.observability.observer_interval_secs, 5);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [service]
            name = "loadgen"

            [simulation]
            error_probability = 0.5
            seed = 7
            "#,
        )
        .unwrap();
        assert_eq!(config.service.name, "loadgen");
        assert_eq!(config.service.host_label, "demo-host");
        assert_eq!(config.simulation.error_probability, 0.5);
        assert_eq!(config.simulation.seed, Some(7));
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
    }

    #[test]
    fn out_of_range_probability_is_rejected() {
        let mut config = AppConfig::default();
        config.simulation.error_probability = 1.5;
        assert!(matches!(validate(&config), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn zero_observer_interval_is_rejected() {
        let mut config = AppConfig::default();
        config.observability.observer_interval_secs = 0;
        assert!(validate(&config).is_err());
    }
}
