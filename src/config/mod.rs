//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional TOML file (path from TELEGEN_CONFIG or first CLI arg)
//!     → loader.rs (parse & deserialize, defaults when absent)
//!     → environment overrides (TELEGEN_* variables)
//!     → semantic validation (probabilities, cadence)
//!     → AppConfig (immutable, shared via Arc)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so the binary runs with zero configuration
//! - Env overrides mirror the knobs operators actually tune per
//!   deployment (service name, bind and scrape addresses)
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::AppConfig;
