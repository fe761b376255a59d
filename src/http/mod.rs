//! HTTP surface of the generator.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → server.rs (Axum router, middleware)
//!     → handler builds a per-invocation rng
//!     → scenario driver runs the unit of synthetic work
//!     → outcome serialized as the response
//! ```
//!
//! `/health` is the one route that bypasses the scenario layer entirely:
//! a liveness probe must not pollute the generated signals.

pub mod server;

pub use server::HttpServer;
