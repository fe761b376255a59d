//! Lifecycle management.
//!
//! ```text
//! SIGINT / ctrl-c
//!     → Shutdown::trigger
//!     → broadcast to server + observers
//!     → tasks drain and exit
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
