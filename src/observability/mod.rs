//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handlers, server, lifecycle
//!     → tracing events and spans (TraceLayer adds one span per request)
//!     → logging.rs subscriber (EnvFilter + fmt layer)
//!     → stdout
//! ```

pub mod logging;

pub use logging::init_logging;
