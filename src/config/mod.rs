//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults (ServerConfig::default)   or   config file (TOML)
//!                                          → loader.rs (parse & deserialize)
//!                                          → validation.rs (semantic checks)
//!     → ServerConfig (immutable)
//!     → HttpServer::new
//! ```
//!
//! The redirect URL is not configurable; it lives in `http::redirect`.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{ListenerConfig, ObservabilityConfig, ServerConfig, TimeoutConfig};
pub use validation::ValidationError;
