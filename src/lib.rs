//! Redirect server library.
//!
//! Serves `GET /api/getRedirect`, answering `{"url": "..."}` with headers
//! that forbid caching.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::schema::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
