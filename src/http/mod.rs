//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, graceful shutdown)
//!     → request.rs (assign x-request-id, open tracing span)
//!     → redirect.rs (JSON body + no-cache headers)
//!     → Send to client
//! ```

pub mod redirect;
pub mod request;
pub mod server;

pub use redirect::{RedirectResponse, REDIRECT_PATH, REDIRECT_URL};
pub use request::X_REQUEST_ID;
pub use server::HttpServer;
