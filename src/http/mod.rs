//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, handler dispatch)
//!     → request.rs (request ID generation)
//!     → middleware/locale_redirect.rs (exclusions, then locale rule)
//!     → health / admin / localized page handlers
//!     → Send to client
//! ```

pub mod middleware;
pub mod request;
pub mod server;

pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use server::HttpServer;
