//! Locale-aware edge gateway for a bilingual (en/ar) site.
//!
//! Every inbound page request is checked for a supported locale prefix and
//! redirected to the default locale when none is present. Internal paths,
//! API routes, the admin surface, and static assets are excluded from the
//! rule before it runs.

pub mod config;
pub mod content;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::locale::{LocaleRouter, RouteDecision};
pub use routing::matcher::PathExclusions;
