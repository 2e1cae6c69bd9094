//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! gateway. All types derive Serde traits for deserialization from config
//! files.

use serde::{Deserialize, Serialize};

/// Root configuration for the locale gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Supported locales and the default locale.
    pub locales: LocaleConfig,

    /// Paths excluded from locale routing.
    pub routing: RoutingConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Dictionary and page content sources.
    pub content: ContentConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Locale configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LocaleConfig {
    /// Supported locale codes (two lowercase ASCII letters each).
    pub supported: Vec<String>,

    /// Locale assumed when a request path carries none.
    pub default_locale: String,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            supported: vec!["en".to_string(), "ar".to_string()],
            default_locale: "en".to_string(),
        }
    }
}

/// Routing exclusion configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Reserved leading path segments never subject to locale routing.
    pub skip_segments: Vec<String>,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            skip_segments: vec![
                "_internal".to_string(),
                "api".to_string(),
                "admin".to_string(),
            ],
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Whole-request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Enable the Prometheus metrics exporter.
    pub metrics_enabled: bool,

    /// Bind address for the metrics endpoint.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

/// Content source configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ContentConfig {
    /// Directory holding `<locale>.json` dictionary files. When unset,
    /// built-in dictionaries are used.
    pub dictionary_dir: Option<String>,

    /// Pages served by the in-memory store. When empty, a small default
    /// site is seeded instead.
    pub pages: Vec<PageConfig>,
}

/// A single page entry for the in-memory store.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PageConfig {
    /// Locale the page belongs to.
    pub locale: String,

    /// Path under the locale prefix (e.g., "/services").
    pub path: String,

    /// Page title.
    pub title: String,

    /// Page body.
    pub body: String,
}
