//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, request ID, locale redirect)
//! - Bind server to listener
//! - Serve localized pages from the content store
//! - Expose health and admin status endpoints

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::GatewayConfig;
use crate::content::{Dictionaries, MemoryPageStore, PageStore};
use crate::http::request::{MakeRequestUuid, X_REQUEST_ID};
use crate::observability::metrics;
use crate::routing::locale::LocaleRouter;
use crate::routing::matcher::PathExclusions;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub locales: Arc<LocaleRouter>,
    pub exclusions: Arc<PathExclusions>,
    pub dictionaries: Arc<Dictionaries>,
    pub pages: Arc<dyn PageStore>,
}

/// HTTP server for the locale gateway.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a server with built-in dictionaries and the default site.
    pub fn new(config: GatewayConfig) -> Self {
        let dictionaries = Dictionaries::builtin(&config.locales.default_locale);
        let pages = Arc::new(MemoryPageStore::default_site(&config.locales.supported));
        Self::with_content(config, dictionaries, pages)
    }

    /// Create a server with explicit content sources.
    pub fn with_content(
        config: GatewayConfig,
        dictionaries: Dictionaries,
        pages: Arc<dyn PageStore>,
    ) -> Self {
        let state = AppState {
            locales: Arc::new(LocaleRouter::from_config(&config.locales)),
            exclusions: Arc::new(PathExclusions::from_config(&config.routing)),
            dictionaries: Arc::new(dictionaries),
            pages,
        };

        let router = Self::build_router(&config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        Router::new()
            .route("/api/health", get(health_handler))
            .route("/admin/status", get(admin_status_handler))
            .fallback(page_handler)
            .with_state(state.clone())
            .layer(axum::middleware::from_fn_with_state(
                state,
                crate::http::middleware::locale_redirect_middleware,
            ))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Liveness endpoint, excluded from locale routing via the `api` segment.
async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Minimal admin status endpoint. The full admin panel lives elsewhere;
/// this surface only proves the `admin` segment bypasses locale routing.
async fn admin_status_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "locales": state.locales.supported(),
        "default_locale": state.locales.default_locale(),
    }))
}

/// Localized page handler.
///
/// By the time a request lands here its path either carries a locale
/// prefix (the middleware guarantees it for page paths) or was excluded
/// and matched no route, in which case it is a plain 404.
async fn page_handler(State(state): State<AppState>, request: Request) -> Response {
    let method = request.method().as_str().to_string();
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();
    let path = request.uri().path();

    let Some((locale, page_path)) = state.locales.split_locale(path) else {
        tracing::debug!(request_id = %request_id, path = %path, "No route for excluded path");
        metrics::record_request(&method, 404, "none");
        return (StatusCode::NOT_FOUND, "not found").into_response();
    };

    match state.pages.fetch(locale, page_path) {
        Some(page) => {
            tracing::debug!(
                request_id = %request_id,
                locale = %locale,
                path = %page_path,
                "Serving page"
            );
            metrics::record_request(&method, 200, locale);
            let site_title = state.dictionaries.get(locale, "site.title").unwrap_or("");
            Html(render_page(locale, site_title, &page.title, &page.body)).into_response()
        }
        None => {
            tracing::debug!(
                request_id = %request_id,
                locale = %locale,
                path = %page_path,
                "Page not found"
            );
            metrics::record_request(&method, 404, locale);
            let message = state
                .dictionaries
                .get(locale, "page.not_found")
                .unwrap_or("page not found");
            (StatusCode::NOT_FOUND, message.to_string()).into_response()
        }
    }
}

fn render_page(locale: &str, site_title: &str, title: &str, body: &str) -> String {
    let dir = if locale == "ar" { "rtl" } else { "ltr" };
    format!(
        "<!doctype html>\n<html lang=\"{locale}\" dir=\"{dir}\">\n<head><title>{title} | {site_title}</title></head>\n<body><h1>{title}</h1><p>{body}</p></body>\n</html>\n"
    )
}
