//! Locale redirect middleware.
//!
//! Runs ahead of routing for every request. Excluded paths (reserved
//! segments, favicon, static files) pass straight through; anything else
//! is checked for a locale prefix and redirected to the default locale
//! when none is present.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::http::server::AppState;
use crate::observability::metrics;
use crate::routing::locale::RouteDecision;

pub async fn locale_redirect_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let decision = {
        let uri = request.uri();
        let path = uri.path();
        if state.exclusions.is_excluded(path) {
            None
        } else {
            Some(state.locales.decide(path, uri.query()))
        }
    };

    match decision {
        None | Some(RouteDecision::PassThrough) => next.run(request).await,
        Some(RouteDecision::Redirect(target)) => {
            tracing::debug!(
                path = %request.uri().path(),
                target = %target,
                "Redirecting to default locale"
            );
            metrics::record_locale_redirect(state.locales.default_locale());
            Redirect::temporary(&target).into_response()
        }
    }
}
