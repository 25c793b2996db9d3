//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server-rendered page lives at `/` with its form posting to
//! `/visualize`. `/canvas` serves the canvas page, whose WASM bundle is
//! served from the site root under `/pkg`. The same core output is exposed
//! as JSON and SVG under `/api` for the CLI and other clients.

pub mod api;
pub mod page;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON/SVG routes, open to cross-origin callers.
fn api_routes() -> Router<AppState> {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/api/visualize", get(api::visualize_json))
        .route("/api/visualize.svg", get(api::visualize_svg))
        .layer(cors)
}

/// Full application router.
pub fn app(state: AppState) -> Router {
    let pkg_dir = state.config.site_root.join("pkg");

    Router::new()
        .route("/", get(page::index))
        .route("/visualize", post(page::submit))
        .route("/canvas", get(page::canvas))
        .route("/healthz", get(healthz))
        .merge(api_routes())
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
