//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the backend proxy with Leptos SSR rendering under a
//! single Axum router. The browser app calls same-origin `/api/*` paths and
//! the proxy forwards them to the procurement backend.

pub mod proxy;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::HostError;
use crate::state::AppState;

/// Backend proxy plus the host's own liveness probe.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/{*path}", get(proxy::forward).post(proxy::forward))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Leptos SSR frontend: API proxy + Leptos SSR at `/` + static `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing
/// `LEPTOS_*` environment or `[[workspace.metadata.leptos]]` section).
pub fn leptos_app(state: AppState) -> Result<Router, HostError> {
    let conf = get_configuration(None).map_err(|e| HostError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Serve Leptos static assets (WASM, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
