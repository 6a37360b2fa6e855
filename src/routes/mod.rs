//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the session API, health endpoints, Leptos SSR
//! rendering, and static assets under a single Axum router, with the
//! route-access guard layered over everything. The guard's own policy
//! exempts API and asset paths, so no per-route exemptions are needed here.

pub mod session;

use std::path::PathBuf;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::guard;
use crate::state::AppState;

/// Session and health endpoints.
fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/session", post(session::login))
        .route("/api/session/register", post(session::register))
        .route("/api/session/logout", post(session::logout))
        .route("/api/session/me", get(session::me))
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .with_state(state)
}

/// Full application router: session API + Leptos SSR + `/pkg` assets,
/// guarded by the route-access middleware.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing
/// or malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(middleware::from_fn(guard::route_guard))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Readiness: the host is ready only if the backend answers.
async fn readyz(State(state): State<AppState>) -> StatusCode {
    match state.backend.health().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "backend not ready");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
