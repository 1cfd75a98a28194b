//! Router wiring and shared handler state.

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::routing::{delete, get, post};
use axum::Router;
use roster_core::{seed, RosterManager, RosterStore};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::assets;
use crate::config::ServerConfig;
use crate::error::ServerError;

#[derive(Clone)]
pub struct AppState {
    pub manager: RosterManager,
    /// Directory served under `/static`; `None` serves the bundled assets.
    pub static_dir: Option<PathBuf>,
}

impl AppState {
    /// Build the store (built-in or file seed) and manager described by `config`.
    pub fn from_config(config: &ServerConfig) -> Result<Self, ServerError> {
        let store = match &config.seed_path {
            Some(path) => RosterStore::from_activities(seed::load_at(path)?)?,
            None => RosterStore::seeded(),
        };
        Ok(Self {
            manager: RosterManager::with_policy(Arc::new(store), config.capacity_policy),
            static_dir: config.static_dir.clone(),
        })
    }
}

pub fn build_router(state: AppState) -> Router {
    let trace_layer = TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
        tracing::info_span!(
            "http.request",
            method = %request.method(),
            path = %request.uri().path(),
        )
    });
    let router = Router::new()
        .route("/", get(api::root))
        .route("/activities", get(api::list_activities))
        .route(
            "/activities/:activity_name/signup",
            post(api::signup),
        )
        .route(
            "/activities/:activity_name/unregister",
            delete(api::unregister),
        );
    let router = match &state.static_dir {
        Some(dir) => router.nest_service("/static", ServeDir::new(dir)),
        None => router.route("/static/:file", get(assets::bundled)),
    };
    router.layer(trace_layer).with_state(state)
}
