//! Routers: common (health, readiness, version, OpenAPI) and the tutorial resource.

mod common;
mod tutorial;

pub use common::common_routes;
pub use tutorial::tutorial_routes;

use crate::config::AppConfig;
use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Full application router: common routes at the root, tutorial routes under `api_prefix`.
pub fn app(state: AppState, api_prefix: &str, max_body_bytes: usize) -> Router {
    let api = tutorial_routes(state.clone());
    let api = if api_prefix.is_empty() {
        api
    } else {
        Router::new().nest(api_prefix, api)
    };
    Router::new()
        .merge(common_routes(state, api_prefix))
        .merge(api)
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TraceLayer::new_for_http())
}

/// [`app`] with prefix and body limit taken from the loaded config.
pub fn app_from_config(state: AppState, config: &AppConfig) -> Router {
    app(state, &config.api_prefix, config.max_body_bytes)
}
