use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::error::ApiError;
use crate::handlers;
use crate::state::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/", get(handlers::home))
        // Text tools
        .route("/translate", post(handlers::translate))
        .route("/summarize", post(handlers::summarize))
        // Static tables
        .route("/languages", get(handlers::languages))
        .route("/models/translation", get(handlers::translation_models))
        .route("/models/summarization", get(handlers::summarization_models))
}

/// Full application: routes, fallbacks and middleware, bound to `state`
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes())
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!("Handler panicked: {}", detail);
    ApiError::Internal.into_response()
}
