//! Axum router construction.
//!
//! Assembles all routes into a single [`Router`] with CORS and request
//! tracing middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// - `GET /` -- static game page
/// - `GET /game_state` -- current state
/// - `POST /roll` -- roll and move
/// - `POST /save` -- persist the state
/// - `POST /reset` -- reload the persisted state
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/game_state", get(handlers::game_state))
        .route("/roll", post(handlers::roll))
        .route("/save", post(handlers::save))
        .route("/reset", post(handlers::reset))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
