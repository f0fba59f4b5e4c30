// src/api/router.rs
// HTTP router composition for the affirmation API

use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{generate_affirmation_handler, home_handler, list_affirmations_handler};
use crate::state::AppState;

/// Create the router with all endpoints. Cross-origin requests are allowed
/// from any origin so the frontend can run on a different host.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(home_handler))
        .route("/api/generate-affirmation", post(generate_affirmation_handler))
        .route("/api/affirmations", get(list_affirmations_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
