//! Route definitions for EPDS recommendations.
//!
//! Mounted at `/recommendations` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::recommendations;
use crate::state::AppState;

/// ```text
/// GET /            -> list_recommendations
/// GET /{level}     -> get_recommendation
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(recommendations::list_recommendations))
        .route("/{level}", get(recommendations::get_recommendation))
}
