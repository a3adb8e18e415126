//! Route definitions for encrypted predictions.
//!
//! Mounted at `/predictions` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::predictions;
use crate::state::AppState;

/// ```text
/// GET    /          -> list_predictions (?user_id, limit, offset)
/// POST   /          -> create_prediction
/// GET    /{id}      -> get_prediction
/// DELETE /{id}      -> delete_prediction
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(predictions::list_predictions).post(predictions::create_prediction),
        )
        .route(
            "/{id}",
            get(predictions::get_prediction).delete(predictions::delete_prediction),
        )
}
