pub mod health;
pub mod predictions;
pub mod recommendations;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /recommendations    EPDS recommendation text (read-only)
/// /predictions        encrypted ML predictions
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/recommendations", recommendations::router())
        .nest("/predictions", predictions::router())
}
