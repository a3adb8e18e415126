//! Handlers for EPDS recommendation lookup.
//!
//! Recommendations are seeded reference data; there are no write endpoints.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use ppd_core::epds::DepressionLevel;
use ppd_core::error::CoreError;
use ppd_db::repositories::EpdsRecommendationRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /recommendations
///
/// List every recommendation, least severe level first.
pub async fn list_recommendations(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let recommendations = EpdsRecommendationRepo::list(&state.pool).await?;
    Ok(Json(DataResponse {
        data: recommendations,
    }))
}

/// GET /recommendations/{level}
///
/// Get the recommendation for one depression level. Unknown levels are a 400;
/// a known level without a seeded row is a 404.
pub async fn get_recommendation(
    State(state): State<AppState>,
    Path(level): Path<String>,
) -> AppResult<impl IntoResponse> {
    let level: DepressionLevel = level.parse().map_err(CoreError::Validation)?;

    let recommendation = EpdsRecommendationRepo::find_by_level(&state.pool, level.as_str())
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("EpdsRecommendation", level)))?;

    Ok(Json(DataResponse {
        data: recommendation,
    }))
}
