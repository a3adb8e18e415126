//! Handlers for storing and reading ML predictions.
//!
//! Predictions arrive as plain JSON objects from the ML component, are sealed
//! with the shared [`PredictionCodec`] before they touch the database, and are
//! opened again on the way out. Tokens never appear in responses or logs.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use ppd_core::error::CoreError;
use ppd_core::prediction_codec::{CodecError, PredictionCodec, PredictionRecord};
use ppd_core::predictions::{validate_epds_result_id, validate_user_id};
use ppd_core::types::{DbId, Timestamp};
use ppd_db::models::prediction::{CreatePrediction, Prediction};
use ppd_db::repositories::PredictionRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Body of `POST /predictions`.
#[derive(Debug, Deserialize)]
pub struct CreatePredictionRequest {
    pub user_id: DbId,
    pub epds_result_id: Option<DbId>,
    pub prediction: PredictionRecord,
}

/// Query parameters for listing a user's predictions.
#[derive(Debug, Deserialize)]
pub struct PredictionListParams {
    pub user_id: DbId,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// A stored prediction with its payload decrypted.
#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub id: DbId,
    pub user_id: DbId,
    pub epds_result_id: Option<DbId>,
    pub prediction: PredictionRecord,
    pub created_at: Timestamp,
}

/// Decrypt a stored row.
fn open_row(codec: &PredictionCodec, row: Prediction) -> Result<PredictionResponse, CodecError> {
    let prediction = codec.decode(&row.encrypted_prediction).inspect_err(|e| {
        tracing::warn!(prediction_id = row.id, error = %e, "Stored prediction could not be opened");
    })?;

    Ok(PredictionResponse {
        id: row.id,
        user_id: row.user_id,
        epds_result_id: row.epds_result_id,
        prediction,
        created_at: row.created_at,
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /predictions
///
/// Encrypt and store a prediction. Responds with the stored row and the
/// original (decrypted) payload.
pub async fn create_prediction(
    State(state): State<AppState>,
    Json(input): Json<CreatePredictionRequest>,
) -> AppResult<impl IntoResponse> {
    validate_user_id(input.user_id).map_err(AppError::BadRequest)?;
    validate_epds_result_id(input.epds_result_id).map_err(AppError::BadRequest)?;

    let encrypted_prediction = state.codec.encode(&input.prediction)?;

    let row = PredictionRepo::create(
        &state.pool,
        &CreatePrediction {
            user_id: input.user_id,
            epds_result_id: input.epds_result_id,
            encrypted_prediction,
        },
    )
    .await?;

    tracing::info!(
        prediction_id = row.id,
        user_id = row.user_id,
        "Prediction stored"
    );

    let response = PredictionResponse {
        id: row.id,
        user_id: row.user_id,
        epds_result_id: row.epds_result_id,
        prediction: input.prediction,
        created_at: row.created_at,
    };

    Ok((StatusCode::CREATED, Json(DataResponse { data: response })))
}

/// GET /predictions/{id}
pub async fn get_prediction(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = PredictionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Prediction", id)))?;

    let response = open_row(&state.codec, row)?;
    Ok(Json(DataResponse { data: response }))
}

/// GET /predictions?user_id=&limit=&offset=
///
/// List a user's predictions, newest first. A single unreadable row fails the
/// whole request rather than being silently skipped.
pub async fn list_predictions(
    State(state): State<AppState>,
    Query(params): Query<PredictionListParams>,
) -> AppResult<impl IntoResponse> {
    validate_user_id(params.user_id).map_err(AppError::BadRequest)?;

    let rows =
        PredictionRepo::list_by_user(&state.pool, params.user_id, params.limit, params.offset)
            .await?;

    let predictions = rows
        .into_iter()
        .map(|row| open_row(&state.codec, row))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(DataResponse { data: predictions }))
}

/// DELETE /predictions/{id}
pub async fn delete_prediction(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !PredictionRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::not_found("Prediction", id)));
    }

    tracing::info!(prediction_id = id, "Prediction deleted");
    Ok(StatusCode::NO_CONTENT)
}
