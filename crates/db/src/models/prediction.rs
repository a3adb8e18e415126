//! Prediction model. The payload is only ever stored encrypted.

use ppd_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `predictions` table.
///
/// `encrypted_prediction` holds a `PredictionCodec` token. This type is not
/// `Serialize` so the token cannot leak into an API response by accident.
#[derive(Debug, Clone, FromRow)]
pub struct Prediction {
    pub id: DbId,
    pub user_id: DbId,
    pub epds_result_id: Option<DbId>,
    pub encrypted_prediction: String,
    pub created_at: Timestamp,
}

/// Input for inserting a prediction whose payload is already encrypted.
#[derive(Debug)]
pub struct CreatePrediction {
    pub user_id: DbId,
    pub epds_result_id: Option<DbId>,
    pub encrypted_prediction: String,
}
