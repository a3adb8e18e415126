use std::sync::Arc;

use ppd_core::prediction_codec::PredictionCodec;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: ppd_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Prediction encryption codec, built once from `ENCRYPTION_KEY`.
    pub codec: Arc<PredictionCodec>,
}
