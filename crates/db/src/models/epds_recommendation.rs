//! EPDS recommendation model (seeded reference data).

use serde::Serialize;
use sqlx::FromRow;

/// A row from the `epds_recommendations` table, keyed by depression level.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EpdsRecommendation {
    pub level: String,
    pub title: String,
    pub message: String,
    pub emergency_advice: String,
}
