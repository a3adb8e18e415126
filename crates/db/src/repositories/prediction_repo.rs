//! Repository for the `predictions` table.
//!
//! Stores and returns codec tokens as opaque strings; encryption and
//! decryption happen in the caller.

use ppd_core::types::DbId;
use sqlx::PgPool;

use crate::models::prediction::{CreatePrediction, Prediction};

/// Column list for predictions queries.
const COLUMNS: &str = "id, user_id, epds_result_id, encrypted_prediction, created_at";

/// Default page size for listing a user's predictions.
const DEFAULT_LIMIT: i64 = 50;

/// Upper bound on the page size.
const MAX_LIMIT: i64 = 200;

/// Provides insert and lookup operations for predictions.
pub struct PredictionRepo;

impl PredictionRepo {
    /// Insert a prediction, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePrediction,
    ) -> Result<Prediction, sqlx::Error> {
        let query = format!(
            "INSERT INTO predictions (user_id, epds_result_id, encrypted_prediction)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Prediction>(&query)
            .bind(input.user_id)
            .bind(input.epds_result_id)
            .bind(&input.encrypted_prediction)
            .fetch_one(pool)
            .await
    }

    /// Find a prediction by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Prediction>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM predictions WHERE id = $1");
        sqlx::query_as::<_, Prediction>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's predictions, newest first.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Prediction>, sqlx::Error> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let offset = offset.unwrap_or(0).max(0);
        let query = format!(
            "SELECT {COLUMNS} FROM predictions
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Prediction>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Delete a prediction by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM predictions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
