//! Repository for the `epds_recommendations` table.

use sqlx::PgPool;

use crate::models::epds_recommendation::EpdsRecommendation;

/// Column list for epds_recommendations queries.
const COLUMNS: &str = "level, title, message, emergency_advice";

/// Read-only access to the seeded recommendation text.
pub struct EpdsRecommendationRepo;

impl EpdsRecommendationRepo {
    /// List all recommendations, least severe first.
    pub async fn list(pool: &PgPool) -> Result<Vec<EpdsRecommendation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM epds_recommendations ORDER BY severity ASC");
        sqlx::query_as::<_, EpdsRecommendation>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find the recommendation for a depression level (e.g. `"moderate"`).
    pub async fn find_by_level(
        pool: &PgPool,
        level: &str,
    ) -> Result<Option<EpdsRecommendation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM epds_recommendations WHERE level = $1");
        sqlx::query_as::<_, EpdsRecommendation>(&query)
            .bind(level)
            .fetch_optional(pool)
            .await
    }
}
