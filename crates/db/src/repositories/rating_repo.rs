//! Repository for the `professional_ratings` table.

use sqlx::PgPool;

use proofstack_core::types::ProfileId;

use crate::models::rating::ProfessionalRating;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "professional_id, profile_quality, message_quality, response_speed, \
     average_rating, delivery_rate, completion_rate, task_correctness, \
     employer_satisfaction, revisions_score, hire_again_rate, \
     total_projects_completed, proof_score, proof_score_breakdown, updated_at";

/// Provides reads of rating sub-scores and the derived-score refresh.
pub struct RatingRepo;

impl RatingRepo {
    /// Find the rating row for a professional, if one exists yet.
    pub async fn find_by_professional(
        pool: &PgPool,
        professional_id: ProfileId,
    ) -> Result<Option<ProfessionalRating>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM professional_ratings WHERE professional_id = $1");
        sqlx::query_as::<_, ProfessionalRating>(&query)
            .bind(professional_id)
            .fetch_optional(pool)
            .await
    }

    /// Persist a freshly computed score and breakdown.
    ///
    /// The stored `proof_score` feeds the percentile window query, so it is
    /// refreshed whenever a recomputation drifts from the stored value.
    pub async fn store_score(
        pool: &PgPool,
        professional_id: ProfileId,
        score: f64,
        breakdown: &serde_json::Value,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE professional_ratings
             SET proof_score = $2, proof_score_breakdown = $3, updated_at = now()
             WHERE professional_id = $1",
        )
        .bind(professional_id)
        .bind(score)
        .bind(breakdown)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Percentile rank (0-100) of a professional's stored score among all
    /// rated professionals. `None` if the professional has no rating row.
    pub async fn percentile(
        pool: &PgPool,
        professional_id: ProfileId,
    ) -> Result<Option<f64>, sqlx::Error> {
        sqlx::query_scalar::<_, f64>(
            "SELECT percentile FROM (
                SELECT professional_id,
                       percent_rank() OVER (ORDER BY proof_score) * 100 AS percentile
                FROM professional_ratings
             ) ranked
             WHERE professional_id = $1",
        )
        .bind(professional_id)
        .fetch_optional(pool)
        .await
    }
}
