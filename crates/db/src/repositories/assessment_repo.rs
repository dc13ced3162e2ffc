//! Repository for the `skill_assessments` table.

use sqlx::PgPool;

use proofstack_core::types::ProfileId;

use crate::models::assessment::{CreateAssessment, SkillAssessment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, profile_id, assessment_type, target_level, score, passed, \
     questions_data, time_taken_seconds, completed_at";

/// Provides the attempt insert (with optional level advancement) and
/// history reads. Attempts are immutable; there is no update or delete.
pub struct AssessmentRepo;

impl AssessmentRepo {
    /// List all attempts for a profile.
    pub async fn list_by_profile(
        pool: &PgPool,
        profile_id: ProfileId,
    ) -> Result<Vec<SkillAssessment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM skill_assessments
             WHERE profile_id = $1
             ORDER BY completed_at"
        );
        sqlx::query_as::<_, SkillAssessment>(&query)
            .bind(profile_id)
            .fetch_all(pool)
            .await
    }

    /// Insert an attempt and, when the pass earns a promotion to the next
    /// level, advance the profile's skill level in the same transaction.
    ///
    /// A duplicate (profile, type, level) surfaces as a unique violation on
    /// `uq_skill_assessments_attempt`; callers map that to a conflict.
    pub async fn submit_attempt(
        pool: &PgPool,
        body: &CreateAssessment,
        new_level: Option<&str>,
    ) -> Result<SkillAssessment, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO skill_assessments
                (profile_id, assessment_type, target_level, score, passed,
                 questions_data, time_taken_seconds)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let attempt = sqlx::query_as::<_, SkillAssessment>(&query)
            .bind(body.profile_id)
            .bind(&body.assessment_type)
            .bind(&body.target_level)
            .bind(body.score)
            .bind(body.passed)
            .bind(&body.questions_data)
            .bind(body.time_taken_seconds)
            .fetch_one(&mut *tx)
            .await?;

        if let Some(level) = new_level {
            sqlx::query(
                "UPDATE profiles
                 SET skill_level = $2, skill_level_verified_at = now(), updated_at = now()
                 WHERE id = $1",
            )
            .bind(body.profile_id)
            .bind(level)
            .execute(&mut *tx)
            .await?;
            tracing::debug!(profile_id = %body.profile_id, level, "Advancing skill level");
        }

        tx.commit().await?;
        Ok(attempt)
    }
}
