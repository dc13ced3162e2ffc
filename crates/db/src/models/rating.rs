//! Rating models.
//!
//! Maps to the `professional_ratings` table: one row per professional,
//! mutated by the analysis jobs and completed-project review aggregation,
//! never deleted while the account exists.

use serde::Serialize;
use sqlx::FromRow;

use proofstack_core::proof_score::RatingInputs;
use proofstack_core::types::{ProfileId, Timestamp};

/// A row from the `professional_ratings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProfessionalRating {
    pub professional_id: ProfileId,
    pub profile_quality: f64,
    pub message_quality: f64,
    pub response_speed: f64,
    pub average_rating: f64,
    pub delivery_rate: f64,
    pub completion_rate: f64,
    pub task_correctness: f64,
    pub employer_satisfaction: f64,
    pub revisions_score: f64,
    pub hire_again_rate: f64,
    pub total_projects_completed: i64,
    pub proof_score: f64,
    pub proof_score_breakdown: Option<serde_json::Value>,
    pub updated_at: Timestamp,
}

impl ProfessionalRating {
    /// Project the stored sub-scores into the scoring engine's input shape.
    pub fn scoring_inputs(&self) -> RatingInputs {
        RatingInputs {
            profile_quality: self.profile_quality,
            message_quality: self.message_quality,
            response_speed: self.response_speed,
            average_rating: self.average_rating,
            delivery_rate: self.delivery_rate,
            completion_rate: self.completion_rate,
            task_correctness: self.task_correctness,
            employer_satisfaction: self.employer_satisfaction,
            revisions_score: self.revisions_score,
            hire_again_rate: self.hire_again_rate,
            total_projects: self.total_projects_completed,
        }
    }
}
