//! Assessment attempt models.
//!
//! Maps to the `skill_assessments` table. Rows are immutable once created;
//! the `uq_skill_assessments_attempt` constraint rejects duplicate
//! (profile, type, level) submissions.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use proofstack_core::types::{ProfileId, Timestamp};

/// A row from the `skill_assessments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SkillAssessment {
    pub id: ProfileId,
    pub profile_id: ProfileId,
    pub assessment_type: String,
    pub target_level: String,
    pub score: i32,
    pub passed: bool,
    pub questions_data: Option<serde_json::Value>,
    pub time_taken_seconds: Option<i32>,
    pub completed_at: Timestamp,
}

/// DTO for inserting a new assessment attempt.
#[derive(Debug, Deserialize)]
pub struct CreateAssessment {
    pub profile_id: ProfileId,
    pub assessment_type: String,
    pub target_level: String,
    pub score: i32,
    pub passed: bool,
    pub questions_data: Option<serde_json::Value>,
    pub time_taken_seconds: Option<i32>,
}
