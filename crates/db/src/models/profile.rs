//! Profile models.
//!
//! Maps to the `profiles` table. A profile is either a professional or an
//! employer; `user_type` gates promotion purchases and assessment access.

use serde::Serialize;
use sqlx::FromRow;

use proofstack_core::types::{ProfileId, Timestamp};

/// Account type constants matching the `profiles.user_type` check constraint.
pub const USER_TYPE_PROFESSIONAL: &str = "professional";
pub const USER_TYPE_EMPLOYER: &str = "employer";

/// A row from the `profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: ProfileId,
    pub user_type: String,
    pub email: String,
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub skills: serde_json::Value,
    pub years_experience: i32,
    pub skill_level: String,
    pub skill_level_verified_at: Option<Timestamp>,
    pub profile_quality_score: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Profile {
    pub fn is_professional(&self) -> bool {
        self.user_type == USER_TYPE_PROFESSIONAL
    }
}
