//! Repository for the `profiles` table.

use sqlx::PgPool;

use proofstack_core::types::ProfileId;

use crate::models::profile::Profile;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_type, email, username, full_name, skills, years_experience, \
     skill_level, skill_level_verified_at, profile_quality_score, created_at, updated_at";

/// Profile lookups and the employer search listing.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Find a profile by id.
    pub async fn find_by_id(pool: &PgPool, id: ProfileId) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every professional with their rating and any active promotion
    /// tier, for the employer search listing. The caller filters, orders,
    /// and truncates the full set so promoted profiles are never cut off
    /// by an arbitrary row limit.
    pub async fn search_professionals(
        pool: &PgPool,
    ) -> Result<Vec<ProfessionalSearchRow>, sqlx::Error> {
        sqlx::query_as::<_, ProfessionalSearchRow>(
            "SELECT
                p.id, p.username, p.full_name, p.skills, p.years_experience,
                p.skill_level,
                r.average_rating,
                promo.tier AS promotion_tier
             FROM profiles p
             LEFT JOIN professional_ratings r ON r.professional_id = p.id
             LEFT JOIN professional_promotions promo
                ON promo.professional_id = p.id
               AND promo.is_active
               AND promo.starts_at <= now()
               AND promo.expires_at > now()
             WHERE p.user_type = 'professional'",
        )
        .fetch_all(pool)
        .await
    }
}

/// Joined row for the employer search listing.
#[derive(Debug, Clone, sqlx::FromRow, serde::Serialize)]
pub struct ProfessionalSearchRow {
    pub id: ProfileId,
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub skills: serde_json::Value,
    pub years_experience: i32,
    pub skill_level: String,
    pub average_rating: Option<f64>,
    pub promotion_tier: Option<String>,
}
