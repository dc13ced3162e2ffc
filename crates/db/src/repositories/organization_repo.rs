//! Repository for the `employer_organizations` table.

use sqlx::PgPool;

use proofstack_core::types::ProfileId;

use crate::models::organization::EmployerOrganization;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, subscription_tier, billing_cycle_start, created_at, updated_at";

/// Provides lookups of employer organizations.
pub struct OrganizationRepo;

impl OrganizationRepo {
    /// Find an organization by id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: ProfileId,
    ) -> Result<Option<EmployerOrganization>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employer_organizations WHERE id = $1");
        sqlx::query_as::<_, EmployerOrganization>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
