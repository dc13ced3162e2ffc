//! Repository for the `hire_attempts` table.
//!
//! Quota counting is scoped to the organization's current billing cycle via
//! `created_at >= billing_cycle_start`; older attempts simply fall out of the
//! window when the cycle rolls over.

use sqlx::PgPool;

use proofstack_core::hire_limit::{self, AttemptType, HireDecision, SubscriptionTier};
use proofstack_core::types::{ProfileId, Timestamp};

use crate::models::hire_attempt::HireQuotaUsage;

/// Provides quota reads and the atomic check-and-record write.
pub struct HireAttemptRepo;

impl HireAttemptRepo {
    /// Snapshot the organization's quota usage for the current cycle.
    pub async fn quota_usage(
        pool: &PgPool,
        employer_org_id: ProfileId,
        professional_id: Option<ProfileId>,
        cycle_start: Timestamp,
    ) -> Result<HireQuotaUsage, sqlx::Error> {
        let row = sqlx::query_as::<_, UsageRow>(
            "SELECT
                COUNT(DISTINCT professional_id)::BIGINT AS distinct_contacted,
                COALESCE(bool_or(professional_id = $2), FALSE) AS already_contacted
             FROM hire_attempts
             WHERE employer_org_id = $1 AND created_at >= $3",
        )
        .bind(employer_org_id)
        .bind(professional_id)
        .bind(cycle_start)
        .fetch_one(pool)
        .await?;

        Ok(HireQuotaUsage {
            distinct_contacted: row.distinct_contacted,
            already_contacted: row.already_contacted,
        })
    }

    /// Evaluate the hire-limit policy and, if allowed, record the attempt.
    ///
    /// The organization row is locked for the duration of the transaction so
    /// concurrent requests from the same org serialize instead of both
    /// passing the check.
    pub async fn check_and_record(
        pool: &PgPool,
        employer_org_id: ProfileId,
        professional_id: ProfileId,
        attempt_type: AttemptType,
        tier: SubscriptionTier,
        cycle_start: Timestamp,
    ) -> Result<HireDecision, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("SELECT id FROM employer_organizations WHERE id = $1 FOR UPDATE")
            .bind(employer_org_id)
            .execute(&mut *tx)
            .await?;

        let usage = sqlx::query_as::<_, UsageRow>(
            "SELECT
                COUNT(DISTINCT professional_id)::BIGINT AS distinct_contacted,
                COALESCE(bool_or(professional_id = $2), FALSE) AS already_contacted
             FROM hire_attempts
             WHERE employer_org_id = $1 AND created_at >= $3",
        )
        .bind(employer_org_id)
        .bind(professional_id)
        .bind(cycle_start)
        .fetch_one(&mut *tx)
        .await?;

        let decision = hire_limit::evaluate(tier, usage.distinct_contacted, usage.already_contacted);

        if decision.allowed {
            sqlx::query(
                "INSERT INTO hire_attempts (employer_org_id, professional_id, attempt_type)
                 VALUES ($1, $2, $3)",
            )
            .bind(employer_org_id)
            .bind(professional_id)
            .bind(attempt_type.as_str())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(decision)
    }
}

/// Internal helper row for the quota aggregation query.
#[derive(sqlx::FromRow)]
struct UsageRow {
    distinct_contacted: i64,
    already_contacted: bool,
}
