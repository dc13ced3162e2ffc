//! Hire attempt models.
//!
//! Maps to the `hire_attempts` table: one row per contact action, scoped to
//! the organization's billing cycle by `created_at`.

use serde::Serialize;
use sqlx::FromRow;

use proofstack_core::types::{ProfileId, Timestamp};

/// A row from the `hire_attempts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HireAttempt {
    pub id: ProfileId,
    pub employer_org_id: ProfileId,
    pub professional_id: ProfileId,
    pub attempt_type: String,
    pub created_at: Timestamp,
}

/// Quota usage snapshot for one organization's current billing cycle.
#[derive(Debug, Clone, Copy)]
pub struct HireQuotaUsage {
    /// Distinct professionals contacted this cycle.
    pub distinct_contacted: i64,
    /// Whether the professional being evaluated is already among them.
    pub already_contacted: bool,
}
