//! Employer organization models.

use serde::Serialize;
use sqlx::FromRow;

use proofstack_core::types::{ProfileId, Timestamp};

/// A row from the `employer_organizations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EmployerOrganization {
    pub id: ProfileId,
    pub name: String,
    pub subscription_tier: String,
    pub billing_cycle_start: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
