//! Handlers for the employer hire-limit check and recording.
//!
//! The GET check is advisory (no write); the POST records the attempt and
//! counts it atomically so concurrent requests from the same organization
//! cannot both slip under the cap.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use proofstack_core::error::CoreError;
use proofstack_core::hire_limit::{self, AttemptType, HireDecision, SubscriptionTier};
use proofstack_core::types::ProfileId;
use proofstack_db::repositories::{HireAttemptRepo, OrganizationRepo, ProfileRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response shape
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct HireDecisionResponse {
    pub allowed: bool,
    pub reason: &'static str,
    pub attempts_remaining: Option<i64>,
    pub is_unlimited: bool,
    pub requires_upgrade: bool,
}

impl From<HireDecision> for HireDecisionResponse {
    fn from(d: HireDecision) -> Self {
        Self {
            allowed: d.allowed,
            reason: d.reason,
            attempts_remaining: d.attempts_remaining,
            is_unlimited: d.is_unlimited,
            requires_upgrade: d.requires_upgrade,
        }
    }
}

// ---------------------------------------------------------------------------
// GET /employer/check-hire-limit
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct HireLimitQuery {
    pub employer_org_id: Option<ProfileId>,
    pub professional_id: Option<ProfileId>,
}

/// Advisory check of an organization's remaining hire quota. Records
/// nothing.
pub async fn check_hire_limit(
    State(state): State<AppState>,
    Query(params): Query<HireLimitQuery>,
) -> AppResult<impl IntoResponse> {
    let org_id = params
        .employer_org_id
        .ok_or_else(|| AppError::BadRequest("Missing employer_org_id".into()))?;

    let org = OrganizationRepo::find_by_id(&state.pool, org_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Organization",
            id: org_id,
        })?;
    let tier = SubscriptionTier::parse(&org.subscription_tier)?;

    let usage = HireAttemptRepo::quota_usage(
        &state.pool,
        org_id,
        params.professional_id,
        org.billing_cycle_start,
    )
    .await?;

    let decision = hire_limit::evaluate(tier, usage.distinct_contacted, usage.already_contacted);
    Ok(Json(HireDecisionResponse::from(decision)))
}

// ---------------------------------------------------------------------------
// POST /employer/check-hire-limit
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct RecordAttemptBody {
    pub employer_org_id: Option<ProfileId>,
    pub professional_id: Option<ProfileId>,
    pub attempt_type: Option<String>,
}

/// Record a hire-related contact if the organization's quota allows it.
///
/// A blocked attempt is a 200 with `allowed: false`, not an error; the
/// decision carries the upgrade marker for the client.
pub async fn record_hire_attempt(
    State(state): State<AppState>,
    Json(body): Json<RecordAttemptBody>,
) -> AppResult<impl IntoResponse> {
    let org_id = body
        .employer_org_id
        .ok_or_else(|| AppError::BadRequest("Missing employer_org_id".into()))?;
    let professional_id = body
        .professional_id
        .ok_or_else(|| AppError::BadRequest("Missing professional_id".into()))?;
    let attempt_type = body
        .attempt_type
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("Missing attempt_type".into()))?;
    let attempt_type = AttemptType::parse(attempt_type)?;

    let org = OrganizationRepo::find_by_id(&state.pool, org_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Organization",
            id: org_id,
        })?;
    let tier = SubscriptionTier::parse(&org.subscription_tier)?;

    let professional = ProfileRepo::find_by_id(&state.pool, professional_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Professional",
            id: professional_id,
        })?;
    if !professional.is_professional() {
        return Err(CoreError::Validation(
            "Hire attempts can only target professional accounts".into(),
        )
        .into());
    }

    let decision = HireAttemptRepo::check_and_record(
        &state.pool,
        org_id,
        professional_id,
        attempt_type,
        tier,
        org.billing_cycle_start,
    )
    .await?;

    if decision.requires_upgrade {
        tracing::info!(org_id = %org_id, "Free-tier hire limit reached");
    }

    Ok(Json(HireDecisionResponse::from(decision)))
}
