//! Handlers for promotion purchase, cancellation, engagement tracking, and
//! the professional's own promotion status.
//!
//! Purchase goes through a hosted checkout; the promotion row itself is
//! created by the checkout completion webhook flow, so purchase here only
//! validates, enforces the one-active rule, and returns the redirect URL.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use proofstack_core::error::CoreError;
use proofstack_core::promotion::{PromotionTier, TrackAction};
use proofstack_core::types::ProfileId;
use proofstack_db::models::promotion::Promotion;
use proofstack_db::repositories::{ProfileRepo, PromotionRepo};

use crate::billing::BillingError;
use crate::error::{AppError, AppResult};
use crate::middleware::RequireProfessional;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /promotions/purchase
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct PurchaseBody {
    pub professional_id: Option<ProfileId>,
    pub tier: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PurchaseResponse {
    pub url: String,
    pub session_id: String,
}

/// Start a promotion purchase: validate the tier, enforce the one-active
/// rule, and create a checkout session for the caller to redirect to.
pub async fn purchase_promotion(
    State(state): State<AppState>,
    Json(body): Json<PurchaseBody>,
) -> AppResult<impl IntoResponse> {
    let professional_id = body
        .professional_id
        .ok_or_else(|| AppError::BadRequest("Missing professional_id".into()))?;
    let tier = body
        .tier
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("Missing tier".into()))?;
    let tier = PromotionTier::parse(tier)?;

    let profile = ProfileRepo::find_by_id(&state.pool, professional_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Professional",
            id: professional_id,
        })?;
    if !profile.is_professional() {
        return Err(
            CoreError::Forbidden("Only professional accounts can purchase promotions".into())
                .into(),
        );
    }

    // Pre-check for a friendly message; the partial unique index on the
    // promotions table still backstops concurrent purchases.
    if PromotionRepo::find_active(&state.pool, professional_id)
        .await?
        .is_some()
    {
        return Err(CoreError::Conflict(
            "You already have an active promotion. Please cancel it first or wait for it to expire."
                .into(),
        )
        .into());
    }

    let session = state
        .billing
        .create_promotion_checkout(professional_id, tier, &profile.email)
        .await
        .map_err(|err| match err {
            BillingError::NotConfigured => {
                AppError::InternalError("Payment provider is not configured".into())
            }
            other => AppError::Billing(other.to_string()),
        })?;

    Ok(Json(PurchaseResponse {
        url: session.url,
        session_id: session.id,
    }))
}

// ---------------------------------------------------------------------------
// POST /promotions/cancel
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct CancelBody {
    pub promotion_id: Option<ProfileId>,
    /// Overrides the stored subscription id when the client already knows it.
    pub stripe_subscription_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CancelResponse {
    pub success: bool,
    pub message: &'static str,
}

/// Cancel an active promotion. Cancelling the upstream subscription is
/// idempotent: an already-gone subscription still deactivates the local row.
pub async fn cancel_promotion(
    State(state): State<AppState>,
    Json(body): Json<CancelBody>,
) -> AppResult<impl IntoResponse> {
    let promotion_id = body
        .promotion_id
        .ok_or_else(|| AppError::BadRequest("Missing promotion_id".into()))?;

    let promotion = PromotionRepo::find_active_by_id(&state.pool, promotion_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Active promotion",
            id: promotion_id,
        })?;

    let subscription_id = body
        .stripe_subscription_id
        .as_deref()
        .or(promotion.stripe_subscription_id.as_deref());

    if let Some(subscription_id) = subscription_id {
        match state.billing.cancel_subscription(subscription_id).await {
            Ok(()) => {}
            Err(BillingError::NotConfigured) => {
                tracing::warn!(
                    promotion_id = %promotion_id,
                    "Payment provider not configured; skipping subscription cancellation"
                );
            }
            Err(other) => return Err(AppError::Billing(other.to_string())),
        }
    }

    PromotionRepo::deactivate(&state.pool, promotion_id).await?;

    Ok(Json(CancelResponse {
        success: true,
        message:
            "Promotion canceled successfully. It will remain active until the end of your billing period.",
    }))
}

// ---------------------------------------------------------------------------
// POST /promotions/track
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct TrackBody {
    pub professional_id: Option<ProfileId>,
    pub action: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TrackResponse {
    pub success: bool,
    pub tracked: bool,
}

/// Credit an engagement event to a professional's active promotion.
///
/// Tracking is best-effort: a professional with no active promotion, or a
/// storage hiccup, yields `tracked: false` rather than a failure that would
/// bubble into the browsing flow.
pub async fn track_engagement(
    State(state): State<AppState>,
    Json(body): Json<TrackBody>,
) -> AppResult<impl IntoResponse> {
    let professional_id = body
        .professional_id
        .ok_or_else(|| AppError::BadRequest("Missing professional_id".into()))?;
    let action = body
        .action
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("Missing action".into()))?;
    let action = TrackAction::parse(action)?;

    let tracked = match PromotionRepo::increment_metric(&state.pool, professional_id, action).await
    {
        Ok(tracked) => tracked,
        Err(err) => {
            tracing::warn!(error = %err, professional_id = %professional_id, "Engagement tracking failed");
            false
        }
    };

    Ok(Json(TrackResponse {
        success: true,
        tracked,
    }))
}

// ---------------------------------------------------------------------------
// GET /promotions/active
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ActivePromotionResponse {
    pub promotion: Option<Promotion>,
}

/// Return the authenticated professional's active promotion, if any.
pub async fn active_promotion(
    State(state): State<AppState>,
    RequireProfessional(user): RequireProfessional,
) -> AppResult<impl IntoResponse> {
    let promotion = PromotionRepo::find_active(&state.pool, user.profile_id).await?;
    Ok(Json(ActivePromotionResponse { promotion }))
}
