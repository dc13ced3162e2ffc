//! Handler for the ProofScore read endpoint.
//!
//! The score is recomputed from the stored sub-scores on every read; the
//! stored snapshot is refreshed when it drifts so the percentile window
//! query stays consistent. A professional with no rating row gets a zeroed
//! payload, never an error — scoring must not block profile rendering.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use proofstack_core::proof_score::{self, ScoreBreakdown, ScoreTier};
use proofstack_core::types::ProfileId;
use proofstack_db::repositories::RatingRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query / response shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ProofScoreQuery {
    pub professional_id: Option<ProfileId>,
}

#[derive(Debug, Serialize)]
pub struct ProofScoreResponse {
    pub proof_score: f64,
    pub breakdown: ScoreBreakdown,
    pub percentile: f64,
    pub tier: &'static str,
    pub total_projects: i64,
}

// ---------------------------------------------------------------------------
// GET /professional/proof-score
// ---------------------------------------------------------------------------

/// Return the ProofScore, breakdown, percentile, and display tier for a
/// professional.
pub async fn get_proof_score(
    State(state): State<AppState>,
    Query(params): Query<ProofScoreQuery>,
) -> AppResult<impl IntoResponse> {
    let professional_id = params
        .professional_id
        .ok_or_else(|| AppError::BadRequest("Missing professional_id".into()))?;

    let Some(rating) = RatingRepo::find_by_professional(&state.pool, professional_id).await? else {
        // No ratings yet: zero score, zero breakdown.
        return Ok(Json(ProofScoreResponse {
            proof_score: 0.0,
            breakdown: ScoreBreakdown::default(),
            percentile: 0.0,
            tier: ScoreTier::NoReviews.label(),
            total_projects: 0,
        }));
    };

    let computed = proof_score::compute(&rating.scoring_inputs());

    // Refresh the stored snapshot when a recomputation drifts from it; the
    // percentile ranking below reads the stored column.
    if (computed.score - rating.proof_score).abs() > f64::EPSILON {
        let breakdown_json = serde_json::to_value(&computed.breakdown)
            .map_err(|e| AppError::InternalError(format!("Breakdown serialization: {e}")))?;
        RatingRepo::store_score(&state.pool, professional_id, computed.score, &breakdown_json)
            .await?;
    }

    let percentile = RatingRepo::percentile(&state.pool, professional_id)
        .await?
        .unwrap_or(0.0);

    Ok(Json(ProofScoreResponse {
        proof_score: computed.score,
        percentile,
        tier: ScoreTier::from_score(Some(computed.score)).label(),
        total_projects: rating.total_projects_completed,
        breakdown: computed.breakdown,
    }))
}
