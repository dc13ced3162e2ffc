//! Route definitions for the professional-facing scoring surface.

use axum::routing::get;
use axum::Router;

use crate::handlers::proof_score;
use crate::state::AppState;

/// Routes mounted at `/professional`.
///
/// ```text
/// GET /proof-score   -> ProofScore with breakdown, percentile, tier
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/proof-score", get(proof_score::get_proof_score))
}
