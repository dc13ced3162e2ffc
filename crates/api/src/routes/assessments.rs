//! Route definitions for skill assessments.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::assessments;
use crate::state::AppState;

/// Routes mounted at `/assessments`. All require a professional account.
///
/// ```text
/// GET  /available   -> personalized catalog with lock and completion state
/// POST /submit      -> record an attempt, possibly advancing the level
/// GET  /history     -> full attempt history
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/available", get(assessments::available_assessments))
        .route("/submit", post(assessments::submit_assessment))
        .route("/history", get(assessments::assessment_history))
}
