//! Route definitions for profile promotions.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::promotions;
use crate::state::AppState;

/// Routes mounted at `/promotions`.
///
/// ```text
/// POST /purchase   -> start a checkout for a promotion tier
/// POST /cancel     -> cancel an active promotion (idempotent upstream)
/// POST /track      -> credit a view/save/message to the active promotion
/// GET  /active     -> the caller's active promotion, if any
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/purchase", post(promotions::purchase_promotion))
        .route("/cancel", post(promotions::cancel_promotion))
        .route("/track", post(promotions::track_engagement))
        .route("/active", get(promotions::active_promotion))
}
