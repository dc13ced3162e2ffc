//! Route definitions for the employer-facing surface.

use axum::routing::get;
use axum::Router;

use crate::handlers::{hire_limit, search};
use crate::state::AppState;

/// Routes mounted at `/employer`.
///
/// ```text
/// GET  /check-hire-limit   -> advisory quota check (no write)
/// POST /check-hire-limit   -> check and record a hire attempt
/// GET  /search             -> promoted-first professional listing
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/check-hire-limit",
            get(hire_limit::check_hire_limit).post(hire_limit::record_hire_attempt),
        )
        .route("/search", get(search::search_professionals))
}
