//! Route definitions for scheduler-invoked jobs.

use axum::routing::get;
use axum::Router;

use crate::handlers::cron;
use crate::state::AppState;

/// Routes mounted at `/cron`. Authenticated with the scheduler secret, not
/// a user token.
///
/// ```text
/// GET /check-expiring-promotions   -> send expiry reminders
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/check-expiring-promotions",
        get(cron::check_expiring_promotions),
    )
}
