pub mod assessments;
pub mod cron;
pub mod employer;
pub mod health;
pub mod professional;
pub mod promotions;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /professional/proof-score          ProofScore with breakdown (GET)
///
/// /assessments/available             personalized catalog (GET, professional)
/// /assessments/submit                record an attempt (POST, professional)
/// /assessments/history               attempt history (GET, professional)
///
/// /employer/check-hire-limit         quota check (GET), check + record (POST)
/// /employer/search                   promoted-first listing (GET)
///
/// /promotions/purchase               start checkout (POST)
/// /promotions/cancel                 cancel active promotion (POST)
/// /promotions/track                  credit engagement (POST)
/// /promotions/active                 caller's active promotion (GET, professional)
///
/// /cron/check-expiring-promotions    expiry reminders (GET, scheduler secret)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/professional", professional::router())
        .nest("/assessments", assessments::router())
        .nest("/employer", employer::router())
        .nest("/promotions", promotions::router())
        .nest("/cron", cron::router())
}
