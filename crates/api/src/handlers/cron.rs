//! Handler for the scheduled expiry-reminder job.
//!
//! The endpoint is invoked by an external scheduler and authenticated with a
//! dedicated shared secret instead of a user token. Failures to deliver one
//! reminder never block the rest of the batch; a promotion is only marked
//! notified after its email actually went out.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use proofstack_core::error::CoreError;
use proofstack_db::repositories::PromotionRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ExpiryCheckResponse {
    pub success: bool,
    pub count: usize,
    pub notified: usize,
    pub failed: usize,
}

// ---------------------------------------------------------------------------
// GET /cron/check-expiring-promotions
// ---------------------------------------------------------------------------

/// Send expiry reminders for promotions entering the notice window.
pub async fn check_expiring_promotions(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<impl IntoResponse> {
    verify_cron_secret(&headers, &state.config.cron_secret)?;

    let expiring = PromotionRepo::find_expiring(&state.pool).await?;
    let count = expiring.len();
    let mut notified = 0;
    let mut failed = 0;

    for promo in expiring {
        let days_remaining = (promo.expires_at - Utc::now()).num_days();
        let name = promo
            .full_name
            .as_deref()
            .or(promo.username.as_deref())
            .unwrap_or("there");

        match state
            .mailer
            .send_promotion_expiring(&promo.email, name, &promo.tier, days_remaining)
            .await
        {
            Ok(()) => {
                PromotionRepo::mark_notified(&state.pool, promo.id).await?;
                notified += 1;
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    promotion_id = %promo.id,
                    "Expiry reminder delivery failed"
                );
                failed += 1;
            }
        }
    }

    tracing::info!(count, notified, failed, "Expiring-promotions check complete");

    Ok(Json(ExpiryCheckResponse {
        success: true,
        count,
        notified,
        failed,
    }))
}

/// Constant-shape check of the scheduler secret. The rejection message is
/// deliberately generic.
fn verify_cron_secret(headers: &HeaderMap, secret: &str) -> Result<(), AppError> {
    let presented = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    if presented == Some(secret) {
        Ok(())
    } else {
        Err(CoreError::Unauthorized("Unauthorized".into()).into())
    }
}
