//! Stripe billing client: checkout-session creation and subscription
//! cancellation over Stripe's form-encoded REST API.
//!
//! One configured client is built at startup and injected through
//! [`crate::state::AppState`]. Calls fail fast; transient failures surface
//! to the caller, who may retry the request.

use std::time::Duration;

use serde::Deserialize;

use proofstack_core::promotion::PromotionTier;
use proofstack_core::types::ProfileId;

const STRIPE_API_BASE: &str = "https://api.stripe.com/v1";

/// HTTP request timeout for a single Stripe call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for billing failures.
#[derive(Debug, thiserror::Error)]
pub enum BillingError {
    /// `STRIPE_SECRET_KEY` was not configured at startup.
    #[error("Stripe not configured (missing STRIPE_SECRET_KEY)")]
    NotConfigured,

    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Stripe returned an error response.
    #[error("Stripe returned HTTP {status}: {message}")]
    Api { status: u16, message: String },
}

// ---------------------------------------------------------------------------
// Response shapes
// ---------------------------------------------------------------------------

/// A created Stripe Checkout Session.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    error: StripeErrorDetail,
}

#[derive(Debug, Deserialize)]
struct StripeErrorDetail {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

// ---------------------------------------------------------------------------
// BillingClient
// ---------------------------------------------------------------------------

/// Stripe API client. Constructed once at startup.
pub struct BillingClient {
    client: reqwest::Client,
    secret_key: Option<String>,
    site_url: String,
}

impl BillingClient {
    /// Build a client from `STRIPE_SECRET_KEY` (optional) and the site URL.
    ///
    /// A missing key leaves the client in an unconfigured state; billing
    /// operations then return [`BillingError::NotConfigured`] instead of
    /// panicking at startup.
    pub fn from_env(site_url: &str) -> Self {
        let secret_key = std::env::var("STRIPE_SECRET_KEY").ok().filter(|k| !k.is_empty());
        if secret_key.is_none() {
            tracing::warn!("STRIPE_SECRET_KEY not set; billing operations will fail");
        }
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self {
            client,
            secret_key,
            site_url: site_url.to_string(),
        }
    }

    fn key(&self) -> Result<&str, BillingError> {
        self.secret_key.as_deref().ok_or(BillingError::NotConfigured)
    }

    /// Create a monthly-recurring Checkout Session for a promotion tier.
    ///
    /// Returns the session id and the redirect URL for the caller to follow.
    pub async fn create_promotion_checkout(
        &self,
        professional_id: ProfileId,
        tier: PromotionTier,
        customer_email: &str,
    ) -> Result<CheckoutSession, BillingError> {
        let key = self.key()?;
        let unit_amount = (tier.monthly_price_usd() * 100).to_string();
        let professional_id = professional_id.to_string();
        let description = format!(
            "Monthly subscription for {} on ProofStack",
            tier.display_name()
        );
        let success_url = format!("{}/professional/promote/manage?success=true", self.site_url);
        let cancel_url = format!("{}/professional/promote?canceled=true", self.site_url);

        let params: Vec<(&str, &str)> = vec![
            ("mode", "subscription"),
            ("payment_method_types[0]", "card"),
            ("line_items[0][price_data][currency]", "usd"),
            ("line_items[0][price_data][product_data][name]", tier.display_name()),
            ("line_items[0][price_data][product_data][description]", &description),
            ("line_items[0][price_data][recurring][interval]", "month"),
            ("line_items[0][price_data][unit_amount]", &unit_amount),
            ("line_items[0][quantity]", "1"),
            ("customer_email", customer_email),
            ("metadata[professional_id]", &professional_id),
            ("metadata[tier]", tier.as_str()),
            ("metadata[type]", "promotion_purchase"),
            ("subscription_data[metadata][professional_id]", &professional_id),
            ("subscription_data[metadata][tier]", tier.as_str()),
            ("success_url", &success_url),
            ("cancel_url", &cancel_url),
        ];

        let response = self
            .client
            .post(format!("{STRIPE_API_BASE}/checkout/sessions"))
            .bearer_auth(key)
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }
        Ok(response.json::<CheckoutSession>().await?)
    }

    /// Cancel a subscription. Succeeds if the subscription is already gone
    /// on Stripe's side, so local cancellation stays idempotent.
    pub async fn cancel_subscription(&self, subscription_id: &str) -> Result<(), BillingError> {
        let key = self.key()?;
        let response = self
            .client
            .delete(format!("{STRIPE_API_BASE}/subscriptions/{subscription_id}"))
            .bearer_auth(key)
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(());
        }

        let status = response.status().as_u16();
        let body = response.json::<StripeErrorBody>().await.ok();
        if let Some(body) = &body {
            if body.error.code.as_deref() == Some("resource_missing") {
                tracing::warn!(subscription_id, "Subscription already gone on Stripe; continuing");
                return Ok(());
            }
        }
        Err(BillingError::Api {
            status,
            message: body
                .and_then(|b| b.error.message)
                .unwrap_or_else(|| "unknown error".to_string()),
        })
    }
}

async fn api_error(response: reqwest::Response) -> BillingError {
    let status = response.status().as_u16();
    let message = response
        .json::<StripeErrorBody>()
        .await
        .ok()
        .and_then(|b| b.error.message)
        .unwrap_or_else(|| "unknown error".to_string());
    BillingError::Api { status, message }
}
