//! Resend transactional-email client.
//!
//! Used by the scheduled promotion-expiry reminder. One configured client is
//! built at startup and injected through [`crate::state::AppState`]; an
//! unconfigured mailer logs and skips instead of failing the cron run.

use std::time::Duration;

use serde_json::json;

const RESEND_API_URL: &str = "https://api.resend.com/emails";

/// HTTP request timeout for a single send.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum MailerError {
    /// `RESEND_API_KEY` was not configured at startup.
    #[error("Resend not configured (missing RESEND_API_KEY)")]
    NotConfigured,

    /// The underlying HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Resend returned a non-2xx status.
    #[error("Resend returned HTTP {0}")]
    HttpStatus(u16),
}

/// Resend API client. Constructed once at startup.
pub struct Mailer {
    client: reqwest::Client,
    api_key: Option<String>,
    from: String,
}

impl Mailer {
    /// Build a mailer from `RESEND_API_KEY` (optional) and `EMAIL_FROM`.
    pub fn from_env() -> Self {
        let api_key = std::env::var("RESEND_API_KEY").ok().filter(|k| !k.is_empty());
        if api_key.is_none() {
            tracing::warn!("RESEND_API_KEY not set; emails will not be sent");
        }
        let from = std::env::var("EMAIL_FROM")
            .unwrap_or_else(|_| "ProofStack <notifications@proofstack.com>".into());
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self {
            client,
            api_key,
            from,
        }
    }

    /// Send the promotion-expiry reminder to a professional.
    pub async fn send_promotion_expiring(
        &self,
        to: &str,
        professional_name: &str,
        tier: &str,
        days_remaining: i64,
    ) -> Result<(), MailerError> {
        let api_key = self.api_key.as_deref().ok_or(MailerError::NotConfigured)?;

        let subject = format!("Your {tier} promotion expires in {days_remaining} days");
        let text = format!(
            "Hi {professional_name},\n\n\
             Your {tier} promotion on ProofStack expires in {days_remaining} days. \
             Renew it to keep your profile boosted in employer search results.\n\n\
             — The ProofStack team"
        );

        let response = self
            .client
            .post(RESEND_API_URL)
            .bearer_auth(api_key)
            .json(&json!({
                "from": self.from,
                "to": [to],
                "subject": subject,
                "text": text,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(MailerError::HttpStatus(response.status().as_u16()));
        }
        Ok(())
    }
}
