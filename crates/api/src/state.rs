use std::sync::Arc;

use crate::billing::BillingClient;
use crate::config::ServerConfig;
use crate::mailer::Mailer;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// External-service clients are constructed once at startup and injected
/// here rather than instantiated ambiently per request. This is cheaply
/// cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: proofstack_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Stripe billing client (checkout sessions, subscription cancellation).
    pub billing: Arc<BillingClient>,
    /// Resend transactional-email client.
    pub mailer: Arc<Mailer>,
}
