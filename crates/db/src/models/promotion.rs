//! Promotion models.
//!
//! Maps to the `professional_promotions` table. At most one row per
//! professional may be active at a time (`uq_promotions_one_active`).

use serde::Serialize;
use sqlx::FromRow;

use proofstack_core::types::{ProfileId, Timestamp};

/// A row from the `professional_promotions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Promotion {
    pub id: ProfileId,
    pub professional_id: ProfileId,
    pub tier: String,
    pub is_active: bool,
    pub stripe_subscription_id: Option<String>,
    pub starts_at: Timestamp,
    pub expires_at: Timestamp,
    pub views_count: i32,
    pub saves_count: i32,
    pub messages_count: i32,
    pub expiry_notified: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Joined row for the expiring-promotions reminder: promotion plus the
/// owner's contact details.
#[derive(Debug, Clone, FromRow)]
pub struct ExpiringPromotion {
    pub id: ProfileId,
    pub professional_id: ProfileId,
    pub tier: String,
    pub expires_at: Timestamp,
    pub email: String,
    pub full_name: Option<String>,
    pub username: Option<String>,
}
