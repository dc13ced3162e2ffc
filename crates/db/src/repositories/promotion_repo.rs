//! Repository for the `professional_promotions` table.

use sqlx::PgPool;

use proofstack_core::promotion::{TrackAction, EXPIRY_NOTICE_DAYS};
use proofstack_core::types::ProfileId;

use crate::models::promotion::{ExpiringPromotion, Promotion};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, professional_id, tier, is_active, stripe_subscription_id, \
     starts_at, expires_at, views_count, saves_count, messages_count, \
     expiry_notified, created_at, updated_at";

/// Provides CRUD and metric tracking for promotions.
pub struct PromotionRepo;

impl PromotionRepo {
    /// Find a professional's active, non-expired promotion.
    pub async fn find_active(
        pool: &PgPool,
        professional_id: ProfileId,
    ) -> Result<Option<Promotion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM professional_promotions
             WHERE professional_id = $1 AND is_active AND expires_at > now()"
        );
        sqlx::query_as::<_, Promotion>(&query)
            .bind(professional_id)
            .fetch_optional(pool)
            .await
    }

    /// Find an active promotion by its own id (for cancellation).
    pub async fn find_active_by_id(
        pool: &PgPool,
        promotion_id: ProfileId,
    ) -> Result<Option<Promotion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM professional_promotions
             WHERE id = $1 AND is_active"
        );
        sqlx::query_as::<_, Promotion>(&query)
            .bind(promotion_id)
            .fetch_optional(pool)
            .await
    }

    /// Mark a promotion inactive. Returns false if no active row matched.
    pub async fn deactivate(pool: &PgPool, promotion_id: ProfileId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE professional_promotions
             SET is_active = FALSE, updated_at = now()
             WHERE id = $1 AND is_active",
        )
        .bind(promotion_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Increment one engagement counter on the professional's active
    /// promotion. Returns whether a promotion existed to credit.
    ///
    /// A single conditional UPDATE: no active promotion means zero rows
    /// affected, never an error.
    pub async fn increment_metric(
        pool: &PgPool,
        professional_id: ProfileId,
        action: TrackAction,
    ) -> Result<bool, sqlx::Error> {
        // metric_column() only ever yields one of three fixed column names.
        let column = action.metric_column();
        let query = format!(
            "UPDATE professional_promotions
             SET {column} = {column} + 1, updated_at = now()
             WHERE professional_id = $1 AND is_active AND expires_at > now()"
        );
        let result = sqlx::query(&query).bind(professional_id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Active promotions entering the expiry-notice window that have not
    /// been notified yet, joined with the owner's contact details.
    pub async fn find_expiring(pool: &PgPool) -> Result<Vec<ExpiringPromotion>, sqlx::Error> {
        sqlx::query_as::<_, ExpiringPromotion>(
            "SELECT promo.id, promo.professional_id, promo.tier, promo.expires_at,
                    p.email, p.full_name, p.username
             FROM professional_promotions promo
             JOIN profiles p ON p.id = promo.professional_id
             WHERE promo.is_active
               AND NOT promo.expiry_notified
               AND promo.expires_at >= now() + make_interval(days => $1)
               AND promo.expires_at <  now() + make_interval(days => $1 + 1)",
        )
        .bind(EXPIRY_NOTICE_DAYS as i32)
        .fetch_all(pool)
        .await
    }

    /// Record that the expiry reminder was sent.
    pub async fn mark_notified(pool: &PgPool, promotion_id: ProfileId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE professional_promotions
             SET expiry_notified = TRUE, updated_at = now()
             WHERE id = $1",
        )
        .bind(promotion_id)
        .execute(pool)
        .await?;
        Ok(())
    }
}
