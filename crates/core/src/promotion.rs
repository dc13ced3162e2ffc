//! Promotion tiers, engagement tracking actions, and the promoted-first
//! search ordering.
//!
//! A promotion is a paid, time-boxed visibility boost. At most one promotion
//! may be active per professional at any time; that invariant is enforced by
//! the persistence layer (partial unique index plus an application pre-check
//! for a friendly conflict message).

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Days before expiry at which the expiring-promotion reminder is sent.
pub const EXPIRY_NOTICE_DAYS: i64 = 7;

// ---------------------------------------------------------------------------
// Tiers
// ---------------------------------------------------------------------------

/// Paid promotion tier. Prices are fixed, monthly recurring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromotionTier {
    Standard,
    Premium,
    Featured,
}

impl PromotionTier {
    /// Monthly price in whole US dollars.
    pub fn monthly_price_usd(self) -> u32 {
        match self {
            Self::Standard => 19,
            Self::Premium => 49,
            Self::Featured => 99,
        }
    }

    /// Product name shown on checkout.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Standard => "Standard Promotion",
            Self::Premium => "Premium Promotion",
            Self::Featured => "Featured Promotion",
        }
    }

    /// Search ranking priority. Unpromoted profiles rank at 1.
    pub fn priority(self) -> u8 {
        match self {
            Self::Standard => 2,
            Self::Premium => 3,
            Self::Featured => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Premium => "premium",
            Self::Featured => "featured",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "standard" => Ok(Self::Standard),
            "premium" => Ok(Self::Premium),
            "featured" => Ok(Self::Featured),
            other => Err(CoreError::Validation(format!(
                "Invalid tier: {other}. Must be: standard, premium, or featured"
            ))),
        }
    }
}

/// Ranking priority for an optionally promoted profile.
pub fn tier_priority(tier: Option<PromotionTier>) -> u8 {
    tier.map_or(1, PromotionTier::priority)
}

// ---------------------------------------------------------------------------
// Tracking actions
// ---------------------------------------------------------------------------

/// Engagement metric tracked against an active promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackAction {
    View,
    Save,
    Message,
}

impl TrackAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Save => "save",
            Self::Message => "message",
        }
    }

    /// Counter column incremented for this action.
    pub fn metric_column(self) -> &'static str {
        match self {
            Self::View => "views_count",
            Self::Save => "saves_count",
            Self::Message => "messages_count",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "view" => Ok(Self::View),
            "save" => Ok(Self::Save),
            "message" => Ok(Self::Message),
            other => Err(CoreError::Validation(format!(
                "Invalid action: {other}. Must be: view, save, or message"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Search ordering
// ---------------------------------------------------------------------------

/// Ranking key for one professional in search results.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRank {
    pub tier: Option<PromotionTier>,
    pub rating: f64,
    pub years_experience: i32,
}

/// Total order for search display: tier priority desc, then rating desc,
/// then experience desc.
pub fn search_ordering(a: &SearchRank, b: &SearchRank) -> Ordering {
    tier_priority(b.tier)
        .cmp(&tier_priority(a.tier))
        .then(b.rating.total_cmp(&a.rating))
        .then(b.years_experience.cmp(&a.years_experience))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_prices() {
        assert_eq!(PromotionTier::Standard.monthly_price_usd(), 19);
        assert_eq!(PromotionTier::Premium.monthly_price_usd(), 49);
        assert_eq!(PromotionTier::Featured.monthly_price_usd(), 99);
    }

    #[test]
    fn tier_parse_rejects_unknown() {
        assert_eq!(
            PromotionTier::parse("featured").unwrap(),
            PromotionTier::Featured
        );
        assert!(PromotionTier::parse("platinum").is_err());
    }

    #[test]
    fn priorities_rank_featured_first() {
        assert!(tier_priority(Some(PromotionTier::Featured)) > tier_priority(Some(PromotionTier::Premium)));
        assert!(tier_priority(Some(PromotionTier::Premium)) > tier_priority(Some(PromotionTier::Standard)));
        assert!(tier_priority(Some(PromotionTier::Standard)) > tier_priority(None));
    }

    #[test]
    fn track_action_columns() {
        assert_eq!(TrackAction::View.metric_column(), "views_count");
        assert_eq!(TrackAction::Save.metric_column(), "saves_count");
        assert_eq!(TrackAction::Message.metric_column(), "messages_count");
    }

    // -- search ordering --

    fn rank(tier: Option<PromotionTier>, rating: f64, years: i32) -> SearchRank {
        SearchRank {
            tier,
            rating,
            years_experience: years,
        }
    }

    #[test]
    fn tier_beats_rating() {
        let standard_high = rank(Some(PromotionTier::Standard), 5.0, 10);
        let featured_low = rank(Some(PromotionTier::Featured), 1.0, 0);
        assert_eq!(
            search_ordering(&featured_low, &standard_high),
            Ordering::Less
        );
    }

    #[test]
    fn rating_breaks_tier_ties() {
        let a = rank(Some(PromotionTier::Premium), 4.8, 2);
        let b = rank(Some(PromotionTier::Premium), 4.2, 9);
        assert_eq!(search_ordering(&a, &b), Ordering::Less);
    }

    #[test]
    fn experience_breaks_rating_ties() {
        let a = rank(None, 4.5, 12);
        let b = rank(None, 4.5, 3);
        assert_eq!(search_ordering(&a, &b), Ordering::Less);
    }

    #[test]
    fn ordering_sorts_full_list() {
        let mut ranks = vec![
            rank(None, 5.0, 20),
            rank(Some(PromotionTier::Standard), 3.0, 1),
            rank(Some(PromotionTier::Featured), 2.0, 0),
            rank(Some(PromotionTier::Premium), 4.0, 5),
        ];
        ranks.sort_by(search_ordering);
        assert_eq!(ranks[0].tier, Some(PromotionTier::Featured));
        assert_eq!(ranks[1].tier, Some(PromotionTier::Premium));
        assert_eq!(ranks[2].tier, Some(PromotionTier::Standard));
        assert_eq!(ranks[3].tier, None);
    }

    #[test]
    fn identical_ranks_compare_equal() {
        let a = rank(Some(PromotionTier::Standard), 4.0, 4);
        assert_eq!(search_ordering(&a, &a.clone()), Ordering::Equal);
    }
}
