//! Hire-limit policy: caps free-tier employer outreach at a fixed number of
//! distinct professionals per billing cycle.
//!
//! Contacting the same professional again never consumes an additional slot.
//! Hitting the cap is not an error; the decision carries a `requires_upgrade`
//! marker so callers can render an upgrade prompt.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Distinct professionals a free-tier organization may contact per cycle.
pub const FREE_TIER_HIRE_LIMIT: i64 = 3;

// ---------------------------------------------------------------------------
// Subscription tiers
// ---------------------------------------------------------------------------

/// An employer organization's subscription tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionTier {
    Free,
    Starter,
    Professional,
    Enterprise,
}

impl SubscriptionTier {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Starter => "starter",
            Self::Professional => "professional",
            Self::Enterprise => "enterprise",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "free" => Ok(Self::Free),
            "starter" => Ok(Self::Starter),
            "professional" => Ok(Self::Professional),
            "enterprise" => Ok(Self::Enterprise),
            other => Err(CoreError::Validation(format!(
                "Invalid subscription tier: {other}"
            ))),
        }
    }

    /// Paid tiers have no hire-attempt cap.
    pub fn is_unlimited(self) -> bool {
        !matches!(self, Self::Free)
    }
}

// ---------------------------------------------------------------------------
// Attempt types
// ---------------------------------------------------------------------------

/// The kind of hire-related contact being made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptType {
    Message,
    ContactRequest,
    HireButton,
}

impl AttemptType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::ContactRequest => "contact_request",
            Self::HireButton => "hire_button",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "message" => Ok(Self::Message),
            "contact_request" => Ok(Self::ContactRequest),
            "hire_button" => Ok(Self::HireButton),
            other => Err(CoreError::Validation(format!(
                "Invalid attempt type: {other}"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Decision
// ---------------------------------------------------------------------------

/// Outcome of a hire-limit check.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HireDecision {
    pub allowed: bool,
    pub reason: &'static str,
    /// `None` on unlimited plans.
    pub attempts_remaining: Option<i64>,
    pub is_unlimited: bool,
    /// True when the caller should be shown an upgrade prompt.
    pub requires_upgrade: bool,
}

/// Decide whether one more hire-related contact is allowed.
///
/// `distinct_contacted` is the number of distinct professionals this
/// organization has already contacted in the current billing cycle;
/// `already_contacted` is whether the professional in question is one
/// of them.
pub fn evaluate(
    tier: SubscriptionTier,
    distinct_contacted: i64,
    already_contacted: bool,
) -> HireDecision {
    if tier.is_unlimited() {
        return HireDecision {
            allowed: true,
            reason: "Your plan includes unlimited hire attempts",
            attempts_remaining: None,
            is_unlimited: true,
            requires_upgrade: false,
        };
    }

    let remaining = (FREE_TIER_HIRE_LIMIT - distinct_contacted).max(0);

    if already_contacted {
        // Re-contacting a professional never consumes a new slot.
        return HireDecision {
            allowed: true,
            reason: "You have already contacted this professional",
            attempts_remaining: Some(remaining),
            is_unlimited: false,
            requires_upgrade: false,
        };
    }

    if distinct_contacted >= FREE_TIER_HIRE_LIMIT {
        return HireDecision {
            allowed: false,
            reason: "Free plan hire limit reached. Upgrade to contact more professionals.",
            attempts_remaining: Some(0),
            is_unlimited: false,
            requires_upgrade: true,
        };
    }

    HireDecision {
        allowed: true,
        reason: "Within free plan hire limit",
        attempts_remaining: Some(remaining - 1),
        is_unlimited: false,
        requires_upgrade: false,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paid_tiers_are_unlimited() {
        for tier in [
            SubscriptionTier::Starter,
            SubscriptionTier::Professional,
            SubscriptionTier::Enterprise,
        ] {
            let decision = evaluate(tier, 1000, false);
            assert!(decision.allowed);
            assert!(decision.is_unlimited);
            assert_eq!(decision.attempts_remaining, None);
        }
    }

    #[test]
    fn free_tier_counts_down() {
        let decision = evaluate(SubscriptionTier::Free, 0, false);
        assert!(decision.allowed);
        assert_eq!(decision.attempts_remaining, Some(2));

        let decision = evaluate(SubscriptionTier::Free, 2, false);
        assert!(decision.allowed);
        assert_eq!(decision.attempts_remaining, Some(0));
    }

    #[test]
    fn free_tier_blocks_fourth_distinct_professional() {
        let decision = evaluate(SubscriptionTier::Free, 3, false);
        assert!(!decision.allowed);
        assert!(decision.requires_upgrade);
        assert_eq!(decision.attempts_remaining, Some(0));
    }

    #[test]
    fn recontact_allowed_at_limit() {
        // At the cap, re-contacting one of the original three is still fine.
        let decision = evaluate(SubscriptionTier::Free, 3, true);
        assert!(decision.allowed);
        assert!(!decision.requires_upgrade);
    }

    #[test]
    fn blocked_is_not_an_error_shape() {
        let decision = evaluate(SubscriptionTier::Free, 5, false);
        assert!(!decision.allowed);
        // Still a well-formed decision, never a hard failure.
        assert_eq!(decision.attempts_remaining, Some(0));
        assert!(!decision.is_unlimited);
    }

    #[test]
    fn tier_parse_round_trips() {
        for tier in [
            SubscriptionTier::Free,
            SubscriptionTier::Starter,
            SubscriptionTier::Professional,
            SubscriptionTier::Enterprise,
        ] {
            assert_eq!(SubscriptionTier::parse(tier.as_str()).unwrap(), tier);
        }
        assert!(SubscriptionTier::parse("platinum").is_err());
    }

    #[test]
    fn attempt_type_parse() {
        assert_eq!(
            AttemptType::parse("contact_request").unwrap(),
            AttemptType::ContactRequest
        );
        assert!(AttemptType::parse("poke").is_err());
    }
}
