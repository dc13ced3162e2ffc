//! Canonical pricing constants: employer subscription tiers and a-la-carte
//! add-ons, plus yearly and environment-adjusted price helpers.
//!
//! Central source of truth wired into checkout, billing, and display code.

use serde::Serialize;

/// `-1` encodes "unlimited" in tier limits.
pub const UNLIMITED: i32 = -1;

/// Discount applied to all prices in the staging environment, in percent.
pub const STAGING_DISCOUNT_PERCENT: f64 = 10.0;

// ---------------------------------------------------------------------------
// Employer tiers
// ---------------------------------------------------------------------------

/// An employer subscription tier.
#[derive(Debug, Clone, Serialize)]
pub struct PricingTier {
    pub name: &'static str,
    pub monthly_price: u32,
    /// Active job postings allowed; [`UNLIMITED`] for no cap.
    pub job_postings: i32,
    /// Candidate contacts per month; [`UNLIMITED`] for no cap.
    pub candidate_contacts: i32,
}

pub const TIER_STARTER: PricingTier = PricingTier {
    name: "Starter",
    monthly_price: 399,
    job_postings: 5,
    candidate_contacts: 25,
};

pub const TIER_PROFESSIONAL: PricingTier = PricingTier {
    name: "Professional",
    monthly_price: 999,
    job_postings: 15,
    candidate_contacts: UNLIMITED,
};

pub const TIER_ENTERPRISE: PricingTier = PricingTier {
    name: "Enterprise",
    monthly_price: 2499,
    job_postings: UNLIMITED,
    candidate_contacts: UNLIMITED,
};

/// Look up an employer tier by name, case-insensitively.
pub fn employer_tier(name: &str) -> Option<&'static PricingTier> {
    match name.to_ascii_lowercase().as_str() {
        "starter" => Some(&TIER_STARTER),
        "professional" => Some(&TIER_PROFESSIONAL),
        "enterprise" => Some(&TIER_ENTERPRISE),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Add-ons
// ---------------------------------------------------------------------------

/// An a-la-carte service with a per-candidate price range.
#[derive(Debug, Clone, Serialize)]
pub struct AddOn {
    pub name: &'static str,
    /// Inclusive min-max price in dollars; equal for fixed-price add-ons.
    pub price_range: (u32, u32),
    pub description: &'static str,
}

pub const ADD_ONS: &[AddOn] = &[
    AddOn {
        name: "Custom Skill Assessment",
        price_range: (99, 299),
        description: "Custom tests for specific roles",
    },
    AddOn {
        name: "Deep Background Check",
        price_range: (49, 99),
        description: "Integration for comprehensive background checks",
    },
    AddOn {
        name: "Reference Verification",
        price_range: (75, 75),
        description: "Verify professional references",
    },
    AddOn {
        name: "Project Code Review",
        price_range: (149, 149),
        description: "Senior developer code review of actual work",
    },
    AddOn {
        name: "Pay-per-Hire",
        price_range: (1500, 3000),
        description: "Success-based pricing per verified hire",
    },
];

/// Look up an add-on by display name.
pub fn add_on(name: &str) -> Option<&'static AddOn> {
    ADD_ONS.iter().find(|a| a.name == name)
}

// ---------------------------------------------------------------------------
// Price helpers
// ---------------------------------------------------------------------------

/// Yearly price when not explicitly set: twelve months at the monthly rate.
pub fn calculate_yearly_price(monthly_price: u32) -> u32 {
    monthly_price * 12
}

/// Deployment environment, each with its own pricing overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceEnv {
    Development,
    Staging,
    Production,
}

impl PriceEnv {
    /// Parse from an environment name; unknown names get production pricing.
    pub fn parse(s: &str) -> Self {
        match s {
            "development" => Self::Development,
            "staging" => Self::Staging,
            _ => Self::Production,
        }
    }

    fn discount_percent(self) -> f64 {
        match self {
            Self::Staging => STAGING_DISCOUNT_PERCENT,
            Self::Development | Self::Production => 0.0,
        }
    }
}

/// Price after applying the environment's discount, if any.
pub fn effective_price(base_price: f64, env: PriceEnv) -> f64 {
    base_price * (1.0 - env.discount_percent() / 100.0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_tier_pricing() {
        assert_eq!(TIER_STARTER.name, "Starter");
        assert_eq!(TIER_STARTER.monthly_price, 399);
        assert_eq!(TIER_STARTER.job_postings, 5);
        assert_eq!(TIER_STARTER.candidate_contacts, 25);
    }

    #[test]
    fn professional_tier_pricing() {
        assert_eq!(TIER_PROFESSIONAL.monthly_price, 999);
        assert_eq!(TIER_PROFESSIONAL.job_postings, 15);
        assert_eq!(TIER_PROFESSIONAL.candidate_contacts, UNLIMITED);
    }

    #[test]
    fn enterprise_tier_pricing() {
        assert_eq!(TIER_ENTERPRISE.monthly_price, 2499);
        assert_eq!(TIER_ENTERPRISE.job_postings, UNLIMITED);
    }

    #[test]
    fn tier_lookup_is_case_insensitive() {
        assert_eq!(employer_tier("Starter").unwrap().name, "Starter");
        assert_eq!(employer_tier("ENTERPRISE").unwrap().name, "Enterprise");
        assert!(employer_tier("invalid").is_none());
    }

    #[test]
    fn add_on_lookup() {
        let addon = add_on("Custom Skill Assessment").unwrap();
        assert_eq!(addon.price_range, (99, 299));
        let addon = add_on("Pay-per-Hire").unwrap();
        assert_eq!(addon.price_range, (1500, 3000));
        assert!(add_on("Time Travel").is_none());
    }

    #[test]
    fn yearly_price_is_twelve_months() {
        assert_eq!(calculate_yearly_price(100), 1200);
        assert_eq!(calculate_yearly_price(TIER_STARTER.monthly_price), 4788);
    }

    #[test]
    fn effective_price_applies_staging_discount() {
        assert_eq!(effective_price(100.0, PriceEnv::Staging), 90.0);
        assert_eq!(effective_price(100.0, PriceEnv::Production), 100.0);
        assert_eq!(effective_price(100.0, PriceEnv::Development), 100.0);
    }

    #[test]
    fn unknown_env_defaults_to_production() {
        assert_eq!(PriceEnv::parse("qa"), PriceEnv::Production);
        assert_eq!(PriceEnv::parse("staging"), PriceEnv::Staging);
    }
}
