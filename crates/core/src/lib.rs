//! Pure business rules for the ProofStack marketplace.
//!
//! Everything in this crate is I/O-free: scoring formulas, the skill-level
//! gate, hire-limit policy, promotion tiers, and pricing constants. The
//! `proofstack-db` and `proofstack-api` crates layer persistence and HTTP
//! on top of these functions.

pub mod error;
pub mod hire_limit;
pub mod pricing;
pub mod promotion;
pub mod proof_score;
pub mod skill_level;
pub mod types;
