//! Authentication primitives.
//!
//! Token issuance belongs to the external auth provider; this module only
//! validates the HS256 tokens it hands out.

pub mod jwt;
