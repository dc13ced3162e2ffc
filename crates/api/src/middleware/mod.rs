//! Authentication and authorization middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated profile from a JWT Bearer token.
//! - [`rbac::RequireProfessional`] -- Requires a professional account.
//! - [`rbac::RequireEmployer`] -- Requires an employer account.
//! - [`rbac::RequireAuth`] -- Requires any authenticated profile.

pub mod auth;
pub mod rbac;

pub use auth::AuthUser;
pub use rbac::{RequireAuth, RequireEmployer, RequireProfessional};
