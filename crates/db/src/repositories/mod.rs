//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Multi-step sequences with
//! invariants (assessment submit, hire-attempt recording) open their own
//! transaction internally.

pub mod assessment_repo;
pub mod hire_attempt_repo;
pub mod organization_repo;
pub mod profile_repo;
pub mod promotion_repo;
pub mod rating_repo;

pub use assessment_repo::AssessmentRepo;
pub use hire_attempt_repo::HireAttemptRepo;
pub use organization_repo::OrganizationRepo;
pub use profile_repo::ProfileRepo;
pub use promotion_repo::PromotionRepo;
pub use rating_repo::RatingRepo;
