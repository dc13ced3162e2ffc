//! HTTP request handlers, grouped by domain.

pub mod assessments;
pub mod cron;
pub mod hire_limit;
pub mod promotions;
pub mod proof_score;
pub mod search;
