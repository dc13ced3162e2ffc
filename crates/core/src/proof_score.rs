//! ProofScore calculation: the composite 0-100 reputation score.
//!
//! The score is a weighted sum of three categories:
//!
//! - Communication Quality (30 pts): profile quality /10, message quality /10,
//!   response speed /10
//! - Historical Track Record (30 pts): average rating /15, on-time delivery /10,
//!   completion rate /5
//! - Work Quality (40 pts): task correctness /20, employer satisfaction /10,
//!   low revisions /5, would-hire-again /5
//!
//! A professional with zero completed projects is scored from profile quality
//! alone (3x multiplier, capped at 30 points) so a new account reads as
//! "not yet proven" rather than zero.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Point allocation
// ---------------------------------------------------------------------------

/// Maximum points for profile text quality.
pub const MAX_PROFILE_QUALITY: f64 = 10.0;
/// Maximum points for initial-message text quality.
pub const MAX_MESSAGE_QUALITY: f64 = 10.0;
/// Maximum points for response speed.
pub const MAX_RESPONSE_SPEED: f64 = 10.0;
/// Maximum points for average review rating.
pub const MAX_AVERAGE_RATING: f64 = 15.0;
/// Maximum points for on-time delivery rate.
pub const MAX_DELIVERY_RATE: f64 = 10.0;
/// Maximum points for project completion rate.
pub const MAX_COMPLETION_RATE: f64 = 5.0;
/// Maximum points for task correctness.
pub const MAX_TASK_CORRECTNESS: f64 = 20.0;
/// Maximum points for employer satisfaction.
pub const MAX_SATISFACTION: f64 = 10.0;
/// Maximum points for the low-revisions score.
pub const MAX_REVISIONS: f64 = 5.0;
/// Maximum points for the would-hire-again rate.
pub const MAX_HIRE_AGAIN: f64 = 5.0;

/// Multiplier applied to profile quality for accounts with no completed
/// projects. Caps the unproven score at 30 of the possible 100 points.
pub const NEW_ACCOUNT_MULTIPLIER: f64 = 3.0;
/// Ceiling for the unproven score.
pub const NEW_ACCOUNT_CAP: f64 = 30.0;

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// Stored rating sub-scores for one professional.
///
/// Quality scores are on a 0-10 scale, star ratings on 0-5, and rates are
/// fractions in 0-1. Out-of-range inputs are clamped rather than rejected;
/// scoring must never block profile rendering.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RatingInputs {
    pub profile_quality: f64,
    pub message_quality: f64,
    pub response_speed: f64,
    pub average_rating: f64,
    pub delivery_rate: f64,
    pub completion_rate: f64,
    pub task_correctness: f64,
    pub employer_satisfaction: f64,
    pub revisions_score: f64,
    pub hire_again_rate: f64,
    pub total_projects: i64,
}

// ---------------------------------------------------------------------------
// Breakdown
// ---------------------------------------------------------------------------

/// Communication Quality subtotal (max 30 points).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CommunicationQuality {
    pub total: f64,
    pub profile_quality: f64,
    pub message_quality: f64,
    pub response_speed: f64,
}

/// Historical Track Record subtotal (max 30 points).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HistoricalPerformance {
    pub total: f64,
    pub average_rating: f64,
    pub delivery_rate: f64,
    pub completion_rate: f64,
}

/// Work Quality subtotal (max 40 points).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WorkQuality {
    pub total: f64,
    pub task_correctness: f64,
    pub employer_satisfaction: f64,
    pub revisions_score: f64,
    pub hire_again_score: f64,
}

/// Full per-category breakdown, serialized alongside the score.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ScoreBreakdown {
    pub communication_quality: CommunicationQuality,
    pub historical_performance: HistoricalPerformance,
    pub work_quality: WorkQuality,
    pub total_projects: i64,
}

/// A computed ProofScore with its breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct ProofScore {
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

// ---------------------------------------------------------------------------
// Display tier
// ---------------------------------------------------------------------------

/// Display tier derived from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    Elite,
    Excellent,
    Good,
    Average,
    Fair,
    NoReviews,
}

impl ScoreTier {
    /// Derive the tier from a score, or [`ScoreTier::NoReviews`] when the
    /// professional has no rating row at all.
    pub fn from_score(score: Option<f64>) -> Self {
        match score {
            None => Self::NoReviews,
            Some(s) if s >= 90.0 => Self::Elite,
            Some(s) if s >= 80.0 => Self::Excellent,
            Some(s) if s >= 70.0 => Self::Good,
            Some(s) if s >= 60.0 => Self::Average,
            Some(_) => Self::Fair,
        }
    }

    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Elite => "Elite",
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::Fair => "Fair",
            Self::NoReviews => "No Reviews",
        }
    }
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Clamp a sub-score's points into `[0, max]`.
fn points(value: f64, max: f64) -> f64 {
    value.clamp(0.0, max)
}

/// Compute the ProofScore for a professional's stored sub-scores.
///
/// With zero completed projects only profile quality counts, scaled by
/// [`NEW_ACCOUNT_MULTIPLIER`] and capped at [`NEW_ACCOUNT_CAP`].
pub fn compute(inputs: &RatingInputs) -> ProofScore {
    if inputs.total_projects == 0 {
        let profile_points = points(inputs.profile_quality, MAX_PROFILE_QUALITY);
        let score = (profile_points * NEW_ACCOUNT_MULTIPLIER).min(NEW_ACCOUNT_CAP);
        return ProofScore {
            score,
            breakdown: ScoreBreakdown {
                communication_quality: CommunicationQuality {
                    total: score,
                    profile_quality: profile_points,
                    ..Default::default()
                },
                ..Default::default()
            },
        };
    }

    let communication_quality = CommunicationQuality {
        profile_quality: points(inputs.profile_quality, MAX_PROFILE_QUALITY),
        message_quality: points(inputs.message_quality, MAX_MESSAGE_QUALITY),
        response_speed: points(inputs.response_speed, MAX_RESPONSE_SPEED),
        total: 0.0,
    };
    let communication_quality = CommunicationQuality {
        total: communication_quality.profile_quality
            + communication_quality.message_quality
            + communication_quality.response_speed,
        ..communication_quality
    };

    // Star ratings are 0-5, rates are 0-1; both scale linearly to points.
    let historical_performance = HistoricalPerformance {
        average_rating: points(inputs.average_rating / 5.0 * MAX_AVERAGE_RATING, MAX_AVERAGE_RATING),
        delivery_rate: points(inputs.delivery_rate * MAX_DELIVERY_RATE, MAX_DELIVERY_RATE),
        completion_rate: points(inputs.completion_rate * MAX_COMPLETION_RATE, MAX_COMPLETION_RATE),
        total: 0.0,
    };
    let historical_performance = HistoricalPerformance {
        total: historical_performance.average_rating
            + historical_performance.delivery_rate
            + historical_performance.completion_rate,
        ..historical_performance
    };

    let work_quality = WorkQuality {
        task_correctness: points(inputs.task_correctness * MAX_TASK_CORRECTNESS, MAX_TASK_CORRECTNESS),
        employer_satisfaction: points(
            inputs.employer_satisfaction / 5.0 * MAX_SATISFACTION,
            MAX_SATISFACTION,
        ),
        revisions_score: points(inputs.revisions_score * MAX_REVISIONS, MAX_REVISIONS),
        hire_again_score: points(inputs.hire_again_rate * MAX_HIRE_AGAIN, MAX_HIRE_AGAIN),
        total: 0.0,
    };
    let work_quality = WorkQuality {
        total: work_quality.task_correctness
            + work_quality.employer_satisfaction
            + work_quality.revisions_score
            + work_quality.hire_again_score,
        ..work_quality
    };

    let score = (communication_quality.total + historical_performance.total + work_quality.total)
        .clamp(0.0, 100.0);

    ProofScore {
        score,
        breakdown: ScoreBreakdown {
            communication_quality,
            historical_performance,
            work_quality,
            total_projects: inputs.total_projects,
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
