//! Skill-level gate: the ordered verification ladder and assessment catalog.
//!
//! Levels are ordered `unverified < junior < mid < senior < lead` and only
//! ever advance by passing an assessment. An assessment targeting level L is
//! unlocked iff L is at most one step above the current level; retakes of
//! lower levels stay unlocked.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Pass thresholds
// ---------------------------------------------------------------------------

/// Minimum score to pass a junior-level assessment.
pub const PASS_JUNIOR: i32 = 70;
/// Minimum score to pass a mid-level assessment.
pub const PASS_MID: i32 = 75;
/// Minimum score to pass a senior-level assessment.
pub const PASS_SENIOR: i32 = 80;
/// Minimum score to pass a lead-level assessment.
pub const PASS_LEAD: i32 = 85;

// ---------------------------------------------------------------------------
// SkillLevel
// ---------------------------------------------------------------------------

/// A professional's verified skill level, monotonically non-decreasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    Unverified,
    Junior,
    Mid,
    Senior,
    Lead,
}

impl SkillLevel {
    /// Position in the ladder (`unverified` = 0 .. `lead` = 4).
    pub fn index(self) -> usize {
        match self {
            Self::Unverified => 0,
            Self::Junior => 1,
            Self::Mid => 2,
            Self::Senior => 3,
            Self::Lead => 4,
        }
    }

    /// Database / wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unverified => "unverified",
            Self::Junior => "junior",
            Self::Mid => "mid",
            Self::Senior => "senior",
            Self::Lead => "lead",
        }
    }

    /// Parse a stored level string. Unknown values are rejected.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "unverified" => Ok(Self::Unverified),
            "junior" => Ok(Self::Junior),
            "mid" => Ok(Self::Mid),
            "senior" => Ok(Self::Senior),
            "lead" => Ok(Self::Lead),
            other => Err(CoreError::Validation(format!(
                "Invalid skill level: {other}"
            ))),
        }
    }

    /// Minimum score to pass an assessment targeting this level.
    ///
    /// `unverified` is never a valid assessment target.
    pub fn passing_score(self) -> Result<i32, CoreError> {
        match self {
            Self::Junior => Ok(PASS_JUNIOR),
            Self::Mid => Ok(PASS_MID),
            Self::Senior => Ok(PASS_SENIOR),
            Self::Lead => Ok(PASS_LEAD),
            Self::Unverified => Err(CoreError::Validation(
                "Assessments cannot target the unverified level".into(),
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// AssessmentType
// ---------------------------------------------------------------------------

/// Kind of assessment a professional can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentType {
    TechnicalQuiz,
    CodingChallenge,
    PortfolioReview,
    ProjectComplexity,
}

impl AssessmentType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TechnicalQuiz => "technical_quiz",
            Self::CodingChallenge => "coding_challenge",
            Self::PortfolioReview => "portfolio_review",
            Self::ProjectComplexity => "project_complexity",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "technical_quiz" => Ok(Self::TechnicalQuiz),
            "coding_challenge" => Ok(Self::CodingChallenge),
            "portfolio_review" => Ok(Self::PortfolioReview),
            "project_complexity" => Ok(Self::ProjectComplexity),
            other => Err(CoreError::Validation(format!(
                "Invalid assessment type: {other}"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// One entry in the fixed assessment catalog.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentSpec {
    pub id: &'static str,
    pub assessment_type: AssessmentType,
    pub target_level: SkillLevel,
    pub title: &'static str,
    pub description: &'static str,
    pub duration_minutes: u32,
}

/// The full assessment catalog, grouped by target level in ladder order.
pub const ASSESSMENT_CATALOG: &[AssessmentSpec] = &[
    AssessmentSpec {
        id: "junior-quiz-1",
        assessment_type: AssessmentType::TechnicalQuiz,
        target_level: SkillLevel::Junior,
        title: "JavaScript Fundamentals",
        description: "Core language concepts: variables, functions, arrays, objects",
        duration_minutes: 20,
    },
    AssessmentSpec {
        id: "junior-code-1",
        assessment_type: AssessmentType::CodingChallenge,
        target_level: SkillLevel::Junior,
        title: "Array Manipulation",
        description: "Basic array problems: filtering, mapping, reducing",
        duration_minutes: 30,
    },
    AssessmentSpec {
        id: "mid-quiz-1",
        assessment_type: AssessmentType::TechnicalQuiz,
        target_level: SkillLevel::Mid,
        title: "React & State Management",
        description: "Advanced component patterns, hooks, and state management strategies",
        duration_minutes: 30,
    },
    AssessmentSpec {
        id: "mid-code-1",
        assessment_type: AssessmentType::CodingChallenge,
        target_level: SkillLevel::Mid,
        title: "API Design",
        description: "Build a RESTful API with proper error handling and validation",
        duration_minutes: 45,
    },
    AssessmentSpec {
        id: "senior-quiz-1",
        assessment_type: AssessmentType::TechnicalQuiz,
        target_level: SkillLevel::Senior,
        title: "System Design",
        description: "Architecture patterns, scalability, performance optimization",
        duration_minutes: 45,
    },
    AssessmentSpec {
        id: "senior-code-1",
        assessment_type: AssessmentType::CodingChallenge,
        target_level: SkillLevel::Senior,
        title: "Complex Algorithm",
        description: "Advanced data structure and algorithm problems",
        duration_minutes: 60,
    },
    AssessmentSpec {
        id: "senior-portfolio-1",
        assessment_type: AssessmentType::PortfolioReview,
        target_level: SkillLevel::Senior,
        title: "Portfolio Review",
        description: "Submit your best work for expert review and feedback",
        duration_minutes: 0,
    },
    AssessmentSpec {
        id: "lead-quiz-1",
        assessment_type: AssessmentType::TechnicalQuiz,
        target_level: SkillLevel::Lead,
        title: "Engineering Leadership",
        description: "Team management, mentorship, technical decision-making",
        duration_minutes: 45,
    },
    AssessmentSpec {
        id: "lead-project-1",
        assessment_type: AssessmentType::ProjectComplexity,
        target_level: SkillLevel::Lead,
        title: "Architecture Review",
        description: "Design and present a complex system architecture",
        duration_minutes: 90,
    },
    AssessmentSpec {
        id: "lead-portfolio-1",
        assessment_type: AssessmentType::PortfolioReview,
        target_level: SkillLevel::Lead,
        title: "Leadership Portfolio",
        description: "Demonstrate leadership through past projects and mentorship",
        duration_minutes: 0,
    },
];

// ---------------------------------------------------------------------------
// Gate logic
// ---------------------------------------------------------------------------

/// Whether an assessment targeting `target` is locked for someone at
/// `current`. Only the next level up (or any level at or below the current
/// one) is unlocked.
pub fn is_locked(target: SkillLevel, current: SkillLevel) -> bool {
    target.index() > current.index() + 1
}

/// Validate a submitted score. Must be an integer in 0-100.
pub fn validate_score(score: i64) -> Result<i32, CoreError> {
    if !(0..=100).contains(&score) {
        return Err(CoreError::Validation(
            "Score must be between 0 and 100".into(),
        ));
    }
    Ok(score as i32)
}

/// Whether `score` passes an assessment targeting `target`.
pub fn passes(target: SkillLevel, score: i32) -> Result<bool, CoreError> {
    Ok(score >= target.passing_score()?)
}

/// The new level after a pass, if any.
///
/// Advancement only happens when the passed level is exactly one step above
/// the current one; passing a retake at or below the current level is a
/// no-op.
pub fn advancement(current: SkillLevel, target: SkillLevel, passed: bool) -> Option<SkillLevel> {
    (passed && target.index() == current.index() + 1).then_some(target)
}

/// Result message shown to the professional after a submission.
pub fn submission_message(
    passed: bool,
    level_changed: bool,
    new_level: SkillLevel,
    score: i32,
    threshold: i32,
) -> String {
    if passed && level_changed {
        format!(
            "Congratulations! You've advanced to {} level!",
            new_level.as_str()
        )
    } else if passed {
        "Assessment passed! Keep completing assessments to level up.".to_string()
    } else {
        format!(
            "Score {score}% - You need {threshold}% to pass. Try again after reviewing the material."
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- ladder ordering --

    #[test]
    fn levels_are_ordered() {
        assert!(SkillLevel::Unverified < SkillLevel::Junior);
        assert!(SkillLevel::Junior < SkillLevel::Mid);
        assert!(SkillLevel::Mid < SkillLevel::Senior);
        assert!(SkillLevel::Senior < SkillLevel::Lead);
    }

    #[test]
    fn levels_dedupe_in_a_set() {
        let passed: std::collections::HashSet<SkillLevel> =
            [SkillLevel::Junior, SkillLevel::Mid, SkillLevel::Junior]
                .into_iter()
                .collect();
        assert_eq!(passed.len(), 2);
    }

    #[test]
    fn parse_round_trips() {
        for level in [
            SkillLevel::Unverified,
            SkillLevel::Junior,
            SkillLevel::Mid,
            SkillLevel::Senior,
            SkillLevel::Lead,
        ] {
            assert_eq!(SkillLevel::parse(level.as_str()).unwrap(), level);
        }
        assert!(SkillLevel::parse("principal").is_err());
    }

    // -- lock rule --

    #[test]
    fn mid_professional_lock_states() {
        // At mid: lead locked, senior unlocked, junior retake unlocked.
        assert!(is_locked(SkillLevel::Lead, SkillLevel::Mid));
        assert!(!is_locked(SkillLevel::Senior, SkillLevel::Mid));
        assert!(!is_locked(SkillLevel::Junior, SkillLevel::Mid));
        assert!(!is_locked(SkillLevel::Mid, SkillLevel::Mid));
    }

    #[test]
    fn unverified_can_only_attempt_junior() {
        assert!(!is_locked(SkillLevel::Junior, SkillLevel::Unverified));
        assert!(is_locked(SkillLevel::Mid, SkillLevel::Unverified));
        assert!(is_locked(SkillLevel::Lead, SkillLevel::Unverified));
    }

    // -- score validation --

    #[test]
    fn score_bounds() {
        assert!(validate_score(-1).is_err());
        assert!(validate_score(101).is_err());
        assert_eq!(validate_score(0).unwrap(), 0);
        assert_eq!(validate_score(100).unwrap(), 100);
    }

    // -- pass thresholds --

    #[test]
    fn pass_at_exact_threshold() {
        assert!(passes(SkillLevel::Junior, 70).unwrap());
        assert!(!passes(SkillLevel::Junior, 69).unwrap());
        assert!(passes(SkillLevel::Mid, 75).unwrap());
        assert!(!passes(SkillLevel::Mid, 74).unwrap());
        assert!(passes(SkillLevel::Senior, 80).unwrap());
        assert!(passes(SkillLevel::Lead, 85).unwrap());
        assert!(!passes(SkillLevel::Lead, 84).unwrap());
    }

    #[test]
    fn unverified_is_not_a_target() {
        assert!(SkillLevel::Unverified.passing_score().is_err());
        assert!(passes(SkillLevel::Unverified, 100).is_err());
    }

    // -- advancement --

    #[test]
    fn advancement_only_one_step_up() {
        assert_eq!(
            advancement(SkillLevel::Junior, SkillLevel::Mid, true),
            Some(SkillLevel::Mid)
        );
        // Retake at current level: no change.
        assert_eq!(advancement(SkillLevel::Mid, SkillLevel::Mid, true), None);
        // Retake below current level: no change.
        assert_eq!(advancement(SkillLevel::Senior, SkillLevel::Junior, true), None);
        // Failed attempt never advances.
        assert_eq!(advancement(SkillLevel::Junior, SkillLevel::Mid, false), None);
    }

    // -- catalog --

    #[test]
    fn catalog_has_ten_unique_entries() {
        assert_eq!(ASSESSMENT_CATALOG.len(), 10);
        let mut ids: Vec<_> = ASSESSMENT_CATALOG.iter().map(|a| a.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn catalog_never_targets_unverified() {
        for spec in ASSESSMENT_CATALOG {
            assert!(spec.target_level.passing_score().is_ok());
        }
    }
}
