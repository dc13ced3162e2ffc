//! Handlers for the skill-level gate: the personalized assessment catalog
//! and attempt submission with explicit level advancement.

use std::collections::HashSet;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use proofstack_core::error::CoreError;
use proofstack_core::skill_level::{
    self, AssessmentSpec, SkillLevel, ASSESSMENT_CATALOG,
};
use proofstack_core::types::Timestamp;
use proofstack_db::models::assessment::CreateAssessment;
use proofstack_db::repositories::{AssessmentRepo, ProfileRepo};

use crate::error::{is_unique_violation, AppError, AppResult};
use crate::middleware::RequireProfessional;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /assessments/available
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: &'static str,
    pub assessment_type: &'static str,
    pub target_level: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub duration_minutes: u32,
    pub passing_score: i32,
    pub locked: bool,
    pub completed: bool,
    pub completed_at: Option<Timestamp>,
    pub best_score: Option<i32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total: usize,
    pub completed: usize,
    pub available: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedCatalog {
    pub junior: Vec<CatalogEntry>,
    pub mid: Vec<CatalogEntry>,
    pub senior: Vec<CatalogEntry>,
    pub lead: Vec<CatalogEntry>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableResponse {
    pub current_level: &'static str,
    pub assessments: GroupedCatalog,
    pub stats: CatalogStats,
}

/// Return the assessment catalog personalized for the authenticated
/// professional: lock state from the level ladder, completion from their
/// attempt history.
pub async fn available_assessments(
    State(state): State<AppState>,
    RequireProfessional(user): RequireProfessional,
) -> AppResult<impl IntoResponse> {
    let profile = ProfileRepo::find_by_id(&state.pool, user.profile_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Profile",
            id: user.profile_id,
        })?;
    let current = SkillLevel::parse(&profile.skill_level)?;

    let attempts = AssessmentRepo::list_by_profile(&state.pool, user.profile_id).await?;

    let entry_for = |spec: &AssessmentSpec| -> Result<CatalogEntry, CoreError> {
        // An attempt matches on (type, target level); passed attempts mark
        // the entry completed.
        let matching: Vec<_> = attempts
            .iter()
            .filter(|a| {
                a.assessment_type == spec.assessment_type.as_str()
                    && a.target_level == spec.target_level.as_str()
            })
            .collect();
        let completed = matching.iter().any(|a| a.passed);
        Ok(CatalogEntry {
            id: spec.id,
            assessment_type: spec.assessment_type.as_str(),
            target_level: spec.target_level.as_str(),
            title: spec.title,
            description: spec.description,
            duration_minutes: spec.duration_minutes,
            passing_score: spec.target_level.passing_score()?,
            locked: skill_level::is_locked(spec.target_level, current),
            completed,
            completed_at: matching.iter().map(|a| a.completed_at).max(),
            best_score: matching.iter().map(|a| a.score).max(),
        })
    };

    let mut grouped: [Vec<CatalogEntry>; 4] = Default::default();
    for spec in ASSESSMENT_CATALOG {
        let entry = entry_for(spec)?;
        grouped[spec.target_level.index() - 1].push(entry);
    }
    let [junior, mid, senior, lead] = grouped;

    let all = junior.iter().chain(&mid).chain(&senior).chain(&lead);
    let completed = all.clone().filter(|e| e.completed).count();
    let available = all.clone().filter(|e| !e.locked && !e.completed).count();

    Ok(Json(AvailableResponse {
        current_level: current.as_str(),
        stats: CatalogStats {
            total: ASSESSMENT_CATALOG.len(),
            completed,
            available,
        },
        assessments: GroupedCatalog {
            junior,
            mid,
            senior,
            lead,
        },
    }))
}

// ---------------------------------------------------------------------------
// POST /assessments/submit
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAssessmentBody {
    pub assessment_type: Option<String>,
    pub target_level: Option<String>,
    pub score: Option<i64>,
    pub answers: Option<serde_json::Value>,
    pub time_taken_seconds: Option<i32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAssessmentResponse {
    pub success: bool,
    pub assessment: proofstack_db::models::assessment::SkillAssessment,
    pub passed: bool,
    pub level_changed: bool,
    pub new_level: &'static str,
    pub message: String,
}

/// Record an assessment attempt. A pass at exactly one level above the
/// current one advances the profile's skill level in the same transaction
/// as the attempt insert.
pub async fn submit_assessment(
    State(state): State<AppState>,
    RequireProfessional(user): RequireProfessional,
    Json(body): Json<SubmitAssessmentBody>,
) -> AppResult<impl IntoResponse> {
    let assessment_type = body
        .assessment_type
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("Missing assessmentType".into()))?;
    let target_level = body
        .target_level
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("Missing targetLevel".into()))?;
    let raw_score = body
        .score
        .ok_or_else(|| AppError::BadRequest("Missing score".into()))?;

    let assessment_type = skill_level::AssessmentType::parse(assessment_type)?;
    let target = SkillLevel::parse(target_level)?;
    let score = skill_level::validate_score(raw_score)?;

    let profile = ProfileRepo::find_by_id(&state.pool, user.profile_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Profile",
            id: user.profile_id,
        })?;
    let current = SkillLevel::parse(&profile.skill_level)?;

    if skill_level::is_locked(target, current) {
        return Err(CoreError::Validation(format!(
            "The {} assessment is locked at your current level",
            target.as_str()
        ))
        .into());
    }

    let passed = skill_level::passes(target, score)?;
    let new_level = skill_level::advancement(current, target, passed);

    let create = CreateAssessment {
        profile_id: user.profile_id,
        assessment_type: assessment_type.as_str().to_string(),
        target_level: target.as_str().to_string(),
        score,
        passed,
        questions_data: body.answers,
        time_taken_seconds: body.time_taken_seconds,
    };

    let attempt = AssessmentRepo::submit_attempt(
        &state.pool,
        &create,
        new_level.map(SkillLevel::as_str),
    )
    .await
    .map_err(|err| {
        if is_unique_violation(&err, "uq_skill_assessments_attempt") {
            AppError::Core(CoreError::Conflict(
                "You have already completed this assessment".into(),
            ))
        } else {
            AppError::Database(err)
        }
    })?;

    let level_changed = new_level.is_some();
    let effective_level = new_level.unwrap_or(current);
    let message = skill_level::submission_message(
        passed,
        level_changed,
        effective_level,
        score,
        target.passing_score()?,
    );

    if level_changed {
        tracing::info!(
            profile_id = %user.profile_id,
            new_level = effective_level.as_str(),
            "Skill level advanced"
        );
    }

    Ok(Json(SubmitAssessmentResponse {
        success: true,
        assessment: attempt,
        passed,
        level_changed,
        new_level: effective_level.as_str(),
        message,
    }))
}

// ---------------------------------------------------------------------------
// GET /assessments/history
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryResponse {
    pub assessments: Vec<proofstack_db::models::assessment::SkillAssessment>,
    pub passed_levels: Vec<&'static str>,
}

/// Return the authenticated professional's full attempt history, plus the
/// distinct levels they have passed at least once.
pub async fn assessment_history(
    State(state): State<AppState>,
    RequireProfessional(user): RequireProfessional,
) -> AppResult<impl IntoResponse> {
    let attempts = AssessmentRepo::list_by_profile(&state.pool, user.profile_id).await?;

    let mut seen = HashSet::new();
    let mut passed_levels = Vec::new();
    for attempt in attempts.iter().filter(|a| a.passed) {
        if let Ok(level) = SkillLevel::parse(&attempt.target_level) {
            if seen.insert(level) {
                passed_levels.push(level);
            }
        }
    }
    passed_levels.sort();

    Ok(Json(HistoryResponse {
        assessments: attempts,
        passed_levels: passed_levels.into_iter().map(SkillLevel::as_str).collect(),
    }))
}
