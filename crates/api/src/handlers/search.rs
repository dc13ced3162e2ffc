//! Handler for the employer-facing professional search listing.
//!
//! Promoted professionals sort above organic results by tier priority, then
//! rating, then experience. Rows never expose which engagement metrics a
//! promotion has accrued.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use proofstack_core::promotion::{self, PromotionTier, SearchRank};
use proofstack_db::repositories::profile_repo::ProfessionalSearchRow;
use proofstack_db::repositories::ProfileRepo;

use crate::error::AppResult;
use crate::middleware::RequireEmployer;
use crate::state::AppState;

const DEFAULT_LIMIT: i64 = 50;
const MAX_LIMIT: i64 = 200;

// ---------------------------------------------------------------------------
// Query / response shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Comma-separated skill filters, matched case-insensitively.
    pub skills: Option<String>,
    pub min_rating: Option<f64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub professionals: Vec<ProfessionalSearchRow>,
    pub total: usize,
}

// ---------------------------------------------------------------------------
// GET /employer/search
// ---------------------------------------------------------------------------

/// List professionals matching the skill and rating filters, promoted
/// profiles first.
pub async fn search_professionals(
    State(state): State<AppState>,
    RequireEmployer(_user): RequireEmployer,
    Query(params): Query<SearchQuery>,
) -> AppResult<impl IntoResponse> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

    let skill_filters: Vec<String> = params
        .skills
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    // Filter and rank the full set before applying the limit, so a promoted
    // profile past the cutoff still wins its slot.
    let mut rows = ProfileRepo::search_professionals(&state.pool).await?;

    rows.retain(|row| {
        matches_skills(row, &skill_filters)
            && params
                .min_rating
                .map_or(true, |min| row.average_rating.unwrap_or(0.0) >= min)
    });

    rows.sort_by(|a, b| promotion::search_ordering(&rank_of(a), &rank_of(b)));
    rows.truncate(limit as usize);

    Ok(Json(SearchResponse {
        total: rows.len(),
        professionals: rows,
    }))
}

fn rank_of(row: &ProfessionalSearchRow) -> SearchRank {
    SearchRank {
        tier: row
            .promotion_tier
            .as_deref()
            .and_then(|t| PromotionTier::parse(t).ok()),
        rating: row.average_rating.unwrap_or(0.0),
        years_experience: row.years_experience,
    }
}

/// True when every requested skill appears as a case-insensitive substring
/// of one of the row's skills, so "rust" also matches "Rust (async)".
/// An empty filter matches everything.
fn matches_skills(row: &ProfessionalSearchRow, filters: &[String]) -> bool {
    if filters.is_empty() {
        return true;
    }
    let Some(skills) = row.skills.as_array() else {
        return false;
    };
    let skills: Vec<String> = skills
        .iter()
        .filter_map(|s| s.as_str())
        .map(str::to_lowercase)
        .collect();
    filters
        .iter()
        .all(|wanted| skills.iter().any(|have| have.contains(wanted.as_str())))
}
