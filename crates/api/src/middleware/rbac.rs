//! Account-type access-control extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose account type
//! does not match. Use these in route handlers to enforce authorization at
//! the type level.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use proofstack_core::error::CoreError;
use proofstack_db::models::profile::{USER_TYPE_EMPLOYER, USER_TYPE_PROFESSIONAL};

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires a professional account. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn professionals_only(RequireProfessional(user): RequireProfessional) -> AppResult<Json<()>> {
///     // user is guaranteed to be a professional here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireProfessional(pub AuthUser);

impl FromRequestParts<AppState> for RequireProfessional {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.user_type != USER_TYPE_PROFESSIONAL {
            return Err(AppError::Core(CoreError::Forbidden(
                "Professional account required".into(),
            )));
        }
        Ok(RequireProfessional(user))
    }
}

/// Requires an employer account. Rejects with 403 Forbidden otherwise.
pub struct RequireEmployer(pub AuthUser);

impl FromRequestParts<AppState> for RequireEmployer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.user_type != USER_TYPE_EMPLOYER {
            return Err(AppError::Core(CoreError::Forbidden(
                "Employer account required".into(),
            )));
        }
        Ok(RequireEmployer(user))
    }
}

/// Requires any authenticated profile (any account type).
///
/// Functionally equivalent to [`AuthUser`] but named explicitly for use in
/// route definitions where the intent "this route requires authentication"
/// should be self-documenting.
pub struct RequireAuth(pub AuthUser);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        Ok(RequireAuth(user))
    }
}
