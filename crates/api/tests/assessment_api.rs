//! HTTP-level integration tests for the skill assessment endpoints.

mod common;

use axum::http::StatusCode;
use common::{auth_token, body_json, get, get_auth, post_json_auth};
use sqlx::PgPool;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Insert a profile with the given account type and skill level.
async fn seed_profile(pool: &PgPool, user_type: &str, skill_level: &str) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO profiles (user_type, email, skill_level)
         VALUES ($1, $2, $3)
         RETURNING id",
    )
    .bind(user_type)
    .bind(format!("{user_type}@test.com"))
    .bind(skill_level)
    .fetch_one(pool)
    .await
    .expect("profile insert should succeed")
}

fn submit_body(assessment_type: &str, target_level: &str, score: i64) -> serde_json::Value {
    serde_json::json!({
        "assessmentType": assessment_type,
        "targetLevel": target_level,
        "score": score,
    })
}

// ---------------------------------------------------------------------------
// Auth and RBAC
// ---------------------------------------------------------------------------

/// The catalog requires authentication.
#[sqlx::test(migrations = "../db/migrations")]
async fn available_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/assessments/available").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Employer accounts cannot take assessments.
#[sqlx::test(migrations = "../db/migrations")]
async fn employer_gets_403(pool: PgPool) {
    let employer_id = seed_profile(&pool, "employer", "unverified").await;
    let app = common::build_test_app(pool);

    let token = auth_token(employer_id, "employer");
    let response = get_auth(app, "/api/v1/assessments/available", &token).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// An unverified professional sees junior unlocked and everything above locked.
#[sqlx::test(migrations = "../db/migrations")]
async fn unverified_catalog_lock_states(pool: PgPool) {
    let profile_id = seed_profile(&pool, "professional", "unverified").await;
    let app = common::build_test_app(pool);

    let token = auth_token(profile_id, "professional");
    let response = get_auth(app, "/api/v1/assessments/available", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert_eq!(json["currentLevel"], "unverified");
    assert_eq!(json["stats"]["total"], 10);

    for entry in json["assessments"]["junior"].as_array().unwrap() {
        assert_eq!(entry["locked"], false);
        assert_eq!(entry["passingScore"], 70);
    }
    for entry in json["assessments"]["mid"].as_array().unwrap() {
        assert_eq!(entry["locked"], true);
    }
    for entry in json["assessments"]["lead"].as_array().unwrap() {
        assert_eq!(entry["locked"], true);
    }
}

/// At mid level: senior (one step up) and retakes unlocked, lead locked.
#[sqlx::test(migrations = "../db/migrations")]
async fn mid_level_catalog_unlocks_senior_only(pool: PgPool) {
    let profile_id = seed_profile(&pool, "professional", "mid").await;
    let app = common::build_test_app(pool);

    let token = auth_token(profile_id, "professional");
    let response = get_auth(app, "/api/v1/assessments/available", &token).await;
    let json = body_json(response).await;

    for entry in json["assessments"]["junior"].as_array().unwrap() {
        assert_eq!(entry["locked"], false);
    }
    for entry in json["assessments"]["senior"].as_array().unwrap() {
        assert_eq!(entry["locked"], false);
    }
    for entry in json["assessments"]["lead"].as_array().unwrap() {
        assert_eq!(entry["locked"], true);
    }
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

/// A passing score one level up advances the profile's skill level.
#[sqlx::test(migrations = "../db/migrations")]
async fn passing_submit_advances_level(pool: PgPool) {
    let profile_id = seed_profile(&pool, "professional", "unverified").await;
    let app = common::build_test_app(pool.clone());

    let token = auth_token(profile_id, "professional");
    let response = post_json_auth(
        app,
        "/api/v1/assessments/submit",
        submit_body("technical_quiz", "junior", 85),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert_eq!(json["success"], true);
    assert_eq!(json["passed"], true);
    assert_eq!(json["levelChanged"], true);
    assert_eq!(json["newLevel"], "junior");
    assert_eq!(json["assessment"]["score"], 85);

    let (skill_level, verified_at): (String, Option<chrono::DateTime<chrono::Utc>>) =
        sqlx::query_as(
            "SELECT skill_level, skill_level_verified_at FROM profiles WHERE id = $1",
        )
        .bind(profile_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(skill_level, "junior");
    assert!(verified_at.is_some());
}

/// A score below the threshold records the attempt but keeps the level.
#[sqlx::test(migrations = "../db/migrations")]
async fn failing_submit_keeps_level(pool: PgPool) {
    let profile_id = seed_profile(&pool, "professional", "unverified").await;
    let app = common::build_test_app(pool.clone());

    let token = auth_token(profile_id, "professional");
    let response = post_json_auth(
        app,
        "/api/v1/assessments/submit",
        submit_body("technical_quiz", "junior", 69),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["passed"], false);
    assert_eq!(json["levelChanged"], false);

    let skill_level: String = sqlx::query_scalar("SELECT skill_level FROM profiles WHERE id = $1")
        .bind(profile_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(skill_level, "unverified");
}

/// Exactly the threshold passes; mid requires 75.
#[sqlx::test(migrations = "../db/migrations")]
async fn exact_threshold_passes(pool: PgPool) {
    let profile_id = seed_profile(&pool, "professional", "junior").await;
    let app = common::build_test_app(pool);

    let token = auth_token(profile_id, "professional");
    let response = post_json_auth(
        app,
        "/api/v1/assessments/submit",
        submit_body("coding_challenge", "mid", 75),
        &token,
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json["passed"], true);
    assert_eq!(json["newLevel"], "mid");
}

/// Submitting the same (type, level) twice returns 409.
#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_submit_returns_409(pool: PgPool) {
    let profile_id = seed_profile(&pool, "professional", "unverified").await;
    let app = common::build_test_app(pool);

    let token = auth_token(profile_id, "professional");
    let response = post_json_auth(
        app.clone(),
        "/api/v1/assessments/submit",
        submit_body("technical_quiz", "junior", 40),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_json_auth(
        app,
        "/api/v1/assessments/submit",
        submit_body("technical_quiz", "junior", 90),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["error"], "You have already completed this assessment");
    assert_eq!(json["code"], "CONFLICT");
}

/// A locked target (more than one step up) is rejected with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn locked_target_returns_400(pool: PgPool) {
    let profile_id = seed_profile(&pool, "professional", "junior").await;
    let app = common::build_test_app(pool.clone());

    let token = auth_token(profile_id, "professional");
    let response = post_json_auth(
        app,
        "/api/v1/assessments/submit",
        submit_body("technical_quiz", "senior", 100),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Nothing recorded.
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM skill_assessments")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

/// Out-of-range scores and unknown enums are rejected with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_inputs_return_400(pool: PgPool) {
    let profile_id = seed_profile(&pool, "professional", "unverified").await;
    let app = common::build_test_app(pool);
    let token = auth_token(profile_id, "professional");

    let response = post_json_auth(
        app.clone(),
        "/api/v1/assessments/submit",
        submit_body("technical_quiz", "junior", 101),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json_auth(
        app.clone(),
        "/api/v1/assessments/submit",
        submit_body("vibe_check", "junior", 80),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json_auth(
        app,
        "/api/v1/assessments/submit",
        serde_json::json!({ "targetLevel": "junior", "score": 80 }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Passing a retake at or below the current level never advances.
#[sqlx::test(migrations = "../db/migrations")]
async fn retake_below_current_level_is_noop(pool: PgPool) {
    let profile_id = seed_profile(&pool, "professional", "senior").await;
    let app = common::build_test_app(pool.clone());

    let token = auth_token(profile_id, "professional");
    let response = post_json_auth(
        app,
        "/api/v1/assessments/submit",
        submit_body("technical_quiz", "junior", 95),
        &token,
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json["passed"], true);
    assert_eq!(json["levelChanged"], false);
    assert_eq!(json["newLevel"], "senior");

    let skill_level: String = sqlx::query_scalar("SELECT skill_level FROM profiles WHERE id = $1")
        .bind(profile_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(skill_level, "senior");
}

// ---------------------------------------------------------------------------
// History
// ---------------------------------------------------------------------------

/// History returns all attempts and the distinct passed levels.
#[sqlx::test(migrations = "../db/migrations")]
async fn history_lists_attempts_and_passed_levels(pool: PgPool) {
    let profile_id = seed_profile(&pool, "professional", "unverified").await;
    let app = common::build_test_app(pool);
    let token = auth_token(profile_id, "professional");

    let response = post_json_auth(
        app.clone(),
        "/api/v1/assessments/submit",
        submit_body("technical_quiz", "junior", 80),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_json_auth(
        app.clone(),
        "/api/v1/assessments/submit",
        submit_body("coding_challenge", "mid", 50),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(app, "/api/v1/assessments/history", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert_eq!(json["assessments"].as_array().unwrap().len(), 2);
    assert_eq!(json["passedLevels"], serde_json::json!(["junior"]));
}
