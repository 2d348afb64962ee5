//! HTTP-level integration tests for the guarded DELETE endpoints and for
//! reading a project tree straight from the database.
//!
//! Rows are seeded with plain SQL, then the router is driven through
//! tower::ServiceExt exactly as in production.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, delete, get, insert_activity, insert_deliverable, insert_part,
    insert_phase, insert_project,
};
use consult_db::repositories::{DeliverableRepo, PhaseRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: DELETE /api/v1/phases/{id}
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_empty_phase_returns_204(pool: PgPool) {
    let project = insert_project(&pool, "Empty phase").await;
    let phase = insert_phase(&pool, project, "Discovery").await;

    let app = build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/phases/{phase}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert!(PhaseRepo::find_by_id(&pool, phase).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_phase_with_activities_returns_409(pool: PgPool) {
    let project = insert_project(&pool, "Busy phase").await;
    let phase = insert_phase(&pool, project, "Discovery").await;
    insert_activity(&pool, phase, "in_progress", 40).await;
    insert_activity(&pool, phase, "done", 100).await;

    let app = build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/phases/{phase}")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
    assert!(json["error"].as_str().unwrap().contains("2 activities"));

    assert!(PhaseRepo::find_by_id(&pool, phase).await.unwrap().is_some());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_missing_phase_returns_404(pool: PgPool) {
    let app = build_test_app(pool);
    let response = delete(app, "/api/v1/phases/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Phase with id 999999 not found");
}

// ---------------------------------------------------------------------------
// Test: DELETE /api/v1/deliverables/{id}
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_empty_deliverable_returns_204(pool: PgPool) {
    let project = insert_project(&pool, "Empty deliverable").await;
    let deliverable = insert_deliverable(&pool, project, "Memo").await;

    let app = build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/deliverables/{deliverable}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert!(DeliverableRepo::find_by_id(&pool, deliverable)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_deliverable_with_parts_returns_409(pool: PgPool) {
    let project = insert_project(&pool, "Busy deliverable").await;
    let deliverable = insert_deliverable(&pool, project, "Report").await;
    insert_part(&pool, deliverable, "approved", 100.0).await;

    let app = build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/deliverables/{deliverable}")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("1 parts"));

    assert!(DeliverableRepo::find_by_id(&pool, deliverable)
        .await
        .unwrap()
        .is_some());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_missing_deliverable_returns_404(pool: PgPool) {
    let app = build_test_app(pool);
    let response = delete(app, "/api/v1/deliverables/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Test: GET /api/v1/projects/{id}/tree backed by Postgres
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_tree_reflects_deleted_phase(pool: PgPool) {
    let project = insert_project(&pool, "Rollout").await;
    let kept = insert_phase(&pool, project, "Delivery").await;
    let removed = insert_phase(&pool, project, "Scratch").await;
    insert_activity(&pool, kept, "done", 100).await;
    insert_activity(&pool, kept, "not_started", 0).await;
    let report = insert_deliverable(&pool, project, "Report").await;
    insert_part(&pool, report, "approved", 60.0).await;
    insert_part(&pool, report, "in_progress", 40.0).await;

    let app = build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/phases/{removed}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = build_test_app(pool);
    let response = get(app, &format!("/api/v1/projects/{project}/tree")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["projectId"], project.to_string());
    assert_eq!(data["summary"]["totalPhases"], 1);
    assert_eq!(data["phases"][0]["id"], kept);
    assert_eq!(data["phases"][0]["status"], "in_progress");
    assert_eq!(data["phases"][0]["progress"], 50);
    assert_eq!(data["deliverables"][0]["progress"], 80);
    assert_eq!(data["summary"]["overallProgress"], 65);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_tree_for_missing_project_returns_404(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/projects/999999/tree").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Project with id 999999 not found");
}
