// ABOUTME: Integration tests for the routine builder session against a fake routine API
// ABOUTME: Covers default seeding, preview, successful submission and failure handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod helpers;

use helpers::fake_api::{unreachable_base_url, FakeApi};
use helpers::fixtures::push_pull_draft;
use std::sync::Arc;
use trainer_routines::config::WeightConfig;
use trainer_routines::errors::ErrorCode;
use trainer_routines::models::RoutineDraft;
use trainer_routines::routines::{RoutineApiClient, RoutineBuilderSession};
use trainer_routines::settings::{InMemoryPercentStore, TrainerSettings};
use uuid::Uuid;

fn settings_with_default(trainer: Uuid, percent: f64) -> TrainerSettings {
    TrainerSettings::new(
        Arc::new(InMemoryPercentStore::new()),
        Arc::new(InMemoryPercentStore::with_value(trainer, percent)),
    )
}

async fn session_for(draft: RoutineDraft) -> RoutineBuilderSession {
    let trainer = Uuid::new_v4();
    RoutineBuilderSession::start(
        settings_with_default(trainer, 10.0),
        trainer,
        draft,
        WeightConfig::default(),
    )
    .await
}

#[tokio::test]
async fn test_new_exercises_use_trainer_default() {
    let mut session = session_for(RoutineDraft::new(Uuid::new_v4(), "Legs")).await;
    assert_eq!(session.default_percent(), 10.0);

    let squat = session.add_exercise("Squat");
    assert_eq!(session.exercise(squat).unwrap().percent_increment, 10.0);

    session.set_default_percent(5.0).await.unwrap();
    let lunge = session.add_exercise("Lunge");
    assert_eq!(session.exercise(lunge).unwrap().percent_increment, 5.0);
    assert_eq!(session.exercise(squat).unwrap().percent_increment, 10.0);
}

#[tokio::test]
async fn test_per_exercise_percent_override() {
    let mut session = session_for(RoutineDraft::new(Uuid::new_v4(), "Legs")).await;
    let index = session.add_exercise("Squat");
    session.toggle_pyramidal(index).unwrap();
    session.set_percent_increment(index, 5.0).unwrap();
    session
        .exercise_mut(index)
        .unwrap()
        .set_step_weight(0, "100")
        .unwrap();

    assert!(session.suggest_weights(index).unwrap());
    assert_eq!(
        session.exercise(index).unwrap().weights_per_series(),
        ["100", "105", "110.3", "115.8", "121.6"]
    );
    assert!(session.set_percent_increment(index, f64::NAN).is_err());
}

#[tokio::test]
async fn test_remove_exercise_by_index() {
    let mut session = session_for(RoutineDraft::new(Uuid::new_v4(), "Legs")).await;
    session.add_exercise("Squat");
    session.add_exercise("Lunge");

    let removed = session.remove_exercise(0).unwrap();
    assert_eq!(removed.name, "Squat");
    assert_eq!(session.draft().exercises.len(), 1);

    let err = session.remove_exercise(5).unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_submit_posts_payload_and_resets_draft() {
    let api = FakeApi::start().await;
    let client = RoutineApiClient::new(api.base_url.clone(), Some("token".to_owned()));
    let draft = push_pull_draft();
    let client_id = draft.client_id;
    let mut session = session_for(draft).await;

    let created = session.submit(&client).await.unwrap();
    assert_eq!(created.id, "routine-1");
    assert!(session.last_error().is_none());
    assert!(session.draft().is_empty());
    assert_eq!(session.draft().client_id, client_id);

    let received = api.routines();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0]["name"], "Push / pull");
    assert_eq!(received[0]["exercises"][0]["weight"], "20-22-24.2-26.6-29.3");
    assert_eq!(received[0]["exercises"][1]["weight"], "35kg");
}

#[tokio::test]
async fn test_rejected_submission_keeps_draft_and_records_error() {
    let api = FakeApi::start().await;
    api.reject_routines(true);
    let client = RoutineApiClient::new(api.base_url.clone(), None);
    let mut session = session_for(push_pull_draft()).await;

    let err = session.submit(&client).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(session.draft().exercises.len(), 2);

    let message = session.last_error().unwrap();
    assert!(message.contains("422"));
    assert!(message.contains("routine limit"));
    assert!(!message.contains('\n'));

    // Manual resubmission once the API accepts it again
    api.reject_routines(false);
    session.submit(&client).await.unwrap();
    assert!(session.last_error().is_none());
    assert_eq!(api.routines().len(), 1);
}

#[tokio::test]
async fn test_unreachable_api_keeps_draft() {
    let client = RoutineApiClient::new(unreachable_base_url().await, None);
    let mut session = session_for(push_pull_draft()).await;

    let err = session.submit(&client).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
    assert_eq!(session.draft().name, "Push / pull");
    assert!(session.last_error().is_some());
}

#[tokio::test]
async fn test_invalid_draft_is_not_sent() {
    let api = FakeApi::start().await;
    let client = RoutineApiClient::new(api.base_url.clone(), None);
    let mut draft = push_pull_draft();
    draft.name = String::new();
    let mut session = session_for(draft).await;

    let err = session.submit(&client).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
    assert!(api.routines().is_empty());
    assert!(session.last_error().is_some());
}

#[tokio::test]
async fn test_preview_matches_submitted_payload() {
    let api = FakeApi::start().await;
    let client = RoutineApiClient::new(api.base_url.clone(), None);
    let mut session = session_for(push_pull_draft()).await;

    let preview = serde_json::to_value(session.preview().unwrap()).unwrap();
    session.submit(&client).await.unwrap();
    assert_eq!(api.routines()[0], preview);
}
