// ABOUTME: Integration tests for pyramid weight suggestions
// ABOUTME: Base pass-through, compounding, comma decimals, bad-input no-ops and repeat calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod helpers;

use helpers::fixtures::pyramid_bench;
use std::sync::Arc;
use trainer_routines::config::WeightConfig;
use trainer_routines::errors::ErrorCode;
use trainer_routines::intelligence::{
    suggest_weights, InvalidWeightPolicy, RoundingMode, WeightProgression,
};
use trainer_routines::models::RoutineDraft;
use trainer_routines::routines::RoutineBuilderSession;
use trainer_routines::settings::{InMemoryPercentStore, TrainerSettings};
use uuid::Uuid;

async fn session_with(weights: WeightConfig) -> RoutineBuilderSession {
    let settings = TrainerSettings::new(
        Arc::new(InMemoryPercentStore::new()),
        Arc::new(InMemoryPercentStore::new()),
    );
    RoutineBuilderSession::start(
        settings,
        Uuid::new_v4(),
        RoutineDraft::new(Uuid::new_v4(), "Legs"),
        weights,
    )
    .await
}

#[test]
fn test_base_weight_passes_through_unchanged() {
    let weights = suggest_weights("20", 7.5).unwrap();
    assert_eq!(weights[0], "20");

    let weights = suggest_weights("20.04", 7.5).unwrap();
    assert_eq!(weights[0], "20.04");
}

#[test]
fn test_compounds_each_series_from_the_base() {
    assert_eq!(
        suggest_weights("20", 10.0).unwrap(),
        ["20", "22", "24.2", "26.6", "29.3"]
    );
    assert_eq!(
        suggest_weights("20", 7.5).unwrap(),
        ["20", "21.5", "23.1", "24.8", "26.7"]
    );
}

#[test]
fn test_negative_percent_descends() {
    assert_eq!(
        suggest_weights("100", -10.0).unwrap(),
        ["100", "90", "81", "72.9", "65.6"]
    );
}

#[test]
fn test_zero_percent_repeats_base() {
    assert_eq!(
        suggest_weights("42.5", 0.0).unwrap(),
        ["42.5", "42.5", "42.5", "42.5", "42.5"]
    );
}

#[test]
fn test_comma_decimal_matches_dot_decimal() {
    assert_eq!(suggest_weights("20,5", 5.0), suggest_weights("20.5", 5.0));
    assert!(suggest_weights("20,5", 5.0).is_some());
}

#[test]
fn test_unit_suffix_is_ignored() {
    assert_eq!(suggest_weights("20kg", 10.0), suggest_weights("20", 10.0));
}

#[test]
fn test_invalid_inputs_yield_no_suggestion() {
    assert!(suggest_weights("abc", 10.0).is_none());
    assert!(suggest_weights("", 10.0).is_none());
    assert!(suggest_weights("20", f64::NAN).is_none());
    assert!(suggest_weights("20", f64::INFINITY).is_none());
}

#[tokio::test]
async fn test_session_overflowing_base_leaves_weights_untouched() {
    let mut session = session_with(WeightConfig::default()).await;
    session
        .draft_mut()
        .exercises
        .push(pyramid_bench(["1.7e308", "30", "31", "32", "33"]));

    assert!(!session.suggest_weights(0).unwrap());
    assert_eq!(
        session.exercise(0).unwrap().weights_per_series(),
        ["1.7e308", "30", "31", "32", "33"]
    );
}

#[test]
fn test_resuggesting_is_idempotent() {
    let first = suggest_weights("37,5", 7.5);
    let second = suggest_weights("37,5", 7.5);
    assert_eq!(first, second);
}

#[test]
fn test_rounding_modes_differ_only_on_ties() {
    assert_eq!(RoundingMode::HalfUp.round_tenth(0.25), 0.3);
    assert_eq!(RoundingMode::HalfEven.round_tenth(0.25), 0.2);
    assert_eq!(RoundingMode::HalfUp.round_tenth(-0.25), -0.2);
    assert_eq!(RoundingMode::HalfAwayFromZero.round_tenth(-0.25), -0.3);

    let progression = WeightProgression::new(10.0)
        .unwrap()
        .with_rounding(RoundingMode::HalfEven);
    assert_eq!(
        progression.suggest("20").unwrap(),
        ["20", "22", "24.2", "26.6", "29.3"]
    );
}

#[test]
fn test_strict_policy_rejects_non_numeric_base() {
    let progression = WeightProgression::new(10.0).unwrap();
    let err = progression
        .suggest_with_policy("abc", InvalidWeightPolicy::Strict)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    let lenient = progression
        .suggest_with_policy("abc", InvalidWeightPolicy::Lenient)
        .unwrap();
    assert!(lenient.is_none());
}

#[tokio::test]
async fn test_session_suggestion_fills_all_series() {
    let mut session = session_with(WeightConfig::default()).await;
    session
        .draft_mut()
        .exercises
        .push(pyramid_bench(["20", "", "", "", ""]));

    assert!(session.suggest_weights(0).unwrap());
    assert_eq!(
        session.exercise(0).unwrap().weights_per_series(),
        ["20", "22", "24.2", "26.6", "29.3"]
    );
}

#[tokio::test]
async fn test_session_invalid_base_leaves_weights_untouched() {
    let mut session = session_with(WeightConfig::default()).await;
    session
        .draft_mut()
        .exercises
        .push(pyramid_bench(["abc", "30", "31", "32", "33"]));

    assert!(!session.suggest_weights(0).unwrap());
    assert_eq!(
        session.exercise(0).unwrap().weights_per_series(),
        ["abc", "30", "31", "32", "33"]
    );
}

#[tokio::test]
async fn test_session_strict_policy_reports_invalid_base() {
    let mut session = session_with(WeightConfig {
        invalid_policy: InvalidWeightPolicy::Strict,
        rounding: RoundingMode::HalfUp,
    })
    .await;
    session
        .draft_mut()
        .exercises
        .push(pyramid_bench(["abc", "30", "31", "32", "33"]));

    let err = session.suggest_weights(0).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(
        session.exercise(0).unwrap().weights_per_series()[1],
        "30"
    );
}

#[tokio::test]
async fn test_session_skips_free_text_exercises() {
    let mut session = session_with(WeightConfig::default()).await;
    let index = session.add_exercise("Lunges");
    session.exercise_mut(index).unwrap().set_weight("20").unwrap();

    assert!(!session.suggest_weights(index).unwrap());
    assert!(session.exercise(index).unwrap().weights_per_series().is_empty());
}

#[tokio::test]
async fn test_session_unknown_exercise_is_not_found() {
    let mut session = session_with(WeightConfig::default()).await;
    let err = session.suggest_weights(3).unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}
