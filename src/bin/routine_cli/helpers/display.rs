// ABOUTME: Output formatting helpers for routine-cli
// ABOUTME: Prints pyramid tables, payload JSON and submission results to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use trainer_routines::errors::AppResult;
use trainer_routines::models::{CreatedRoutine, PyramidalSequence, RoutinePayload};

/// Print suggested weights next to the rep target of each series
pub fn display_suggestion(weights: &[String], percent: f64) {
    println!("Pyramid {} at +{percent}% per series", PyramidalSequence);
    println!("{}", "-".repeat(32));
    for (series, (reps, weight)) in PyramidalSequence
        .reps()
        .iter()
        .zip(weights)
        .enumerate()
    {
        println!("  series {}  {reps:>3} reps  {weight:>8}", series + 1);
    }
}

/// Print a payload as pretty JSON
pub fn display_payload(payload: &RoutinePayload) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(payload)?);
    Ok(())
}

/// Print the result of a successful submission
pub fn display_created(created: &CreatedRoutine, payload: &RoutinePayload) {
    println!(
        "Routine '{}' created with id {} ({} exercises)",
        payload.name,
        created.id,
        payload.exercises.len()
    );
}
