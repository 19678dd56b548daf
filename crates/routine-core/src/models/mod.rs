// ABOUTME: Core data models for the routine builder
// ABOUTME: Re-exports the pyramid scheme, exercise rows, routine drafts and wire payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `PyramidalSequence` / `RepsMode`: the fixed 12-10-8-8-6 scheme and how reps are shown
//! - `ExerciseEntry`: one row of a routine draft, owning the pyramidal toggle
//! - `RoutineDraft`: the in-memory routine being composed
//! - `RoutinePayload` / `ExercisePayload`: what is POSTed on submit

mod exercise;
mod percent;
mod pyramid;
mod routine;

pub use exercise::ExerciseEntry;
pub use percent::PercentPreset;
pub use pyramid::{PyramidalSequence, RepsMode};
pub use routine::{CreatedRoutine, ExercisePayload, RoutineDraft, RoutinePayload};
