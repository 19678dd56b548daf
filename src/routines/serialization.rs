// ABOUTME: Converts a routine draft into the payload posted to the routine creation API
// ABOUTME: Pyramidal rows become a hyphen-joined weight string plus a rounded numeric array
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::pyramid::{JOIN_SEPARATOR, STEP_COUNT};
use crate::errors::{AppError, AppResult, ErrorCode};
use routine_core::models::{ExerciseEntry, ExercisePayload, RoutineDraft, RoutinePayload};
use routine_intelligence::{format_weight, parse_weight, InvalidWeightPolicy, RoundingMode};
use tracing::debug;

/// Per-series weights ready for the wire
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesWeights {
    /// `"20-22-24.2-26.6-29.3"`
    pub joined: String,
    /// `[20.0, 22.0, 24.2, 26.6, 29.3]`
    pub values: Vec<f64>,
}

/// Parse, round and join per-series weight text
///
/// # Errors
///
/// With [`InvalidWeightPolicy::Strict`], returns `InvalidInput` for the first
/// entry that does not parse. With `Lenient` such entries become `0`.
pub fn serialize_series_weights(
    weights: &[String],
    rounding: RoundingMode,
    policy: InvalidWeightPolicy,
) -> AppResult<SeriesWeights> {
    let values = weights
        .iter()
        .enumerate()
        .map(|(step, text)| match (parse_weight(text), policy) {
            (Some(value), _) => Ok(rounding.round_tenth(value)),
            (None, InvalidWeightPolicy::Lenient) => {
                debug!(step, text = %text, "unparseable series weight submitted as 0");
                Ok(0.0)
            }
            (None, InvalidWeightPolicy::Strict) => Err(AppError::invalid_input(format!(
                "weight '{text}' for series {} is not a number",
                step + 1
            ))),
        })
        .collect::<AppResult<Vec<f64>>>()?;

    let joined = values
        .iter()
        .map(|value| format_weight(*value))
        .collect::<Vec<_>>()
        .join(JOIN_SEPARATOR);

    Ok(SeriesWeights { joined, values })
}

/// Builds wire payloads under one rounding mode and invalid-input policy
#[derive(Debug, Clone, Copy, Default)]
pub struct PayloadSerializer {
    rounding: RoundingMode,
    policy: InvalidWeightPolicy,
}

impl PayloadSerializer {
    /// Serializer with explicit rounding and policy
    #[must_use]
    pub const fn new(rounding: RoundingMode, policy: InvalidWeightPolicy) -> Self {
        Self { rounding, policy }
    }

    /// Serialize one exercise row
    ///
    /// # Errors
    ///
    /// Returns an error only under the strict policy, for unparseable series weights.
    pub fn serialize_exercise(&self, exercise: &ExerciseEntry) -> AppResult<ExercisePayload> {
        let per_series = exercise.weights_per_series();
        let five_slot_pyramid = exercise.is_pyramidal() && per_series.len() == STEP_COUNT;
        let (weight, weights_per_series) = if five_slot_pyramid {
            let series = serialize_series_weights(per_series, self.rounding, self.policy)
                .map_err(|e| e.with_resource_id(exercise.name.clone()))?;
            (series.joined, Some(series.values))
        } else {
            (exercise.weight().to_owned(), None)
        };

        Ok(ExercisePayload {
            name: exercise.name.clone(),
            series: exercise.series,
            reps: exercise.reps(),
            weight,
            weights_per_series,
            pyramidal: exercise.is_pyramidal(),
            percent_increment: exercise.percent_increment,
            rest_seconds: exercise.rest_seconds,
            notes: exercise.notes.clone(),
        })
    }

    /// Serialize a whole draft
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` for a blank routine or exercise name, and
    /// strict-policy weight errors from [`Self::serialize_exercise`].
    pub fn serialize_routine(&self, draft: &RoutineDraft) -> AppResult<RoutinePayload> {
        if draft.name.trim().is_empty() {
            return Err(AppError::new(
                ErrorCode::MissingRequiredField,
                "routine name is required",
            ));
        }

        let exercises = draft
            .exercises
            .iter()
            .enumerate()
            .map(|(index, exercise)| {
                if exercise.name.trim().is_empty() {
                    return Err(AppError::new(
                        ErrorCode::MissingRequiredField,
                        format!("exercise {} has no name", index + 1),
                    ));
                }
                self.serialize_exercise(exercise)
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(RoutinePayload {
            client_id: draft.client_id,
            name: draft.name.trim().to_owned(),
            description: draft.description.clone(),
            exercises,
        })
    }
}
