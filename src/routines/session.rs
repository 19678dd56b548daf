// ABOUTME: Routine builder session owning one draft for one trainer
// ABOUTME: Seeds exercises from the trainer default percent, runs suggestions and submits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::client::RoutineApiClient;
use super::serialization::PayloadSerializer;
use crate::config::WeightConfig;
use crate::errors::{AppError, AppResult};
use crate::settings::TrainerSettings;
use routine_core::models::{CreatedRoutine, ExerciseEntry, RoutineDraft, RoutinePayload};
use routine_intelligence::{InvalidWeightPolicy, WeightProgression};
use std::mem;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// One trainer editing one routine draft
///
/// The session is owned by a single task. Nothing is persisted until
/// [`Self::submit`] succeeds, at which point the draft is replaced by an empty
/// one for the same client.
pub struct RoutineBuilderSession {
    trainer_id: Uuid,
    settings: TrainerSettings,
    default_percent: f64,
    weights: WeightConfig,
    draft: RoutineDraft,
    last_error: Option<String>,
}

impl RoutineBuilderSession {
    /// Open a session, loading the trainer's default percent once
    pub async fn start(
        settings: TrainerSettings,
        trainer_id: Uuid,
        draft: RoutineDraft,
        weights: WeightConfig,
    ) -> Self {
        let default_percent = settings.load_default_percent(trainer_id).await;
        debug!(%trainer_id, default_percent, "routine builder session started");
        Self {
            trainer_id,
            settings,
            default_percent,
            weights,
            draft,
            last_error: None,
        }
    }

    /// Trainer editing this draft
    #[must_use]
    pub const fn trainer_id(&self) -> Uuid {
        self.trainer_id
    }

    /// Percent used for newly added exercises
    #[must_use]
    pub const fn default_percent(&self) -> f64 {
        self.default_percent
    }

    /// Current draft
    #[must_use]
    pub const fn draft(&self) -> &RoutineDraft {
        &self.draft
    }

    /// Mutable access to routine-level fields
    pub fn draft_mut(&mut self) -> &mut RoutineDraft {
        &mut self.draft
    }

    /// One-line message from the last failed submission
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Change the trainer default and write it back to both stores
    ///
    /// Exercises already in the draft keep their own percent.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `percent` is not finite.
    pub async fn set_default_percent(&mut self, percent: f64) -> AppResult<()> {
        self.settings
            .save_default_percent(self.trainer_id, percent)
            .await?;
        self.default_percent = percent;
        Ok(())
    }

    /// Append an exercise seeded with the default percent, returning its index
    pub fn add_exercise(&mut self, name: impl Into<String>) -> usize {
        self.draft
            .exercises
            .push(ExerciseEntry::new(name, self.default_percent));
        self.draft.exercises.len() - 1
    }

    /// Remove an exercise
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown index.
    pub fn remove_exercise(&mut self, index: usize) -> AppResult<ExerciseEntry> {
        self.exercise(index)?;
        Ok(self.draft.exercises.remove(index))
    }

    /// Exercise at `index`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown index.
    pub fn exercise(&self, index: usize) -> AppResult<&ExerciseEntry> {
        self.draft
            .exercises
            .get(index)
            .ok_or_else(|| exercise_not_found(index))
    }

    /// Mutable exercise at `index`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown index.
    pub fn exercise_mut(&mut self, index: usize) -> AppResult<&mut ExerciseEntry> {
        self.draft
            .exercises
            .get_mut(index)
            .ok_or_else(|| exercise_not_found(index))
    }

    /// Override the percent increment of one exercise
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown index and `InvalidInput` for a
    /// non-finite percent.
    pub fn set_percent_increment(&mut self, index: usize, percent: f64) -> AppResult<()> {
        if !percent.is_finite() {
            return Err(AppError::invalid_input(format!(
                "percent increment must be a finite number, got {percent}"
            )));
        }
        self.exercise_mut(index)?.percent_increment = percent;
        Ok(())
    }

    /// Flip pyramidal mode for one exercise, returning the new state
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown index.
    pub fn toggle_pyramidal(&mut self, index: usize) -> AppResult<bool> {
        Ok(self.exercise_mut(index)?.toggle_pyramidal())
    }

    /// Fill series 2-5 from the weight already entered for series 1
    ///
    /// Returns whether the weights were replaced. Exercises outside pyramidal
    /// mode and, under the lenient policy, a non-numeric first weight leave
    /// everything untouched and return `false`.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown index, and `InvalidInput` under
    /// the strict policy when the first weight or the percent is not numeric.
    pub fn suggest_weights(&mut self, index: usize) -> AppResult<bool> {
        let policy = self.weights.invalid_policy;
        let rounding = self.weights.rounding;
        let exercise = self.exercise_mut(index)?;
        if !exercise.is_pyramidal() {
            debug!(index, "suggestion skipped, pyramidal mode is disabled");
            return Ok(false);
        }

        let progression = match WeightProgression::new(exercise.percent_increment) {
            Ok(progression) => progression.with_rounding(rounding),
            Err(e) if policy == InvalidWeightPolicy::Strict => return Err(e),
            Err(_) => return Ok(false),
        };
        let base = exercise
            .weights_per_series()
            .first()
            .cloned()
            .unwrap_or_default();

        match progression.suggest_with_policy(&base, policy)? {
            Some(weights) => {
                exercise.apply_suggestion(weights);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Payload that [`Self::submit`] would send
    ///
    /// # Errors
    ///
    /// Returns validation errors from the serializer.
    pub fn preview(&self) -> AppResult<RoutinePayload> {
        PayloadSerializer::new(self.weights.rounding, self.weights.invalid_policy)
            .serialize_routine(&self.draft)
    }

    /// Submit the draft
    ///
    /// On success the draft is discarded and the created routine returned. On
    /// failure the draft is kept, the one-line message is stored in
    /// [`Self::last_error`], and the error is returned. There is no retry.
    ///
    /// # Errors
    ///
    /// Returns serializer validation errors or the API client's error.
    pub async fn submit(&mut self, client: &RoutineApiClient) -> AppResult<CreatedRoutine> {
        let result = match self.preview() {
            Ok(payload) => client.create_routine(&payload).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(created) => {
                let client_id = self.draft.client_id;
                let submitted = mem::replace(&mut self.draft, RoutineDraft::new(client_id, ""));
                self.last_error = None;
                info!(
                    trainer_id = %self.trainer_id,
                    routine = %submitted.name,
                    routine_id = %created.id,
                    "draft submitted"
                );
                Ok(created)
            }
            Err(e) => {
                warn!(
                    trainer_id = %self.trainer_id,
                    error = %e,
                    "routine submission failed, draft kept"
                );
                self.last_error = Some(e.one_line());
                Err(e)
            }
        }
    }
}

fn exercise_not_found(index: usize) -> AppError {
    AppError::not_found(format!("Exercise {index}")).with_resource_id(index.to_string())
}
