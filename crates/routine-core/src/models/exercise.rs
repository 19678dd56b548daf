// ABOUTME: Exercise row of a routine draft with the pyramidal toggle state machine
// ABOUTME: Free-text reps and the 5-slot weight grid are mutually exclusive presentations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::pyramid::RepsMode;
use crate::constants::{percent::SEED_DEFAULT, pyramid::STEP_COUNT};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::mem;
use tracing::debug;

const fn default_percent_increment() -> f64 {
    SEED_DEFAULT
}

/// One exercise of a routine draft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ExerciseRecord")]
pub struct ExerciseEntry {
    /// Exercise name as typed by the trainer
    pub name: String,
    /// Number of series, if the trainer filled it in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<u32>,
    /// Reps presentation (free text or fixed pyramid)
    reps_mode: RepsMode,
    /// Single free-text weight used outside pyramidal mode
    weight: String,
    /// Per-series weights; kept across pyramid toggles
    weights_per_series: Vec<String>,
    /// Percent used to derive series 2-5 from series 1
    pub percent_increment: f64,
    /// Rest between series in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_seconds: Option<u32>,
    /// Free-form notes
    #[serde(skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

/// Exercise as stored in a draft file, before the grid invariant is restored
#[derive(Deserialize)]
struct ExerciseRecord {
    name: String,
    #[serde(default)]
    series: Option<u32>,
    #[serde(default)]
    reps_mode: RepsMode,
    #[serde(default)]
    weight: String,
    #[serde(default)]
    weights_per_series: Vec<String>,
    #[serde(default = "default_percent_increment")]
    percent_increment: f64,
    #[serde(default)]
    rest_seconds: Option<u32>,
    #[serde(default)]
    notes: String,
}

impl From<ExerciseRecord> for ExerciseEntry {
    /// A pyramidal row always carries exactly one weight per step: a short
    /// grid is padded with empty slots and a long one is cut.
    fn from(record: ExerciseRecord) -> Self {
        let mut weights_per_series = record.weights_per_series;
        if record.reps_mode.is_pyramidal() && weights_per_series.len() != STEP_COUNT {
            debug!(
                exercise = %record.name,
                slots = weights_per_series.len(),
                "resizing stored pyramid grid"
            );
            weights_per_series.resize(STEP_COUNT, String::new());
        }
        Self {
            name: record.name,
            series: record.series,
            reps_mode: record.reps_mode,
            weight: record.weight,
            weights_per_series,
            percent_increment: record.percent_increment,
            rest_seconds: record.rest_seconds,
            notes: record.notes,
        }
    }
}

impl ExerciseEntry {
    /// Create an exercise in free-text mode with the given percent increment
    pub fn new(name: impl Into<String>, percent_increment: f64) -> Self {
        Self {
            name: name.into(),
            series: None,
            reps_mode: RepsMode::default(),
            weight: String::new(),
            weights_per_series: Vec::new(),
            percent_increment,
            rest_seconds: None,
            notes: String::new(),
        }
    }

    /// Current reps mode
    #[must_use]
    pub const fn reps_mode(&self) -> &RepsMode {
        &self.reps_mode
    }

    /// Whether the fixed pyramid is active
    #[must_use]
    pub const fn is_pyramidal(&self) -> bool {
        self.reps_mode.is_pyramidal()
    }

    /// Reps as read back: free text, or `12-10-8-8-6` while pyramidal
    #[must_use]
    pub fn reps(&self) -> String {
        self.reps_mode.display()
    }

    /// Single free-text weight
    #[must_use]
    pub fn weight(&self) -> &str {
        &self.weight
    }

    /// Per-series weights, possibly retained from an earlier pyramidal session
    #[must_use]
    pub fn weights_per_series(&self) -> &[String] {
        &self.weights_per_series
    }

    /// Edit the free-text reps
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` while the pyramid is active, since reps are fixed then.
    pub fn set_reps(&mut self, reps: impl Into<String>) -> AppResult<()> {
        match &mut self.reps_mode {
            RepsMode::FreeText { reps: current } => {
                *current = reps.into();
                Ok(())
            }
            RepsMode::Pyramidal { .. } => Err(AppError::invalid_input(format!(
                "reps of '{}' are fixed while pyramidal mode is enabled",
                self.name
            ))),
        }
    }

    /// Edit the single free-text weight
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` while the pyramid is active; use [`Self::set_step_weight`].
    pub fn set_weight(&mut self, weight: impl Into<String>) -> AppResult<()> {
        if self.is_pyramidal() {
            return Err(AppError::invalid_input(format!(
                "'{}' uses per-series weights while pyramidal mode is enabled",
                self.name
            )));
        }
        self.weight = weight.into();
        Ok(())
    }

    /// Hand-edit the weight of one pyramid step
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` outside pyramidal mode and `ValueOutOfRange` for a
    /// step index past the end of the pyramid.
    pub fn set_step_weight(&mut self, step: usize, weight: impl Into<String>) -> AppResult<()> {
        if !self.is_pyramidal() {
            return Err(AppError::invalid_input(format!(
                "'{}' has no per-series weights while pyramidal mode is disabled",
                self.name
            )));
        }
        let slot = self.weights_per_series.get_mut(step).ok_or_else(|| {
            AppError::out_of_range(format!("step {step} is outside the {STEP_COUNT}-step pyramid"))
        })?;
        *slot = weight.into();
        Ok(())
    }

    /// Replace all five per-series weights with a computed suggestion
    pub fn apply_suggestion(&mut self, weights: [String; STEP_COUNT]) {
        self.weights_per_series = weights.into();
    }

    /// Switch to the fixed pyramid
    ///
    /// The free-text reps are parked so [`Self::disable_pyramidal`] can restore them.
    /// Weights survive if the grid already has five slots; otherwise it is reset
    /// to five empty slots. Enabling twice is a no-op.
    pub fn enable_pyramidal(&mut self) {
        let RepsMode::FreeText { reps } = &mut self.reps_mode else {
            return;
        };
        let original_reps = mem::take(reps);
        self.reps_mode = RepsMode::Pyramidal { original_reps };

        if self.weights_per_series.len() != STEP_COUNT {
            self.weights_per_series = vec![String::new(); STEP_COUNT];
        }
        debug!(exercise = %self.name, "pyramidal mode enabled");
    }

    /// Leave the pyramid, restoring the reps captured when it was enabled
    ///
    /// Per-series weights stay in memory so re-enabling shows them again.
    pub fn disable_pyramidal(&mut self) {
        let RepsMode::Pyramidal { original_reps } = &mut self.reps_mode else {
            return;
        };
        let reps = mem::take(original_reps);
        self.reps_mode = RepsMode::FreeText { reps };
        debug!(exercise = %self.name, "pyramidal mode disabled");
    }

    /// Flip the pyramid state, returning whether it is now enabled
    pub fn toggle_pyramidal(&mut self) -> bool {
        if self.is_pyramidal() {
            self.disable_pyramidal();
        } else {
            self.enable_pyramidal();
        }
        self.is_pyramidal()
    }
}
