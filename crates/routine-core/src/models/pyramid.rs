// ABOUTME: Fixed pyramidal repetition sequence and the reps presentation mode
// ABOUTME: RepsMode keeps the free-text reps inside the pyramidal variant so disabling restores it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::pyramid::{JOIN_SEPARATOR, REPS, STEP_COUNT};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The 12-10-8-8-6 repetition pyramid shared by every pyramidal exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PyramidalSequence;

impl PyramidalSequence {
    /// Repetition targets, one per series
    #[must_use]
    pub const fn reps(&self) -> &'static [u32; STEP_COUNT] {
        &REPS
    }

    /// Number of series in the pyramid
    #[must_use]
    pub const fn len(&self) -> usize {
        STEP_COUNT
    }

    /// Always false; present for clippy's `len_without_is_empty`
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Hyphen-joined rendering used for read-back and submission
    #[must_use]
    pub fn render(&self) -> String {
        REPS.iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(JOIN_SEPARATOR)
    }
}

impl fmt::Display for PyramidalSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// How the reps column of an exercise row is presented and edited
///
/// Exactly one presentation is active: either the trainer types reps freely, or
/// the fixed pyramid is shown and the free-text value is parked in
/// `original_reps` until the pyramid is switched off again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RepsMode {
    /// Single free-text reps value ("15", "8-12", "to failure")
    FreeText {
        /// Current reps text
        #[serde(default)]
        reps: String,
    },
    /// Fixed pyramid; the previous free-text value is kept for restore
    Pyramidal {
        /// Reps text captured when the pyramid was enabled
        #[serde(default)]
        original_reps: String,
    },
}

impl Default for RepsMode {
    fn default() -> Self {
        Self::FreeText {
            reps: String::new(),
        }
    }
}

impl RepsMode {
    /// Whether the pyramid is active
    #[must_use]
    pub const fn is_pyramidal(&self) -> bool {
        matches!(self, Self::Pyramidal { .. })
    }

    /// Reps value as read back or submitted
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::FreeText { reps } => reps.clone(),
            Self::Pyramidal { .. } => PyramidalSequence.render(),
        }
    }
}
