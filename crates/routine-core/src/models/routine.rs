// ABOUTME: Routine draft and the transport payload sent to the routine creation API
// ABOUTME: The draft is in-memory only; the payload is what crosses the wire on submit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::exercise::ExerciseEntry;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A routine being composed for one client, not yet submitted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutineDraft {
    /// Client the routine is assigned to
    pub client_id: Uuid,
    /// Routine title
    pub name: String,
    /// Optional description shown to the client
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Exercises in display order
    #[serde(default)]
    pub exercises: Vec<ExerciseEntry>,
}

impl RoutineDraft {
    /// Start an empty draft for a client
    pub fn new(client_id: Uuid, name: impl Into<String>) -> Self {
        Self {
            client_id,
            name: name.into(),
            description: String::new(),
            exercises: Vec::new(),
        }
    }

    /// Whether the draft has anything worth submitting
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

/// Wire representation of one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExercisePayload {
    /// Exercise name
    pub name: String,
    /// Number of series
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<u32>,
    /// Reps, hyphen-joined when pyramidal
    pub reps: String,
    /// Weight as one string; hyphen-joined per-series values when pyramidal
    pub weight: String,
    /// Rounded per-series weights, only when pyramidal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights_per_series: Option<Vec<f64>>,
    /// Whether the fixed pyramid was used
    pub pyramidal: bool,
    /// Percent increment used for the suggestion
    pub percent_increment: f64,
    /// Rest between series in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_seconds: Option<u32>,
    /// Notes
    #[serde(skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

/// Wire representation of a routine submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutinePayload {
    /// Client the routine is assigned to
    pub client_id: Uuid,
    /// Routine title
    pub name: String,
    /// Description
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Exercises
    pub exercises: Vec<ExercisePayload>,
}

/// Routine creation acknowledgement returned by the remote API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedRoutine {
    /// Identifier assigned by the remote API
    pub id: String,
}
