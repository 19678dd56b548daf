// ABOUTME: Draft commands for routine-cli
// ABOUTME: Loads a routine draft JSON file, previews the wire payload or submits it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;
use tracing::{debug, error};
use trainer_routines::config::WeightConfig;
use trainer_routines::errors::{AppError, AppResult};
use trainer_routines::models::RoutineDraft;
use trainer_routines::routines::{PayloadSerializer, RoutineApiClient};

use crate::helpers::display::{display_created, display_payload};

/// Read a draft from a JSON file
pub async fn load(path: &Path) -> AppResult<RoutineDraft> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| AppError::from(e).with_resource_id(path.display().to_string()))?;
    let draft: RoutineDraft = serde_json::from_slice(&bytes)?;
    debug!(path = %path.display(), exercises = draft.exercises.len(), "draft loaded");
    Ok(draft)
}

/// Print the payload a submission would send
pub async fn preview(path: &Path, weights: WeightConfig) -> AppResult<()> {
    let draft = load(path).await?;
    let payload =
        PayloadSerializer::new(weights.rounding, weights.invalid_policy).serialize_routine(&draft)?;
    display_payload(&payload)
}

/// Submit the draft to the routine creation API
pub async fn submit(
    path: &Path,
    weights: WeightConfig,
    client: &RoutineApiClient,
) -> AppResult<()> {
    let draft = load(path).await?;
    let payload =
        PayloadSerializer::new(weights.rounding, weights.invalid_policy).serialize_routine(&draft)?;

    match client.create_routine(&payload).await {
        Ok(created) => {
            display_created(&created, &payload);
            Ok(())
        }
        Err(e) => {
            error!("{}", e.one_line());
            Err(e)
        }
    }
}
