// ABOUTME: Local settings file adapter for the trainer default percent
// ABOUTME: JSON map keyed by trainer id, rewritten atomically through a temp file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::DefaultPercentStore;
use crate::constants::storage::SETTINGS_FILE;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};
use uuid::Uuid;

/// One trainer's locally stored preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TrainerEntry {
    default_percent_increment: f64,
    updated_at: DateTime<Utc>,
}

/// On-disk layout of the settings file
#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    trainers: BTreeMap<Uuid, TrainerEntry>,
}

/// Settings file in the device's data directory
pub struct LocalPercentStore {
    path: PathBuf,
    // serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl LocalPercentStore {
    /// Store backed by `<dir>/trainer_settings.json`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::at_path(dir.as_ref().join(SETTINGS_FILE))
    }

    /// Store backed by an explicit file path
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the settings file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_file(&self) -> AppResult<SettingsFile> {
        match fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                AppError::storage(format!(
                    "settings file {} is corrupt: {e}",
                    self.path.display()
                ))
                .with_source(e)
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(SettingsFile::default()),
            Err(e) => Err(AppError::from(e).with_resource_id(self.path.display().to_string())),
        }
    }

    /// Read the file for a rewrite, moving an unparseable one aside first
    ///
    /// The bad file is renamed to `*.json.corrupt` so the next write starts
    /// from an empty map instead of failing forever.
    async fn read_for_update(&self) -> AppResult<SettingsFile> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(SettingsFile::default()),
            Err(e) => {
                return Err(AppError::from(e).with_resource_id(self.path.display().to_string()))
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                let quarantine = self.path.with_extension("json.corrupt");
                warn!(
                    path = %self.path.display(),
                    moved_to = %quarantine.display(),
                    error = %e,
                    "settings file is corrupt, starting a new one"
                );
                fs::rename(&self.path, &quarantine).await?;
                Ok(SettingsFile::default())
            }
        }
    }

    async fn write_file(&self, settings: &SettingsFile) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let bytes = serde_json::to_vec_pretty(settings)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, bytes).await?;
        fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl DefaultPercentStore for LocalPercentStore {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn get(&self, trainer_id: Uuid) -> AppResult<Option<f64>> {
        let settings = self.read_file().await?;
        Ok(settings
            .trainers
            .get(&trainer_id)
            .map(|entry| entry.default_percent_increment))
    }

    async fn set(&self, trainer_id: Uuid, percent: f64) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut settings = self.read_for_update().await?;
        settings.trainers.insert(
            trainer_id,
            TrainerEntry {
                default_percent_increment: percent,
                updated_at: Utc::now(),
            },
        );
        self.write_file(&settings).await?;
        debug!(%trainer_id, percent, path = %self.path.display(), "stored default percent locally");
        Ok(())
    }
}
