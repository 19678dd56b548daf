// ABOUTME: Reconciles the trainer default percent between local and remote stores
// ABOUTME: Remote wins when present, otherwise local is pushed up; failures are logged, not raised
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{DefaultPercentStore, LocalPercentStore, RemotePercentStore};
use crate::config::BuilderConfig;
use crate::constants::percent::SEED_DEFAULT;
use crate::errors::{AppError, AppResult};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// Trainer settings repository composed of a local and a remote store
#[derive(Clone)]
pub struct TrainerSettings {
    local: Arc<dyn DefaultPercentStore>,
    remote: Arc<dyn DefaultPercentStore>,
}

impl TrainerSettings {
    /// Compose two stores under the remote-wins policy
    pub fn new(local: Arc<dyn DefaultPercentStore>, remote: Arc<dyn DefaultPercentStore>) -> Self {
        Self { local, remote }
    }

    /// Settings file in the configured directory plus the configured profile API
    #[must_use]
    pub fn from_config(config: &BuilderConfig) -> Self {
        Self::new(
            Arc::new(LocalPercentStore::in_dir(&config.settings_dir)),
            Arc::new(RemotePercentStore::new(
                config.api.profile_base_url.clone(),
                config.api.token.clone(),
            )),
        )
    }

    /// Resolve the trainer's default percent
    ///
    /// 1. Read the local value (seed `7.5` if absent or unreadable).
    /// 2. If the remote has a value, it wins and is copied to local storage.
    /// 3. If the remote has none, the local value is pushed up.
    /// 4. If the remote is unreachable, the local value is used as is.
    pub async fn load_default_percent(&self, trainer_id: Uuid) -> f64 {
        let local_value = match self.local.get(trainer_id).await {
            Ok(value) => value,
            Err(e) => {
                warn!(
                    %trainer_id,
                    store = self.local.name(),
                    error = %e,
                    "failed to read local default percent"
                );
                None
            }
        };
        let fallback = local_value.unwrap_or(SEED_DEFAULT);

        match self.remote.get(trainer_id).await {
            Ok(Some(remote_value)) => {
                if local_value != Some(remote_value) {
                    info!(
                        %trainer_id,
                        remote_value,
                        ?local_value,
                        "remote default percent overrides local"
                    );
                    if let Err(e) = self.local.set(trainer_id, remote_value).await {
                        warn!(
                            %trainer_id,
                            store = self.local.name(),
                            error = %e,
                            "failed to cache remote default percent locally"
                        );
                    }
                }
                remote_value
            }
            Ok(None) => {
                if let Err(e) = self.remote.set(trainer_id, fallback).await {
                    warn!(
                        %trainer_id,
                        store = self.remote.name(),
                        error = %e,
                        "failed to push local default percent"
                    );
                }
                fallback
            }
            Err(e) => {
                warn!(
                    %trainer_id,
                    store = self.remote.name(),
                    error = %e,
                    "remote profile unavailable, using local default percent"
                );
                fallback
            }
        }
    }

    /// Persist a new default to both stores
    ///
    /// Storage failures are logged; the caller keeps the value in memory either way.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `percent` is not finite.
    pub async fn save_default_percent(&self, trainer_id: Uuid, percent: f64) -> AppResult<()> {
        if !percent.is_finite() {
            return Err(AppError::invalid_input(format!(
                "default percent must be a finite number, got {percent}"
            ))
            .with_resource_id(trainer_id.to_string()));
        }

        for store in [&self.local, &self.remote] {
            if let Err(e) = store.set(trainer_id, percent).await {
                warn!(
                    %trainer_id,
                    store = store.name(),
                    error = %e,
                    "failed to store default percent"
                );
            }
        }
        info!(%trainer_id, percent, "default percent updated");
        Ok(())
    }
}
