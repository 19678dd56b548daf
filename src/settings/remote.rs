// ABOUTME: Remote trainer profile adapter for the default percent increment
// ABOUTME: GET and PATCH on trainers/{id}/profile; a 404 means the trainer has no value yet
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::DefaultPercentStore;
use crate::constants::{endpoints, service_names};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::http_client::{shared_client, with_auth};
use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Subset of the trainer profile this crate reads
#[derive(Debug, Deserialize)]
struct TrainerProfile {
    #[serde(default)]
    default_percent_increment: Option<f64>,
}

/// Partial profile update
#[derive(Debug, Serialize)]
struct ProfileUpdate {
    default_percent_increment: f64,
}

/// Trainer profile store reached over HTTP
pub struct RemotePercentStore {
    base_url: String,
    token: Option<String>,
}

impl RemotePercentStore {
    /// Store talking to `{base_url}/trainers/{id}/profile`
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            token,
        }
    }

    fn profile_url(&self, trainer_id: Uuid) -> String {
        format!(
            "{}/{}/{trainer_id}/{}",
            self.base_url,
            endpoints::TRAINERS,
            endpoints::PROFILE
        )
    }
}

/// Map a non-success response to an `AppError` carrying the status
async fn error_from_response(response: Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let code = match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ErrorCode::ExternalAuthFailed,
        _ => ErrorCode::ExternalServiceError,
    };
    AppError::new(
        code,
        format!("{}: HTTP {status}", service_names::PROFILE_API),
    )
    .with_details(serde_json::json!({ "status": status.as_u16(), "body": body }))
}

#[async_trait]
impl DefaultPercentStore for RemotePercentStore {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn get(&self, trainer_id: Uuid) -> AppResult<Option<f64>> {
        let url = self.profile_url(trainer_id);
        debug!(%trainer_id, %url, "fetching trainer profile");

        let response = with_auth(shared_client().get(&url), self.token.as_deref())
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(error_from_response(response)
                .await
                .with_resource_id(trainer_id.to_string()));
        }

        let profile: TrainerProfile = response.json().await?;
        Ok(profile
            .default_percent_increment
            .filter(|percent| percent.is_finite()))
    }

    async fn set(&self, trainer_id: Uuid, percent: f64) -> AppResult<()> {
        let url = self.profile_url(trainer_id);
        let update = ProfileUpdate {
            default_percent_increment: percent,
        };

        let response = with_auth(shared_client().patch(&url), self.token.as_deref())
            .json(&update)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(error_from_response(response)
                .await
                .with_resource_id(trainer_id.to_string()));
        }
        debug!(%trainer_id, percent, "stored default percent remotely");
        Ok(())
    }
}
