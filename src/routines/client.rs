// ABOUTME: HTTP client for the external routine creation endpoint
// ABOUTME: Single POST per submission; no retry, failures map to external-service errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ApiConfig;
use crate::constants::{endpoints, service_names};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::http_client::{shared_client, with_auth};
use reqwest::StatusCode;
use routine_core::models::{CreatedRoutine, RoutinePayload};
use tracing::{info, warn};

/// Client for `POST {base}/routines`
#[derive(Debug, Clone)]
pub struct RoutineApiClient {
    base_url: String,
    token: Option<String>,
}

impl RoutineApiClient {
    /// Client for a base URL and optional bearer token
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            token,
        }
    }

    /// Client built from the API configuration
    #[must_use]
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.routine_base_url.clone(), config.token.clone())
    }

    fn routines_url(&self) -> String {
        format!("{}/{}", self.base_url, endpoints::ROUTINES)
    }

    /// Submit a routine
    ///
    /// # Errors
    ///
    /// Returns `ExternalServiceUnavailable` if the API cannot be reached,
    /// `ExternalAuthFailed` on 401/403, `InvalidInput` on 400/422 and
    /// `ExternalServiceError` for any other non-success status.
    pub async fn create_routine(&self, payload: &RoutinePayload) -> AppResult<CreatedRoutine> {
        let url = self.routines_url();
        let response = with_auth(shared_client().post(&url), self.token.as_deref())
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, client_id = %payload.client_id, "routine submission rejected");
            let code = match status {
                StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                    ErrorCode::InvalidInput
                }
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ErrorCode::ExternalAuthFailed,
                _ => ErrorCode::ExternalServiceError,
            };
            let summary = body.lines().next().unwrap_or_default().trim();
            let message = if summary.is_empty() {
                format!("{}: HTTP {status}", service_names::ROUTINE_API)
            } else {
                format!("{}: HTTP {status}: {summary}", service_names::ROUTINE_API)
            };
            return Err(AppError::new(code, message)
                .with_details(serde_json::json!({ "status": status.as_u16(), "body": body })));
        }

        let created: CreatedRoutine = response.json().await?;
        info!(
            routine_id = %created.id,
            client_id = %payload.client_id,
            exercises = payload.exercises.len(),
            "routine created"
        );
        Ok(created)
    }
}
